//! crates/digest_core/src/overview.rs
//!
//! Splits a weekly summary document into its overview part.

use regex::Regex;
use std::sync::LazyLock;

/// Heading that opens the per-thread section of a summary document.
pub const TOP_DISCUSSIONS_MARKER: &str = "## Top Discussions";

static TITLE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#\s+.*$").expect("title pattern is valid"));
static OVERVIEW_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^##\s+Overview\s*").expect("overview pattern is valid"));

/// Returns the text before the top-discussions marker, without the H1 title
/// and the `## Overview` heading.
///
/// Returns an empty string when the marker is absent.
pub fn extract_overview(summary_content: &str) -> String {
    let Some(idx) = summary_content.find(TOP_DISCUSSIONS_MARKER) else {
        return String::new();
    };
    let overview = summary_content[..idx].trim();
    let overview = TITLE_LINE.replace(overview, "");
    let overview = overview.trim();
    let overview = OVERVIEW_HEADING.replace(overview, "");
    overview.trim().to_string()
}
