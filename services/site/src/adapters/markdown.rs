//! services/site/src/adapters/markdown.rs
//!
//! The `MarkdownRenderer` port backed by `pulldown-cmark`.

use digest_core::ports::MarkdownRenderer;
use pulldown_cmark::{html, Options, Parser};

#[derive(Debug, Clone, Copy, Default)]
pub struct CmarkRenderer;

impl CmarkRenderer {
    fn options() -> Options {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        options
    }
}

impl MarkdownRenderer for CmarkRenderer {
    fn to_html(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, Self::options());
        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_and_emphasis() {
        let html = CmarkRenderer.to_html("## Overview\n\nA **busy** week.");
        assert!(html.contains("<h2>Overview</h2>"));
        assert!(html.contains("<strong>busy</strong>"));
    }

    #[test]
    fn test_tables_enabled() {
        let html = CmarkRenderer.to_html("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(CmarkRenderer.to_html(""), "");
    }
}
