//! crates/digest_core/src/share.rs
//!
//! Deterministic share links for a discussion card.

use url::Url;
use uuid::Uuid;

use crate::domain::TopDiscussion;

/// Public address of the hosted digest.
pub const DEFAULT_SITE_URL: &str = "https://www.postgreshackersdigest.dev";

const SNIPPET_CHARS: usize = 150;
const TWITTER_INTENT: &str = "https://twitter.com/intent/tweet";
const LINKEDIN_INTENT: &str = "https://www.linkedin.com/sharing/share-offsite/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLinks {
    /// Link back to the card, opened at the detailed level.
    pub share_url: String,
    pub share_text: String,
    pub twitter_url: String,
    pub linkedin_url: String,
}

impl ShareLinks {
    /// `card` is the 1-based position of the discussion on the page.
    pub fn new(site_url: &str, summary_id: Uuid, card: usize, discussion: &TopDiscussion) -> Self {
        let share_url = card_url(site_url, summary_id, card);
        let snippet = brief_snippet(discussion.summary_brief.as_deref().unwrap_or(""));
        let subject = &discussion.subject;

        let share_text = format!("{}\n\n{}", subject, snippet);
        let tweet_text = if snippet.is_empty() {
            format!("{} — this week on pgsql-hackers", subject)
        } else {
            format!("{} — \"{}\"", subject, snippet)
        };

        Self {
            twitter_url: intent(
                TWITTER_INTENT,
                &[("text", tweet_text.as_str()), ("url", share_url.as_str())],
            ),
            linkedin_url: intent(LINKEDIN_INTENT, &[("url", share_url.as_str())]),
            share_url,
            share_text,
        }
    }
}

/// `{site}/summary/{id}?expand={card}#discussion-{card}`
pub fn card_url(site_url: &str, summary_id: Uuid, card: usize) -> String {
    format!(
        "{}/summary/{}?expand={}#discussion-{}",
        site_url.trim_end_matches('/'),
        summary_id,
        card,
        card
    )
}

/// The first 150 characters of the brief text, with an ellipsis when cut.
pub fn brief_snippet(brief: &str) -> String {
    let mut snippet: String = brief.chars().take(SNIPPET_CHARS).collect();
    snippet = snippet.trim().to_string();
    if brief.chars().count() > SNIPPET_CHARS {
        snippet.push_str("...");
    }
    snippet
}

fn intent(base: &str, params: &[(&str, &str)]) -> String {
    match Url::parse_with_params(base, params) {
        Ok(url) => url.to_string(),
        Err(_) => base.to_string(),
    }
}
