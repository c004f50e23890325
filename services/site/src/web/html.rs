//! services/site/src/web/html.rs
//!
//! Server-side HTML for the summary list and detail pages.
//!
//! Untrusted text goes through `escape_html`; rendered markdown is inserted
//! as-is.

use std::fmt::Write;

use digest_core::format::{commitfest_tag_style, date_with_ordinal};
use digest_core::ports::MarkdownRenderer;
use digest_core::{CardLevels, DetailBody, DetailPage, DiscussionCard, SummaryListState};

use crate::web::pages::MAX_LOAD_MORE_STEPS;

const SITE_TITLE: &str = "PostgreSQL Weekly Summary";

const STYLES: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #f0f6fb; color: #111827; }
main { max-width: 56rem; margin: 0 auto; padding: 2rem 1rem; }
a { color: #336791; }
.panel { background: #fff; border-radius: 0.5rem; box-shadow: 0 4px 12px rgba(0,0,0,0.08); overflow: hidden; margin-bottom: 1.5rem; }
.panel-body { padding: 2rem; }
.summary-header { background: #336791; color: #fff; padding: 2rem; }
.summary-header .stats, .meta { display: flex; flex-wrap: wrap; gap: 1.5rem; font-size: 0.9rem; }
.summary-footer { background: #f9fafb; border-top: 1px solid #e5e7eb; padding: 1.5rem 2rem; text-align: center; color: #4b5563; font-size: 0.875rem; }
.error { text-align: center; padding: 2rem; }
.error .title { color: #dc2626; font-weight: 600; font-size: 1.125rem; }
.discussion { margin-bottom: 2rem; padding-bottom: 2rem; border-bottom: 1px solid #e5e7eb; }
.discussion:last-child { border-bottom: none; }
.actions { display: flex; align-items: center; gap: 1rem; font-size: 0.875rem; margin-top: 0.75rem; }
.actions .sep { color: #d1d5db; }
.share { color: #9ca3af; text-decoration: none; }
.share-native { display: none; }
.tags-container { margin: 1rem 0; display: flex; flex-wrap: wrap; align-items: center; gap: 0.5rem; }
.tags-container strong { margin-right: 0.25rem; color: #374151; }
.tag { display: inline-flex; align-items: center; padding: 0.375rem 0.75rem; border-radius: 0.5rem; font-size: 0.875rem; font-weight: 500; border: 1px solid; }
.tag[data-tag-source="commitfest"]::after { content: "\25CF"; font-size: 0.5rem; margin-left: 0.375rem; opacity: 0.6; }
.tag[data-tag-source="ai"] { background-color: #f3f4f6; color: #1f2937; border-color: #d1d5db; border-style: dashed; }
.tag[data-tag-source="ai"]::after { content: "\25C7"; font-size: 0.5rem; margin-left: 0.375rem; opacity: 0.5; color: #6b7280; }
"#;

// Clipboard and native-share hooks. Failures, including a cancelled share, are ignored.
const SHARE_SCRIPT: &str = r#"
if (navigator.share) {
  document.querySelectorAll('.share-native').forEach(function (el) { el.style.display = 'inline'; });
  document.querySelectorAll('.share-fallback').forEach(function (el) { el.style.display = 'none'; });
}
document.addEventListener('click', function (e) {
  var copy = e.target.closest('[data-copy]');
  if (copy && navigator.clipboard) {
    e.preventDefault();
    navigator.clipboard.writeText(copy.dataset.copy).then(function () {
      copy.textContent = 'Copied!';
      setTimeout(function () { copy.textContent = 'Copy link'; }, 2000);
    }).catch(function () {});
  }
  var share = e.target.closest('[data-share-url]');
  if (share && navigator.share) {
    e.preventDefault();
    navigator.share({ title: share.dataset.shareTitle, text: share.dataset.shareText, url: share.dataset.shareUrl }).catch(function () {});
  }
});
"#;

/// Escapes text for use in element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n<main>\n{}\n</main>\n\
         <script>{}</script>\n</body>\n</html>\n",
        escape_html(title),
        STYLES,
        body,
        SHARE_SCRIPT
    )
}

//=========================================================================================
// Summary list
//=========================================================================================

/// `more` is the number of "load more" steps already taken. No link is
/// offered once `more` reaches `MAX_LOAD_MORE_STEPS`.
pub fn render_home(state: &SummaryListState, more: usize) -> String {
    let mut body = String::new();
    let _ = write!(
        body,
        "<h1>{}</h1>\n<p>AI-generated weekly digests of the pgsql-hackers mailing list.</p>\n",
        SITE_TITLE
    );

    if let Some(message) = state.error() {
        let _ = write!(
            body,
            "<div class=\"panel error\"><p class=\"title\">Error loading summaries</p>\
             <p>{}</p><a href=\"/\">Try again</a></div>\n",
            escape_html(message)
        );
    }

    if state.summaries().is_empty() && state.error().is_none() {
        body.push_str("<div class=\"panel panel-body\"><p>No summaries available yet.</p></div>\n");
    }

    for summary in state.summaries() {
        let _ = write!(
            body,
            "<div class=\"panel panel-body summary-item\">\
             <h2><a href=\"/summary/{id}\">Week of {week}</a></h2>\
             <div class=\"meta\"><span>{start} to {end}</span>\
             <span>{posts} posts</span><span>{people} participants</span></div></div>\n",
            id = summary.id,
            week = date_with_ordinal(summary.week_end_date),
            start = summary.week_start_date.format("%Y-%m-%d"),
            end = summary.week_end_date.format("%Y-%m-%d"),
            posts = summary.total_posts,
            people = summary.total_participants,
        );
    }

    if state.has_more() && !state.summaries().is_empty() && more < MAX_LOAD_MORE_STEPS {
        let disabled = if state.is_loading_more() { " aria-disabled=\"true\"" } else { "" };
        let _ = write!(
            body,
            "<p><a class=\"load-more\" href=\"/?more={}\"{}>Load more</a></p>\n",
            more + 1,
            disabled
        );
    }

    layout(SITE_TITLE, &body)
}

//=========================================================================================
// Summary detail
//=========================================================================================

pub fn render_detail(page: &DetailPage<'_>, view_expand: Option<usize>, markdown: &dyn MarkdownRenderer) -> String {
    let mut body = String::new();
    body.push_str(&page_heading());

    let header = &page.header;
    let _ = write!(
        body,
        "<div class=\"panel\">\n<div class=\"summary-header\"><h2>{}</h2>\
         <div class=\"stats\"><span>{}</span><span>{} posts</span><span>{} participants</span></div></div>\n\
         <div class=\"panel-body\">\n",
        escape_html(&header.week_label),
        escape_html(&header.generated_on),
        header.total_posts,
        header.total_participants
    );

    match &page.body {
        DetailBody::MultiLevel { overview, cards } => {
            if !overview.is_empty() {
                let _ = write!(
                    body,
                    "<section class=\"overview\"><h2>Overview</h2>{}</section>\n",
                    markdown.to_html(overview)
                );
            }
            body.push_str("<h2>Top Discussions</h2>\n");
            for card in cards {
                render_card(&mut body, page, card, view_expand, markdown);
            }
        }
        DetailBody::Legacy { markdown: content } => {
            let _ = write!(body, "<div class=\"prose\">{}</div>\n", markdown.to_html(content));
        }
    }

    body.push_str(
        "</div>\n<div class=\"summary-footer\"><p>This summary was generated using AI and may not \
         capture all nuances of the original discussions.</p>\
         <p>Source: PostgreSQL Hackers Mailing List</p></div>\n</div>\n",
    );

    layout(&format!("{} | {}", header.week_label, SITE_TITLE), &body)
}

fn render_card(
    out: &mut String,
    page: &DetailPage<'_>,
    card: &DiscussionCard<'_>,
    view_expand: Option<usize>,
    markdown: &dyn MarkdownRenderer,
) {
    let d = card.discussion;
    let _ = write!(
        out,
        "<div class=\"discussion\" id=\"{anchor}\" data-level=\"{level}\">\n<h3>{n}. {subject}</h3>\n\
         <div class=\"meta\"><span><strong>Posts</strong>: {posts}</span>\
         <span><strong>Participants</strong>: {people}</span>\
         <span><strong>Duration</strong>: {duration}</span></div>\n",
        anchor = card.anchor(),
        level = card.disclosure.level(),
        n = card.number,
        subject = escape_html(&d.subject),
        posts = d.post_count,
        people = d.participants,
        duration = escape_html(&card.duration),
    );

    if let Some(url) = d.thread_url.as_deref().filter(|u| !u.is_empty()) {
        let _ = write!(
            out,
            "<div class=\"meta\"><strong>Reference Link</strong>:&nbsp;\
             <a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">View Thread</a></div>\n",
            escape_html(url)
        );
    }

    if let Some(tags) = d.commitfest_tags.as_ref().filter(|t| !t.is_empty()) {
        out.push_str("<div class=\"tags-container\"><strong>Commitfest Tags:</strong>");
        for (i, tag) in tags.iter().enumerate() {
            let _ = write!(
                out,
                "<span class=\"tag\" data-tag-source=\"commitfest\" style=\"{}\" title=\"Commitfest tag\">{}</span>",
                escape_html(&commitfest_tag_style(tag.color.as_deref())),
                escape_html(&tag.name)
            );
            if i + 1 < tags.len() {
                out.push_str("<span class=\"tag-separator\">,</span>");
            }
        }
        out.push_str("</div>\n");
    }

    if let Some(tags) = d.ai_tags.as_ref().filter(|t| !t.is_empty()) {
        out.push_str("<div class=\"tags-container\"><strong>AI-Generated Discussion Tags:</strong>");
        for (i, tag) in tags.iter().enumerate() {
            let _ = write!(
                out,
                "<span class=\"tag\" data-tag-source=\"ai\" title=\"AI-generated tag\">{}</span>",
                escape_html(tag)
            );
            if i + 1 < tags.len() {
                out.push_str("<span class=\"tag-separator\">,</span>");
            }
        }
        out.push_str("</div>\n");
    }

    let _ = write!(
        out,
        "<div class=\"prose\">{}</div>\n<div class=\"actions\">",
        markdown.to_html(card.disclosure.current_text())
    );

    if let Some(levels) = card.show_more_levels() {
        let _ = write!(
            out,
            "<a class=\"show-more\" href=\"{}\">Show more</a>",
            escape_html(&card_href(page, card, &levels, view_expand))
        );
    }
    if let Some(levels) = card.show_less_levels() {
        let _ = write!(
            out,
            "<a class=\"show-less\" href=\"{}\">Show less</a>",
            escape_html(&card_href(page, card, &levels, view_expand))
        );
    }

    let share = &card.share;
    let _ = write!(
        out,
        "<span class=\"sep\">|</span>\
         <a class=\"share share-native\" href=\"{url}\" data-share-url=\"{url}\" data-share-title=\"{title}\" data-share-text=\"{text}\">Share</a>\
         <a class=\"share share-fallback\" href=\"{url}\" data-copy=\"{url}\">Copy link</a>\
         <a class=\"share share-fallback\" href=\"{twitter}\" target=\"_blank\" rel=\"noopener noreferrer\">X</a>\
         <a class=\"share share-fallback\" href=\"{linkedin}\" target=\"_blank\" rel=\"noopener noreferrer\">LinkedIn</a>\
         </div>\n</div>\n",
        url = escape_html(&share.share_url),
        title = escape_html(&d.subject),
        text = escape_html(&share.share_text),
        twitter = escape_html(&share.twitter_url),
        linkedin = escape_html(&share.linkedin_url),
    );
}

fn card_href(
    page: &DetailPage<'_>,
    card: &DiscussionCard<'_>,
    levels: &CardLevels,
    view_expand: Option<usize>,
) -> String {
    let mut href = format!("/summary/{}?levels={}", page.summary.id, levels);
    if let Some(expand) = view_expand {
        let _ = write!(href, "&expand={}", expand);
    }
    let _ = write!(href, "#{}", card.anchor());
    href
}

fn page_heading() -> String {
    format!("<p><a href=\"/\">&larr; Back to Home</a></p>\n<h1>{}</h1>\n", SITE_TITLE)
}

pub fn render_detail_error(message: &str) -> String {
    let body = format!(
        "{}<div class=\"panel error\"><p class=\"title\">Summary Not Found</p>\
         <p>{}</p><a href=\"/\">Back to Home</a></div>\n",
        page_heading(),
        escape_html(message)
    );
    layout(SITE_TITLE, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<b>\"R&D\"</b> it's"),
            "&lt;b&gt;&quot;R&amp;D&quot;&lt;/b&gt; it&#39;s"
        );
    }

    #[test]
    fn test_error_page_escapes_message() {
        let html = render_detail_error("<oops>");
        assert!(html.contains("Summary Not Found"));
        assert!(html.contains("&lt;oops&gt;"));
    }
}
