//! crates/digest_core/src/disclosure.rs
//!
//! Per-card disclosure level: brief, detailed, deep.
//!
//! "Show more" steps forward one level when a longer text exists; "show less"
//! jumps straight back to brief. There is no step from deep to detailed.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::domain::TopDiscussion;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum SummaryLevel {
    #[default]
    Brief,
    Detailed,
    Deep,
}

impl SummaryLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            SummaryLevel::Brief => "brief",
            SummaryLevel::Detailed => "detailed",
            SummaryLevel::Deep => "deep",
        }
    }
}

impl fmt::Display for SummaryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown summary level: {0}")]
pub struct UnknownLevel(String);

impl FromStr for SummaryLevel {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "brief" => Ok(SummaryLevel::Brief),
            "detailed" => Ok(SummaryLevel::Detailed),
            "deep" => Ok(SummaryLevel::Deep),
            other => Err(UnknownLevel(other.to_string())),
        }
    }
}

/// Disclosure state of one discussion card.
#[derive(Debug, Clone, Copy)]
pub struct Disclosure<'a> {
    discussion: &'a TopDiscussion,
    level: SummaryLevel,
}

impl<'a> Disclosure<'a> {
    /// Cards opened from a share link start at `Detailed`; all others at `Brief`.
    pub fn new(discussion: &'a TopDiscussion, default_expanded: bool) -> Self {
        let level = if default_expanded {
            SummaryLevel::Detailed
        } else {
            SummaryLevel::Brief
        };
        Self { discussion, level }
    }

    /// Restores a level carried over from a previous request.
    pub fn at(discussion: &'a TopDiscussion, level: SummaryLevel) -> Self {
        Self { discussion, level }
    }

    pub fn level(&self) -> SummaryLevel {
        self.level
    }

    pub fn can_expand(&self) -> bool {
        match self.level {
            SummaryLevel::Brief => present(&self.discussion.summary_detailed).is_some(),
            SummaryLevel::Detailed => present(&self.discussion.summary_deep).is_some(),
            SummaryLevel::Deep => false,
        }
    }

    pub fn can_collapse(&self) -> bool {
        self.level != SummaryLevel::Brief
    }

    /// Level reached by "show more", if enabled.
    pub fn expanded(&self) -> Option<SummaryLevel> {
        if !self.can_expand() {
            return None;
        }
        match self.level {
            SummaryLevel::Brief => Some(SummaryLevel::Detailed),
            SummaryLevel::Detailed => Some(SummaryLevel::Deep),
            SummaryLevel::Deep => None,
        }
    }

    /// Returns false and stays put when no longer text exists.
    pub fn show_more(&mut self) -> bool {
        match self.expanded() {
            Some(next) => {
                self.level = next;
                true
            }
            None => false,
        }
    }

    pub fn show_less(&mut self) {
        self.level = SummaryLevel::Brief;
    }

    /// Text shown at the current level, falling back to the brief text.
    pub fn current_text(&self) -> &'a str {
        let d = self.discussion;
        let chosen = match self.level {
            SummaryLevel::Deep => present(&d.summary_deep),
            SummaryLevel::Detailed => present(&d.summary_detailed),
            SummaryLevel::Brief => None,
        };
        chosen.or_else(|| d.summary_brief.as_deref()).unwrap_or("")
    }
}

fn present(text: &Option<String>) -> Option<&str> {
    text.as_deref().filter(|t| !t.is_empty())
}

//=========================================================================================
// Levels carried across requests
//=========================================================================================

/// Explicit per-card levels, keyed by 1-based card number.
///
/// Serialized as `"1:detailed,3:deep"`. Malformed entries are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardLevels(BTreeMap<usize, SummaryLevel>);

impl CardLevels {
    pub fn parse(raw: &str) -> Self {
        let map = raw
            .split(',')
            .filter_map(|entry| {
                let (card, level) = entry.split_once(':')?;
                let card: usize = card.trim().parse().ok()?;
                let level: SummaryLevel = level.parse().ok()?;
                (card > 0).then_some((card, level))
            })
            .collect();
        Self(map)
    }

    pub fn get(&self, card: usize) -> Option<SummaryLevel> {
        self.0.get(&card).copied()
    }

    /// A copy with `card` set to `level`.
    pub fn with(&self, card: usize, level: SummaryLevel) -> Self {
        let mut next = self.0.clone();
        next.insert(card, level);
        Self(next)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Disclosure for card `card`, honouring an explicit level before the
    /// share-link default.
    pub fn disclosure<'a>(
        &self,
        discussion: &'a TopDiscussion,
        card: usize,
        expand: Option<usize>,
    ) -> Disclosure<'a> {
        match self.get(card) {
            Some(level) => Disclosure::at(discussion, level),
            None => Disclosure::new(discussion, expand == Some(card)),
        }
    }
}

impl fmt::Display for CardLevels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (card, level) in &self.0 {
            if !first {
                f.write_str(",")?;
            }
            write!(f, "{}:{}", card, level)?;
            first = false;
        }
        Ok(())
    }
}
