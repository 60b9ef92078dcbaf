// ============================================================
// Bag — the unit a classifier consumes
// ============================================================
// A cleaned résumé line is either ordinary text or a date tag
// split out of a line by the cleaner. Keeping the two apart as
// enum variants means downstream stages match on the variant
// instead of sniffing for the tag prefix.
//
// Rendered text form (what classifiers and humans see):
//
//   Line("Acme Corp")          → "Acme Corp"
//   DateTag("Jan 2019 - 2021") → "~DATE(S)~: Jan 2019 - 2021"

use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix used when a date tag is rendered as text
pub const DATE_TAG_PREFIX: &str = "~DATE(S)~:";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Bag {
    /// A cleaned line, possibly with a date removed from it
    Line(String),
    /// The date interval text that was removed from the preceding line
    DateTag(String),
}

impl Bag {
    pub fn line(text: impl Into<String>) -> Self {
        Bag::Line(text.into())
    }

    pub fn date(text: impl Into<String>) -> Self {
        Bag::DateTag(text.into())
    }

    /// The raw payload without any tag prefix
    pub fn text(&self) -> &str {
        match self {
            Bag::Line(text) | Bag::DateTag(text) => text,
        }
    }

    /// The string a classifier is asked about.
    /// Date tags keep their prefix so the models see them as trained.
    pub fn classifier_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Bag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bag::Line(text)    => f.write_str(text),
            Bag::DateTag(text) => write!(f, "{} {}", DATE_TAG_PREFIX, text),
        }
    }
}
