// ============================================================
// ClassLabel — the closed category set
// ============================================================
// Every label in the pipeline comes out of a trained
// TextClassifier (or the date-tag shortcut). Serialised in the
// upper-case short form used by the training corpora:
//
//   HEAD  EMPL  TITL  EDUC  DATE  UNKN
//   HEAD_WORK  HEAD_EDUC  HEAD_OTHR

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClassLabel {
    /// A section header of any kind
    Head,
    /// An employer / organisation name
    Empl,
    /// A job title
    Titl,
    /// A line of education history
    Educ,
    /// A date interval
    Date,
    /// Anything else, and the fallback for zero vocabulary overlap
    Unkn,
    /// Header opening a work-history section
    HeadWork,
    /// Header opening an education section
    HeadEduc,
    /// Header opening any other section
    HeadOthr,
}

impl ClassLabel {
    pub const ALL: [ClassLabel; 9] = [
        ClassLabel::Head,
        ClassLabel::Empl,
        ClassLabel::Titl,
        ClassLabel::Educ,
        ClassLabel::Date,
        ClassLabel::Unkn,
        ClassLabel::HeadWork,
        ClassLabel::HeadEduc,
        ClassLabel::HeadOthr,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClassLabel::Head     => "HEAD",
            ClassLabel::Empl     => "EMPL",
            ClassLabel::Titl     => "TITL",
            ClassLabel::Educ     => "EDUC",
            ClassLabel::Date     => "DATE",
            ClassLabel::Unkn     => "UNKN",
            ClassLabel::HeadWork => "HEAD_WORK",
            ClassLabel::HeadEduc => "HEAD_EDUC",
            ClassLabel::HeadOthr => "HEAD_OTHR",
        }
    }

    /// True for the three header subtypes
    pub fn is_header_subtype(&self) -> bool {
        matches!(self, ClassLabel::HeadWork | ClassLabel::HeadEduc | ClassLabel::HeadOthr)
    }
}

impl fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown class label '{0}'")]
pub struct UnknownLabel(pub String);

impl FromStr for ClassLabel {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ClassLabel::ALL
            .iter()
            .copied()
            .find(|label| label.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownLabel(s.to_string()))
    }
}
