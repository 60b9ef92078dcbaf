// ============================================================
// Section types — headers, spans and classified lines
// ============================================================
// HeaderRecord marks the line a section starts on. Slicing turns
// every record into a HeaderSpan, the half-open interval of
// lines the section owns:
//
//   headers: [(HEAD_WORK, 2), (HEAD_EDUC, 5)]   over 8 lines
//   spans:   [(HEAD_WORK, 2..5), (HEAD_EDUC, 5..8)]
//
// ClassifiedLine is one line of a selected section after the
// section classifier has labelled it.

use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::domain::label::ClassLabel;

/// A header subtype and the line index it was found on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderRecord {
    pub label:      ClassLabel,
    pub line_index: usize,
}

impl HeaderRecord {
    pub fn new(label: ClassLabel, line_index: usize) -> Self {
        Self { label, line_index }
    }
}

/// A header subtype and the `[start, end)` line interval it owns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderSpan {
    pub label: ClassLabel,
    pub start: usize,
    pub end:   usize,
}

impl HeaderSpan {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// One labelled line of a section.
///
/// `confidence` is the top class probability rounded to two
/// decimals, or exactly 1.0 for date tags (no model involved).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedLine {
    pub label:      ClassLabel,
    pub confidence: f64,
    pub line_index: usize,
    pub text:       String,
}

impl ClassifiedLine {
    pub fn new(label: ClassLabel, confidence: f64, line_index: usize, text: impl Into<String>) -> Self {
        Self {
            label,
            confidence,
            line_index,
            text: text.into(),
        }
    }
}
