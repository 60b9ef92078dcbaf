// ============================================================
// SectionSlicer
// ============================================================
// Header positions become half-open spans, each ending where
// the next header starts and the last one at the bag count:
//
//   headers: [(HEAD_WORK, 2), (HEAD_EDUC, 5)]   8 bags
//   spans:   [(HEAD_WORK, 2..5), (HEAD_EDUC, 5..8)]
//
// The header records are only read, so slicing can be repeated
// on the same list. A section is every span of the requested
// subtype, concatenated in document order; the header line
// itself is the first line of its section.

use crate::domain::bag::Bag;
use crate::domain::label::ClassLabel;
use crate::domain::section::{HeaderRecord, HeaderSpan};

/// Convert header positions into `[start, end)` spans over `total` bags.
pub fn header_spans(headers: &[HeaderRecord], total: usize) -> Vec<HeaderSpan> {
    headers
        .iter()
        .enumerate()
        .map(|(n, header)| HeaderSpan {
            label: header.label,
            start: header.line_index,
            end:   headers.get(n + 1).map_or(total, |next| next.line_index),
        })
        .collect()
}

/// Bags of every section of subtype `target`, in document order.
pub fn extract_section(bags: &[Bag], headers: &[HeaderRecord], target: ClassLabel) -> Vec<Bag> {
    header_spans(headers, bags.len())
        .into_iter()
        .filter(|span| span.label == target)
        .filter_map(|span| bags.get(span.range()))
        .flatten()
        .cloned()
        .collect()
}
