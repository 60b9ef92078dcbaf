// ============================================================
// HeaderExtractor
// ============================================================
// Walks the cleaned bags in order. A bag the coarse classifier
// labels HEAD is asked again of the header classifier, and the
// answer is recorded with the bag's position:
//
//   bags:    ["Jane", "EXPERIENCE", "Acme", "EDUCATION", ...]
//   records: [(HEAD_WORK, 1), (HEAD_EDUC, 3)]

use crate::domain::bag::Bag;
use crate::domain::label::ClassLabel;
use crate::domain::section::HeaderRecord;
use crate::domain::traits::LineClassifier;

pub struct HeaderExtractor<'a> {
    lines:   &'a dyn LineClassifier,
    headers: &'a dyn LineClassifier,
}

impl<'a> HeaderExtractor<'a> {
    pub fn new(lines: &'a dyn LineClassifier, headers: &'a dyn LineClassifier) -> Self {
        Self { lines, headers }
    }

    /// Header records in document order
    pub fn extract(&self, bags: &[Bag]) -> Vec<HeaderRecord> {
        bags.iter()
            .enumerate()
            .filter_map(|(index, bag)| {
                let text = bag.classifier_text();
                if self.lines.predict(&text).0 != ClassLabel::Head {
                    return None;
                }
                let (subtype, _) = self.headers.predict(&text);
                tracing::debug!("Header at line {}: {:?} → {}", index, bag.text(), subtype);
                Some(HeaderRecord::new(subtype, index))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::testing::KeywordClassifier;

    fn classifiers() -> (KeywordClassifier, KeywordClassifier) {
        (
            KeywordClassifier::new(&[
                ("experience", ClassLabel::Head),
                ("education", ClassLabel::Head),
                ("skills", ClassLabel::Head),
                ("acme", ClassLabel::Empl),
            ]),
            KeywordClassifier::new(&[
                ("experience", ClassLabel::HeadWork),
                ("education", ClassLabel::HeadEduc),
                ("skills", ClassLabel::HeadOthr),
            ]),
        )
    }

    #[test]
    fn test_headers_in_document_order() {
        let (lines, headers) = classifiers();
        let bags = vec![
            Bag::line("Work Experience"),
            Bag::line("Acme Corp"),
            Bag::date("2015 - 2018"),
            Bag::line("Skills"),
            Bag::line("Education"),
        ];

        let records = HeaderExtractor::new(&lines, &headers).extract(&bags);
        assert_eq!(
            records,
            vec![
                HeaderRecord::new(ClassLabel::HeadWork, 0),
                HeaderRecord::new(ClassLabel::HeadOthr, 3),
                HeaderRecord::new(ClassLabel::HeadEduc, 4),
            ]
        );
    }

    #[test]
    fn test_no_headers() {
        let (lines, headers) = classifiers();
        let bags = vec![Bag::line("Acme Corp"), Bag::line("something else")];
        assert!(HeaderExtractor::new(&lines, &headers).extract(&bags).is_empty());
    }
}
