// ============================================================
// IntraSectionClassifier
// ============================================================
// Labels every bag of an extracted section. Date tags are DATE
// with confidence 1.0 and never reach the model; every other
// bag takes the section classifier's label and its top
// probability rounded to two decimals. `line_index` is the
// position inside the section.

use crate::domain::bag::Bag;
use crate::domain::label::ClassLabel;
use crate::domain::section::ClassifiedLine;
use crate::domain::traits::LineClassifier;

pub fn classify_section(section: &[Bag], classifier: &dyn LineClassifier) -> Vec<ClassifiedLine> {
    section
        .iter()
        .enumerate()
        .map(|(index, bag)| match bag {
            Bag::DateTag(date) => ClassifiedLine::new(ClassLabel::Date, 1.0, index, date.as_str()),
            Bag::Line(text) => {
                let (label, probabilities) = classifier.predict(text);
                ClassifiedLine::new(label, round2(max_probability(&probabilities)), index, text.as_str())
            }
        })
        .collect()
}

// 0.0 for the all-zero vector of an unknown line
fn max_probability(probabilities: &[f64]) -> f64 {
    probabilities.iter().copied().fold(0.0, f64::max)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
