// ============================================================
// Labelled Corpora
// ============================================================
// A LabeledCorpus is an ordered list of label groups, each a
// list of example strings. A classifier is trained against the
// group index, so the label order is the order of the model's
// probability vector.
//
//   labels: [HEAD,        EMPL,        TITL ...]
//   groups: [["Skills"],  ["Acme"],    ["Engineer", "Analyst"] ...]
//
// Three corpora are built from the bulk records:
//
//   line corpus    HEAD  EMPL  TITL  EDUC  UNKN(descriptions)
//   header corpus  HEAD_WORK  HEAD_EDUC  HEAD_OTHR
//   work corpus    EMPL  TITL  UNKN(descriptions)

use anyhow::{ensure, Result};

use crate::data::records::ExtractedRecord;
use crate::domain::label::ClassLabel;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabeledCorpus {
    labels: Vec<ClassLabel>,
    groups: Vec<Vec<String>>,
}

impl LabeledCorpus {
    /// Build a corpus from parallel label and group lists.
    pub fn new(labels: Vec<ClassLabel>, groups: Vec<Vec<String>>) -> Result<Self> {
        ensure!(
            labels.len() == groups.len(),
            "{} labels given for {} example groups",
            labels.len(),
            groups.len()
        );
        Ok(Self { labels, groups })
    }

    /// Convenience constructor for literal groups
    pub fn from_groups<S: AsRef<str>>(groups: &[(ClassLabel, &[S])]) -> Self {
        let (labels, groups) = groups
            .iter()
            .map(|(label, texts)| {
                (*label, texts.iter().map(|t| t.as_ref().to_string()).collect::<Vec<_>>())
            })
            .unzip();
        Self { labels, groups }
    }

    pub fn labels(&self) -> &[ClassLabel] {
        &self.labels
    }

    pub fn groups(&self) -> &[Vec<String>] {
        &self.groups
    }

    /// Total number of example strings across all groups
    pub fn len(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every example paired with the index of its group, in order
    pub fn samples(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.groups
            .iter()
            .enumerate()
            .flat_map(|(index, group)| group.iter().map(move |text| (text.as_str(), index)))
    }

    /// Every example paired with its label, in order
    pub fn labelled(&self) -> impl Iterator<Item = (&str, ClassLabel)> + '_ {
        self.samples().map(|(text, index)| (text, self.labels[index]))
    }
}

/// Header subtype for a section type string of the export
pub fn header_subtype(section_type: &str) -> ClassLabel {
    match section_type.trim().to_ascii_uppercase().as_str() {
        "EXPERIENCE" => ClassLabel::HeadWork,
        "EDUCATION"  => ClassLabel::HeadEduc,
        _            => ClassLabel::HeadOthr,
    }
}

/// Coarse line corpus: header vs employer vs title vs education vs other
pub fn line_corpus(records: &[ExtractedRecord]) -> LabeledCorpus {
    let mut groups = vec![Vec::new(); 5];
    for record in records {
        groups[0].extend(record.headers.iter().map(|(text, _)| text.clone()));
        groups[1].extend(record.employers.iter().cloned());
        groups[2].extend(record.titles.iter().cloned());
        groups[3].extend(record.education.iter().cloned());
        groups[4].extend(record.descriptions.iter().cloned());
    }

    LabeledCorpus {
        labels: vec![
            ClassLabel::Head,
            ClassLabel::Empl,
            ClassLabel::Titl,
            ClassLabel::Educ,
            ClassLabel::Unkn,
        ],
        groups,
    }
}

/// Header subtype corpus, grouped by section type
pub fn header_corpus(records: &[ExtractedRecord]) -> LabeledCorpus {
    let labels = vec![ClassLabel::HeadWork, ClassLabel::HeadEduc, ClassLabel::HeadOthr];
    let mut groups = vec![Vec::new(); labels.len()];

    for (text, section_type) in records.iter().flat_map(|r| r.headers.iter()) {
        let subtype = header_subtype(section_type);
        if let Some(index) = labels.iter().position(|l| *l == subtype) {
            groups[index].push(text.clone());
        }
    }

    LabeledCorpus { labels, groups }
}

/// Corpus for lines inside a work-history section
pub fn work_corpus(records: &[ExtractedRecord]) -> LabeledCorpus {
    let mut groups = vec![Vec::new(); 3];
    for record in records {
        groups[0].extend(record.employers.iter().cloned());
        groups[1].extend(record.titles.iter().cloned());
        groups[2].extend(record.descriptions.iter().cloned());
    }

    LabeledCorpus {
        labels: vec![ClassLabel::Empl, ClassLabel::Titl, ClassLabel::Unkn],
        groups,
    }
}
