// ============================================================
// Classifier Training
// ============================================================
// Builds the three corpora from the bulk records and fits one
// TextClassifier on each:
//
//   lines    HEAD / EMPL / TITL / EDUC / UNKN   every cleaned line
//   headers  HEAD_WORK / HEAD_EDUC / HEAD_OTHR  lines judged HEAD
//   work     EMPL / TITL / UNKN                 work-history lines
//
// Each fit is a single blocking call. The fitted set is
// immutable afterwards and shared read-only by every parse.

use anyhow::{Context, Result};

use crate::data::corpus::{header_corpus, line_corpus, work_corpus, LabeledCorpus};
use crate::data::records::ExtractedRecord;
use crate::domain::label::ClassLabel;
use crate::domain::traits::LineClassifier;
use crate::ml::classifier::TextClassifier;
use crate::ml::model::MultinomialNb;

/// The trained classifiers a résumé parse needs
#[derive(Debug, Clone)]
pub struct ClassifierSet {
    pub lines:   TextClassifier,
    pub headers: TextClassifier,
    pub work:    TextClassifier,
}

impl ClassifierSet {
    /// Classifier used on the lines of a section of type `section`
    pub fn for_section(&self, section: ClassLabel) -> &dyn LineClassifier {
        match section {
            ClassLabel::HeadWork => &self.work,
            _                    => &self.lines,
        }
    }
}

/// The three corpora built from one set of records
#[derive(Debug, Clone)]
pub struct Corpora {
    pub lines:   LabeledCorpus,
    pub headers: LabeledCorpus,
    pub work:    LabeledCorpus,
}

impl Corpora {
    pub fn from_records(records: &[ExtractedRecord]) -> Self {
        Self {
            lines:   line_corpus(records),
            headers: header_corpus(records),
            work:    work_corpus(records),
        }
    }
}

fn fit(name: &str, corpus: &LabeledCorpus, alpha: f64) -> Result<TextClassifier> {
    let classifier = TextClassifier::train(corpus, MultinomialNb::new(alpha))
        .with_context(|| format!("Failed to train the {name} classifier"))?;

    tracing::info!(
        "Trained {} classifier: {} examples, {} labels, {} terms",
        name,
        corpus.len(),
        classifier.labels().len(),
        classifier.vocabulary_size()
    );
    Ok(classifier)
}

/// Fit all three classifiers with naive Bayes smoothing `alpha`.
pub fn train_classifiers(corpora: &Corpora, alpha: f64) -> Result<ClassifierSet> {
    Ok(ClassifierSet {
        lines:   fit("line", &corpora.lines, alpha)?,
        headers: fit("header", &corpora.headers, alpha)?,
        work:    fit("work", &corpora.work, alpha)?,
    })
}
