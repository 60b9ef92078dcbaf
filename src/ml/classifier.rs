// ============================================================
// TextClassifier
// ============================================================
// A TF-IDF vectorizer and a probabilistic model trained on a
// LabeledCorpus. The model is fitted against group indices, so
// `labels[i]` names the i-th entry of every probability vector.
//
//   train:    corpus ─► fit vectorizer ─► transform ─► model.fit
//   classify: text(s) ─► transform (no refit) ─► model.predict_proba
//
// classify() answers one line with a decision and several lines
// with the raw probability matrix. A single line sharing no
// vocabulary with the corpus is UNKN with an all-zero vector.

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::{BufReader, BufWriter},
    path::Path,
};

use crate::data::corpus::LabeledCorpus;
use crate::domain::label::ClassLabel;
use crate::domain::traits::{LineClassifier, Persistable};
use crate::infra::metrics::ClassificationReport;
use crate::ml::model::{MultinomialNb, ProbabilisticModel};
use crate::ml::vectorizer::TfidfVectorizer;

/// Result of `TextClassifier::classify`
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    /// Exactly one input string
    Single {
        label:         ClassLabel,
        probabilities: Vec<f64>,
    },
    /// One probability row per input string
    Batch(Vec<Vec<f64>>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound = "M: ProbabilisticModel")]
pub struct TextClassifier<M = MultinomialNb> {
    labels:     Vec<ClassLabel>,
    vectorizer: TfidfVectorizer,
    model:      M,
}

impl<M: ProbabilisticModel> TextClassifier<M> {
    /// Fit the vectorizer and `model` on every string of `corpus`.
    pub fn train(corpus: &LabeledCorpus, mut model: M) -> Result<Self> {
        ensure!(!corpus.is_empty(), "training corpus has no examples");

        let (texts, targets): (Vec<&str>, Vec<usize>) = corpus.samples().unzip();

        let vectorizer = TfidfVectorizer::fit(texts.iter().copied());
        let samples    = vectorizer.transform_all(&texts);

        model
            .fit(&samples, &targets, corpus.labels().len(), vectorizer.vocabulary_size())
            .context("model fitting failed")?;

        tracing::debug!(
            "Trained classifier over {:?}: {} examples, {} terms",
            corpus.labels(),
            texts.len(),
            vectorizer.vocabulary_size()
        );

        Ok(Self {
            labels: corpus.labels().to_vec(),
            vectorizer,
            model,
        })
    }

    pub fn classify(&self, texts: &[&str]) -> Classification {
        if let [text] = texts {
            let vector = self.vectorizer.transform(text);
            if vector.is_zero() {
                return Classification::Single {
                    label:         ClassLabel::Unkn,
                    probabilities: vec![0.0; self.labels.len()],
                };
            }
            let probabilities = self.model.predict_proba(&vector);
            return Classification::Single {
                label: self.label_of(&probabilities),
                probabilities,
            };
        }

        Classification::Batch(
            texts
                .iter()
                .map(|text| self.model.predict_proba(&self.vectorizer.transform(text)))
                .collect(),
        )
    }

    /// Classify a single line.
    pub fn predict(&self, text: &str) -> (ClassLabel, Vec<f64>) {
        match self.classify(&[text]) {
            Classification::Single { label, probabilities } => (label, probabilities),
            Classification::Batch(_) => (ClassLabel::Unkn, vec![0.0; self.labels.len()]),
        }
    }

    /// Score the classifier against the labels implied by `corpus`.
    pub fn evaluate(&self, corpus: &LabeledCorpus) -> ClassificationReport {
        let (texts, truth): (Vec<&str>, Vec<ClassLabel>) = corpus.labelled().unzip();

        let predicted: Vec<ClassLabel> = match self.classify(&texts) {
            Classification::Single { label, .. } => vec![label],
            Classification::Batch(rows) => rows.iter().map(|row| self.label_of(row)).collect(),
        };

        ClassificationReport::from_predictions(&self.labels, &truth, &predicted)
    }

    pub fn labels(&self) -> &[ClassLabel] {
        &self.labels
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vectorizer.vocabulary_size()
    }

    /// First label with the highest probability
    fn label_of(&self, probabilities: &[f64]) -> ClassLabel {
        argmax(probabilities)
            .and_then(|index| self.labels.get(index).copied())
            .unwrap_or(ClassLabel::Unkn)
    }
}

/// Index of the first maximum, `None` for an empty slice
pub fn argmax(values: &[f64]) -> Option<usize> {
    values
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (i, &v)| match best {
            Some((_, b)) if b >= v => best,
            _ => Some((i, v)),
        })
        .map(|(i, _)| i)
}

impl<M: ProbabilisticModel> LineClassifier for TextClassifier<M> {
    fn predict(&self, text: &str) -> (ClassLabel, Vec<f64>) {
        Self::predict(self, text)
    }
}

impl<M: ProbabilisticModel> Persistable for TextClassifier<M> {
    fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(path)
            .with_context(|| format!("Cannot write classifier to '{}'", path.display()))?;
        serde_json::to_writer(BufWriter::new(file), self)?;

        tracing::debug!("Saved classifier to '{}'", path.display());
        Ok(())
    }

    fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| {
            format!(
                "Cannot read classifier from '{}'. Have you run 'train' first?",
                path.display()
            )
        })?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Corrupt classifier file '{}'", path.display()))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn two_class() -> TextClassifier {
        let corpus = LabeledCorpus::from_groups(&[
            (ClassLabel::Empl, &["a", "a", "b"][..]),
            (ClassLabel::Titl, &["c", "d"][..]),
        ]);
        TextClassifier::train(&corpus, MultinomialNb::default()).unwrap()
    }

    fn work() -> TextClassifier {
        let corpus = LabeledCorpus::from_groups(&[
            (ClassLabel::Empl, &["Acme Corporation", "Initech Inc", "Globex Corporation"][..]),
            (ClassLabel::Titl, &["Software Engineer", "Senior Engineer", "Data Analyst"][..]),
            (ClassLabel::Unkn, &["Built billing pipelines", "Led a team of five"][..]),
        ]);
        TextClassifier::train(&corpus, MultinomialNb::default()).unwrap()
    }

    #[test]
    fn test_single_character_vocabulary() {
        let clf = two_class();
        let (label, probabilities) = clf.predict("a");
        assert_eq!(label, ClassLabel::Empl);
        assert_eq!(probabilities.len(), 2);
        assert!(probabilities[0] > probabilities[1]);
    }

    #[test]
    fn test_no_overlap_is_unkn() {
        let clf = two_class();
        let unknown = Classification::Single {
            label:         ClassLabel::Unkn,
            probabilities: vec![0.0, 0.0],
        };
        assert_eq!(clf.classify(&["zzz"]), unknown);
        assert_eq!(clf.classify(&[""]), unknown);
        assert_eq!(clf.predict(""), (ClassLabel::Unkn, vec![0.0, 0.0]));
    }

    #[test]
    fn test_batch_returns_matrix() {
        let clf = work();
        let Classification::Batch(rows) = clf.classify(&["Acme", "Engineer", "qqq"]) else {
            panic!("expected a batch");
        };
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.len() == 3));
        // no overlap inside a batch still gets a (prior) distribution
        assert!((rows[2].iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_predicts_domain_lines() {
        let clf = work();
        assert_eq!(clf.predict("Initech Corporation").0, ClassLabel::Empl);
        assert_eq!(clf.predict("Lead Software Engineer").0, ClassLabel::Titl);
    }

    #[test]
    fn test_evaluate_on_training_data() {
        let clf    = work();
        let corpus = LabeledCorpus::from_groups(&[
            (ClassLabel::Empl, &["Acme Corporation"][..]),
            (ClassLabel::Titl, &["Software Engineer"][..]),
        ]);
        let report = clf.evaluate(&corpus);
        assert_eq!(report.total(), 2);
        assert!((report.accuracy() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_argmax_prefers_first_maximum() {
        assert_eq!(argmax(&[0.2, 0.4, 0.4]), Some(1));
        assert_eq!(argmax(&[]), None);
    }

    #[test]
    fn test_save_and_load() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("clf.json");

        let clf = work();
        clf.save(&path).unwrap();
        let loaded = TextClassifier::<MultinomialNb>::load(&path).unwrap();

        assert_eq!(loaded.labels(), clf.labels());
        let (label, probabilities)   = clf.predict("Globex");
        let (reloaded, reloaded_p)   = loaded.predict("Globex");
        assert_eq!(reloaded, label);
        for (a, b) in probabilities.iter().zip(&reloaded_p) {
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn test_empty_corpus_is_rejected() {
        let corpus = LabeledCorpus::from_groups::<&str>(&[(ClassLabel::Empl, &[][..])]);
        assert!(TextClassifier::train(&corpus, MultinomialNb::default()).is_err());
    }
}
