// ============================================================
// Evaluation Metrics
// ============================================================
// Scores a classifier's predictions against the true labels of
// a held-out corpus and records the result to a CSV file.
//
// Per label:
//   precision = tp / (tp + fp)    of the lines predicted L, how many were L
//   recall    = tp / (tp + fn)    of the lines that were L, how many we found
//   f1        = 2pr / (p + r)
//   support   = number of lines whose true label is L
//
// A zero denominator scores 0. Predictions of UNKN for a model
// that never trained on UNKN count as false negatives only.
//
// Output file: <model_dir>/metrics.csv
//
//   classifier,label,precision,recall,f1,support
//   work,EMPL,0.912000,0.884000,0.897780,250
//   work,TITL,0.803000,0.861000,0.830990,231
//   ...

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use crate::domain::label::ClassLabel;

/// Scores for one label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelScore {
    pub label:     ClassLabel,
    pub precision: f64,
    pub recall:    f64,
    pub f1:        f64,
    pub support:   usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationReport {
    pub scores:  Vec<LabelScore>,
    correct:     usize,
    total:       usize,
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 { 0.0 } else { num as f64 / den as f64 }
}

impl ClassificationReport {
    /// Build a report over `labels` from parallel truth/prediction lists.
    pub fn from_predictions(labels: &[ClassLabel], truth: &[ClassLabel], predicted: &[ClassLabel]) -> Self {
        let pairs = || truth.iter().zip(predicted);

        let scores = labels
            .iter()
            .map(|&label| {
                let tp = pairs().filter(|(t, p)| **t == label && **p == label).count();
                let predicted_as = pairs().filter(|(_, p)| **p == label).count();
                let support      = pairs().filter(|(t, _)| **t == label).count();

                let precision = ratio(tp, predicted_as);
                let recall    = ratio(tp, support);
                let f1 = if precision + recall > 0.0 {
                    2.0 * precision * recall / (precision + recall)
                } else {
                    0.0
                };
                LabelScore { label, precision, recall, f1, support }
            })
            .collect();

        Self {
            scores,
            correct: pairs().filter(|(t, p)| t == p).count(),
            total:   truth.len().min(predicted.len()),
        }
    }

    pub fn accuracy(&self) -> f64 {
        ratio(self.correct, self.total)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Unweighted mean of (precision, recall, f1) across labels
    pub fn macro_avg(&self) -> (f64, f64, f64) {
        let n = self.scores.len().max(1) as f64;
        let sum = |f: fn(&LabelScore) -> f64| self.scores.iter().map(f).sum::<f64>() / n;
        (sum(|s| s.precision), sum(|s| s.recall), sum(|s| s.f1))
    }
}

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>12} {:>10} {:>10} {:>10} {:>10}", "", "precision", "recall", "f1-score", "support")?;
        for s in &self.scores {
            writeln!(
                f,
                "{:>12} {:>10.2} {:>10.2} {:>10.2} {:>10}",
                s.label, s.precision, s.recall, s.f1, s.support
            )?;
        }
        let (p, r, f1) = self.macro_avg();
        writeln!(f)?;
        writeln!(f, "{:>12} {:>10} {:>10} {:>10.2} {:>10}", "accuracy", "", "", self.accuracy(), self.total)?;
        write!(f, "{:>12} {:>10.2} {:>10.2} {:>10.2} {:>10}", "macro avg", p, r, f1, self.total)
    }
}

/// Appends evaluation reports to a CSV file.
pub struct MetricsLogger {
    csv_path: PathBuf,
}

impl MetricsLogger {
    /// Writes the CSV header if the file doesn't exist yet.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)
            .with_context(|| format!("Cannot create '{}'", dir.display()))?;

        let csv_path = dir.join("metrics.csv");

        if !csv_path.exists() {
            let mut f = fs::File::create(&csv_path)?;
            writeln!(f, "classifier,label,precision,recall,f1,support")?;
            tracing::debug!("Created metrics CSV: '{}'", csv_path.display());
        }

        Ok(Self { csv_path })
    }

    /// Append one row per label of `report`.
    pub fn log(&self, classifier: &str, report: &ClassificationReport) -> Result<()> {
        let mut f = OpenOptions::new()
            .append(true)
            .open(&self.csv_path)
            .with_context(|| format!("Cannot open '{}'", self.csv_path.display()))?;

        for s in &report.scores {
            writeln!(
                f,
                "{},{},{:.6},{:.6},{:.6},{}",
                classifier, s.label, s.precision, s.recall, s.f1, s.support,
            )?;
        }

        tracing::debug!(
            "Logged {} metrics: accuracy={:.4} over {} lines",
            classifier,
            report.accuracy(),
            report.total(),
        );
        Ok(())
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }
}
