// ============================================================
// EvaluateUseCase
// ============================================================
// Re-scores saved classifiers against the holdout rows of a
// records CSV. The split defaults to the one recorded in
// train_config.json so the holdout is the same rows training
// never saw.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::data::{records::read_records, splitter::split_holdout};
use crate::infra::{
    metrics::{ClassificationReport, MetricsLogger},
    model_store::ModelStore,
};
use crate::ml::trainer::{ClassifierSet, Corpora};

/// One report per classifier
#[derive(Debug, Clone)]
pub struct EvaluationSummary {
    pub lines:   ClassificationReport,
    pub headers: ClassificationReport,
    pub work:    ClassificationReport,
}

impl EvaluationSummary {
    pub fn named(&self) -> [(&'static str, &ClassificationReport); 3] {
        [("line", &self.lines), ("header", &self.headers), ("work", &self.work)]
    }

    pub fn log_to(&self, logger: &MetricsLogger) -> Result<()> {
        for (name, report) in self.named() {
            logger.log(name, report)?;
        }
        tracing::info!("Metrics written to '{}'", logger.csv_path().display());
        Ok(())
    }
}

pub fn evaluate_classifiers(set: &ClassifierSet, corpora: &Corpora) -> EvaluationSummary {
    let summary = EvaluationSummary {
        lines:   set.lines.evaluate(&corpora.lines),
        headers: set.headers.evaluate(&corpora.headers),
        work:    set.work.evaluate(&corpora.work),
    };
    for (name, report) in summary.named() {
        tracing::info!("{} classifier accuracy: {:.4} over {} lines", name, report.accuracy(), report.total());
    }
    summary
}

#[derive(Debug, Clone)]
pub struct EvaluateConfig {
    pub records_csv:  PathBuf,
    pub model_dir:    PathBuf,
    /// Overrides the holdout saved at training time
    pub holdout:      Option<usize>,
}

pub struct EvaluateUseCase {
    config: EvaluateConfig,
}

impl EvaluateUseCase {
    pub fn new(config: EvaluateConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<EvaluationSummary> {
        let cfg   = &self.config;
        let store = ModelStore::new(&cfg.model_dir);

        let trained = store.load_config()?;
        let set     = store.load_classifiers()?;
        let holdout = cfg.holdout.unwrap_or(trained.holdout);

        let records = read_records(&cfg.records_csv)
            .with_context(|| format!("Failed to load records from '{}'", cfg.records_csv.display()))?;
        let (_, held) = split_holdout(records, holdout, trained.shuffle_seed);
        tracing::info!("Evaluating on {} holdout records", held.len());

        let summary = evaluate_classifiers(&set, &Corpora::from_records(&held));
        summary.log_to(&MetricsLogger::new(&cfg.model_dir)?)?;
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::train_use_case::{
        tests::{write_records, ROWS},
        TrainConfig, TrainUseCase,
    };

    #[test]
    fn test_evaluate_reuses_training_split() {
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("records.csv");
        write_records(&csv, &ROWS);

        let model_dir = dir.path().join("models");
        TrainUseCase::new(TrainConfig {
            records_csv: csv.clone(),
            model_dir:   model_dir.clone(),
            holdout:     2,
            ..TrainConfig::default()
        })
        .execute()
        .unwrap();

        let summary = EvaluateUseCase::new(EvaluateConfig {
            records_csv: csv,
            model_dir:   model_dir.clone(),
            holdout:     None,
        })
        .execute()
        .unwrap();

        // two holdout rows, each with one employer
        assert_eq!(summary.work.scores[0].support, 2);

        // header + 3 classifiers x 2 runs, one row per label
        let csv_rows = std::fs::read_to_string(model_dir.join("metrics.csv")).unwrap();
        assert_eq!(csv_rows.lines().count(), 1 + 2 * (5 + 3 + 3));
    }

    #[test]
    fn test_evaluate_without_models_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = EvaluateUseCase::new(EvaluateConfig {
            records_csv: dir.path().join("records.csv"),
            model_dir:   dir.path().join("models"),
            holdout:     Some(1),
        })
        .execute();
        assert!(result.is_err());
    }
}
