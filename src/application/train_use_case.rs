// ============================================================
// TrainUseCase
// ============================================================
// Orchestrates the training pipeline in order:
//
//   Step 1: Read the records CSV          (data)
//   Step 2: Split off the holdout rows    (data)
//   Step 3: Build the three corpora       (data)
//   Step 4: Fit the three classifiers     (ml)
//   Step 5: Save classifiers + config     (infra)
//   Step 6: Evaluate on the holdout rows  (application / infra)

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::application::evaluate_use_case::{evaluate_classifiers, EvaluationSummary};
use crate::data::{records::read_records, splitter::split_holdout};
use crate::infra::{metrics::MetricsLogger, model_store::ModelStore};
use crate::ml::trainer::{train_classifiers, Corpora};

// ─── Training Configuration ──────────────────────────────────────────────────
// Saved next to the models so `evaluate` can reproduce the split.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainConfig {
    pub records_csv:  PathBuf,
    pub model_dir:    PathBuf,
    /// Records held out for evaluation
    pub holdout:      usize,
    /// Shuffle before splitting; `None` holds out the last rows
    pub shuffle_seed: Option<u64>,
    /// Naive Bayes additive smoothing
    pub alpha:        f64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            records_csv:  PathBuf::from("data/records.csv"),
            model_dir:    PathBuf::from("models"),
            holdout:      100,
            shuffle_seed: None,
            alpha:        1.0,
        }
    }
}

// ─── TrainUseCase ─────────────────────────────────────────────────────────────
pub struct TrainUseCase {
    config: TrainConfig,
}

impl TrainUseCase {
    pub fn new(config: TrainConfig) -> Self {
        Self { config }
    }

    /// Train, save, and evaluate. The summary is `None` when
    /// nothing was held out.
    pub fn execute(&self) -> Result<Option<EvaluationSummary>> {
        let cfg = &self.config;

        // ── Step 1: Read records ──────────────────────────────────────────────
        tracing::info!("Reading records from '{}'", cfg.records_csv.display());
        let records = read_records(&cfg.records_csv)
            .with_context(|| format!("Failed to load training records from '{}'", cfg.records_csv.display()))?;

        // ── Step 2: Train / holdout split ─────────────────────────────────────
        let (train, holdout) = split_holdout(records, cfg.holdout, cfg.shuffle_seed);
        ensure!(
            !train.is_empty(),
            "No training records left after holding out {} rows",
            cfg.holdout
        );
        tracing::info!("Split: {} train, {} holdout", train.len(), holdout.len());

        // ── Step 3 + 4: Corpora and classifiers ───────────────────────────────
        let corpora = Corpora::from_records(&train);
        let set     = train_classifiers(&corpora, cfg.alpha)?;

        // ── Step 5: Persist ───────────────────────────────────────────────────
        let store = ModelStore::new(&cfg.model_dir);
        store.save_classifiers(&set)?;
        store.save_config(cfg)?;

        // ── Step 6: Evaluate ──────────────────────────────────────────────────
        if holdout.is_empty() {
            tracing::info!("Holdout is empty, skipping evaluation");
            return Ok(None);
        }
        let summary = evaluate_classifiers(&set, &Corpora::from_records(&holdout));
        summary.log_to(&MetricsLogger::new(&cfg.model_dir)?)?;

        Ok(Some(summary))
    }
}
