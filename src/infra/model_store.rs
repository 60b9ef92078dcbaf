// ============================================================
// Model Store
// ============================================================
// Saves and restores the trained classifier set as JSON.
//
// Directory layout:
//   <model_dir>/
//     line_classifier.json    ← HEAD / EMPL / TITL / EDUC / UNKN
//     header_classifier.json  ← HEAD_WORK / HEAD_EDUC / HEAD_OTHR
//     work_classifier.json    ← EMPL / TITL / UNKN
//     train_config.json       ← the TrainConfig of the run
//     metrics.csv             ← written by MetricsLogger
//
// Each classifier file holds its label order, vocabulary, IDF
// weights and fitted model, so loading needs nothing else.

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::application::train_use_case::TrainConfig;
use crate::domain::traits::Persistable;
use crate::ml::classifier::TextClassifier;
use crate::ml::trainer::ClassifierSet;

pub const LINE_CLASSIFIER:   &str = "line_classifier.json";
pub const HEADER_CLASSIFIER: &str = "header_classifier.json";
pub const WORK_CLASSIFIER:   &str = "work_classifier.json";
pub const TRAIN_CONFIG:      &str = "train_config.json";

pub struct ModelStore {
    dir: PathBuf,
}

impl ModelStore {
    /// Open a store rooted at `dir`. Nothing is created until a save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create model directory '{}'", self.dir.display()))
    }

    /// Write all three classifiers.
    pub fn save_classifiers(&self, set: &ClassifierSet) -> Result<()> {
        self.ensure_dir()?;
        set.lines.save(&self.dir.join(LINE_CLASSIFIER))?;
        set.headers.save(&self.dir.join(HEADER_CLASSIFIER))?;
        set.work.save(&self.dir.join(WORK_CLASSIFIER))?;

        tracing::info!("Saved classifiers to '{}'", self.dir.display());
        Ok(())
    }

    pub fn load_classifiers(&self) -> Result<ClassifierSet> {
        let set = ClassifierSet {
            lines:   TextClassifier::load(&self.dir.join(LINE_CLASSIFIER))?,
            headers: TextClassifier::load(&self.dir.join(HEADER_CLASSIFIER))?,
            work:    TextClassifier::load(&self.dir.join(WORK_CLASSIFIER))?,
        };
        tracing::info!("Loaded classifiers from '{}'", self.dir.display());
        Ok(set)
    }

    pub fn save_config(&self, cfg: &TrainConfig) -> Result<()> {
        self.ensure_dir()?;
        let path = self.dir.join(TRAIN_CONFIG);
        let json = serde_json::to_string_pretty(cfg)?;

        fs::write(&path, json)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

        tracing::debug!("Saved training config to '{}'", path.display());
        Ok(())
    }

    pub fn load_config(&self) -> Result<TrainConfig> {
        let path = self.dir.join(TRAIN_CONFIG);
        let json = fs::read_to_string(&path).with_context(|| {
            format!(
                "Cannot read config from '{}'. Make sure you have run 'train' first.",
                path.display()
            )
        })?;
        Ok(serde_json::from_str(&json)?)
    }
}
