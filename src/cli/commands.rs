// ============================================================
// CLI Commands and Arguments
// ============================================================
// Three subcommands: `train`, `evaluate` and `parse`.
// Path flags also read RESUME_RECORDS_CSV / RESUME_MODEL_DIR.

use clap::{Args, Subcommand};
use std::path::PathBuf;

use resume_sections::application::{
    evaluate_use_case::EvaluateConfig,
    parse_use_case::ParseConfig,
    train_use_case::TrainConfig,
};
use resume_sections::data::cleaner::DEFAULT_SKIP_LEADING_LINES;
use resume_sections::domain::label::ClassLabel;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Train the line, header and work classifiers from a records CSV
    Train(TrainArgs),

    /// Score saved classifiers on the holdout rows of a records CSV
    Evaluate(EvaluateArgs),

    /// Parse résumé files (.pdf, .docx, .txt) and print JSON
    Parse(ParseArgs),
}

#[derive(Args, Debug)]
pub struct TrainArgs {
    /// CSV file with an `api_response_json` column
    #[arg(long = "records", env = "RESUME_RECORDS_CSV", default_value = "data/records.csv")]
    pub records_csv: PathBuf,

    /// Directory the classifiers are written to
    #[arg(long, env = "RESUME_MODEL_DIR", default_value = "models")]
    pub model_dir: PathBuf,

    /// Number of records held out for evaluation
    #[arg(long, default_value_t = 100)]
    pub holdout: usize,

    /// Shuffle records with this seed before holding out
    #[arg(long)]
    pub shuffle_seed: Option<u64>,

    /// Naive Bayes additive smoothing
    #[arg(long, default_value_t = 1.0)]
    pub alpha: f64,
}

impl From<TrainArgs> for TrainConfig {
    fn from(a: TrainArgs) -> Self {
        TrainConfig {
            records_csv:  a.records_csv,
            model_dir:    a.model_dir,
            holdout:      a.holdout,
            shuffle_seed: a.shuffle_seed,
            alpha:        a.alpha,
        }
    }
}

#[derive(Args, Debug)]
pub struct EvaluateArgs {
    #[arg(long = "records", env = "RESUME_RECORDS_CSV", default_value = "data/records.csv")]
    pub records_csv: PathBuf,

    #[arg(long, env = "RESUME_MODEL_DIR", default_value = "models")]
    pub model_dir: PathBuf,

    /// Defaults to the holdout used at training time
    #[arg(long)]
    pub holdout: Option<usize>,
}

impl From<EvaluateArgs> for EvaluateConfig {
    fn from(a: EvaluateArgs) -> Self {
        EvaluateConfig {
            records_csv: a.records_csv,
            model_dir:   a.model_dir,
            holdout:     a.holdout,
        }
    }
}

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Résumé file to parse; repeat for several
    #[arg(long = "file", required = true)]
    pub files: Vec<PathBuf>,

    #[arg(long, env = "RESUME_MODEL_DIR", default_value = "models")]
    pub model_dir: PathBuf,

    /// Leading cleaned lines treated as name/contact boilerplate
    #[arg(long, default_value_t = DEFAULT_SKIP_LEADING_LINES)]
    pub skip_leading_lines: usize,

    /// Section to classify: HEAD_WORK, HEAD_EDUC or HEAD_OTHR
    #[arg(long, default_value = "HEAD_WORK")]
    pub section: ClassLabel,
}

impl From<&ParseArgs> for ParseConfig {
    fn from(a: &ParseArgs) -> Self {
        ParseConfig {
            skip_leading_lines: a.skip_leading_lines,
            section:            a.section,
        }
    }
}
