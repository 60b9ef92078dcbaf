// ============================================================
// ParseUseCase
// ============================================================
// Runs one résumé through the whole pipeline:
//
//   raw text
//     → LineCleaner            Vec<Bag>
//     → HeaderExtractor        Vec<HeaderRecord>
//     → extract_section        Vec<Bag> of the target subtype
//     → classify_section       Vec<ClassifiedLine>
//     → cluster_lines          Vec<EmployerCluster>
//
// ResumeParser holds borrowed classifiers and is reused across
// files. ParseUseCase loads the saved models, reads each file,
// and skips files that fail to load.

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::analysis::{
    cluster::cluster_lines,
    headers::HeaderExtractor,
    intra::classify_section,
    sections::{extract_section, header_spans},
};
use crate::data::{
    cleaner::{LineCleaner, DEFAULT_SKIP_LEADING_LINES},
    loader::load_document,
    tagger::CapitalizationTagger,
};
use crate::domain::{
    Bag, ClassLabel, ClassifiedLine, Document, EmployerCluster, HeaderSpan,
    traits::{LineClassifier, PosTagger},
};
use crate::infra::model_store::ModelStore;
use crate::ml::trainer::ClassifierSet;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseConfig {
    /// Leading cleaned lines dropped as name/contact boilerplate
    pub skip_leading_lines: usize,
    /// Header subtype of the section to classify and cluster
    pub section:            ClassLabel,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            skip_leading_lines: DEFAULT_SKIP_LEADING_LINES,
            section:            ClassLabel::HeadWork,
        }
    }
}

/// Everything the pipeline learned about one résumé
#[derive(Debug, Clone, Serialize)]
pub struct ParsedResume {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source:    Option<String>,
    pub bags:      Vec<Bag>,
    pub headers:   Vec<HeaderSpan>,
    pub section:   ClassLabel,
    pub lines:     Vec<ClassifiedLine>,
    pub employers: Vec<EmployerCluster>,
}

pub struct ResumeParser<'a> {
    lines:    &'a dyn LineClassifier,
    headers:  &'a dyn LineClassifier,
    section:  &'a dyn LineClassifier,
    tagger:   &'a dyn PosTagger,
    config:   ParseConfig,
}

impl<'a> ResumeParser<'a> {
    /// `section` labels the lines inside the target section.
    pub fn new(
        lines:   &'a dyn LineClassifier,
        headers: &'a dyn LineClassifier,
        section: &'a dyn LineClassifier,
        tagger:  &'a dyn PosTagger,
        config:  ParseConfig,
    ) -> Self {
        Self { lines, headers, section, tagger, config }
    }

    /// Parser over a trained set, picking the section classifier for `config.section`
    pub fn from_set(set: &'a ClassifierSet, tagger: &'a dyn PosTagger, config: ParseConfig) -> Self {
        let section = set.for_section(config.section);
        Self::new(&set.lines, &set.headers, section, tagger, config)
    }

    pub fn parse(&self, raw: &str) -> ParsedResume {
        let bags = LineCleaner::new(self.tagger)
            .with_skip_leading_lines(self.config.skip_leading_lines)
            .clean_resume(raw);

        let records = HeaderExtractor::new(self.lines, self.headers).extract(&bags);
        let section = extract_section(&bags, &records, self.config.section);
        let lines   = classify_section(&section, self.section);
        let employers = cluster_lines(&lines, self.config.section);

        tracing::debug!(
            "Parsed {} bags, {} headers, {} section lines, {} employers",
            bags.len(),
            records.len(),
            lines.len(),
            employers.len()
        );

        ParsedResume {
            source:  None,
            headers: header_spans(&records, bags.len()),
            section: self.config.section,
            bags,
            lines,
            employers,
        }
    }

    pub fn parse_document(&self, document: &Document) -> ParsedResume {
        ParsedResume {
            source: Some(document.source.clone()),
            ..self.parse(&document.text)
        }
    }
}

// ─── ParseUseCase ─────────────────────────────────────────────────────────────
pub struct ParseUseCase {
    model_dir: PathBuf,
    config:    ParseConfig,
}

impl ParseUseCase {
    pub fn new(model_dir: impl Into<PathBuf>, config: ParseConfig) -> Self {
        Self { model_dir: model_dir.into(), config }
    }

    /// Parse every readable file. Unreadable files are logged and skipped.
    pub fn execute(&self, files: &[PathBuf]) -> Result<Vec<ParsedResume>> {
        ensure!(
            self.config.section.is_header_subtype(),
            "'{}' is not a section label, expected HEAD_WORK, HEAD_EDUC or HEAD_OTHR",
            self.config.section
        );

        let set    = ModelStore::new(&self.model_dir).load_classifiers()?;
        let tagger = CapitalizationTagger::new();
        let parser = ResumeParser::from_set(&set, &tagger, self.config.clone());

        let parsed: Vec<ParsedResume> = files
            .iter()
            .filter_map(|path| match load_document(path) {
                Ok(document) => Some(parser.parse_document(&document)),
                Err(e) => {
                    tracing::warn!("Skipping '{}': {:#}", path.display(), e);
                    None
                }
            })
            .collect();

        tracing::info!("Parsed {} of {} résumés", parsed.len(), files.len());
        Ok(parsed)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::testing::KeywordClassifier;
    use crate::application::train_use_case::{
        tests::{write_records, ROWS},
        TrainConfig, TrainUseCase,
    };
    use serde_json::json;

    const RESUME: &str = "Jane Doe\n\
                          jane.doe@example.com     555-123-4567\n\
                          12 Main Street, Springfield\n\
                          Objective: build things\n\
                          EXPERIENCE\n\
                          Acme Corp     (2015 - 2018)\n\
                          Software Engineer\n\
                          Built the billing\n\
                          pipeline end to end\n\
                          EDUCATION\n\
                          State University 2011\n";

    struct Stubs {
        lines:   KeywordClassifier,
        headers: KeywordClassifier,
        work:    KeywordClassifier,
        tagger:  CapitalizationTagger,
    }

    fn stubs() -> Stubs {
        Stubs {
            lines: KeywordClassifier::new(&[
                ("experience", ClassLabel::Head),
                ("education", ClassLabel::Head),
                ("acme", ClassLabel::Empl),
                ("engineer", ClassLabel::Titl),
            ]),
            headers: KeywordClassifier::new(&[
                ("experience", ClassLabel::HeadWork),
                ("education", ClassLabel::HeadEduc),
            ]),
            work: KeywordClassifier::new(&[
                ("acme", ClassLabel::Empl),
                ("engineer", ClassLabel::Titl),
            ]),
            tagger: CapitalizationTagger::new(),
        }
    }

    #[test]
    fn test_work_history_end_to_end() {
        let s = stubs();
        let parser = ResumeParser::new(&s.lines, &s.headers, &s.work, &s.tagger, ParseConfig::default());
        let parsed = parser.parse(RESUME);

        assert_eq!(parsed.bags.len(), 8);
        assert_eq!(
            parsed.headers,
            vec![
                HeaderSpan { label: ClassLabel::HeadWork, start: 0, end: 5 },
                HeaderSpan { label: ClassLabel::HeadEduc, start: 5, end: 8 },
            ]
        );
        assert_eq!(parsed.lines.len(), 5);
        assert_eq!(parsed.lines[2], ClassifiedLine::new(ClassLabel::Date, 1.0, 2, "2015 - 2018"));
        assert_eq!(
            serde_json::to_value(&parsed.employers).unwrap(),
            json!([{"EMPL": "Acme Corp", "TITLS": [{"TITL": "Software Engineer", "DATE": "2015 - 2018"}]}])
        );
    }

    #[test]
    fn test_other_sections_classify_without_clusters() {
        let s = stubs();
        let config = ParseConfig { section: ClassLabel::HeadEduc, ..ParseConfig::default() };
        let parser = ResumeParser::new(&s.lines, &s.headers, &s.lines, &s.tagger, config);
        let parsed = parser.parse(RESUME);

        assert_eq!(parsed.lines.len(), 3);
        assert_eq!(parsed.lines[0].label, ClassLabel::Head);
        assert!(parsed.employers.is_empty());
    }

    #[test]
    fn test_resume_without_headers() {
        let s = stubs();
        let parser = ResumeParser::new(&s.lines, &s.headers, &s.work, &s.tagger, ParseConfig::default());
        let parsed = parser.parse("Jane Doe\nsomething\nAcme Corp\nSoftware Engineer\n");

        assert!(parsed.headers.is_empty());
        assert!(parsed.lines.is_empty());
        assert!(parsed.employers.is_empty());
    }

    #[test]
    fn test_use_case_rejects_non_section_labels() {
        let dir    = tempfile::tempdir().unwrap();
        let config = ParseConfig { section: ClassLabel::Empl, ..ParseConfig::default() };
        let err    = ParseUseCase::new(dir.path(), config).execute(&[]).unwrap_err();
        assert!(err.to_string().contains("EMPL"));
    }

    #[test]
    fn test_use_case_skips_unreadable_files() {
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("records.csv");
        write_records(&csv, &ROWS);

        let model_dir = dir.path().join("models");
        TrainUseCase::new(TrainConfig {
            records_csv: csv,
            model_dir:   model_dir.clone(),
            holdout:     0,
            ..TrainConfig::default()
        })
        .execute()
        .unwrap();

        let resume = dir.path().join("jane.txt");
        std::fs::write(&resume, RESUME).unwrap();

        let files  = vec![resume, dir.path().join("missing.pdf"), dir.path().join("notes.xyz")];
        let parsed = ParseUseCase::new(&model_dir, ParseConfig::default()).execute(&files).unwrap();

        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].source.as_deref(), Some("jane.txt"));
        assert_eq!(parsed[0].bags.len(), 8);
    }
}
