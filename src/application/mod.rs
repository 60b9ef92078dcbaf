// ============================================================
// Application / Use Cases
// ============================================================
// Workflow coordination only. No model math, no printing:
// use cases call into data, ml, analysis and infra, and hand
// results back to the CLI.
//
//   train_use_case    records CSV → three classifiers on disk
//   evaluate_use_case saved classifiers → holdout report
//   parse_use_case    résumé files → ParsedResume per file

/// Training workflow
pub mod train_use_case;

/// Holdout evaluation workflow
pub mod evaluate_use_case;

/// Résumé parsing workflow
pub mod parse_use_case;
