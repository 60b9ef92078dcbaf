// ============================================================
// Data Pipeline
// ============================================================
// Everything between a file on disk and the strings the
// classifiers see.
//
// Parsing a résumé:
//
//   .pdf / .docx / .txt
//       │
//       ▼
//   loader      → plain text
//       │
//       ▼
//   cleaner     → drops contact noise and the candidate's name,
//                 splits lines, merges continuations
//       │
//       ▼
//   dates       → date expressions pulled out as their own bags
//
// Training the classifiers:
//
//   records CSV ─► records ─► splitter ─► corpus ─► ml
//
// The cleaner relies on tagger for name detection.

/// Plain-text extraction from PDF, DOCX and text files
pub mod loader;

/// Date pattern matching
pub mod dates;

/// Coarse part-of-speech tagging
pub mod tagger;

/// Noise removal, line splitting and date tagging
pub mod cleaner;

/// Bulk résumé exports read from CSV
pub mod records;

/// Labelled training corpora built from records
pub mod corpus;

/// Train/holdout split
pub mod splitter;
