// ============================================================
// Analysis Layer
// ============================================================
// Turns cleaned bags into structure, one stage per module:
//
//   Vec<Bag>
//       │
//       ▼
//   headers.rs  → HeaderRecord per line the coarse classifier
//                 calls HEAD, subtyped by the header classifier
//       │
//       ▼
//   sections.rs → header positions become [start, end) spans,
//                 every span of the target subtype is gathered
//       │
//       ▼
//   intra.rs    → each section line labelled by the section
//                 classifier, date tags labelled DATE directly
//       │
//       ▼
//   cluster.rs  → employers grouped with their titles and dates
//
// Every stage returns fresh data and holds no state, so each is
// tested against small keyword classifiers instead of trained
// models.

/// Header detection
pub mod headers;

/// Header spans and section extraction
pub mod sections;

/// Line classification inside a section
pub mod intra;

/// Employer / title / date clustering
pub mod cluster;
