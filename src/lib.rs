//! Résumé line classification and section clustering.
//!
//! The pipeline turns raw résumé text into cleaned, date-tagged lines,
//! locates section headers with trained text classifiers, slices out a
//! section and groups its lines into employer → title → date records.
//!
//! ```text
//!   raw text
//!       │
//!       ▼
//!   LineCleaner          data::cleaner     (dates via data::dates)
//!       │
//!       ▼
//!   HeaderExtractor      analysis::headers (coarse + subtype classifiers)
//!       │
//!       ▼
//!   SectionSlicer        analysis::sections
//!       │
//!       ▼
//!   IntraSection         analysis::intra   (section classifier)
//!       │
//!       ▼
//!   LineClusterer        analysis::cluster
//! ```

pub mod analysis;
pub mod application;
pub mod data;
pub mod domain;
pub mod infra;
pub mod ml;
