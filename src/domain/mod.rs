// ============================================================
// Domain Layer
// ============================================================
// Plain structs, enums and traits describing a résumé as it
// moves through the pipeline. Nothing in here touches files,
// regexes or trained models.
//
//   Document       — one résumé's extracted text and its source
//   Bag            — a cleaned line or a date tag; the unit a
//                    classifier consumes
//   ClassLabel     — the closed set of categories a classifier
//                    can emit
//   HeaderRecord   — where a section header was found
//   HeaderSpan     — the half-open line interval a header owns
//   ClassifiedLine — one labelled line inside a section
//   EmployerCluster / TitleRecord — the structured work history
//
// The traits are the seams to external collaborators (text
// sources, the part-of-speech tagger) and to trained models.

pub mod bag;
pub mod document;
pub mod employer;
pub mod label;
pub mod section;
pub mod traits;

pub use bag::Bag;
pub use document::Document;
pub use employer::{EmployerCluster, TitleRecord};
pub use label::ClassLabel;
pub use section::{ClassifiedLine, HeaderRecord, HeaderSpan};
