// ============================================================
// Core Traits (Abstractions)
// ============================================================
// Seams between the pipeline and the things it does not own:
//
//   DocumentSource  — turns a file into plain text
//                     (PdfLoader, DocxLoader, TextLoader)
//   PosTagger       — tags tokens with a coarse part of speech,
//                     used to spot the candidate's name
//                     (CapitalizationTagger)
//   LineClassifier  — a trained model answering "what is this
//                     line?" (TextClassifier)
//   Persistable     — anything saved to and reloaded from disk
//                     (TextClassifier, via ModelStore)
//
// The analysis stages only see these traits, so tests can hand
// them small keyword stubs instead of trained models.

use anyhow::Result;
use std::path::Path;

use crate::domain::document::Document;
use crate::domain::label::ClassLabel;

// ─── DocumentSource ───────────────────────────────────────────────────────────
/// A text extractor for one file format.
pub trait DocumentSource {
    /// Lower-case file extensions this source understands, without the dot
    fn extensions(&self) -> &'static [&'static str];

    /// Extract the plain text of a single document.
    /// I/O and decode failures abort this document only.
    fn load(&self, path: &Path) -> Result<Document>;
}

// ─── PosTagger ────────────────────────────────────────────────────────────────
/// Coarse grammatical category of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosTag {
    ProperNoun,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub text: String,
    pub tag:  PosTag,
}

impl TaggedToken {
    pub fn new(text: impl Into<String>, tag: PosTag) -> Self {
        Self { text: text.into(), tag }
    }

    pub fn is_noun(&self) -> bool {
        self.tag == PosTag::ProperNoun
    }
}

/// Splits text into tokens tagged with a coarse part of speech.
pub trait PosTagger {
    fn tag(&self, text: &str) -> Vec<TaggedToken>;
}

// ─── LineClassifier ───────────────────────────────────────────────────────────
/// A trained model that labels a single line of text.
pub trait LineClassifier {
    /// Predicted label plus the probability of every trained label.
    /// Lines sharing no vocabulary with the model come back as
    /// `UNKN` with an all-zero vector.
    fn predict(&self, text: &str) -> (ClassLabel, Vec<f64>);
}

// ─── Persistable ──────────────────────────────────────────────────────────────
/// Any component whose state can be saved and restored from disk.
pub trait Persistable: Sized {
    fn save(&self, path: &Path) -> Result<()>;

    fn load(path: &Path) -> Result<Self>;
}
