use serde::{Deserialize, Serialize};

/// The extracted plain text of one résumé.
///
/// By the time a Document exists the PDF/DOCX decoding is done;
/// everything downstream only ever sees `text`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// File name or other identifier, kept for log lines and output
    pub source: String,

    /// The full extracted text, untouched
    pub text: String,
}

impl Document {
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text:   text.into(),
        }
    }
}
