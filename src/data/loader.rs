// ============================================================
// Document Loaders
// ============================================================
// Text sources for a single résumé file:
//
//   PdfLoader   — pdf-extract pulls the text layer out of a PDF
//   DocxLoader  — docx-rs walks Paragraph → Run → Text nodes
//   TextLoader  — plain UTF-8 text, read as-is
//
// `load_document` picks the loader from the file extension.
// Failures are returned to the caller, which abandons that one
// document and moves on.
//
// The DOCX tree as docx-rs exposes it:
//   Document
//     └── children: Vec<DocumentChild>
//           └── Paragraph
//                 └── children: Vec<ParagraphChild>
//                       └── Run
//                             └── children: Vec<RunChild>
//                                   └── Text

use anyhow::{bail, Context, Result};
use std::{fs, path::Path};

use crate::domain::document::Document;
use crate::domain::traits::DocumentSource;

pub struct PdfLoader;

impl DocumentSource for PdfLoader {
    fn extensions(&self) -> &'static [&'static str] {
        &["pdf"]
    }

    fn load(&self, path: &Path) -> Result<Document> {
        let bytes = fs::read(path)
            .with_context(|| format!("Cannot read '{}'", path.display()))?;

        let text = pdf_extract::extract_text_from_mem(&bytes)
            .map_err(|e| anyhow::anyhow!("pdf-extract failed on '{}': {e}", path.display()))?;

        Ok(Document::new(source_name(path), text))
    }
}

pub struct DocxLoader;

impl DocumentSource for DocxLoader {
    fn extensions(&self) -> &'static [&'static str] {
        &["docx"]
    }

    fn load(&self, path: &Path) -> Result<Document> {
        // A .docx file is a ZIP archive of XML parts
        let bytes = fs::read(path)
            .with_context(|| format!("Cannot read '{}'", path.display()))?;

        let docx = docx_rs::read_docx(&bytes)
            .map_err(|e| anyhow::anyhow!("docx-rs parse error in '{}': {:?}", path.display(), e))?;

        // Empty paragraphs are kept as empty lines; the cleaner drops them
        let paragraphs: Vec<String> = docx
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                docx_rs::DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
                _ => None,
            })
            .collect();

        Ok(Document::new(source_name(path), paragraphs.join("\n")))
    }
}

/// Concatenate the text runs of one paragraph without a separator,
/// since runs are fragments of the same sentence
fn paragraph_text(para: &docx_rs::Paragraph) -> String {
    let mut parts = Vec::new();

    for child in &para.children {
        if let docx_rs::ParagraphChild::Run(run) = child {
            for rc in &run.children {
                if let docx_rs::RunChild::Text(t) = rc {
                    parts.push(t.text.clone());
                }
            }
        }
    }

    parts.join("")
}

pub struct TextLoader;

impl DocumentSource for TextLoader {
    fn extensions(&self) -> &'static [&'static str] {
        &["txt", "text"]
    }

    fn load(&self, path: &Path) -> Result<Document> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Cannot read '{}' as UTF-8 text", path.display()))?;
        Ok(Document::new(source_name(path), text))
    }
}

/// Load one résumé, choosing the loader by file extension.
pub fn load_document(path: &Path) -> Result<Document> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let sources: [&dyn DocumentSource; 3] = [&PdfLoader, &DocxLoader, &TextLoader];
    let Some(source) = sources
        .into_iter()
        .find(|s| s.extensions().contains(&extension.as_str()))
    else {
        bail!(
            "Unsupported résumé format '{}' (expected .pdf, .docx or .txt)",
            path.display()
        );
    };

    let doc = source.load(path)?;
    tracing::debug!("Loaded: {} ({} chars)", doc.source, doc.text.len());
    Ok(doc)
}

/// Use the file name as the source identifier
fn source_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string()
}
