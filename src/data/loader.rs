// ============================================================
// Layer 4 — Document Loader
// ============================================================
// Extracts plain text from an uploaded .docx or .pdf file.
//
// .docx (docx-rs):
//   A .docx is a ZIP of XML parts. docx-rs gives a typed tree:
//     Document
//       └── children: Vec<DocumentChild>
//             └── Paragraph
//                   └── Run
//                         └── Text  ← the actual words
//   Paragraphs are joined with newlines.
//
// .pdf (lopdf):
//   Text is pulled page by page with lopdf's content-stream text
//   extraction. Pages are separated by a blank line so a sentence
//   never silently spans the page break. A page that fails to
//   extract (odd font encodings, images only) is skipped with a
//   warning instead of failing the whole upload.
//
// Anything else → empty text + warning. An empty document produces
// zero questions further down, which is the behaviour the upload
// form expects for unsupported files.

use anyhow::{Context, Result};
use docx_rs::read_docx;
use std::{fs, path::{Path, PathBuf}};

use crate::domain::document::Document;
use crate::domain::traits::DocumentSource;

/// Supported upload formats, detected from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Docx,
    Pdf,
}

impl FileFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "docx" => Some(FileFormat::Docx),
            "pdf"  => Some(FileFormat::Pdf),
            _      => None,
        }
    }
}

/// Loads a single uploaded file. Implements DocumentSource.
pub struct FileLoader {
    path: PathBuf,
}

impl FileLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentSource for FileLoader {
    fn load(&self) -> Result<Document> {
        let source = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();

        let text = extract_text(&self.path)?;
        tracing::info!("Extracted {} chars from '{}'", text.len(), source);
        Ok(Document::new(source, text))
    }
}

/// Extract the text of `path`. Unsupported extensions give "".
pub fn extract_text(path: &Path) -> Result<String> {
    let Some(format) = FileFormat::from_path(path) else {
        tracing::warn!("Unsupported file type '{}', no text extracted", path.display());
        return Ok(String::new());
    };

    let bytes = fs::read(path)
        .with_context(|| format!("Cannot read '{}'", path.display()))?;

    if bytes.is_empty() {
        tracing::warn!("'{}' is empty", path.display());
        return Ok(String::new());
    }

    match format {
        FileFormat::Docx => docx_text(&bytes)
            .with_context(|| format!("Cannot parse .docx '{}'", path.display())),
        FileFormat::Pdf => pdf_text(&bytes)
            .with_context(|| format!("Cannot parse .pdf '{}'", path.display())),
    }
}

fn docx_text(bytes: &[u8]) -> Result<String> {
    let docx = read_docx(bytes)
        .map_err(|e| anyhow::anyhow!("docx-rs parse error: {:?}", e))?;

    let mut paragraphs: Vec<String> = Vec::new();

    for child in &docx.document.children {
        use docx_rs::DocumentChild;

        // Tables, images and section properties carry no prose
        if let DocumentChild::Paragraph(para) = child {
            let text = paragraph_text(para);
            if !text.trim().is_empty() {
                paragraphs.push(text);
            }
        }
    }

    Ok(paragraphs.join("\n"))
}

/// Runs inside one paragraph are fragments of the same sentence,
/// so they are concatenated without a separator.
fn paragraph_text(para: &docx_rs::Paragraph) -> String {
    use docx_rs::{ParagraphChild, RunChild};

    para.children
        .iter()
        .filter_map(|child| match child {
            ParagraphChild::Run(run) => Some(run),
            _ => None,
        })
        .flat_map(|run| run.children.iter())
        .filter_map(|rc| match rc {
            RunChild::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
        .collect()
}

fn pdf_text(bytes: &[u8]) -> Result<String> {
    let doc = lopdf::Document::load_mem(bytes)
        .map_err(|e| anyhow::anyhow!("lopdf parse error: {e}"))?;

    let mut pages: Vec<String> = Vec::new();

    for page_number in doc.get_pages().keys() {
        match doc.extract_text(&[*page_number]) {
            Ok(text) if !text.trim().is_empty() => pages.push(text),
            Ok(_) => tracing::debug!("Page {} has no text layer", page_number),
            Err(e) => tracing::warn!("Skipping page {}: {}", page_number, e),
        }
    }

    Ok(pages.join("\n\n"))
}
