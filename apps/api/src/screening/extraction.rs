//! Text-extractor boundary. Binary-format parsing (PDF/DOCX readers) lives
//! outside this service; documents arrive here already reduced to raw text
//! or to a per-document failure. This module owns that contract and the
//! failure taxonomy, and keeps failures isolated per document.

use serde::{Deserialize, Serialize};

/// Why a document could not be screened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Document type not recognized by the upstream extractor.
    UnsupportedFormat,
    /// Extractor ran but produced no usable text.
    ExtractionFailure,
}

/// Per-document error record. Flows into `ScreeningReport.skipped`; it never
/// aborts the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentFailure {
    pub kind: FailureKind,
    pub reason: String,
}

impl DocumentFailure {
    /// Upstream extractors report this kind; the service only passes it through.
    #[allow(dead_code)]
    pub fn unsupported_format(reason: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::UnsupportedFormat,
            reason: reason.into(),
        }
    }

    pub fn extraction_failure(reason: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::ExtractionFailure,
            reason: reason.into(),
        }
    }
}

/// One document as handed over by the upstream text extractor: either raw
/// text or the failure it hit.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentInput {
    pub filename: String,
    #[serde(default)]
    pub raw_text: Option<String>,
    #[serde(default)]
    pub error: Option<DocumentFailure>,
}

/// Resolves a document into usable text. An upstream failure is passed
/// through unchanged; present-but-blank text counts as an extraction
/// failure. Whitespace-only output from a PDF reader is the common case.
pub fn resolve_text(document: &DocumentInput) -> Result<&str, DocumentFailure> {
    if let Some(failure) = &document.error {
        return Err(failure.clone());
    }
    usable_text(document.raw_text.as_deref())
}

/// The bare text check, shared with endpoints that accept raw text directly.
pub fn usable_text(raw_text: Option<&str>) -> Result<&str, DocumentFailure> {
    match raw_text {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(DocumentFailure::extraction_failure(
            "could not extract text from file",
        )),
    }
}
