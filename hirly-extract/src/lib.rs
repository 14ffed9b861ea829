//! Resume document text extraction for the Hirly platform backend.
//!
//! Validates that an uploaded resume is a real PDF (extension plus
//! `%PDF-` magic signature) and extracts its embedded plain text.
//! Extraction failures carry the offending path and the underlying
//! I/O or parser cause; the sniff predicate never fails, it only
//! answers yes or no.

pub mod error;
mod extract;

pub use error::{ExtractError, Result};
pub use extract::{extract_resume_text, has_pdf_magic, is_pdf_file, PDF_MAGIC};
