use std::path::Path;

use tokio::fs;
use tokio::io::AsyncReadExt;

use crate::error::{ExtractError, Result};

/// PDF magic signature: `%PDF-`
pub const PDF_MAGIC: &[u8; 5] = b"%PDF-";

/// Extract the plain-text content of a resume PDF.
///
/// Reads the whole file into memory, hands the bytes to the PDF parser,
/// and returns the parser's output verbatim, with no trimming or
/// normalization. Any read or parse failure is wrapped once with the
/// offending path, logged, and returned; there is no retry and no
/// fallback parser.
pub async fn extract_resume_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();

    match read_and_parse(path).await {
        Ok(text) => Ok(text),
        Err(source) => {
            let err = ExtractError::new(path, source);
            tracing::error!(
                path = %path.display(),
                error = %err,
                cause = ?err.source,
                "PDF text extraction failed"
            );
            Err(err)
        }
    }
}

async fn read_and_parse(
    path: &Path,
) -> std::result::Result<String, Box<dyn std::error::Error + Send + Sync>> {
    let bytes = fs::read(path).await?;
    let text = pdf_extract::extract_text_from_mem(&bytes)?;
    Ok(text)
}

/// Best-effort check that a path points to a readable PDF file.
///
/// Checks, in order: the `.pdf` extension (ASCII case-insensitive), that
/// the path is a regular file, and that its first 5 bytes match the
/// `%PDF-` signature. Every failure at any step, including I/O errors,
/// degrades to `false`; this is a gating predicate, not a diagnostic.
pub async fn is_pdf_file(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();

    let name_matches = path
        .file_name()
        .map(|name| name.to_string_lossy().to_ascii_lowercase().ends_with(".pdf"))
        .unwrap_or(false);
    if !name_matches {
        return false;
    }

    match fs::metadata(path).await {
        Ok(meta) if meta.is_file() => {}
        _ => return false,
    }

    let mut file = match fs::File::open(path).await {
        Ok(file) => file,
        Err(_) => return false,
    };

    // The handle is scope-bound and released on every exit path below.
    let mut magic = [0u8; 5];
    if file.read_exact(&mut magic).await.is_err() {
        return false;
    }

    has_pdf_magic(&magic)
}

/// Whether `bytes` begin with the `%PDF-` signature.
pub fn has_pdf_magic(bytes: &[u8]) -> bool {
    bytes.len() >= PDF_MAGIC.len() && &bytes[..PDF_MAGIC.len()] == PDF_MAGIC
}
