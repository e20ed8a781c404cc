//! Upload validation for incoming card files.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("only .{expected} files are allowed, got '{got}'")]
    BadExtension { expected: String, got: String },

    #[error("file content is not a valid {0} document")]
    ContentMismatch(String),

    #[error("file size {got} bytes exceeds the {limit} byte limit")]
    TooLarge { got: usize, limit: usize },

    #[error("uploaded file is empty")]
    Empty,
}

impl ValidationError {
    /// HTTP status code this validation failure maps to.
    pub fn status(&self) -> u16 {
        match self {
            ValidationError::BadExtension { .. } | ValidationError::ContentMismatch(_) => 415,
            ValidationError::TooLarge { .. } => 413,
            ValidationError::Empty => 400,
        }
    }
}

/// Validate an uploaded file before it enters the processing pipeline.
///
/// Checks the filename against the configured extension, the size limit,
/// and the magic bytes. Extension alone is not trusted; content sniffing
/// catches renamed files.
pub fn validate_upload(
    filename: &str,
    content: &[u8],
    max_size: usize,
    allowed_extension: &str,
) -> Result<(), ValidationError> {
    let extension = std::path::Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    if extension.as_deref() != Some(allowed_extension) {
        return Err(ValidationError::BadExtension {
            expected: allowed_extension.to_string(),
            got: filename.to_string(),
        });
    }

    if content.is_empty() {
        return Err(ValidationError::Empty);
    }

    if content.len() > max_size {
        return Err(ValidationError::TooLarge {
            got: content.len(),
            limit: max_size,
        });
    }

    let content_matches = infer::get(content)
        .map(|kind| kind.extension() == allowed_extension)
        .unwrap_or(false);

    if !content_matches {
        return Err(ValidationError::ContentMismatch(
            allowed_extension.to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PDF_MAGIC: &[u8] = b"%PDF-1.4\n%some pdf body";
    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\nrest of image";

    #[test]
    fn test_accepts_valid_pdf() {
        assert!(validate_upload("card.pdf", PDF_MAGIC, 1024, "pdf").is_ok());
        assert!(validate_upload("CARD.PDF", PDF_MAGIC, 1024, "pdf").is_ok());
    }

    #[test]
    fn test_rejects_bad_extension() {
        let err = validate_upload("card.png", PDF_MAGIC, 1024, "pdf").unwrap_err();
        assert!(matches!(err, ValidationError::BadExtension { .. }));
        assert_eq!(err.status(), 415);

        let err = validate_upload("no_extension", PDF_MAGIC, 1024, "pdf").unwrap_err();
        assert!(matches!(err, ValidationError::BadExtension { .. }));
    }

    #[test]
    fn test_rejects_empty_file() {
        let err = validate_upload("card.pdf", b"", 1024, "pdf").unwrap_err();
        assert!(matches!(err, ValidationError::Empty));
        assert_eq!(err.status(), 400);
    }

    #[test]
    fn test_rejects_oversized_file() {
        let err = validate_upload("card.pdf", PDF_MAGIC, 4, "pdf").unwrap_err();
        assert!(matches!(err, ValidationError::TooLarge { .. }));
        assert_eq!(err.status(), 413);
    }

    #[test]
    fn test_rejects_renamed_non_pdf() {
        // PNG magic bytes with a .pdf name
        let err = validate_upload("card.pdf", PNG_MAGIC, 1024, "pdf").unwrap_err();
        assert!(matches!(err, ValidationError::ContentMismatch(_)));
        assert_eq!(err.status(), 415);
    }

    #[test]
    fn test_allowed_extension_is_configurable() {
        assert!(validate_upload("scan.png", PNG_MAGIC, 1024, "png").is_ok());

        let err = validate_upload("card.pdf", PDF_MAGIC, 1024, "png").unwrap_err();
        assert!(matches!(err, ValidationError::BadExtension { .. }));

        // Extension matches but content does not
        let err = validate_upload("scan.png", PDF_MAGIC, 1024, "png").unwrap_err();
        assert!(matches!(err, ValidationError::ContentMismatch(_)));
    }
}
