//! External tool availability checks.

/// Check if a binary is available in PATH.
pub fn check_binary(name: &str) -> bool {
    which::which(name).is_ok()
}

/// Human-readable hint about OCR tool availability.
pub fn availability_hint() -> String {
    if !check_binary("tesseract") {
        "Tesseract not installed. Install with: apt install tesseract-ocr tesseract-ocr-hin"
            .to_string()
    } else if !check_binary("pdftoppm") {
        "pdftoppm not installed. Install with: apt install poppler-utils".to_string()
    } else {
        "OCR tools are available".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_binary_missing() {
        assert!(!check_binary("definitely-not-a-real-binary-xyz"));
    }
}
