//! Text extraction from card files using pdftoppm, Tesseract and pdftotext.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;
use thiserror::Error;

/// Handle command output, extracting stdout on success or returning appropriate error.
fn handle_cmd_output(
    result: std::io::Result<std::process::Output>,
    tool_name: &str,
    error_prefix: &str,
) -> Result<String, ExtractionError> {
    match result {
        Ok(output) => {
            if output.status.success() {
                Ok(String::from_utf8_lossy(&output.stdout).to_string())
            } else {
                let stderr = String::from_utf8_lossy(&output.stderr);
                Err(ExtractionError::ExtractionFailed(format!(
                    "{}: {}",
                    error_prefix, stderr
                )))
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(ExtractionError::ToolNotFound(tool_name.to_string()))
        }
        Err(e) => Err(ExtractionError::Io(e)),
    }
}

/// Errors that can occur during text extraction.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("External tool not found: {0}")]
    ToolNotFound(String),

    #[error("Extraction failed: {0}")]
    ExtractionFailed(String),

    #[error("No text could be extracted from the document")]
    NoText,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of text extraction.
#[derive(Debug)]
pub struct ExtractionResult {
    /// Extracted text, with `--- Page N ---` markers for multi-source joins.
    pub text: String,
    /// Method used for extraction.
    pub method: ExtractionMethod,
    /// Number of pages processed (for PDFs).
    pub page_count: Option<u32>,
}

/// Method used to extract text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionMethod {
    /// Direct text extraction from the PDF text layer.
    PdfToText,
    /// OCR using Tesseract.
    TesseractOcr,
    /// pdftotext with OCR replacing sparse pages.
    Hybrid,
}

/// Text extractor driving the external tools.
#[derive(Clone)]
pub struct TextExtractor {
    /// Tesseract language setting, e.g. "eng+hin".
    lang: String,
    /// Render resolution for pdftoppm.
    dpi: u32,
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self {
            lang: "eng+hin".to_string(),
            dpi: 300,
        }
    }
}

impl TextExtractor {
    pub fn new(lang: &str, dpi: u32) -> Self {
        Self {
            lang: lang.to_string(),
            dpi,
        }
    }

    /// Extract text from a file based on its MIME type.
    pub fn extract(
        &self,
        file_path: &Path,
        mime_type: &str,
    ) -> Result<ExtractionResult, ExtractionError> {
        match mime_type {
            "application/pdf" => self.extract_pdf(file_path),
            "image/png" | "image/jpeg" | "image/tiff" | "image/bmp" => {
                self.extract_image(file_path)
            }
            _ => Err(ExtractionError::UnsupportedFileType(mime_type.to_string())),
        }
    }

    /// OCR an image file directly.
    fn extract_image(&self, file_path: &Path) -> Result<ExtractionResult, ExtractionError> {
        let text = self.run_tesseract(file_path)?;
        if text.trim().is_empty() {
            return Err(ExtractionError::NoText);
        }
        Ok(ExtractionResult {
            text,
            method: ExtractionMethod::TesseractOcr,
            page_count: None,
        })
    }

    /// Extract text from a PDF using per-page analysis.
    ///
    /// Every page is rendered and OCR'd; pdftotext output for the page is
    /// kept instead only when OCR does not beat it by >20% non-whitespace
    /// characters. Card scans rarely have a text layer, so OCR usually wins.
    fn extract_pdf(&self, file_path: &Path) -> Result<ExtractionResult, ExtractionError> {
        if !file_path.exists() {
            return Err(ExtractionError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("file not found: {}", file_path.display()),
            )));
        }

        let page_count = self.pdf_page_count(file_path).unwrap_or(1);

        // Render all pages for OCR
        let temp_dir = TempDir::new()?;
        let temp_path = temp_dir.path();

        let dpi = self.dpi.to_string();
        let pdftoppm_status = Command::new("pdftoppm")
            .args(["-png", "-r", &dpi])
            .arg(file_path)
            .arg(temp_path.join("page"))
            .status();

        let ocr_available = match pdftoppm_status {
            Ok(s) if s.success() => true,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ExtractionError::ToolNotFound(
                    "pdftoppm (install poppler-utils)".to_string(),
                ));
            }
            _ => {
                tracing::debug!("pdftoppm failed, falling back to pdftotext only");
                false
            }
        };

        let mut page_texts: Vec<String> = Vec::with_capacity(page_count as usize);
        let mut used_ocr = false;
        let mut used_pdf_text = false;

        for page_num in 1..=page_count {
            let pdf_text = self
                .extract_pdf_page_text(file_path, page_num)
                .unwrap_or_default();
            let pdf_chars = nonspace_chars(&pdf_text);

            let mut final_text = pdf_text;
            let mut page_used_ocr = false;

            if ocr_available {
                if let Some(img_path) = find_page_image(temp_path, page_num) {
                    match self.run_tesseract(&img_path) {
                        Ok(ocr_text) => {
                            let ocr_chars = nonspace_chars(&ocr_text);
                            // Keep OCR when it has meaningfully more content
                            if ocr_chars > pdf_chars + (pdf_chars / 5) {
                                final_text = ocr_text;
                                page_used_ocr = true;
                            }
                        }
                        Err(ExtractionError::ToolNotFound(tool)) => {
                            return Err(ExtractionError::ToolNotFound(tool));
                        }
                        Err(e) => {
                            tracing::debug!("OCR failed on page {}: {}", page_num, e);
                        }
                    }
                }
            }

            if page_used_ocr {
                used_ocr = true;
            } else if nonspace_chars(&final_text) > 0 {
                used_pdf_text = true;
            }

            let trimmed = final_text.trim();
            if !trimmed.is_empty() {
                page_texts.push(format!("--- Page {} ---\n{}", page_num, trimmed));
            }
        }

        if page_texts.is_empty() {
            return Err(ExtractionError::NoText);
        }

        let method = match (used_ocr, used_pdf_text) {
            (true, true) => ExtractionMethod::Hybrid,
            (true, false) => ExtractionMethod::TesseractOcr,
            _ => ExtractionMethod::PdfToText,
        };

        Ok(ExtractionResult {
            text: page_texts.join("\n\n"),
            method,
            page_count: Some(page_count),
        })
    }

    /// Run Tesseract on an image file.
    fn run_tesseract(&self, image_path: &Path) -> Result<String, ExtractionError> {
        let output = Command::new("tesseract")
            .arg(image_path)
            .arg("stdout")
            .args(["-l", &self.lang])
            .output();

        handle_cmd_output(
            output,
            "tesseract (install tesseract-ocr tesseract-ocr-hin)",
            "tesseract failed",
        )
    }

    /// Run pdftotext on a single page of a PDF file.
    fn extract_pdf_page_text(
        &self,
        file_path: &Path,
        page: u32,
    ) -> Result<String, ExtractionError> {
        let page_str = page.to_string();
        let output = Command::new("pdftotext")
            .args(["-layout", "-enc", "UTF-8", "-f", &page_str, "-l", &page_str])
            .arg(file_path)
            .arg("-") // Output to stdout
            .output();

        handle_cmd_output(
            output,
            "pdftotext (install poppler-utils)",
            "pdftotext failed",
        )
    }

    /// Get the page count of a PDF via pdfinfo.
    fn pdf_page_count(&self, file_path: &Path) -> Option<u32> {
        let output = Command::new("pdfinfo").arg(file_path).output().ok()?;
        if !output.status.success() {
            return None;
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        stdout
            .lines()
            .find_map(|line| line.strip_prefix("Pages:"))
            .and_then(|rest| rest.trim().parse().ok())
    }
}

/// Count non-whitespace characters, the signal for page content comparison.
fn nonspace_chars(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

/// Find the image file for a specific page number.
///
/// pdftoppm names files page-01.png, page-02.png; documents with many
/// pages get more digits (page-001.png).
fn find_page_image(temp_path: &Path, page_num: u32) -> Option<std::path::PathBuf> {
    for digits in [1, 2, 3, 4] {
        let filename = format!("page-{:0width$}.png", page_num, width = digits);
        let path = temp_path.join(&filename);
        if path.exists() {
            return Some(path);
        }
    }
    None
}
