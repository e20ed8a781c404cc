//! OCR and text extraction.
//!
//! Extracts text from identity card files using external tools:
//! - pdftoppm (Poppler) to render PDF pages to images
//! - Tesseract OCR on the rendered pages (and on image files directly)
//! - pdftotext (Poppler) for PDFs that carry an embedded text layer
//!
//! Identity cards are almost always scans, so OCR does the real work;
//! pdftotext output is kept only when it beats OCR on a page.

mod extractor;
mod tools;

pub use extractor::{ExtractionError, ExtractionMethod, ExtractionResult, TextExtractor};
pub use tools::{availability_hint, check_binary};
