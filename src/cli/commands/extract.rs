//! One-off local extraction command.

use std::path::Path;

use console::style;

use crate::config::Settings;
use crate::extract;
use crate::models::{ExtractedFields, IdentityCard};
use crate::ocr::TextExtractor;
use crate::storage;

/// Extract fields from a local card file and print them.
///
/// Runs the extractor directly on the input, so image scans work as well
/// as PDFs. Nothing touches the data directory unless `--save` is given;
/// with it, the file is copied into upload storage and a card record is
/// written.
pub async fn cmd_extract(settings: &Settings, file: &Path, save: bool) -> anyhow::Result<()> {
    let content = std::fs::read(file)?;
    let mime = detect_mime(&content);

    println!(
        "{} Processing {} ({})...",
        style("→").cyan(),
        file.display(),
        mime
    );

    let extractor = TextExtractor::new(&settings.tesseract_lang, settings.ocr_dpi);
    let extraction = extractor.extract(file, mime)?;
    let fields = extract::extract_all(&extraction.text);

    println!(
        "{} Detected card type: {}",
        style("✓").green(),
        style(fields.card_type.as_str()).bold()
    );
    print_fields(&fields);

    if save {
        settings.ensure_directories()?;
        let ctx = settings.create_db_context()?;
        ctx.init_schema().await?;

        let filename = file
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload.pdf");
        let (file_sha256, _) = storage::save_upload(&settings.upload_dir, filename, &content)?;
        let card = IdentityCard::new(filename.to_string(), file_sha256, fields, extraction.text);
        ctx.cards().save(&card).await?;
        println!("{} Saved as {}", style("✓").green(), card.id);
    } else {
        println!("  (not saved; use --save to keep the record)");
    }

    Ok(())
}

/// Sniff the MIME type from file content.
///
/// The fallback type is one the extractor rejects, so unrecognized files
/// fail with a clear unsupported-type error rather than a tool error.
fn detect_mime(content: &[u8]) -> &'static str {
    infer::get(content)
        .map(|kind| kind.mime_type())
        .unwrap_or("application/octet-stream")
}

fn print_fields(fields: &ExtractedFields) {
    print_field("Name", &fields.name);
    print_field("Aadhaar", &fields.aadhaar_number);
    print_field("PAN", &fields.pan_number);
    print_field("Email", &fields.email);
    print_field("Contact", &fields.contact);
    print_field("Pincode", &fields.pincode);
}

fn print_field(label: &str, value: &Option<String>) {
    match value {
        Some(v) => println!("  {:>8}: {}", label, v),
        None => println!("  {:>8}: {}", label, style("-").dim()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_detect_mime() {
        assert_eq!(detect_mime(b"%PDF-1.4 body"), "application/pdf");
        assert_eq!(detect_mime(b"\x89PNG\r\n\x1a\nimage data"), "image/png");
        assert_eq!(detect_mime(b"plain text"), "application/octet-stream");
    }

    #[tokio::test]
    async fn test_extract_without_save_writes_nothing() {
        let dir = tempdir().unwrap();
        let settings = Settings::with_data_dir(dir.path().join("data"));

        let input = dir.path().join("note.txt");
        std::fs::write(&input, "plain text, not a document").unwrap();

        let result = cmd_extract(&settings, &input, false).await;
        assert!(result.is_err());
        // No database or upload directory was created
        assert!(!settings.data_dir.exists());
    }
}
