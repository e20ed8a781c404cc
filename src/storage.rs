//! Storage helpers for uploaded card files on disk.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

/// Compute the SHA-256 hash of content as lowercase hex.
pub fn compute_sha256(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hex::encode(hasher.finalize())
}

/// Sanitize a filename stem for on-disk storage.
///
/// Keeps alphanumerics, dashes and underscores; everything else becomes
/// an underscore. Truncated to keep paths reasonable.
pub fn sanitize_filename(name: &str) -> String {
    let sanitized: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    sanitized.chars().take(64).collect()
}

/// Construct the storage path for uploaded content.
///
/// Uses a two-level directory structure based on hash prefix for
/// filesystem efficiency:
/// `{upload_dir}/{hash[0..2]}/{sanitized-stem}-{hash[0..8]}.pdf`
pub fn upload_storage_path(upload_dir: &Path, content_hash: &str, original_filename: &str) -> PathBuf {
    let stem = Path::new(original_filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("upload");

    let filename = format!("{}-{}.pdf", sanitize_filename(stem), &content_hash[..8]);
    upload_dir.join(&content_hash[..2]).join(filename)
}

/// Save uploaded content to disk.
///
/// Returns the content hash and the path where the bytes were written.
/// Identical content maps to the same path, so re-uploads are idempotent.
pub fn save_upload(
    upload_dir: &Path,
    original_filename: &str,
    content: &[u8],
) -> std::io::Result<(String, PathBuf)> {
    let content_hash = compute_sha256(content);
    let path = upload_storage_path(upload_dir, &content_hash, original_filename);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, content)?;

    Ok((content_hash, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_compute_sha256() {
        let hash = compute_sha256(b"Hello, World!");
        assert_eq!(hash.len(), 64);
        assert_eq!(
            hash,
            "dffd6021bb2bd5b0af676290809ec3a53191dd81c7f70a4b28688a362182986f"
        );
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("aadhaar card (1)"), "aadhaar_card__1_");
        assert_eq!(sanitize_filename("scan-2024_01"), "scan-2024_01");
    }

    #[test]
    fn test_upload_storage_path() {
        let hash = "abcdef1234567890abcdef1234567890";
        let path = upload_storage_path(Path::new("/uploads"), hash, "my card.pdf");
        assert_eq!(path, PathBuf::from("/uploads/ab/my_card-abcdef12.pdf"));
    }

    #[test]
    fn test_save_upload_round_trip() {
        let dir = tempdir().unwrap();
        let content = b"%PDF-1.4 test";

        let (hash, path) = save_upload(dir.path(), "card.pdf", content).unwrap();

        assert!(path.exists());
        assert_eq!(std::fs::read(&path).unwrap(), content);
        assert_eq!(hash, compute_sha256(content));

        // Same content lands on the same path
        let (_, path2) = save_upload(dir.path(), "card.pdf", content).unwrap();
        assert_eq!(path, path2);
    }
}
