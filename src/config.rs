//! Configuration management for idscan.
//!
//! Settings come from defaults overlaid with environment variables. A `.env`
//! file is loaded at startup by `main`, so both work the same way.

use std::path::PathBuf;

use crate::repository::context::DbContext;
use crate::repository::pool::DbError;

/// Default database filename inside the data directory.
pub const DEFAULT_DATABASE_FILENAME: &str = "identity_card.db";

/// Subdirectory of the data dir where uploads are stored.
const UPLOADS_SUBDIR: &str = "uploads";

/// Default maximum upload size: 10 MiB.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10_485_760;

/// Default render resolution for pdftoppm.
pub const DEFAULT_OCR_DPI: u32 = 300;

/// Runtime settings for the service.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base data directory.
    pub data_dir: PathBuf,
    /// Database filename (SQLite, relative to data_dir).
    pub database_filename: String,
    /// Database URL override. `mysql://` URLs select the MySQL backend
    /// when built with the `mysql` feature. Set via DATABASE_URL.
    pub database_url: Option<String>,
    /// Directory where uploaded PDFs are stored.
    pub upload_dir: PathBuf,
    /// Maximum accepted upload size in bytes.
    pub max_file_size: u64,
    /// File extension accepted by the upload endpoint (without the dot).
    pub allowed_extension: String,
    /// Tesseract language spec, e.g. "eng+hin".
    pub tesseract_lang: String,
    /// Resolution used when rendering PDF pages for OCR.
    pub ocr_dpi: u32,
}

impl Default for Settings {
    fn default() -> Self {
        // Default to ~/Documents/idscan/ for user data
        // Falls back gracefully: Documents dir -> Home dir -> Current dir
        let data_dir = dirs::document_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("idscan");

        Self {
            upload_dir: data_dir.join(UPLOADS_SUBDIR),
            data_dir,
            database_filename: DEFAULT_DATABASE_FILENAME.to_string(),
            database_url: None,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            allowed_extension: "pdf".to_string(),
            tesseract_lang: "eng+hin".to_string(),
            ocr_dpi: DEFAULT_OCR_DPI,
        }
    }
}

impl Settings {
    /// Create settings with a custom data directory.
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        Self {
            upload_dir: data_dir.join(UPLOADS_SUBDIR),
            data_dir,
            ..Default::default()
        }
    }

    /// Build settings from defaults overlaid with environment variables.
    pub fn from_env() -> Self {
        let mut settings = Self::default();

        if let Ok(dir) = std::env::var("IDSCAN_DATA_DIR") {
            settings = Self::with_data_dir(PathBuf::from(dir));
        }
        if let Ok(url) = std::env::var("DATABASE_URL") {
            if !url.is_empty() {
                settings.database_url = Some(url);
            }
        }
        if let Ok(dir) = std::env::var("UPLOAD_DIR") {
            settings.upload_dir = PathBuf::from(dir);
        }
        if let Ok(size) = std::env::var("MAX_FILE_SIZE") {
            if let Ok(size) = size.parse() {
                settings.max_file_size = size;
            }
        }
        if let Ok(ext) = std::env::var("ALLOWED_EXTENSION") {
            let ext = ext.trim_start_matches('.').to_ascii_lowercase();
            if !ext.is_empty() {
                settings.allowed_extension = ext;
            }
        }
        if let Ok(lang) = std::env::var("TESSERACT_LANG") {
            if !lang.is_empty() {
                settings.tesseract_lang = lang;
            }
        }
        if let Ok(dpi) = std::env::var("OCR_DPI") {
            if let Ok(dpi) = dpi.parse() {
                settings.ocr_dpi = dpi;
            }
        }

        settings
    }

    /// Get the database URL, constructing from path if not explicitly set.
    pub fn database_url(&self) -> String {
        if let Some(ref url) = self.database_url {
            url.clone()
        } else {
            let path = self.data_dir.join(&self.database_filename);
            format!("sqlite:{}", path.display())
        }
    }

    /// Create a database context for this configuration.
    pub fn create_db_context(&self) -> Result<DbContext, DbError> {
        DbContext::from_url(&self.database_url())
    }

    /// Create the data and upload directories if missing.
    pub fn ensure_directories(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.data_dir)?;
        std::fs::create_dir_all(&self.upload_dir)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.database_filename, "identity_card.db");
        assert_eq!(settings.max_file_size, 10_485_760);
        assert_eq!(settings.allowed_extension, "pdf");
        assert_eq!(settings.tesseract_lang, "eng+hin");
        assert_eq!(settings.ocr_dpi, 300);
        assert!(settings.upload_dir.ends_with("uploads"));
    }

    #[test]
    fn test_with_data_dir() {
        let settings = Settings::with_data_dir(PathBuf::from("/srv/idscan"));
        assert_eq!(settings.data_dir, PathBuf::from("/srv/idscan"));
        assert_eq!(settings.upload_dir, PathBuf::from("/srv/idscan/uploads"));
    }

    #[test]
    fn test_database_url_from_path() {
        let settings = Settings::with_data_dir(PathBuf::from("/srv/idscan"));
        assert_eq!(
            settings.database_url(),
            "sqlite:/srv/idscan/identity_card.db"
        );
    }

    #[test]
    fn test_database_url_override() {
        let mut settings = Settings::with_data_dir(PathBuf::from("/srv/idscan"));
        settings.database_url = Some("mysql://root@localhost/identity_card_db".to_string());
        assert_eq!(
            settings.database_url(),
            "mysql://root@localhost/identity_card_db"
        );
    }
}
