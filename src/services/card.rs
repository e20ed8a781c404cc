//! Card processing service: validation, storage, OCR, extraction, persistence.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::extract;
use crate::models::IdentityCard;
use crate::ocr::{ExtractionError, TextExtractor};
use crate::repository::{CardRepository, DbError};
use crate::storage;
use crate::utils::{validate_upload, ValidationError};

/// Default page size for card listings.
const DEFAULT_LIST_LIMIT: i64 = 100;
/// Upper bound for a single listing request.
const MAX_LIST_LIMIT: i64 = 1000;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error("database error: {0}")]
    Database(#[from] DbError),

    #[error("storage error: {0}")]
    Io(#[from] std::io::Error),
}

/// Orchestrates the upload pipeline and card lookups.
pub struct CardService {
    repo: CardRepository,
    extractor: TextExtractor,
    settings: Arc<Settings>,
}

impl CardService {
    pub fn new(repo: CardRepository, settings: Arc<Settings>) -> Self {
        let extractor = TextExtractor::new(&settings.tesseract_lang, settings.ocr_dpi);
        Self {
            repo,
            extractor,
            settings,
        }
    }

    /// Process an uploaded PDF: validate, store, extract text, parse fields,
    /// and persist the resulting card record.
    pub async fn process_upload(
        &self,
        filename: &str,
        content: &[u8],
    ) -> Result<IdentityCard, ServiceError> {
        validate_upload(
            filename,
            content,
            self.settings.max_file_size as usize,
            &self.settings.allowed_extension,
        )?;

        let (file_sha256, stored_path) =
            storage::save_upload(&self.settings.upload_dir, filename, content)?;
        debug!(path = %stored_path.display(), "stored upload");

        // Subprocess OCR is blocking; keep it off the async runtime
        let extractor = self.extractor.clone();
        let ocr_path = stored_path.clone();
        let extraction = tokio::task::spawn_blocking(move || {
            extractor.extract(&ocr_path, "application/pdf")
        })
        .await
        .map_err(std::io::Error::other)??;
        info!(
            filename,
            method = ?extraction.method,
            pages = ?extraction.page_count,
            chars = extraction.text.len(),
            "text extraction complete"
        );

        let fields = extract::extract_all(&extraction.text);
        if fields.aadhaar_number.is_none() && fields.pan_number.is_none() {
            warn!(filename, "no card number recognized in extracted text");
        }

        let card = IdentityCard::new(
            filename.to_string(),
            file_sha256,
            fields,
            extraction.text,
        );
        self.repo.save(&card).await?;
        info!(card_id = %card.id, card_type = %card.card_type.as_str(), "card saved");

        Ok(card)
    }

    /// Look up a card by ID.
    pub async fn get(&self, id: &str) -> Result<Option<IdentityCard>, ServiceError> {
        Ok(self.repo.get(id).await?)
    }

    /// List stored cards, newest first. `limit` is clamped to a sane range.
    pub async fn list(&self, skip: i64, limit: Option<i64>) -> Result<Vec<IdentityCard>, ServiceError> {
        let limit = limit.unwrap_or(DEFAULT_LIST_LIMIT).clamp(1, MAX_LIST_LIMIT);
        let skip = skip.max(0);
        Ok(self.repo.list(limit, skip).await?)
    }

    /// Number of cards stored.
    pub async fn count(&self) -> Result<i64, ServiceError> {
        Ok(self.repo.count().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::DbContext;
    use tempfile::tempdir;

    async fn setup(dir: &std::path::Path) -> CardService {
        let settings = Settings::with_data_dir(dir.to_path_buf());
        settings.ensure_directories().unwrap();
        let ctx = DbContext::from_sqlite_path(&dir.join("test.db"));
        ctx.init_schema().await.unwrap();
        CardService::new(ctx.cards(), Arc::new(settings))
    }

    #[tokio::test]
    async fn test_upload_rejects_non_pdf() {
        let dir = tempdir().unwrap();
        let svc = setup(dir.path()).await;

        let err = svc.process_upload("card.txt", b"hello").await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let dir = tempdir().unwrap();
        let svc = setup(dir.path()).await;

        assert!(svc.get("no-such-id").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_empty() {
        let dir = tempdir().unwrap();
        let svc = setup(dir.path()).await;

        assert!(svc.list(0, None).await.unwrap().is_empty());
        assert_eq!(svc.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_list_clamps_limit() {
        let dir = tempdir().unwrap();
        let svc = setup(dir.path()).await;

        // Absurd limits should not error, just clamp
        assert!(svc.list(-5, Some(0)).await.unwrap().is_empty());
        assert!(svc.list(0, Some(1_000_000)).await.unwrap().is_empty());
    }
}
