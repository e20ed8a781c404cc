//! Diesel-based identity card repository.
//!
//! Uses diesel-async for an async interface while keeping Diesel's
//! compile-time query checking. Timestamps are stored as RFC 3339 text,
//! which sorts chronologically.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use super::models::{CardRecord, NewCard};
use super::pool::{DbError, DbPool};
use super::{parse_datetime, parse_datetime_opt};
use crate::models::{CardType, IdentityCard};
use crate::schema::identity_cards;
use crate::with_conn;

/// Convert a database record to a domain model.
impl From<CardRecord> for IdentityCard {
    fn from(record: CardRecord) -> Self {
        IdentityCard {
            id: record.id,
            filename: record.filename,
            card_type: CardType::from_str(&record.card_type).unwrap_or(CardType::Unknown),
            name: record.name,
            email: record.email,
            contact: record.contact,
            aadhaar_number: record.aadhaar_number,
            pan_number: record.pan_number,
            address: record.address,
            city: record.city,
            state: record.state,
            pincode: record.pincode,
            raw_text: record.raw_text,
            file_sha256: record.file_sha256,
            created_at: parse_datetime(&record.created_at),
            updated_at: parse_datetime_opt(record.updated_at),
        }
    }
}

/// Identity card repository with compile-time query checking.
#[derive(Clone)]
pub struct CardRepository {
    pool: DbPool,
}

impl CardRepository {
    /// Create a new card repository with an existing pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a card by ID.
    pub async fn get(&self, id: &str) -> Result<Option<IdentityCard>, DbError> {
        with_conn!(self.pool, conn => {
            identity_cards::table
                .find(id)
                .first::<CardRecord>(&mut conn)
                .await
                .optional()
                .map(|opt| opt.map(IdentityCard::from))
        })
    }

    /// List cards newest-first with pagination.
    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<IdentityCard>, DbError> {
        with_conn!(self.pool, conn => {
            identity_cards::table
                .order(identity_cards::created_at.desc())
                .limit(limit)
                .offset(offset)
                .load::<CardRecord>(&mut conn)
                .await
                .map(|records| records.into_iter().map(IdentityCard::from).collect())
        })
    }

    /// Save a card (insert or update).
    ///
    /// REPLACE INTO is native to both SQLite and MySQL, so no per-backend
    /// split is needed here.
    pub async fn save(&self, card: &IdentityCard) -> Result<(), DbError> {
        let created_at = card.created_at.to_rfc3339();
        let updated_at = card.updated_at.map(|dt| dt.to_rfc3339());

        let record = NewCard {
            id: &card.id,
            filename: &card.filename,
            card_type: card.card_type.as_str(),
            name: card.name.as_deref(),
            email: card.email.as_deref(),
            contact: card.contact.as_deref(),
            aadhaar_number: card.aadhaar_number.as_deref(),
            pan_number: card.pan_number.as_deref(),
            address: card.address.as_deref(),
            city: card.city.as_deref(),
            state: card.state.as_deref(),
            pincode: card.pincode.as_deref(),
            raw_text: card.raw_text.as_deref(),
            file_sha256: &card.file_sha256,
            created_at: &created_at,
            updated_at: updated_at.as_deref(),
        };

        with_conn!(self.pool, conn => {
            diesel::replace_into(identity_cards::table)
                .values(&record)
                .execute(&mut conn)
                .await?;
            Ok(())
        })
    }

    /// Count all stored cards.
    pub async fn count(&self) -> Result<i64, DbError> {
        use diesel::dsl::count_star;

        with_conn!(self.pool, conn => {
            identity_cards::table
                .select(count_star())
                .first(&mut conn)
                .await
        })
    }

    /// Check if a card exists.
    #[allow(dead_code)]
    pub async fn exists(&self, id: &str) -> Result<bool, DbError> {
        use diesel::dsl::count_star;

        with_conn!(self.pool, conn => {
            let count: i64 = identity_cards::table
                .filter(identity_cards::id.eq(id))
                .select(count_star())
                .first(&mut conn)
                .await?;
            Ok(count > 0)
        })
    }

    /// Delete a card.
    #[allow(dead_code)]
    pub async fn delete(&self, id: &str) -> Result<bool, DbError> {
        with_conn!(self.pool, conn => {
            let rows = diesel::delete(identity_cards::table.find(id))
                .execute(&mut conn)
                .await?;
            Ok(rows > 0)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExtractedFields;
    use crate::repository::context::DbContext;
    use tempfile::tempdir;

    async fn setup_test_repo() -> (CardRepository, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");

        let ctx = DbContext::from_sqlite_path(&db_path);
        ctx.init_schema().await.unwrap();

        (ctx.cards(), dir)
    }

    fn sample_card(name: &str) -> IdentityCard {
        let fields = ExtractedFields {
            card_type: CardType::Aadhaar,
            name: Some(name.to_string()),
            aadhaar_number: Some("123456789012".to_string()),
            pincode: Some("560034".to_string()),
            ..Default::default()
        };
        IdentityCard::new(
            "card.pdf".to_string(),
            "deadbeef".to_string(),
            fields,
            "--- Page 1 ---\nAadhaar".to_string(),
        )
    }

    #[tokio::test]
    async fn test_card_crud() {
        let (repo, _dir) = setup_test_repo().await;

        let card = sample_card("Asha Patel");
        repo.save(&card).await.unwrap();

        assert!(repo.exists(&card.id).await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 1);

        let fetched = repo.get(&card.id).await.unwrap().unwrap();
        assert_eq!(fetched.name.as_deref(), Some("Asha Patel"));
        assert_eq!(fetched.card_type, CardType::Aadhaar);
        assert_eq!(fetched.aadhaar_number.as_deref(), Some("123456789012"));
        assert_eq!(fetched.file_sha256, "deadbeef");

        let deleted = repo.delete(&card.id).await.unwrap();
        assert!(deleted);
        assert!(!repo.exists(&card.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_get_missing_card() {
        let (repo, _dir) = setup_test_repo().await;
        assert!(repo.get("no-such-id").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_is_upsert() {
        let (repo, _dir) = setup_test_repo().await;

        let mut card = sample_card("Asha Patel");
        repo.save(&card).await.unwrap();

        card.name = Some("Asha P".to_string());
        card.updated_at = Some(chrono::Utc::now());
        repo.save(&card).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 1);
        let fetched = repo.get(&card.id).await.unwrap().unwrap();
        assert_eq!(fetched.name.as_deref(), Some("Asha P"));
        assert!(fetched.updated_at.is_some());
    }

    #[tokio::test]
    async fn test_list_pagination_newest_first() {
        let (repo, _dir) = setup_test_repo().await;

        let mut older = sample_card("First");
        older.created_at = chrono::Utc::now() - chrono::Duration::hours(1);
        repo.save(&older).await.unwrap();

        let newer = sample_card("Second");
        repo.save(&newer).await.unwrap();

        let all = repo.list(100, 0).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name.as_deref(), Some("Second"));
        assert_eq!(all[1].name.as_deref(), Some("First"));

        let page = repo.list(1, 1).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].name.as_deref(), Some("First"));
    }
}
