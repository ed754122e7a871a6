//! SQL implementation of the contact inquiry repository
//!
//! Each inquiry is stored as a JSON document next to its `id`. A surrogate
//! `seq` column records insertion order and is never exposed.

use crate::client::DbBackend;
use crate::error::DbError;
use crate::repositories::contact_inquiry::{ContactInquiry, ContactInquiryRepository};
use crate::DbClient;
use sqlx::Row;
use tracing::{debug, error, info};

/// SQL implementation of the contact inquiry repository
#[derive(Debug, Clone)]
pub struct SqlContactInquiryRepository {
    db_client: DbClient,
}

impl SqlContactInquiryRepository {
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }

    fn schema(&self) -> &'static str {
        match self.db_client.backend() {
            DbBackend::Sqlite => {
                r#"
                CREATE TABLE IF NOT EXISTS contact_inquiries (
                    seq INTEGER PRIMARY KEY AUTOINCREMENT,
                    id TEXT NOT NULL UNIQUE,
                    document TEXT NOT NULL
                )
                "#
            }
            DbBackend::Postgres => {
                r#"
                CREATE TABLE IF NOT EXISTS contact_inquiries (
                    seq BIGSERIAL PRIMARY KEY,
                    id TEXT NOT NULL UNIQUE,
                    document TEXT NOT NULL
                )
                "#
            }
            DbBackend::MySql => {
                r#"
                CREATE TABLE IF NOT EXISTS contact_inquiries (
                    seq BIGINT AUTO_INCREMENT PRIMARY KEY,
                    id VARCHAR(64) NOT NULL UNIQUE,
                    document TEXT NOT NULL
                )
                "#
            }
        }
    }

    fn insert_statement(&self) -> &'static str {
        match self.db_client.backend() {
            DbBackend::MySql => "INSERT INTO contact_inquiries (id, document) VALUES (?, ?)",
            _ => "INSERT INTO contact_inquiries (id, document) VALUES ($1, $2)",
        }
    }
}

impl ContactInquiryRepository for SqlContactInquiryRepository {
    async fn init_schema(&self) -> Result<(), DbError> {
        debug!("Initializing contact inquiry schema");

        self.db_client.execute(self.schema()).await?;

        info!("Contact inquiry schema initialized successfully");
        Ok(())
    }

    async fn insert(&self, inquiry: &ContactInquiry) -> Result<(), DbError> {
        debug!("Storing contact inquiry: {}", inquiry.id);

        let document = serde_json::to_string(inquiry)?;

        sqlx::query(self.insert_statement())
            .bind(inquiry.id.clone())
            .bind(document)
            .execute(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to store contact inquiry {}: {}", inquiry.id, e);
                DbError::QueryError(e.to_string())
            })?;

        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<ContactInquiry>, DbError> {
        debug!("Listing contact inquiries");

        let rows = sqlx::query("SELECT document FROM contact_inquiries ORDER BY seq")
            .fetch_all(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to list contact inquiries: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        rows.iter()
            .map(|row| {
                let document: String = row.try_get("document")?;
                serde_json::from_str(&document).map_err(|e| {
                    error!("Stored contact inquiry is not a valid document: {}", e);
                    DbError::DocumentError(e)
                })
            })
            .collect()
    }
}
