//! Factory for creating contact inquiry repositories

use crate::repositories::contact_inquiry_sql::SqlContactInquiryRepository;
use crate::{DbClient, RepositoryFactory};

/// Factory for creating contact inquiry repositories
#[derive(Debug, Clone)]
pub struct ContactInquiryRepositoryFactory;

impl ContactInquiryRepositoryFactory {
    /// Create a new contact inquiry repository factory
    pub fn new() -> Self {
        Self
    }
}

impl Default for ContactInquiryRepositoryFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryFactory<SqlContactInquiryRepository, DbClient> for ContactInquiryRepositoryFactory {
    /// Create a new contact inquiry repository on top of `db_client`
    fn create_repository(&self, db_client: DbClient) -> SqlContactInquiryRepository {
        SqlContactInquiryRepository::new(db_client)
    }
}
