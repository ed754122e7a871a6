// --- File: crates/armin_common/src/models.rs ---

// Data structures shared between the HTTP layer and the storage layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A contact-form submission as accepted by the service.
///
/// `id` and `created_at` are always assigned server-side; the record is never
/// modified after it has been created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ContactInquiry {
    /// Server-assigned unique identifier (UUID v4)
    pub id: String,

    pub name: String,

    pub email: String,

    #[serde(default)]
    pub phone: Option<String>,

    /// The service the visitor is interested in
    pub service: String,

    pub message: String,

    /// Submission time, UTC
    pub created_at: DateTime<Utc>,
}

impl ContactInquiry {
    /// Create a new inquiry from already validated submission fields.
    ///
    /// Assigns a fresh identifier and the current UTC time.
    pub fn new(
        name: String,
        email: String,
        phone: Option<String>,
        service: String,
        message: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            phone,
            service,
            message,
            created_at: Utc::now(),
        }
    }
}

/// Body of `GET /api/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RootMessage {
    pub message: String,
}
