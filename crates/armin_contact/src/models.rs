use armin_common::models::ContactInquiry;
use serde::{Deserialize, Serialize};

/// A contact-form submission as sent by the website.
///
/// Missing string fields deserialize as empty so validation can report them
/// alongside every other failing field. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ContactInquiryCreate {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub message: String,
}

impl From<ContactInquiryCreate> for ContactInquiry {
    /// Assigns a fresh id and the current UTC time to a validated submission.
    fn from(create: ContactInquiryCreate) -> Self {
        ContactInquiry::new(
            create.name,
            create.email,
            create.phone,
            create.service,
            create.message,
        )
    }
}
