//! Validation of contact-form submissions.

use armin_common::{schema_validation_error, ArminError, FieldError};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::ContactInquiryCreate;

const MAX_EMAIL_LEN: usize = 254;
const MAX_LOCAL_PART_LEN: usize = 64;

// Dot-atom local part, dotted domain of hostname labels ending in an
// alphabetic TLD.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@([A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,63}$",
    )
    .expect("email pattern compiles")
});

/// Check an address against standard email syntax.
pub fn is_valid_email(email: &str) -> bool {
    if email.len() > MAX_EMAIL_LEN {
        return false;
    }
    match email.rsplit_once('@') {
        Some((local, _)) if local.len() <= MAX_LOCAL_PART_LEN => EMAIL_RE.is_match(email),
        _ => false,
    }
}

/// Validate a submission.
///
/// Every failing field is reported in one `SchemaValidation` error. On success
/// the submission is returned with a blank `phone` normalised to `None`.
pub fn validate(mut create: ContactInquiryCreate) -> Result<ContactInquiryCreate, ArminError> {
    let mut details = Vec::new();

    require(&mut details, "name", &create.name);
    if create.email.trim().is_empty() {
        details.push(FieldError::new("email", "field required"));
    } else if !is_valid_email(&create.email) {
        details.push(FieldError::new(
            "email",
            "value is not a valid email address",
        ));
    }
    require(&mut details, "service", &create.service);
    require(&mut details, "message", &create.message);

    if !details.is_empty() {
        return Err(schema_validation_error(
            "Invalid contact inquiry",
            details,
        ));
    }

    create.phone = create.phone.filter(|p| !p.trim().is_empty());
    Ok(create)
}

fn require(details: &mut Vec<FieldError>, field: &str, value: &str) {
    if value.trim().is_empty() {
        details.push(FieldError::new(field, "field required"));
    }
}
