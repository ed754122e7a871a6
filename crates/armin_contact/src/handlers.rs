use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use armin_common::models::ContactInquiry;
use armin_common::{schema_validation_error, ArminError, FieldError};

use crate::logic::{list_inquiries, submit_inquiry, ContactState};
use crate::models::ContactInquiryCreate;

/// `POST /contact`
///
/// Body problems (bad JSON, wrong content type, wrong field types) are
/// reported as 422 like field validation failures. A field of the wrong type
/// is named in the error details.
#[axum::debug_handler]
pub async fn create_inquiry_handler(
    State(state): State<Arc<ContactState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ContactInquiry>, ArminError> {
    let Json(body) = payload.map_err(|rejection| {
        debug!("Rejected contact payload: {}", rejection.body_text());
        schema_validation_error(rejection.body_text(), Vec::new())
    })?;
    let create = parse_submission(body)?;

    let inquiry = submit_inquiry(&state, create).await?;
    Ok(Json(inquiry))
}

fn parse_submission(body: Value) -> Result<ContactInquiryCreate, ArminError> {
    serde_path_to_error::deserialize(body).map_err(|err| {
        debug!("Rejected contact payload: {}", err);
        let field = err.path().to_string();
        let details = if err.path().iter().next().is_some() {
            vec![FieldError::new(field, err.inner().to_string())]
        } else {
            Vec::new()
        };
        schema_validation_error(
            format!("Failed to deserialize the JSON body into the target type: {err}"),
            details,
        )
    })
}

/// `GET /contact`
#[axum::debug_handler]
pub async fn list_inquiries_handler(
    State(state): State<Arc<ContactState>>,
) -> Json<Vec<ContactInquiry>> {
    Json(list_inquiries(&state).await)
}
