#![allow(dead_code)]
use utoipa::OpenApi;

use armin_common::models::ContactInquiry;

use crate::models::ContactInquiryCreate;

#[utoipa::path(
    post,
    path = "/contact",
    request_body(content = ContactInquiryCreate, example = json!({
        "name": "Test User",
        "email": "test@example.com",
        "phone": "+44 123 456 7890",
        "service": "Property Analysis",
        "message": "Hello"
    })),
    responses(
        (status = 200, description = "Inquiry accepted", body = ContactInquiry,
         example = json!({
             "id": "0b6f4c1e-2f57-4a43-9c55-0d3f0f2f7a9e",
             "name": "Test User",
             "email": "test@example.com",
             "phone": "+44 123 456 7890",
             "service": "Property Analysis",
             "message": "Hello",
             "created_at": "2025-01-01T12:00:00Z"
         })
        ),
        (status = 422, description = "Invalid submission",
         example = json!({
             "error": {
                 "message": "Invalid contact inquiry",
                 "code": 422,
                 "details": [
                     {"field": "name", "message": "field required"},
                     {"field": "email", "message": "value is not a valid email address"}
                 ]
             }
         })
        )
    ),
    tag = "Contact"
)]
fn doc_create_inquiry_handler() {}

#[utoipa::path(
    get,
    path = "/contact",
    responses(
        (status = 200, description = "Stored inquiries in submission order; only served when persistence is enabled", body = [ContactInquiry])
    ),
    tag = "Contact"
)]
fn doc_list_inquiries_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(doc_create_inquiry_handler, doc_list_inquiries_handler),
    components(schemas(ContactInquiryCreate, ContactInquiry)),
    tags(
        (name = "Contact", description = "Contact form intake")
    ),
    servers(
        (url = "/api", description = "Armin Shopfitting API server")
    )
)]
pub struct ContactApiDoc;
