#![allow(dead_code)]
use utoipa::OpenApi;

use crate::models::{Project, Testimonial};

#[utoipa::path(
    get,
    path = "/projects",
    responses(
        (status = 200, description = "Project portfolio in display order", body = [Project],
         example = json!([{
             "id": "1",
             "title": "Girkin Offices",
             "category": "Refurbishing",
             "description": "Complete office refurbishment with modern fit-out and interior design",
             "image_url": "https://images.unsplash.com/photo-1497366216548-37526070297c?crop=entropy&cs=srgb&fm=jpg&q=85&w=800",
             "location": "London, UK",
             "year": "Current"
         }])
        )
    ),
    tag = "Catalog"
)]
fn doc_list_projects_handler() {}

#[utoipa::path(
    get,
    path = "/testimonials",
    responses(
        (status = 200, description = "Client testimonials in display order", body = [Testimonial])
    ),
    tag = "Catalog"
)]
fn doc_list_testimonials_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(doc_list_projects_handler, doc_list_testimonials_handler),
    components(schemas(Project, Testimonial)),
    tags(
        (name = "Catalog", description = "Portfolio and testimonials")
    ),
    servers(
        (url = "/api", description = "Armin Shopfitting API server")
    )
)]
pub struct CatalogApiDoc;
