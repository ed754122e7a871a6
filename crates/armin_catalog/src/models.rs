use serde::{Deserialize, Serialize};

/// A completed or ongoing job shown in the portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Project {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub image_url: String,
    pub location: String,
    /// Free text: a year, "Current" or "Completed"
    pub year: String,
}

/// A client quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub company: String,
    pub quote: String,
    /// Star rating, 5 when absent
    #[serde(default = "default_rating")]
    pub rating: u8,
}

fn default_rating() -> u8 {
    5
}
