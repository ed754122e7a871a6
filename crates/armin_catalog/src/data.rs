//! The compiled-in portfolio and testimonials.
//!
//! Both lists are built once on first use and never change afterwards.

use once_cell::sync::Lazy;

use crate::models::{Project, Testimonial};

const IMAGE_PARAMS: &str = "crop=entropy&cs=srgb&fm=jpg&q=85&w=800";

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/{}?{}", photo, IMAGE_PARAMS)
}

fn project(
    id: &str,
    title: &str,
    category: &str,
    description: &str,
    photo: &str,
    location: &str,
    year: &str,
) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        image_url: unsplash(photo),
        location: location.to_string(),
        year: year.to_string(),
    }
}

fn testimonial(id: &str, name: &str, company: &str, quote: &str) -> Testimonial {
    Testimonial {
        id: id.to_string(),
        name: name.to_string(),
        company: company.to_string(),
        quote: quote.to_string(),
        rating: 5,
    }
}

static PROJECTS: Lazy<Vec<Project>> = Lazy::new(|| {
    vec![
        project(
            "1",
            "Girkin Offices",
            "Refurbishing",
            "Complete office refurbishment with modern fit-out and interior design",
            "photo-1497366216548-37526070297c",
            "London, UK",
            "Current",
        ),
        project(
            "2",
            "BBC Studios",
            "Construction",
            "Full studio construction and professional fit-out services",
            "photo-1598488035139-bdbb2231ce04",
            "London, UK",
            "Completed",
        ),
        project(
            "3",
            "ASDA Petrol Station Shops",
            "Shopfitting",
            "Retail shopfitting for multiple ASDA petrol station convenience stores",
            "photo-1604719312566-8912e9227c6a",
            "Nationwide, UK",
            "Completed",
        ),
    ]
});

static TESTIMONIALS: Lazy<Vec<Testimonial>> = Lazy::new(|| {
    vec![
        testimonial(
            "1",
            "James Mitchell",
            "Mitchell Retail Group",
            "Armin Shopfitting transformed our retail space beyond expectations. Their attention to detail and professionalism is unmatched.",
        ),
        testimonial(
            "2",
            "Sarah Williams",
            "Williams & Co Properties",
            "From property analysis to final construction, their team delivered exceptional results on time and within budget.",
        ),
        testimonial(
            "3",
            "David Chen",
            "Chen Hospitality",
            "The refurbishment of our hotel lobby was handled with incredible skill. Our guests constantly compliment the new design.",
        ),
    ]
});

/// The portfolio, in display order.
pub fn projects() -> &'static [Project] {
    &PROJECTS
}

/// Client testimonials, in display order.
pub fn testimonials() -> &'static [Testimonial] {
    &TESTIMONIALS
}
