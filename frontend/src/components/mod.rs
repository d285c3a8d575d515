pub mod about;
pub mod contact;
pub mod fallback_image;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod product_card;
pub mod product_category;
pub mod products;
pub mod section_heading;
pub mod vision;

/// Serif display face used for headings across the page.
pub const DISPLAY_FONT_STYLE: &str = "font-family: 'Playfair Display', Georgia, serif";
