use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// `id` attributes of the page sections. Nav links point at these.
pub mod section_ids {
    pub const HERO: &str = "hero";
    pub const ABOUT: &str = "about";
    pub const PRODUCTS: &str = "products";
    pub const VISION: &str = "vision";
    pub const CONTACT: &str = "contact";

    pub const ALL: [&str; 5] = [HERO, ABOUT, PRODUCTS, VISION, CONTACT];

    pub fn anchor(id: &str) -> String {
        format!("#{}", id)
    }
}

const WHATSAPP_PLACEHOLDER: &str = "+62 xxx xxxx";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    /// In-page fragment (`#about`) or absolute URL
    pub href: String,
}

impl NavLink {
    pub fn to_section(label: &str, section_id: &str) -> Self {
        Self {
            label: label.to_string(),
            href: section_ids::anchor(section_id),
        }
    }

    /// Section id this link jumps to, if it is an in-page link.
    pub fn fragment(&self) -> Option<&str> {
        self.href.strip_prefix('#')
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Display name, also the render key within its category
    pub name: String,
    /// File name under `assets/`
    pub image: String,
    /// Glyph shown when the image cannot be loaded
    pub emoji: String,
}

impl Product {
    pub fn new(name: &str, image: &str, emoji: &str) -> Self {
        Self {
            name: name.to_string(),
            image: image.to_string(),
            emoji: emoji.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCategory {
    pub icon: String,
    pub label: String,
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisionCard {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub title_class: String,
    pub icon_bg_class: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactEntry {
    pub icon: String,
    pub label: String,
    pub value: String,
    /// When set the whole item renders as a link
    pub href: Option<String>,
}

impl ContactEntry {
    pub fn email(address: &str) -> Self {
        Self {
            icon: "✉️".to_string(),
            label: "Email".to_string(),
            value: address.to_string(),
            href: Some(format!("mailto:{}", address)),
        }
    }

    /// Without a number the entry keeps its placeholder and stays unlinked.
    pub fn whatsapp(number: Option<&str>) -> Self {
        let number = number.map(str::trim).filter(|n| !n.is_empty());
        let (value, href) = match number {
            Some(number) => {
                let digits: String = number.chars().filter(char::is_ascii_digit).collect();
                (number.to_string(), Some(format!("https://wa.me/{}", digits)))
            }
            None => (WHATSAPP_PLACEHOLDER.to_string(), None),
        };
        Self {
            icon: "💬".to_string(),
            label: "WhatsApp".to_string(),
            value,
            href,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub short_name: String,
    pub legal_name: String,
    pub logo: String,
    /// Text shown in place of the logo when it fails to load
    pub logo_fallback: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub brand: Brand,
    pub nav_links: Vec<NavLink>,
    pub categories: Vec<ProductCategory>,
    pub vision_cards: Vec<VisionCard>,
    pub contacts: Vec<ContactEntry>,
}

#[derive(Debug, Error, PartialEq)]
pub enum ContentError {
    #[error("product '{product}' in '{category}' has no fallback glyph")]
    MissingFallbackGlyph { category: String, product: String },
    #[error("product '{product}' appears more than once in '{category}'")]
    DuplicateProduct { category: String, product: String },
    #[error("nav link '{label}' points at unknown section '{href}'")]
    UnknownSection { label: String, href: String },
    #[error("contact '{label}' has an empty link")]
    EmptyContactLink { label: String },
}

impl Default for SiteContent {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SiteContent {
    /// The content shipped with the site.
    pub fn builtin() -> Self {
        Self {
            brand: Brand {
                short_name: "PT ARCH".to_string(),
                legal_name: "PT Archinus Uniex Noer".to_string(),
                logo: "logo.png".to_string(),
                logo_fallback: "PT".to_string(),
            },
            nav_links: vec![
                NavLink::to_section("About", section_ids::ABOUT),
                NavLink::to_section("Products", section_ids::PRODUCTS),
                NavLink::to_section("Vision & Mission", section_ids::VISION),
                NavLink::to_section("Contact", section_ids::CONTACT),
            ],
            categories: vec![
                ProductCategory {
                    icon: "🌾".to_string(),
                    label: "Agriculture".to_string(),
                    products: vec![
                        Product::new("Moringa", "moringa.jpg", "🌿"),
                        Product::new("Banana Leaves", "daun-pisang-panjang.jpg", "🍌"),
                        Product::new("Papaya Leaves", "papaya-leaves.jpg", "🌱"),
                        Product::new("Indonesian Spices", "cengkeh.jpeg", "🌶️"),
                    ],
                },
                ProductCategory {
                    icon: "🌊".to_string(),
                    label: "Marine".to_string(),
                    products: vec![
                        Product::new("Baby Octopus", "baby-octopus.jpg", "🐙"),
                        Product::new("Babylon Snail", "keong.jpg", "🐚"),
                    ],
                },
            ],
            vision_cards: vec![
                VisionCard {
                    icon: "🌍".to_string(),
                    title: "Vision".to_string(),
                    description: "To become a trusted global supplier from Indonesia.".to_string(),
                    title_class: "text-emerald-300".to_string(),
                    icon_bg_class: "bg-emerald-400/20".to_string(),
                },
                VisionCard {
                    icon: "🤝".to_string(),
                    title: "Mission".to_string(),
                    description:
                        "Deliver quality products sustainably and build long-term partnerships."
                            .to_string(),
                    title_class: "text-teal-300".to_string(),
                    icon_bg_class: "bg-teal-400/20".to_string(),
                },
            ],
            contacts: vec![
                ContactEntry::email("contact@example.com"),
                ContactEntry::whatsapp(None),
            ],
        }
    }

    /// Builtin content with the WhatsApp number taken from `PTARCH_WHATSAPP`
    /// at compile time.
    pub fn compiled() -> Self {
        Self::builtin().with_whatsapp(option_env!("PTARCH_WHATSAPP"))
    }

    pub fn with_whatsapp(mut self, number: Option<&str>) -> Self {
        let entry = ContactEntry::whatsapp(number);
        match self.contacts.iter_mut().find(|c| c.label == entry.label) {
            Some(existing) => *existing = entry,
            None => self.contacts.push(entry),
        }
        self
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        for category in &self.categories {
            let mut seen = HashSet::new();
            for product in &category.products {
                if product.emoji.trim().is_empty() {
                    return Err(ContentError::MissingFallbackGlyph {
                        category: category.label.clone(),
                        product: product.name.clone(),
                    });
                }
                if !seen.insert(product.name.as_str()) {
                    return Err(ContentError::DuplicateProduct {
                        category: category.label.clone(),
                        product: product.name.clone(),
                    });
                }
            }
        }

        for link in &self.nav_links {
            if let Some(fragment) = link.fragment() {
                if !section_ids::ALL.contains(&fragment) {
                    return Err(ContentError::UnknownSection {
                        label: link.label.clone(),
                        href: link.href.clone(),
                    });
                }
            }
        }

        if let Some(contact) = self
            .contacts
            .iter()
            .find(|c| matches!(&c.href, Some(href) if href.trim().is_empty()))
        {
            return Err(ContentError::EmptyContactLink {
                label: contact.label.clone(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(category: &ProductCategory) -> Vec<&str> {
        category.products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_builtin_categories_in_order() {
        let content = SiteContent::builtin();
        assert_eq!(content.categories.len(), 2);

        let agriculture = &content.categories[0];
        assert_eq!(agriculture.label, "Agriculture");
        assert_eq!(
            names(agriculture),
            vec!["Moringa", "Banana Leaves", "Papaya Leaves", "Indonesian Spices"]
        );

        let marine = &content.categories[1];
        assert_eq!(marine.label, "Marine");
        assert_eq!(names(marine), vec!["Baby Octopus", "Babylon Snail"]);
    }

    #[test]
    fn test_builtin_content_is_valid() {
        assert_eq!(SiteContent::builtin().validate(), Ok(()));
    }

    #[test]
    fn test_nav_links_target_known_sections() {
        let content = SiteContent::builtin();
        let fragments: Vec<_> = content.nav_links.iter().filter_map(NavLink::fragment).collect();
        assert_eq!(fragments, vec!["about", "products", "vision", "contact"]);
    }

    #[test]
    fn test_validate_rejects_missing_glyph() {
        let mut content = SiteContent::builtin();
        content.categories[1].products[0].emoji = " ".to_string();
        assert_eq!(
            content.validate(),
            Err(ContentError::MissingFallbackGlyph {
                category: "Marine".to_string(),
                product: "Baby Octopus".to_string(),
            })
        );
    }

    #[test]
    fn test_validate_rejects_duplicate_names() {
        let mut content = SiteContent::builtin();
        let copy = content.categories[0].products[0].clone();
        content.categories[0].products.push(copy);
        assert!(matches!(
            content.validate(),
            Err(ContentError::DuplicateProduct { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_unknown_anchor() {
        let mut content = SiteContent::builtin();
        content.nav_links.push(NavLink::to_section("Team", "team"));
        assert!(matches!(
            content.validate(),
            Err(ContentError::UnknownSection { .. })
        ));

        let mut content = SiteContent::builtin();
        content.nav_links.push(NavLink {
            label: "Blog".to_string(),
            href: "https://example.com/blog".to_string(),
        });
        assert_eq!(content.validate(), Ok(()));
    }

    #[test]
    fn test_whatsapp_placeholder_has_no_link() {
        let entry = ContactEntry::whatsapp(None);
        assert_eq!(entry.value, "+62 xxx xxxx");
        assert_eq!(entry.href, None);
        assert_eq!(ContactEntry::whatsapp(Some("  ")).href, None);
    }

    #[test]
    fn test_whatsapp_number_becomes_link() {
        let content = SiteContent::builtin().with_whatsapp(Some("+62 812-3456-7890"));
        let entry = content.contacts.iter().find(|c| c.label == "WhatsApp").unwrap();
        assert_eq!(entry.value, "+62 812-3456-7890");
        assert_eq!(entry.href.as_deref(), Some("https://wa.me/6281234567890"));
        assert_eq!(content.contacts.len(), 2);
    }

    #[test]
    fn test_email_is_mailto() {
        let entry = ContactEntry::email("contact@example.com");
        assert_eq!(entry.href.as_deref(), Some("mailto:contact@example.com"));
    }

    #[test]
    fn test_content_from_json() {
        let json = serde_json::to_string(&SiteContent::builtin()).unwrap();
        let mut value: serde_json::Value = serde_json::from_str(&json).unwrap();
        value["brand"]["short_name"] = serde_json::Value::from("ARCH");
        let content = SiteContent::from_json(&value.to_string()).unwrap();
        assert_eq!(content.brand.short_name, "ARCH");
        assert!(SiteContent::from_json("{\"brand\": 3}").is_err());
    }
}
