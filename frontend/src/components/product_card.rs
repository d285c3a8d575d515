use shared::Product;
use yew::prelude::*;

use super::fallback_image::{FallbackImage, FallbackImageProps};
use super::DISPLAY_FONT_STYLE;

#[derive(Properties, PartialEq, Clone)]
pub struct ProductCardProps {
    pub product: Product,
    /// Resolved URL of `product.image`
    pub image_url: String,
}

/// Image slot of a card: the product photo, or its emoji once it fails.
pub fn image_props(product: &Product, image_url: &str) -> FallbackImageProps {
    FallbackImageProps {
        src: image_url.to_string(),
        alt: product.name.clone(),
        class: "w-full h-full object-cover group-hover:scale-105 transition-transform duration-500"
            .to_string(),
        fallback: product.emoji.clone(),
        fallback_class: "text-6xl select-none".to_string(),
    }
}

#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let product = &props.product;

    html! {
        <div class="product-card group relative overflow-hidden rounded-2xl bg-emerald-900/40 border border-emerald-700/30 hover:border-emerald-400/50 transition-all duration-400 hover:-translate-y-1 hover:shadow-xl hover:shadow-emerald-900/50 cursor-pointer">
            <div class="aspect-square overflow-hidden bg-emerald-900/60 flex items-center justify-center">
                <FallbackImage ..image_props(product, &props.image_url) />
            </div>
            <div class="p-4">
                <h3 class="text-white font-bold text-center tracking-wide" style={DISPLAY_FONT_STYLE}>
                    { product.name.clone() }
                </h3>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::components::fallback_image::FailedImage;
    use crate::test_utils::render_to_string;
    use shared::SiteContent;

    fn all_products() -> Vec<Product> {
        SiteContent::builtin()
            .categories
            .into_iter()
            .flat_map(|category| category.products)
            .collect()
    }

    #[tokio::test]
    async fn test_card_shows_image_and_name() {
        let product = Product::new("Moringa", "moringa.jpg", "🌿");
        let html = render_to_string::<ProductCard>(ProductCardProps {
            product,
            image_url: "/assets/moringa.jpg".to_string(),
        })
        .await;

        assert!(html.contains(r#"src="/assets/moringa.jpg""#));
        assert!(html.contains(r#"alt="Moringa""#));
        assert!(html.contains("Moringa"));
        assert!(!html.contains("🌿"));
    }

    #[tokio::test]
    async fn test_failed_card_image_shows_glyph_for_every_product() {
        for product in all_products() {
            let html = render_to_string::<FailedImage>(image_props(
                &product,
                "/assets/does-not-exist.jpg",
            ))
            .await;

            assert!(html.contains(&product.emoji), "{} should show {}", product.name, product.emoji);
            assert!(!html.contains("<img"), "{} should hide its image", product.name);
            assert!(html.contains(r#"class="text-6xl select-none""#));
        }
    }
}
