use shared::BuildMode;
use yew::prelude::*;

use super::product_card::ProductCard;

#[derive(Properties, PartialEq, Clone)]
pub struct ProductCategoryProps {
    pub category: shared::ProductCategory,
    #[prop_or_default]
    pub mode: BuildMode,
}

/// Labelled group of product cards laid out in a responsive grid.
#[function_component(ProductCategory)]
pub fn product_category(props: &ProductCategoryProps) -> Html {
    let category = &props.category;

    html! {
        <div class="product-category mb-16 last:mb-0">
            <div class="flex items-center gap-4 mb-8">
                <span class="text-2xl">{ category.icon.clone() }</span>
                <h3 class="text-emerald-300 text-sm tracking-[0.25em] uppercase font-bold">
                    { category.label.clone() }
                </h3>
                <div class="flex-1 h-px bg-emerald-800" />
            </div>
            <div class="grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 gap-4">
                { for category.products.iter().map(|product| html! {
                    <ProductCard
                        key={product.name.clone()}
                        product={product.clone()}
                        image_url={props.mode.asset_url(&product.image)}
                    />
                }) }
            </div>
        </div>
    }
}
