use shared::{section_ids, BuildMode};
use yew::prelude::*;

use super::product_category::ProductCategory;
use super::section_heading::SectionHeading;

#[derive(Properties, PartialEq, Clone)]
pub struct ProductsProps {
    pub categories: Vec<shared::ProductCategory>,
    #[prop_or_default]
    pub mode: BuildMode,
}

#[function_component(Products)]
pub fn products(props: &ProductsProps) -> Html {
    html! {
        <section id={section_ids::PRODUCTS} class="bg-emerald-950 py-24 px-6">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-16">
                    <SectionHeading
                        eyebrow={Some("Our Offerings".to_string())}
                        title={"Our Products".to_string()}
                        divider_class="mt-6"
                    />
                </div>

                { for props.categories.iter().map(|category| html! {
                    <ProductCategory
                        key={category.label.clone()}
                        category={category.clone()}
                        mode={props.mode.clone()}
                    />
                }) }
            </div>
        </section>
    }
}
