use shared::section_ids;
use yew::prelude::*;

use super::section_heading::SectionHeading;
use super::DISPLAY_FONT_STYLE;

#[derive(Properties, PartialEq, Clone)]
pub struct VisionCardProps {
    pub card: shared::VisionCard,
}

#[function_component(VisionCard)]
pub fn vision_card(props: &VisionCardProps) -> Html {
    let card = &props.card;

    html! {
        <div class="vision-card bg-white/5 backdrop-blur-sm rounded-3xl p-8 border border-white/10">
            <div class={classes!("w-12", "h-12", "rounded-2xl", card.icon_bg_class.clone(), "flex", "items-center", "justify-center", "mb-6")}>
                <span class="text-2xl">{ card.icon.clone() }</span>
            </div>
            <h3
                class={classes!(card.title_class.clone(), "font-black", "text-xl", "mb-4", "tracking-wide")}
                style={DISPLAY_FONT_STYLE}
            >
                { card.title.clone() }
            </h3>
            <p class="text-emerald-100/80 leading-relaxed">{ card.description.clone() }</p>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct VisionProps {
    pub cards: Vec<shared::VisionCard>,
}

#[function_component(Vision)]
pub fn vision(props: &VisionProps) -> Html {
    html! {
        <section
            id={section_ids::VISION}
            class="py-24 px-6 relative overflow-hidden"
            style="background: linear-gradient(135deg, #064e3b 0%, #022c22 50%, #0d9488 100%)"
        >
            <div
                class="absolute inset-0 opacity-5"
                style="background-image: radial-gradient(circle at 2px 2px, #10b981 1px, transparent 0); background-size: 40px 40px"
            />
            <div class="max-w-4xl mx-auto relative z-10">
                <div class="text-center mb-16">
                    <SectionHeading title={"Vision & Mission".to_string()} divider_class="mt-6" />
                </div>

                <div class="grid md:grid-cols-2 gap-8">
                    { for props.cards.iter().map(|card| html! {
                        <VisionCard key={card.title.clone()} card={card.clone()} />
                    }) }
                </div>
            </div>
        </section>
    }
}
