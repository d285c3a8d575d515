use shared::section_ids;
use yew::prelude::*;

use super::DISPLAY_FONT_STYLE;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub background_url: String,
}

/// Full-viewport banner with the company name and a link down to the products.
#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let background = format!("background-image: url({})", props.background_url);

    html! {
        <section
            id={section_ids::HERO}
            class="relative min-h-screen flex items-center justify-center overflow-hidden bg-cover bg-center"
            style={background}
        >
            <div class="absolute inset-0 bg-emerald-950/80"></div>

            <div class="absolute inset-0 overflow-hidden pointer-events-none">
                <div
                    class="absolute top-1/4 left-1/4 w-96 h-96 rounded-full opacity-10"
                    style="background: radial-gradient(circle, #1b5e4b, transparent 70%)"
                />
                <div
                    class="absolute bottom-1/4 right-1/4 w-72 h-72 rounded-full opacity-10"
                    style="background: radial-gradient(circle, #06b6d4, transparent 70%)"
                />
                <div
                    class="absolute inset-0 opacity-5"
                    style="background-image: linear-gradient(#10b981 1px, transparent 1px), linear-gradient(90deg, #10b981 1px, transparent 1px); background-size: 60px 60px"
                />
            </div>

            <div class="relative z-10 text-center px-6 max-w-4xl mx-auto">
                <div class="inline-block border border-emerald-400/40 rounded-full px-4 py-1 mb-8">
                    <span class="text-emerald-300 text-xs tracking-[0.3em] uppercase font-semibold">
                        {"Indonesia · Est. Global Export"}
                    </span>
                </div>

                <h1
                    class="text-5xl md:text-7xl lg:text-8xl font-black text-white mb-6 leading-none tracking-tight"
                    style={DISPLAY_FONT_STYLE}
                >
                    {"PT ARCHINUS"}
                    <br />
                    <span class="text-4xl md:text-5xl lg:text-6xl">{"UNIEX NOER"}</span>
                </h1>

                <p class="text-emerald-200/70 text-lg md:text-xl max-w-2xl mx-auto mb-10 leading-relaxed tracking-wide">
                    {"Exporter of Agricultural Leaves & Marine Products for Global Markets"}
                </p>

                <a
                    href={section_ids::anchor(section_ids::PRODUCTS)}
                    class="inline-block bg-emerald-400 hover:bg-emerald-300 text-emerald-950 font-black px-10 py-4 rounded-full text-sm tracking-widest uppercase transition-all duration-300 hover:shadow-xl hover:shadow-emerald-400/30 hover:-translate-y-0.5"
                >
                    {"Explore Products"}
                </a>
            </div>

            <div class="absolute bottom-0 left-0 right-0 h-32 bg-gradient-to-t from-emerald-950 to-transparent" />
        </section>
    }
}
