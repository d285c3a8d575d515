use shared::section_ids;
use yew::prelude::*;

use super::section_heading::SectionHeading;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id={section_ids::ABOUT} class="bg-emerald-950 py-24 px-6">
            <div class="max-w-3xl mx-auto text-center">
                <SectionHeading
                    eyebrow={Some("Who We Are".to_string())}
                    title={"About PT ARCH".to_string()}
                    title_class="mb-6"
                    divider_class="mb-8"
                />
                <p class="text-emerald-200/70 text-lg leading-relaxed">
                    {"PT ARCHINUS UNIEX NOER (PT ARCH) is committed to delivering \
                      high-quality agricultural and marine products through sustainable \
                      sourcing and professional global partnerships."}
                </p>
            </div>
        </section>
    }
}
