use yew::prelude::*;

use super::DISPLAY_FONT_STYLE;

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    /// Small uppercase line above the title
    #[prop_or_default]
    pub eyebrow: Option<String>,
    pub title: String,
    /// Extra classes on the title, usually bottom margin
    #[prop_or_default]
    pub title_class: String,
    /// Extra classes on the divider rule
    #[prop_or_default]
    pub divider_class: String,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <>
            if let Some(eyebrow) = &props.eyebrow {
                <p class="text-emerald-400 text-xs tracking-[0.3em] uppercase font-semibold mb-4">
                    { eyebrow.clone() }
                </p>
            }
            <h2
                class={classes!("text-4xl", "md:text-5xl", "font-black", "text-white", props.title_class.clone())}
                style={DISPLAY_FONT_STYLE}
            >
                { props.title.clone() }
            </h2>
            <div class={classes!("w-16", "h-0.5", "bg-emerald-400", "mx-auto", props.divider_class.clone())} />
        </>
    }
}
