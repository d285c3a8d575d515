use shared::{section_ids, ContactEntry};
use yew::prelude::*;

use super::section_heading::SectionHeading;

const ITEM_CLASS: &str = "contact-item flex items-center gap-4 bg-emerald-900/40 border border-emerald-700/30 hover:border-emerald-400/50 rounded-2xl px-6 py-4 transition-all duration-300 group";

#[derive(Properties, PartialEq, Clone)]
pub struct ContactItemProps {
    pub icon: String,
    pub label: String,
    pub value: String,
    #[prop_or_default]
    pub href: Option<String>,
}

/// One contact method. With an `href` the whole row is a link.
#[function_component(ContactItem)]
pub fn contact_item(props: &ContactItemProps) -> Html {
    let inner = html! {
        <>
            <span class="text-2xl">{ props.icon.clone() }</span>
            <div class="text-left">
                <p class="text-emerald-400 text-xs tracking-widest uppercase mb-1">
                    { props.label.clone() }
                </p>
                <p class="text-white font-medium group-hover:text-emerald-300 transition-colors">
                    { props.value.clone() }
                </p>
            </div>
        </>
    };

    match &props.href {
        Some(href) => html! {
            <a href={href.clone()} class={ITEM_CLASS}>{ inner }</a>
        },
        None => html! {
            <div class={classes!(ITEM_CLASS, "cursor-pointer")}>{ inner }</div>
        },
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ContactProps {
    pub contacts: Vec<ContactEntry>,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    html! {
        <section id={section_ids::CONTACT} class="bg-emerald-950 py-24 px-6">
            <div class="max-w-xl mx-auto text-center">
                <SectionHeading
                    eyebrow={Some("Get In Touch".to_string())}
                    title={"Contact Us".to_string()}
                    title_class="mb-6"
                    divider_class="mb-12"
                />

                <div class="space-y-4">
                    { for props.contacts.iter().map(|entry| html! {
                        <ContactItem
                            key={entry.label.clone()}
                            icon={entry.icon.clone()}
                            label={entry.label.clone()}
                            value={entry.value.clone()}
                            href={entry.href.clone()}
                        />
                    }) }
                </div>
            </div>
        </section>
    }
}
