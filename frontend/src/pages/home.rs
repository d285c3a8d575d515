use shared::{BuildMode, SiteContent};
use yew::prelude::*;

use crate::components::about::About;
use crate::components::contact::Contact;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::products::Products;
use crate::components::vision::Vision;

pub const HERO_IMAGE: &str = "hero.jpg";

#[derive(Properties, PartialEq, Clone)]
pub struct HomeProps {
    pub content: SiteContent,
    /// Decides the base path asset URLs are resolved against
    #[prop_or_default]
    pub mode: BuildMode,
}

/// The whole landing page, sections stacked top to bottom.
#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let content = &props.content;
    let mode = &props.mode;

    html! {
        <div class="min-h-screen font-sans">
            <Navbar
                brand={content.brand.clone()}
                links={content.nav_links.clone()}
                logo_url={mode.asset_url(&content.brand.logo)}
            />
            <Hero background_url={mode.asset_url(HERO_IMAGE)} />
            <About />
            <Products categories={content.categories.clone()} mode={mode.clone()} />
            <Vision cards={content.vision_cards.clone()} />
            <Contact contacts={content.contacts.clone()} />
            <Footer legal_name={content.brand.legal_name.clone()} />
        </div>
    }
}
