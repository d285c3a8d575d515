use shared::{Brand, NavLink};
use yew::prelude::*;

use super::fallback_image::FallbackImage;
use crate::hooks::use_scroll_state::use_scroll_state;

#[derive(Properties, PartialEq, Clone)]
pub struct NavbarProps {
    pub brand: Brand,
    pub links: Vec<NavLink>,
    pub logo_url: String,
}

/// Fixed header. Transparent at the top of the page, opaque once scrolled.
#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let scroll = use_scroll_state();

    html! {
        <header class={scroll.header_class()} data-scrolled={scroll.is_scrolled().to_string()}>
            <div class="max-w-7xl mx-auto px-6 py-4 flex items-center justify-between">
                <div class="flex items-center gap-3">
                    <div class="w-10 h-10 rounded-full flex items-center justify-center shadow-lg">
                        <FallbackImage
                            src={props.logo_url.clone()}
                            alt={props.brand.short_name.clone()}
                            class="w-8 h-8 object-contain rounded-full"
                            fallback={props.brand.logo_fallback.clone()}
                            fallback_class="text-white font-black text-sm"
                        />
                    </div>
                    <span class="font-black tracking-widest text-white uppercase text-md">
                        { props.brand.short_name.clone() }
                    </span>
                </div>

                <nav class="hidden md:flex items-center gap-8">
                    { for props.links.iter().map(|link| html! {
                        <a
                            key={link.label.clone()}
                            href={link.href.clone()}
                            class="text-emerald-200/80 hover:text-emerald-300 text-sm tracking-widest transition-colors duration-200 font-medium"
                        >
                            { link.label.clone() }
                        </a>
                    }) }
                </nav>
            </div>
        </header>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_utils::render_to_string;
    use shared::SiteContent;

    #[tokio::test]
    async fn test_navbar_starts_transparent() {
        let content = SiteContent::builtin();
        let html = render_to_string::<Navbar>(NavbarProps {
            brand: content.brand,
            links: content.nav_links,
            logo_url: "/assets/logo.png".to_string(),
        })
        .await;

        assert!(html.contains(r#"data-scrolled="false""#));
        assert!(html.contains("bg-transparent"));
        assert!(!html.contains("bg-emerald-950/95"));
        for href in ["#about", "#products", "#vision", "#contact"] {
            assert!(html.contains(&format!(r#"href="{}""#, href)), "missing {}", href);
        }
        assert!(html.contains(r#"src="/assets/logo.png""#));
    }
}
