use shared::copyright_line;
use yew::prelude::*;

use crate::services::date_utils::current_year;

#[derive(Properties, PartialEq, Clone)]
pub struct FooterProps {
    pub legal_name: String,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let line = copyright_line(current_year(), &props.legal_name);

    html! {
        <footer class="bg-black py-8 px-6 text-center border-t border-emerald-900/50">
            <p class="text-white text-sm tracking-widest">{ line }</p>
        </footer>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_utils::render_to_string;
    use chrono::Datelike;

    #[tokio::test]
    async fn test_footer_shows_current_year() {
        let html = render_to_string::<Footer>(FooterProps {
            legal_name: "PT Archinus Uniex Noer".to_string(),
        })
        .await;

        let year = chrono::Local::now().year();
        let expected = format!("© {} PT Archinus Uniex Noer. All rights reserved.", year);
        assert!(html.contains(&expected), "{}", html);
    }
}
