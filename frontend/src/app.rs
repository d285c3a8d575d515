use shared::PageState;
use yew::prelude::*;

use crate::pages::home::Home;

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub state: PageState,
}

/// Root component. The pre-renderer and the browser both render this with
/// the same [`PageState`] so hydration sees identical markup.
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <Home content={props.state.content.clone()} mode={props.state.mode.clone()} />
    }
}
