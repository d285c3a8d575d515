use shared::ImageDisplay;
use web_sys::HtmlImageElement;
use yew::prelude::*;

use crate::services::logging::Logger;

#[derive(Properties, PartialEq, Clone)]
pub struct FallbackImageProps {
    pub src: String,
    pub alt: String,
    #[prop_or_default]
    pub class: String,
    /// Text or glyph rendered when the image fails to load
    pub fallback: String,
    #[prop_or_default]
    pub fallback_class: String,
}

/// An `<img>` that swaps itself for a text fallback on load failure.
///
/// The broken image element is dropped from the tree entirely so no empty
/// image box is left behind.
#[function_component(FallbackImage)]
pub fn fallback_image(props: &FallbackImageProps) -> Html {
    let display = use_state_eq(ImageDisplay::default);
    let image_ref = use_node_ref();

    let fail = {
        let display = display.clone();
        let src = props.src.clone();
        Callback::from(move |()| {
            Logger::warn_with_component("image", &format!("failed to load {}, using fallback", src));
            display.set((*display).on_error());
        })
    };

    // A pre-rendered image can fail before hydration attaches `onerror`.
    {
        let image_ref = image_ref.clone();
        let fail = fail.clone();
        use_effect_with(props.src.clone(), move |_| {
            if let Some(image) = image_ref.cast::<HtmlImageElement>() {
                if image.complete() && image.natural_width() == 0 {
                    fail.emit(());
                }
            }
        });
    }

    view(props, *display, image_ref, fail.reform(|_: Event| ()))
}

fn view(
    props: &FallbackImageProps,
    display: ImageDisplay,
    image_ref: NodeRef,
    onerror: Callback<Event>,
) -> Html {
    match display {
        ImageDisplay::Image => html! {
            <img
                ref={image_ref}
                src={props.src.clone()}
                alt={props.alt.clone()}
                class={props.class.clone()}
                {onerror}
            />
        },
        ImageDisplay::Fallback => html! {
            <span class={props.fallback_class.clone()} role="img" aria-label={props.alt.clone()}>
                { props.fallback.clone() }
            </span>
        },
    }
}

/// Renders the failed state directly, for tests that cannot trigger a real
/// load error.
#[cfg(all(test, not(target_arch = "wasm32")))]
#[function_component(FailedImage)]
pub(crate) fn failed_image(props: &FallbackImageProps) -> Html {
    view(props, ImageDisplay::Fallback, NodeRef::default(), Callback::from(|_: Event| ()))
}
