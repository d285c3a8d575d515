use shared::ScrollState;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;
use yew::prelude::*;

use crate::services::logging::Logger;

/// Tracks whether the page has scrolled past the header threshold.
///
/// Attaches a `scroll` listener to the window on mount and removes it on
/// unmount. Re-renders only when the state actually flips.
#[hook]
pub fn use_scroll_state() -> ScrollState {
    let state = use_state_eq(ScrollState::default);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|window| {
                let on_scroll = {
                    let state = state.clone();
                    let window = window.clone();
                    Closure::<dyn Fn()>::new(move || {
                        let offset = window.scroll_y().unwrap_or(0.0);
                        state.set(ScrollState::from_offset(offset));
                    })
                };

                // The page may be restored mid-scroll on reload.
                state.set(ScrollState::from_offset(window.scroll_y().unwrap_or(0.0)));

                if let Err(err) = window
                    .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
                {
                    Logger::error_with_component(
                        "scroll",
                        &format!("failed to attach scroll listener: {:?}", err),
                    );
                } else {
                    Logger::debug_with_component("scroll", "scroll listener attached");
                }

                (window, on_scroll)
            });

            move || {
                if let Some((window, on_scroll)) = listener {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        on_scroll.as_ref().unchecked_ref(),
                    );
                    Logger::debug_with_component("scroll", "scroll listener removed");
                }
            }
        });
    }

    *state
}
