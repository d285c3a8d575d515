use shared::{PageState, APP_ROOT_ID, PAGE_STATE_ID};
use web_sys::Element;

use super::logging::Logger;

/// Where the app mounts and whether that mount point was pre-rendered.
pub struct MountPoint {
    pub root: Element,
    pub state: PageState,
    pub prerendered: bool,
}

/// Finds the app root and the state to render it with.
///
/// A pre-rendered page embeds the state it was rendered with; hydrating with
/// anything else would not match the markup. Plain client builds fall back
/// to the compiled state.
pub fn mount_point() -> Option<MountPoint> {
    let document = web_sys::window()?.document()?;
    let root = document
        .get_element_by_id(APP_ROOT_ID)
        .or_else(|| document.body().map(Element::from))?;

    let embedded = document
        .get_element_by_id(PAGE_STATE_ID)
        .and_then(|element| element.text_content())
        .and_then(|json| match PageState::from_json(&json) {
            Ok(state) => Some(state),
            Err(err) => {
                Logger::error_with_component(
                    "app",
                    &format!("ignoring unreadable pre-rendered state: {}", err),
                );
                None
            }
        });

    let prerendered = embedded.is_some() && root.child_element_count() > 0;
    let state = embedded.unwrap_or_else(PageState::compiled);
    warn_on_base_mismatch(&document, &state);

    Some(MountPoint {
        root,
        state,
        prerendered,
    })
}

/// Asset URLs follow the build mode while the bundle follows the public URL
/// Trunk was given. Flags builds where the two disagree.
fn warn_on_base_mismatch(document: &web_sys::Document, state: &PageState) {
    let public_url = document
        .query_selector("base")
        .ok()
        .flatten()
        .and_then(|base| base.get_attribute("href"));

    if let Some(public_url) = public_url {
        let expected = state.mode.base_path();
        if public_url != expected {
            Logger::warn_with_component(
                "app",
                &format!(
                    "build mode '{}' expects base path {} but the page was built for {}",
                    state.mode, expected, public_url
                ),
            );
        }
    }
}
