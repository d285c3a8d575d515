use ptarch_frontend::app::{App, AppProps};
use ptarch_frontend::services::logging::Logger;
use ptarch_frontend::services::page_state::mount_point;

fn main() {
    let Some(mount) = mount_point() else {
        Logger::error_with_component("app", "no document to mount into");
        return;
    };

    let renderer = yew::Renderer::<App>::with_root_and_props(
        mount.root,
        AppProps { state: mount.state },
    );

    if mount.prerendered {
        Logger::info_with_component("app", "hydrating pre-rendered page");
        renderer.hydrate();
    } else {
        Logger::info_with_component("app", "mounting landing page");
        renderer.render();
    }
}
