use std::fs;
use std::path::Path;

use ptarch_frontend::app::{App, AppProps};
use shared::{BuildMode, PageState, APP_ROOT_ID, PAGE_STATE_ID};
use tracing::{debug, info};
use yew::ServerRenderer;

use crate::error::SiteError;

/// Renders the app to hydratable markup.
pub async fn render_app(state: PageState) -> String {
    ServerRenderer::<App>::with_props(move || AppProps { state })
        .hydratable(true)
        .render()
        .await
}

/// Fills a Trunk-built `index.html` with pre-rendered markup.
///
/// The template keeps Trunk's bundle loader, so the page still runs the app:
/// it hydrates the markup from the embedded state, which keeps image
/// fallbacks and the scroll-aware header working.
pub fn prerender(template: &str, state: &PageState, app_html: &str) -> Result<String, SiteError> {
    if template.contains(PAGE_STATE_ID) {
        return Err(SiteError::Template("it is already pre-rendered".to_string()));
    }
    check_public_url(template, &state.mode)?;

    let head_end = template
        .find("</head>")
        .ok_or_else(|| SiteError::Template("missing </head>".to_string()))?;
    let (root_start, root_end) = app_root_content(template)?;

    let mut html = String::with_capacity(template.len() + app_html.len() + 4096);
    html.push_str(&template[..head_end]);
    html.push_str("  ");
    html.push_str(&state.script_element()?);
    html.push('\n');
    html.push_str(&template[head_end..root_start]);
    html.push_str(app_html);
    html.push_str(&template[root_end..]);
    Ok(html)
}

/// Reads the template, pre-renders it and writes the result to `out`.
pub async fn prerender_file(template_path: &Path, out: &Path, state: PageState) -> Result<(), SiteError> {
    let template = fs::read_to_string(template_path).map_err(|source| SiteError::ReadTemplate {
        path: template_path.to_path_buf(),
        source,
    })?;

    let app_html = render_app(state.clone()).await;
    debug!(bytes = app_html.len(), "rendered app markup");

    let html = prerender(&template, &state, &app_html)?;
    write_document(out, &html)
}

/// Writes a rendered document, creating parent directories as needed.
pub fn write_document(path: &Path, html: &str) -> Result<(), SiteError> {
    let write_err = |source| SiteError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, html).map_err(write_err)?;

    info!(path = %path.display(), bytes = html.len(), "wrote pre-rendered page");
    Ok(())
}

/// The bundle in the template was built for the `<base href>` Trunk wrote;
/// asset URLs in the markup follow the mode. Both must name the same path.
fn check_public_url(template: &str, mode: &BuildMode) -> Result<(), SiteError> {
    let found = base_href(template).unwrap_or("/");
    let expected = mode.base_path();
    if found != expected {
        return Err(SiteError::BasePathMismatch {
            mode: mode.name().to_string(),
            expected: expected.to_string(),
            found: found.to_string(),
        });
    }
    Ok(())
}

fn base_href(template: &str) -> Option<&str> {
    let start = template.find("<base")?;
    let tag = &template[start..start + template[start..].find('>')?];
    let href = tag.find("href=\"")? + "href=\"".len();
    let len = tag[href..].find('"')?;
    Some(&tag[href..href + len])
}

/// Byte range inside the (empty) app root element.
fn app_root_content(template: &str) -> Result<(usize, usize), SiteError> {
    let missing = || SiteError::Template(format!("missing empty <div id=\"{}\">", APP_ROOT_ID));

    let id = template
        .find(&format!(r#"id="{}""#, APP_ROOT_ID))
        .ok_or_else(missing)?;
    let start = id + template[id..].find('>').ok_or_else(missing)? + 1;
    let end = start + template[start..].find("</div>").ok_or_else(missing)?;

    if !template[start..end].trim().is_empty() {
        return Err(missing());
    }
    Ok((start, end))
}
