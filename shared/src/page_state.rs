use serde::{Deserialize, Serialize};

use crate::{BuildMode, SiteContent};

/// `id` of the element the app mounts into and the pre-renderer fills.
pub const APP_ROOT_ID: &str = "app";

/// `id` of the JSON script element carrying the state a pre-rendered page
/// was rendered with. The browser hydrates from exactly this state.
pub const PAGE_STATE_ID: &str = "ptarch-page-state";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageState {
    pub mode: BuildMode,
    pub content: SiteContent,
}

impl PageState {
    /// State of a plain client-side build.
    pub fn compiled() -> Self {
        Self {
            mode: BuildMode::compiled(),
            content: SiteContent::compiled(),
        }
    }

    /// JSON safe to place inside a `<script>` element.
    pub fn to_script_json(&self) -> Result<String, serde_json::Error> {
        // `<` only occurs inside JSON strings, where `\u003c` decodes back to it.
        Ok(serde_json::to_string(self)?.replace('<', "\\u003c"))
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn script_element(&self) -> Result<String, serde_json::Error> {
        Ok(format!(
            r#"<script id="{}" type="application/json">{}</script>"#,
            PAGE_STATE_ID,
            self.to_script_json()?
        ))
    }
}
