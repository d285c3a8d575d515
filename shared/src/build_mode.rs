use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the build mode that deploys under the GitHub Pages project path.
pub const GITHUB_MODE: &str = "github";

/// Base path used for GitHub Pages deployments.
pub const GITHUB_BASE_PATH: &str = "/ptarch/";

/// Base path used for every other deployment.
pub const ROOT_BASE_PATH: &str = "/";

/// Named build profile that selects where the site is served from.
///
/// Serialised as its plain mode name so a round trip always goes back
/// through [`BuildMode::from_name`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BuildMode {
    /// Deployed as a GitHub Pages project site
    Github,
    /// Any other mode name, served from the domain root
    Standard(String),
}

impl Default for BuildMode {
    fn default() -> Self {
        BuildMode::Standard("production".to_string())
    }
}

impl BuildMode {
    pub fn from_name(name: &str) -> Self {
        if name == GITHUB_MODE {
            BuildMode::Github
        } else {
            BuildMode::Standard(name.to_string())
        }
    }

    /// Mode baked in at compile time through `PTARCH_BUILD_MODE`.
    pub fn compiled() -> Self {
        option_env!("PTARCH_BUILD_MODE")
            .map(Self::from_name)
            .unwrap_or_default()
    }

    pub fn name(&self) -> &str {
        match self {
            BuildMode::Github => GITHUB_MODE,
            BuildMode::Standard(name) => name,
        }
    }

    /// Public base path; always starts and ends with `/`.
    pub fn base_path(&self) -> &'static str {
        match self {
            BuildMode::Github => GITHUB_BASE_PATH,
            BuildMode::Standard(_) => ROOT_BASE_PATH,
        }
    }

    /// URL of a file bundled under `assets/`.
    pub fn asset_url(&self, file: &str) -> String {
        format!("{}assets/{}", self.base_path(), file.trim_start_matches('/'))
    }
}

impl From<String> for BuildMode {
    fn from(name: String) -> Self {
        BuildMode::from_name(&name)
    }
}

impl From<BuildMode> for String {
    fn from(mode: BuildMode) -> Self {
        mode.name().to_string()
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_github_mode_uses_project_path() {
        let mode = BuildMode::from_name("github");
        assert_eq!(mode, BuildMode::Github);
        assert_eq!(mode.base_path(), "/ptarch/");
    }

    #[test]
    fn test_other_modes_use_root() {
        for name in ["production", "development", "", "GitHub", "github-pages"] {
            let mode = BuildMode::from_name(name);
            assert_eq!(mode.base_path(), "/", "mode {:?}", name);
            assert_eq!(mode.name(), name);
        }
        assert_eq!(BuildMode::default().base_path(), "/");
    }

    #[test]
    fn test_serde_goes_through_mode_name() {
        assert_eq!(serde_json::to_string(&BuildMode::Github).unwrap(), "\"github\"");
        assert_eq!(
            serde_json::from_str::<BuildMode>("\"github\"").unwrap().base_path(),
            "/ptarch/"
        );
        assert_eq!(
            serde_json::from_str::<BuildMode>("\"staging\"").unwrap(),
            BuildMode::Standard("staging".to_string())
        );
        assert!(serde_json::from_str::<BuildMode>(r#"{"Standard":"github"}"#).is_err());
    }

    #[test]
    fn test_asset_url() {
        assert_eq!(BuildMode::Github.asset_url("moringa.jpg"), "/ptarch/assets/moringa.jpg");
        assert_eq!(
            BuildMode::from_name("production").asset_url("/keong.jpg"),
            "/assets/keong.jpg"
        );
    }
}
