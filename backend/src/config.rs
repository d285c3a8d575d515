use std::fs;
use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use shared::{BuildMode, PageState, SiteContent};

use crate::error::SiteError;

#[derive(Debug, Parser)]
#[command(name = "ptarch-site", version, about = "Pre-render and preview the PT ARCH landing page")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the public base path for a build mode
    BasePath(ModeArgs),
    /// Build the frontend with Trunk for a mode, then pre-render it
    Build(BuildArgs),
    /// Pre-render a Trunk-built index.html so the page hydrates
    Render(RenderArgs),
    /// Serve a built site directory under the mode's base path
    Serve(ServeArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ModeArgs {
    /// Build mode; `github` deploys under /ptarch/
    #[arg(long, env = "PTARCH_BUILD_MODE", default_value = "production")]
    pub mode: String,
}

impl ModeArgs {
    pub fn build_mode(&self) -> BuildMode {
        BuildMode::from_name(&self.mode)
    }
}

/// Mode and content a page is rendered with.
#[derive(Debug, Clone, Args)]
pub struct ContentArgs {
    #[command(flatten)]
    pub mode: ModeArgs,
    /// JSON file replacing the builtin site content
    #[arg(long = "content")]
    pub content_file: Option<PathBuf>,
    /// WhatsApp number to publish; without it the placeholder is kept
    #[arg(long, env = "PTARCH_WHATSAPP")]
    pub whatsapp: Option<String>,
}

impl ContentArgs {
    /// Builtin content unless a content file is given, then the WhatsApp
    /// override. Content files are validated; the builtin content is trusted.
    pub fn load_content(&self) -> Result<SiteContent, SiteError> {
        let content = match &self.content_file {
            Some(path) => {
                let json = fs::read_to_string(path).map_err(|source| SiteError::ReadContent {
                    path: path.clone(),
                    source,
                })?;
                let content =
                    SiteContent::from_json(&json).map_err(|source| SiteError::ParseContent {
                        path: path.clone(),
                        source,
                    })?;
                content.validate()?;
                content
            }
            None => SiteContent::builtin(),
        };

        Ok(match &self.whatsapp {
            Some(number) => content.with_whatsapp(Some(number.as_str())),
            None => content,
        })
    }

    pub fn page_state(&self) -> Result<PageState, SiteError> {
        Ok(PageState {
            mode: self.mode.build_mode(),
            content: self.load_content()?,
        })
    }
}

#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub page: ContentArgs,
    /// Directory produced by `trunk build`; its index.html is the template
    #[arg(long, default_value = "frontend/dist")]
    pub dist: PathBuf,
    /// Output file, defaults to rendering the template in place
    #[arg(long)]
    pub out: Option<PathBuf>,
}

impl RenderArgs {
    pub fn template_path(&self) -> PathBuf {
        self.dist.join("index.html")
    }

    pub fn out_path(&self) -> PathBuf {
        self.out.clone().unwrap_or_else(|| self.template_path())
    }
}

#[derive(Debug, Clone, Args)]
pub struct BuildArgs {
    #[command(flatten)]
    pub page: ContentArgs,
    /// Frontend crate directory holding index.html and Trunk.toml
    #[arg(long, default_value = "frontend")]
    pub frontend: PathBuf,
    /// Build without `--release`
    #[arg(long)]
    pub debug: bool,
    /// Skip pre-rendering and keep Trunk's client-only page
    #[arg(long)]
    pub no_prerender: bool,
    #[arg(long, env = "PTARCH_TRUNK", default_value = "trunk")]
    pub trunk: String,
}

impl BuildArgs {
    pub fn dist(&self) -> PathBuf {
        self.frontend.join("dist")
    }
}

#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    #[command(flatten)]
    pub mode: ModeArgs,
    /// Directory produced by `trunk build`
    #[arg(long, default_value = "frontend/dist")]
    pub dist: PathBuf,
    #[arg(long, default_value = "0.0.0.0")]
    pub host: IpAddr,
    #[arg(long, default_value_t = 8080)]
    pub port: u16,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    fn render_args(args: &[&str]) -> RenderArgs {
        let mut argv = vec!["ptarch-site", "render"];
        argv.extend_from_slice(args);
        match Cli::try_parse_from(argv).unwrap().command {
            Command::Render(args) => args,
            other => panic!("expected render, got {:?}", other),
        }
    }

    #[test]
    fn test_mode_flag_selects_base_path() {
        let cli = Cli::try_parse_from(["ptarch-site", "base-path", "--mode", "github"]).unwrap();
        match cli.command {
            Command::BasePath(mode) => assert_eq!(mode.build_mode().base_path(), "/ptarch/"),
            other => panic!("expected base-path, got {:?}", other),
        }
    }

    #[test]
    fn test_serve_defaults_listen_on_all_interfaces() {
        let cli = Cli::try_parse_from(["ptarch-site", "serve", "--mode", "preview"]).unwrap();
        match cli.command {
            Command::Serve(args) => {
                assert_eq!(args.host.to_string(), "0.0.0.0");
                assert_eq!(args.port, 8080);
                assert_eq!(args.dist, PathBuf::from("frontend/dist"));
                assert_eq!(args.mode.build_mode().base_path(), "/");
            }
            other => panic!("expected serve, got {:?}", other),
        }
    }

    #[test]
    fn test_load_builtin_content_with_whatsapp() {
        let args = render_args(&["--mode", "github", "--whatsapp", "+62 811 222 333"]);
        let state = args.page.page_state().unwrap();
        assert_eq!(state.mode, BuildMode::Github);
        let whatsapp = state.content.contacts.iter().find(|c| c.label == "WhatsApp").unwrap();
        assert_eq!(whatsapp.href.as_deref(), Some("https://wa.me/62811222333"));
    }

    #[test]
    fn test_render_defaults_to_trunk_output_in_place() {
        let args = render_args(&[]);
        assert_eq!(args.template_path(), PathBuf::from("frontend/dist/index.html"));
        assert_eq!(args.out_path(), args.template_path());

        let args = render_args(&["--dist", "site", "--out", "preview/index.html"]);
        assert_eq!(args.template_path(), PathBuf::from("site/index.html"));
        assert_eq!(args.out_path(), PathBuf::from("preview/index.html"));
    }

    #[test]
    fn test_build_takes_a_single_mode() {
        let cli = Cli::try_parse_from(["ptarch-site", "build", "--mode", "github"]).unwrap();
        match cli.command {
            Command::Build(args) => {
                assert_eq!(args.page.mode.build_mode(), BuildMode::Github);
                assert_eq!(args.dist(), PathBuf::from("frontend/dist"));
                assert!(!args.debug);
                assert!(!args.no_prerender);
            }
            other => panic!("expected build, got {:?}", other),
        }
    }

    #[test]
    fn test_load_content_file() {
        let mut content = SiteContent::builtin();
        content.brand.short_name = "ARCH".to_string();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string(&content).unwrap().as_bytes()).unwrap();

        let args = render_args(&["--content", file.path().to_str().unwrap()]);
        assert_eq!(args.page.load_content().unwrap().brand.short_name, "ARCH");
    }

    #[test]
    fn test_invalid_content_file_is_rejected() {
        let mut content = SiteContent::builtin();
        content.categories[0].products[2].emoji = String::new();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string(&content).unwrap().as_bytes()).unwrap();

        let args = render_args(&["--content", file.path().to_str().unwrap()]);
        assert!(matches!(args.page.load_content(), Err(SiteError::InvalidContent(_))));
    }

    #[test]
    fn test_malformed_and_missing_content_files() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        let args = render_args(&["--content", file.path().to_str().unwrap()]);
        assert!(matches!(args.page.load_content(), Err(SiteError::ParseContent { .. })));

        let args = render_args(&["--content", "/definitely/not/here.json"]);
        assert!(matches!(args.page.load_content(), Err(SiteError::ReadContent { .. })));
    }
}
