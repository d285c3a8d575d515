use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod render;
mod server;
mod trunk;

use config::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::BasePath(args) => {
            println!("{}", args.build_mode().base_path());
        }
        Command::Build(args) => {
            let state = args.page.page_state()?;
            trunk::run_trunk(&args).await?;

            if !args.no_prerender {
                let index = args.dist().join("index.html");
                info!(mode = %state.mode, "pre-rendering landing page");
                render::prerender_file(&index, &index, state)
                    .await
                    .with_context(|| format!("pre-rendering {}", index.display()))?;
            }
        }
        Command::Render(args) => {
            let state = args.page.page_state()?;
            let (template, out) = (args.template_path(), args.out_path());
            info!(mode = %state.mode, base_path = state.mode.base_path(), "pre-rendering landing page");

            render::prerender_file(&template, &out, state)
                .await
                .with_context(|| format!("pre-rendering {} into {}", template.display(), out.display()))?;
        }
        Command::Serve(args) => {
            server::serve(args).await?;
        }
    }

    Ok(())
}
