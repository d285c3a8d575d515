use tokio::process::Command;
use tracing::info;

use crate::config::BuildArgs;
use crate::error::SiteError;

/// `trunk build` for the mode in `args`.
///
/// The public URL and the mode compiled into the bundle both come from the
/// same `BuildMode`, so assets and the bundle loader agree on the base path.
pub fn trunk_command(args: &BuildArgs) -> Command {
    let mode = args.page.mode.build_mode();

    let mut command = Command::new(&args.trunk);
    command
        .current_dir(&args.frontend)
        .arg("build")
        .arg("--public-url")
        .arg(mode.base_path())
        .env("PTARCH_BUILD_MODE", mode.name());
    if !args.debug {
        command.arg("--release");
    }
    if let Some(number) = &args.page.whatsapp {
        command.env("PTARCH_WHATSAPP", number);
    }
    command
}

pub async fn run_trunk(args: &BuildArgs) -> Result<(), SiteError> {
    let mode = args.page.mode.build_mode();
    info!(mode = %mode, public_url = mode.base_path(), frontend = %args.frontend.display(), "running trunk build");

    let status = trunk_command(args)
        .status()
        .await
        .map_err(|source| SiteError::Spawn {
            program: args.trunk.clone(),
            source,
        })?;
    if !status.success() {
        return Err(SiteError::Trunk(status));
    }
    Ok(())
}
