use std::net::SocketAddr;
use std::path::Path;

use axum::response::Redirect;
use axum::routing::get;
use axum::Router;
use shared::BuildMode;
use tower_http::services::{ServeDir, ServeFile};
use tracing::{info, warn};

use crate::config::ServeArgs;
use crate::error::SiteError;

/// Router serving `dist_dir` under the mode's base path. Unknown paths fall
/// back to `index.html`; `/` redirects to the base path when they differ.
pub fn router(dist_dir: &Path, mode: &BuildMode) -> Router {
    let files = ServeDir::new(dist_dir).fallback(ServeFile::new(dist_dir.join("index.html")));
    let base = mode.base_path();

    if base == "/" {
        return Router::new().fallback_service(files);
    }

    Router::new()
        .route("/", get(move || async move { Redirect::permanent(base) }))
        .nest_service(base.trim_end_matches('/'), files)
}

pub async fn serve(args: ServeArgs) -> Result<(), SiteError> {
    let mode = args.mode.build_mode();
    if !args.dist.join("index.html").is_file() {
        warn!(dist = %args.dist.display(), "no index.html found, run `trunk build` first");
    }

    let app = router(&args.dist, &mode);
    let addr = SocketAddr::new(args.host, args.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| SiteError::Bind { addr, source })?;

    info!(
        %addr,
        mode = %mode,
        base_path = mode.base_path(),
        dist = %args.dist.display(),
        "serving site"
    );
    axum::serve(listener, app).await?;

    Ok(())
}
