use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitStatus;

use shared::ContentError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("failed to read content file {}: {source}", .path.display())]
    ReadContent {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("content file {} is not valid: {source}", .path.display())]
    ParseContent {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid site content: {0}")]
    InvalidContent(#[from] ContentError),
    #[error("failed to read page template {}: {source}", .path.display())]
    ReadTemplate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("page template cannot be pre-rendered: {0}")]
    Template(String),
    #[error("build mode '{mode}' expects base path {expected} but the page was built for {found}")]
    BasePathMismatch {
        mode: String,
        expected: String,
        found: String,
    },
    #[error("failed to encode page state: {0}")]
    EncodeState(#[from] serde_json::Error),
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("trunk build failed with {0}")]
    Trunk(ExitStatus),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[from] io::Error),
}
