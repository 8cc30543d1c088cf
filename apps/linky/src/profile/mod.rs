//! Profile lookup: resolves a profile name into the props for one page render.
//!
//! Sources are pluggable behind [`ProfileSource`]. Whatever goes wrong while
//! fetching, the visitor sees the same 404: the cause is logged and dropped.

pub mod demo;
pub mod file;
pub mod http;

use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;

use crate::models::{PageProps, Profile, RenderError};

pub use demo::StaticProfileSource;
pub use file::JsonFileProfileSource;
pub use http::HttpProfileSource;

pub const NOT_FOUND_STATUS: u16 = 404;
pub const NOT_FOUND_TITLE: &str = "Whoops, no profile found here";

#[derive(Debug, Error)]
pub enum ProfileSourceError {
    #[error("profile '{0}' does not exist")]
    NotFound(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("profile service responded with status {0}")]
    Status(u16),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not decode profile data: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid profile service URL: {0}")]
    InvalidBase(String),
}

#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Short name used in startup logs.
    fn kind(&self) -> &'static str;

    async fn fetch(&self, profile_name: &str) -> Result<Profile, ProfileSourceError>;
}

/// The fixed error every failed lookup turns into.
pub fn not_found() -> RenderError {
    RenderError {
        status_code: NOT_FOUND_STATUS,
        title: NOT_FOUND_TITLE.to_string(),
    }
}

/// Fetches a profile and shapes it into page props.
///
/// Never fails: any source error collapses to the generic 404, so a missing
/// profile and a flaky upstream look identical to the visitor.
pub async fn load_page_props(source: &dyn ProfileSource, profile_name: &str) -> PageProps {
    match source.fetch(profile_name).await {
        Ok(profile) => PageProps::Profile {
            profile_name: profile_name.to_string(),
            profile,
        },
        Err(e) => {
            warn!(
                profile = profile_name,
                source = source.kind(),
                "Profile lookup failed: {e}"
            );
            PageProps::Error(not_found())
        }
    }
}
