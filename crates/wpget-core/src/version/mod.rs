//! Release version lookup.
//!
//! Uses the explicit version when one is given, otherwise asks the
//! WordPress version-check API and takes the first offer.

mod parse;

pub use parse::{latest_from_body, Offer, VersionCheck};

use crate::config::Settings;
use crate::error::{Result, VersionCheckError};
use crate::http;

/// Returns `explicit` unchanged when non-empty; otherwise queries
/// `settings.version_check_url`. No format validation is applied to `explicit`.
pub fn resolve_version(explicit: Option<&str>, settings: &Settings) -> Result<String> {
    if let Some(v) = explicit.filter(|v| !v.is_empty()) {
        tracing::debug!("using requested version {}", v);
        return Ok(v.to_string());
    }

    tracing::info!("Checking the latest version of WordPress...");
    let version = check_latest(&settings.version_check_url, settings)?;
    tracing::debug!("version check reported {}", version);
    Ok(version)
}

/// GETs the version-check endpoint and extracts `offers[0].current`.
pub fn check_latest(url: &str, settings: &Settings) -> Result<String, VersionCheckError> {
    let (code, body) = http::get_bytes(url, settings)?;
    if !http::is_success(code) {
        return Err(VersionCheckError::Status(code));
    }
    latest_from_body(&body)
}
