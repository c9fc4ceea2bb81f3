//! Version-check response body.

use crate::error::VersionCheckError;
use serde::Deserialize;

/// Subset of the `core/version-check/1.7` response that wpget reads.
#[derive(Debug, Clone, Deserialize)]
pub struct VersionCheck {
    #[serde(default)]
    pub offers: Vec<Offer>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Offer {
    #[serde(default)]
    pub current: String,
}

/// Parses a response body and returns the first offer's `current` version.
pub fn latest_from_body(body: &[u8]) -> Result<String, VersionCheckError> {
    let check: VersionCheck = serde_json::from_slice(body)?;
    check
        .offers
        .into_iter()
        .next()
        .map(|offer| offer.current)
        .filter(|v| !v.is_empty())
        .ok_or(VersionCheckError::NoOffers)
}
