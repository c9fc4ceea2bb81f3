//! Error taxonomy for a wpget run.
//!
//! Every variant is terminal: nothing in the crate retries, the caller reports
//! the error and exits non-zero.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// Country code is not in the locale table and no `-lang` was given.
    #[error(
        "language code for country \"{country}\" was not found; use -lang together with -country to set it manually, e.g. `wpget -country {country} -lang xx_XX`"
    )]
    UnknownCountry { country: String },

    #[error("could not determine the latest WordPress version")]
    VersionResolution(#[from] VersionCheckError),

    /// Download endpoint answered 404 for this version/locale.
    #[error("version {version} does not exist")]
    VersionNotFound { version: String },

    /// Any other non-2xx status from the download endpoint.
    #[error("an error occurred while downloading {url} (HTTP {status})")]
    Download { url: String, status: u32 },

    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },

    #[error("{}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings file could not be read or parsed, or holds an unusable value.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Failure modes of the version-check request.
#[derive(Debug, Error)]
pub enum VersionCheckError {
    #[error("request failed")]
    Transport(#[from] curl::Error),

    #[error("version-check endpoint returned HTTP {0}")]
    Status(u32),

    #[error("malformed version-check response")]
    Json(#[from] serde_json::Error),

    #[error("version-check response has no offers")]
    NoOffers,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_country_message_names_code_and_lang_flag() {
        let msg = Error::UnknownCountry {
            country: "pt".to_string(),
        }
        .to_string();
        assert!(msg.contains("\"pt\""));
        assert!(msg.contains("-lang"));
    }

    #[test]
    fn version_not_found_message() {
        let err = Error::VersionNotFound {
            version: "9.9.9".to_string(),
        };
        assert_eq!(err.to_string(), "version 9.9.9 does not exist");
    }

    #[test]
    fn download_error_carries_status() {
        let err = Error::Download {
            url: "https://download.wordpress.org/wordpress-6.4.2.tar.gz".to_string(),
            status: 503,
        };
        assert!(err.to_string().contains("HTTP 503"));
    }

    #[test]
    fn version_check_error_converts() {
        let err: Error = VersionCheckError::NoOffers.into();
        assert!(matches!(
            err,
            Error::VersionResolution(VersionCheckError::NoOffers)
        ));
        assert!(err.to_string().contains("latest WordPress version"));
    }

    #[test]
    fn version_resolution_chain_has_no_repeats() {
        let err: Error = VersionCheckError::NoOffers.into();
        let chain = format!("{:#}", anyhow::Error::from(err));
        assert_eq!(
            chain,
            "could not determine the latest WordPress version: version-check response has no offers"
        );

        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = VersionCheckError::Json(json).into();
        let chain = format!("{:#}", anyhow::Error::from(err));
        assert_eq!(chain.matches("malformed version-check response").count(), 1);
        assert_eq!(chain.matches("latest WordPress version").count(), 1);
    }
}
