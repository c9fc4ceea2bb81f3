//! One linear pass: locale, version, target, download.

use crate::config::{Settings, UrlScheme};
use crate::error::{Error, Result};
use crate::fetch;
use crate::locale::{self, DEFAULT_COUNTRY};
use crate::target::DownloadTarget;
use crate::version;
use std::path::{Path, PathBuf};

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Two-letter country code, any case.
    pub country: String,
    /// Locale override, needed only for countries missing from the table.
    pub locale: Option<String>,
    /// Release to fetch; `None` means ask the version-check API.
    pub version: Option<String>,
}

impl Default for Request {
    fn default() -> Self {
        Self {
            country: DEFAULT_COUNTRY.to_string(),
            locale: None,
            version: None,
        }
    }
}

/// Progress of a run, logged on each transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    ConfigResolved,
    VersionResolved,
    Downloading,
    Written,
    Done,
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub version: String,
    pub target: DownloadTarget,
    pub path: PathBuf,
    pub bytes: u64,
}

fn check_scheme(request: &Request, settings: &Settings) -> Result<()> {
    match request.version.as_deref() {
        Some(v) if !v.is_empty() && settings.url_scheme == UrlScheme::LocaleSubdomain => {
            Err(Error::Config(format!(
                "version {} was requested but the locale-subdomain url scheme only serves the latest release; use the versioned scheme",
                v
            )))
        }
        _ => Ok(()),
    }
}

fn enter(stage: Stage) {
    tracing::debug!(?stage, "stage");
}

/// Resolves and downloads the requested archive into `output_dir`.
///
/// Locale resolution happens before any request, so an unknown country
/// fails without network access. Nothing is retried.
///
/// The locale-subdomain scheme only serves the `latest` alias, so it refuses
/// an explicit version and names the file after the checked latest version.
pub fn run(request: &Request, settings: &Settings, output_dir: &Path) -> Result<Outcome> {
    enter(Stage::Start);
    let locale = locale::resolve_locale(&request.country, request.locale.as_deref())?;
    check_scheme(request, settings)?;
    enter(Stage::ConfigResolved);

    let version = version::resolve_version(request.version.as_deref(), settings)?;
    enter(Stage::VersionResolved);

    let target = DownloadTarget::new(settings.url_scheme, settings.download_base(), &locale, &version);
    let path = output_dir.join(&target.file_name);

    tracing::info!("Downloading WordPress {}...", version);
    tracing::debug!("GET {} -> {}", target.url, path.display());
    enter(Stage::Downloading);
    let bytes = fetch::download(&target.url, &path, &version, settings)?;
    enter(Stage::Written);

    tracing::info!("\"{}\" file was successfully downloaded!", target.file_name);
    enter(Stage::Done);

    Ok(Outcome {
        version,
        target,
        path,
        bytes,
    })
}
