use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_VERSION_CHECK_URL: &str = "https://api.wordpress.org/core/version-check/1.7/";
pub const DEFAULT_DOWNLOAD_BASE_URL: &str = "https://download.wordpress.org";
/// `{country}` is replaced with the country code.
pub const DEFAULT_SUBDOMAIN_BASE_URL: &str = "https://{country}.wordpress.org";

/// How archive URLs are laid out on the download host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UrlScheme {
    /// `<base>/wordpress-<version>[-<locale>].tar.gz`
    #[default]
    Versioned,
    /// `<base with {country}>/latest[-<locale>].tar.gz` (always the newest release).
    LocaleSubdomain,
}

impl std::str::FromStr for UrlScheme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "versioned" => Ok(UrlScheme::Versioned),
            "locale-subdomain" | "subdomain" => Ok(UrlScheme::LocaleSubdomain),
            other => Err(format!(
                "unknown url scheme {:?} (expected \"versioned\" or \"locale-subdomain\")",
                other
            )),
        }
    }
}

/// Settings loaded from `~/.config/wpget/config.toml`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Endpoint returning `{ "offers": [ { "current": ... } ] }`.
    pub version_check_url: String,
    /// Download host. Defaults depend on `url_scheme` when unset.
    pub download_base_url: Option<String>,
    pub url_scheme: UrlScheme,
    /// Seconds allowed for establishing a connection.
    pub connect_timeout_secs: u64,
    /// Overall per-request limit in seconds (None = no limit).
    pub timeout_secs: Option<u64>,
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version_check_url: DEFAULT_VERSION_CHECK_URL.to_string(),
            download_base_url: None,
            url_scheme: UrlScheme::default(),
            connect_timeout_secs: 30,
            timeout_secs: None,
            user_agent: concat!("wpget/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Settings {
    /// Download host for the configured scheme, falling back to the built-in default.
    pub fn download_base(&self) -> &str {
        match &self.download_base_url {
            Some(base) => base.as_str(),
            None => match self.url_scheme {
                UrlScheme::Versioned => DEFAULT_DOWNLOAD_BASE_URL,
                UrlScheme::LocaleSubdomain => DEFAULT_SUBDOMAIN_BASE_URL,
            },
        }
    }

    /// Rejects endpoint values that cannot be requested.
    pub fn validate(&self) -> Result<()> {
        check_url("version_check_url", &self.version_check_url)?;
        // `{country}` is not a valid host character; check with a sample substituted.
        let base = self.download_base().replace("{country}", "en");
        check_url("download_base_url", &base)?;
        if self.connect_timeout_secs == 0 {
            return Err(Error::Config(
                "connect_timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

fn check_url(key: &str, value: &str) -> Result<()> {
    let parsed = url::Url::parse(value)
        .map_err(|e| Error::Config(format!("{} {:?}: {}", key, value, e)))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(Error::Config(format!(
            "{} {:?}: unsupported scheme {:?}",
            key, value, other
        ))),
    }
}

/// Default settings path under the XDG config home.
pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::new().map_err(|e| Error::Config(e.to_string()))?;
    Ok(xdg_dirs.get_config_home().join("wpget").join("config.toml"))
}

/// Parses settings from a TOML file.
pub fn load_from(path: &Path) -> Result<Settings> {
    let data = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let cfg: Settings = toml::from_str(&data)
        .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
    Ok(cfg)
}

/// Loads settings from `explicit` if given (it must exist), otherwise from the
/// default path if a file is there. Never creates a file.
pub fn load(explicit: Option<&Path>) -> Result<Settings> {
    let cfg = match explicit {
        Some(path) => load_from(path)?,
        None => {
            let path = config_path()?;
            if path.is_file() {
                tracing::debug!("reading settings from {}", path.display());
                load_from(&path)?
            } else {
                Settings::default()
            }
        }
    };
    cfg.validate()?;
    Ok(cfg)
}
