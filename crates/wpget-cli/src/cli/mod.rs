//! CLI for the wpget WordPress downloader.

mod legacy;

use anyhow::{Context, Result};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use wpget_core::config::{self, Settings, UrlScheme};
use wpget_core::locale::DEFAULT_COUNTRY;
use wpget_core::run::{self, Request};

/// Download the latest (or a given) WordPress release archive for a locale.
#[derive(Debug, Parser)]
#[command(name = "wpget")]
#[command(disable_version_flag = true)]
#[command(
    about = "Download a WordPress release archive",
    long_about = None,
    after_help = "Single-dash long flags are accepted too: wpget -country es -version 6.4.2"
)]
pub struct Cli {
    /// Two-letter country code of the build to download (en-english, es-spanish, de-german, fr-french, it-italian).
    #[arg(long, default_value = DEFAULT_COUNTRY, value_name = "XX")]
    pub country: String,

    /// Locale code in the format xx_YY; required when the country code is not known.
    #[arg(long, value_name = "xx_YY")]
    pub lang: Option<String>,

    /// WordPress version to download in the format X.Y.Z; skips the latest-version check.
    #[arg(long, value_name = "X.Y.Z")]
    pub version: Option<String>,

    /// Directory to write the archive to (default: current directory).
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Settings file (default: ~/.config/wpget/config.toml, if present).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the version-check endpoint.
    #[arg(long, value_name = "URL")]
    pub version_url: Option<String>,

    /// Override the download host.
    #[arg(long, value_name = "URL")]
    pub download_base: Option<String>,

    /// Archive URL layout: "versioned" or "locale-subdomain".
    #[arg(long, value_name = "SCHEME")]
    pub url_scheme: Option<UrlScheme>,

    /// Debug-level logging (RUST_LOG takes precedence).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parses process arguments, accepting Go-style `-flag value` spellings.
    pub fn parse_args() -> Self {
        Self::parse_from_legacy(std::env::args_os())
    }

    pub fn parse_from_legacy<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Cli::parse_from(legacy::normalize_args(args))
    }

    pub fn request(&self) -> Request {
        Request {
            country: self.country.clone(),
            locale: self.lang.clone(),
            version: self.version.clone(),
        }
    }

    /// Settings file values with command-line overrides applied on top.
    pub fn settings(&self) -> Result<Settings> {
        let mut cfg = config::load(self.config.as_deref())?;
        if let Some(url) = &self.version_url {
            cfg.version_check_url = url.clone();
        }
        if let Some(base) = &self.download_base {
            cfg.download_base_url = Some(base.clone());
        }
        if let Some(scheme) = self.url_scheme {
            cfg.url_scheme = scheme;
        }
        cfg.validate()?;
        tracing::debug!("settings: {:?}", cfg);
        Ok(cfg)
    }

    pub fn run(&self) -> Result<()> {
        let settings = self.settings()?;
        let output_dir = match &self.output_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().context("cannot determine current directory")?,
        };
        let outcome = run::run(&self.request(), &settings, &output_dir)?;
        tracing::debug!(
            "{} bytes from {} written to {}",
            outcome.bytes,
            outcome.target.url,
            outcome.path.display()
        );
        Ok(())
    }
}
