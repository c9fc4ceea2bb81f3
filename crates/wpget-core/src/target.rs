//! Download URL and local file name for a release archive.

use crate::config::UrlScheme;
use crate::locale::Locale;

/// Where to fetch the archive from and what to call it locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTarget {
    pub url: String,
    pub file_name: String,
}

impl DownloadTarget {
    pub fn new(scheme: UrlScheme, base: &str, locale: &Locale, version: &str) -> Self {
        Self {
            url: build_download_url(scheme, base, locale, version),
            file_name: archive_file_name(locale, version),
        }
    }
}

/// `wordpress-<version>.tar.gz`, or `wordpress-<version>-<locale>.tar.gz` off the default country.
pub fn archive_file_name(locale: &Locale, version: &str) -> String {
    if locale.is_default() {
        format!("wordpress-{}.tar.gz", file_component(version))
    } else {
        format!(
            "wordpress-{}-{}.tar.gz",
            file_component(version),
            file_component(&locale.code)
        )
    }
}

/// Keeps user-supplied parts inside a single path component: NUL, `/`, `\`,
/// whitespace and control characters become `_`.
fn file_component(part: &str) -> String {
    part.chars()
        .map(|c| {
            if c == '/' || c == '\\' || c.is_control() || c.is_whitespace() {
                '_'
            } else {
                c
            }
        })
        .collect()
}

/// Builds the archive URL for `scheme`.
///
/// - `Versioned`: `<base>/wordpress-<version>[-<locale>].tar.gz`
/// - `LocaleSubdomain`: `<base>/latest[-<locale>].tar.gz`, with `{country}`
///   in `base` replaced by the country code. `version` is not part of the URL.
pub fn build_download_url(scheme: UrlScheme, base: &str, locale: &Locale, version: &str) -> String {
    let base = base.trim_end_matches('/');
    match scheme {
        UrlScheme::Versioned => format!("{}/{}", base, archive_file_name(locale, version)),
        UrlScheme::LocaleSubdomain => {
            let host = base.replace("{country}", &locale.country);
            if locale.is_default() {
                format!("{}/latest.tar.gz", host)
            } else {
                format!("{}/latest-{}.tar.gz", host, locale.code)
            }
        }
    }
}
