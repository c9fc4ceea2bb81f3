//! Country code to locale code mapping.

use crate::error::{Error, Result};

/// Country code used when none is given. Downloads for it carry no locale suffix.
pub const DEFAULT_COUNTRY: &str = "en";

/// Known country codes and the locale suffix of their archives.
pub const LOCALES: &[(&str, &str)] = &[
    ("en", ""),
    ("es", "es_ES"),
    ("de", "de_DE"),
    ("fr", "fr_FR"),
    ("it", "it_IT"),
];

/// Country code plus the locale its archive is published under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    /// Lowercase country code (e.g. `es`).
    pub country: String,
    /// Locale code (e.g. `es_ES`); empty for the default English build.
    pub code: String,
}

impl Locale {
    /// True for the untranslated build, whose file and URL have no locale suffix.
    pub fn is_default(&self) -> bool {
        self.country == DEFAULT_COUNTRY
    }
}

/// Looks up the locale code for a known country code.
pub fn lookup(country: &str) -> Option<&'static str> {
    LOCALES
        .iter()
        .find(|(cc, _)| *cc == country)
        .map(|(_, code)| *code)
}

/// Resolves the locale for `country`.
///
/// The country code is trimmed and lowercased. A known code always wins over
/// `explicit`; an unknown code needs `explicit`, otherwise
/// [`Error::UnknownCountry`] is returned.
pub fn resolve_locale(country: &str, explicit: Option<&str>) -> Result<Locale> {
    let country = country.trim().to_lowercase();
    let country = if country.is_empty() {
        DEFAULT_COUNTRY.to_string()
    } else {
        country
    };

    if let Some(code) = lookup(&country) {
        return Ok(Locale {
            country,
            code: code.to_string(),
        });
    }

    match explicit.map(str::trim).filter(|s| !s.is_empty()) {
        Some(code) => Ok(Locale {
            country,
            code: code.to_string(),
        }),
        None => Err(Error::UnknownCountry { country }),
    }
}
