//! Locale codes such as `en_CA` or `fr-FR`.

use std::fmt;
use std::str::FromStr;

use crate::generator::GeneratorError;

/// Language data set used for generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    French,
    Portuguese,
    Japanese,
    Arabic,
    SimplifiedChinese,
    TraditionalChinese,
}

/// A parsed locale: a language plus an optional region.
///
/// The language selects the data set and must be one of `en`, `fr`, `pt`,
/// `ja`, `ar` or `zh`. Any two-letter region is accepted; it only changes the
/// output where a regional format exists (e.g. `CA`), otherwise the
/// language's data is used as-is. Chinese additionally uses the region to
/// pick simplified or traditional data.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    language: Language,
    language_code: String,
    region: Option<String>,
}

impl Locale {
    pub fn language(&self) -> Language {
        self.language
    }

    /// Upper-case region code, e.g. `CA`.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}_{}", self.language_code, region),
            None => f.write_str(&self.language_code),
        }
    }
}

impl FromStr for Locale {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unsupported = || GeneratorError::UnsupportedLocale(s.to_string());

        let mut parts = s.trim().split(['_', '-']);
        let language_code = parts
            .next()
            .filter(|p| p.len() == 2 && p.chars().all(|c| c.is_ascii_alphabetic()))
            .ok_or_else(unsupported)?
            .to_ascii_lowercase();
        let region = match parts.next() {
            Some(p) if p.len() == 2 && p.chars().all(|c| c.is_ascii_alphabetic()) => {
                Some(p.to_ascii_uppercase())
            }
            Some(_) => return Err(unsupported()),
            None => None,
        };
        if parts.next().is_some() {
            return Err(unsupported());
        }

        let language = match (language_code.as_str(), region.as_deref()) {
            ("en", _) => Language::English,
            ("fr", _) => Language::French,
            ("pt", _) => Language::Portuguese,
            ("ja", _) => Language::Japanese,
            ("ar", _) => Language::Arabic,
            ("zh", None | Some("CN") | Some("SG")) => Language::SimplifiedChinese,
            ("zh", Some("TW") | Some("HK") | Some("MO")) => Language::TraditionalChinese,
            _ => return Err(unsupported()),
        };

        Ok(Locale {
            language,
            language_code,
            region,
        })
    }
}
