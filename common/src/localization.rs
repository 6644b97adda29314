//! Locales served under a path prefix such as `/en-us`.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct I18nLocale {
    /// `LanguageCode`, upper case (`CS`, `EN`).
    pub language: String,
    /// `CountryCode`, upper case (`CZ`, `US`).
    pub country: String,
    pub currency: String,
    pub label: String,
}

impl Default for I18nLocale {
    fn default() -> Self {
        Self::new("CS", "CZ", "CZK", "Česká republika (CZK Kč)")
    }
}

impl I18nLocale {
    pub fn new(language: &str, country: &str, currency: &str, label: &str) -> Self {
        Self {
            language: language.to_uppercase(),
            country: country.to_uppercase(),
            currency: currency.to_uppercase(),
            label: label.to_string(),
        }
    }

    /// `en-us`
    pub fn prefix_key(&self) -> String {
        format!("{}-{}", self.language, self.country).to_lowercase()
    }

    pub fn is_default(&self) -> bool {
        self.prefix_key() == I18nLocale::default().prefix_key()
    }

    pub fn same_market(&self, other: &I18nLocale) -> bool {
        self.language == other.language && self.country == other.country
    }
}

/// Currency used when a path prefix names a country we have no table entry for.
const FALLBACK_CURRENCY: &str = "USD";

const KNOWN_COUNTRY_CURRENCIES: &[(&str, &str)] = &[
    ("CZ", "CZK"),
    ("SK", "EUR"),
    ("DE", "EUR"),
    ("AT", "EUR"),
    ("FR", "EUR"),
    ("PL", "PLN"),
    ("GB", "GBP"),
    ("US", "USD"),
    ("CA", "CAD"),
];

pub fn currency_for_country(country: &str) -> &'static str {
    KNOWN_COUNTRY_CURRENCIES
        .iter()
        .find(|(code, _)| code.eq_ignore_ascii_case(country))
        .map(|(_, currency)| *currency)
        .unwrap_or(FALLBACK_CURRENCY)
}

#[derive(Debug, PartialEq)]
pub struct LocaleParseError(pub String);

impl std::fmt::Display for LocaleParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Not a locale prefix: {}", self.0)
    }
}

impl std::error::Error for LocaleParseError {}

/// Parses a path prefix like `en-us`. Anything else is rejected so that
/// ordinary path segments never match as a locale.
impl FromStr for I18nLocale {
    type Err = LocaleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((language, country)) = s.split_once('-') else {
            return Err(LocaleParseError(s.to_string()));
        };
        let is_code = |code: &str| code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic());
        if !is_code(language) || !is_code(country) {
            return Err(LocaleParseError(s.to_string()));
        }
        let currency = currency_for_country(country);
        let label = format!("{} ({})", country.to_uppercase(), currency);
        Ok(I18nLocale::new(language, country, currency, &label))
    }
}

impl Display for I18nLocale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.prefix_key())
    }
}

/// Where the country selector sends the visitor: the current path and query
/// under the chosen locale's prefix. The default locale has no prefix.
pub fn country_url_path(country_locale: &I18nLocale, default_locale: &I18nLocale, path_without_locale: &str) -> String {
    if country_locale.prefix_key() == default_locale.prefix_key() {
        return path_without_locale.to_string();
    }
    format!("/{}{}", country_locale.prefix_key(), path_without_locale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_path_prefixes() {
        let locale: I18nLocale = "en-us".parse().unwrap();
        assert_eq!(locale.language, "EN");
        assert_eq!(locale.country, "US");
        assert_eq!(locale.currency, "USD");
        assert_eq!(locale.to_string(), "en-us");

        let locale: I18nLocale = "de-AT".parse().unwrap();
        assert_eq!(locale.currency, "EUR");

        assert!("products".parse::<I18nLocale>().is_err());
        assert!("eng-us".parse::<I18nLocale>().is_err());
        assert!("e1-us".parse::<I18nLocale>().is_err());
    }

    #[test]
    fn country_paths() {
        let default_locale = I18nLocale::default();
        let german = I18nLocale::new("DE", "DE", "EUR", "Deutschland (EUR €)");
        assert_eq!(
            country_url_path(&german, &default_locale, "/collections/shoes?sort=newest"),
            "/de-de/collections/shoes?sort=newest"
        );
        assert_eq!(
            country_url_path(&default_locale, &default_locale, "/collections/shoes"),
            "/collections/shoes"
        );
        assert!(default_locale.is_default());
        assert!(!german.is_default());
    }
}
