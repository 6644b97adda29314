//! Countries the store sells to, as offered by the country selector.

use common::localization::I18nLocale;
use serde::Deserialize;
use tracing::info;

use crate::storefront_utils::storefront_graphql::storefront_query;

pub const LOCALIZATION_QUERY: &str = "
  query Localization {
    localization {
      availableCountries {
        isoCode
        name
        currency {
          isoCode
          symbol
        }
        availableLanguages {
          isoCode
        }
      }
    }
  }
";

#[derive(Debug, Deserialize)]
struct LocalizationResponse {
    localization: RawLocalization,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLocalization {
    available_countries: Vec<RawCountry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCountry {
    pub iso_code: String,
    pub name: String,
    pub currency: RawCurrency,
    #[serde(default)]
    pub available_languages: Vec<RawLanguage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCurrency {
    pub iso_code: String,
    pub symbol: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLanguage {
    pub iso_code: String,
}

/// One locale per country, labelled `"Name (CUR symbol)"`. The default
/// locale is listed first whether or not the API returns it.
pub fn map_countries(countries: Vec<RawCountry>) -> Vec<I18nLocale> {
    let default_locale = I18nLocale::default();
    let mut locales = vec![default_locale.clone()];
    for country in countries {
        let language = country.available_languages.first().map(|l| l.iso_code.as_str()).unwrap_or("EN");
        let label = format!("{} ({} {})", country.name, country.currency.iso_code, country.currency.symbol);
        let locale = I18nLocale::new(language, &country.iso_code, &country.currency.iso_code, &label);
        if locale.country == default_locale.country {
            continue;
        }
        locales.push(locale);
    }
    locales
}

pub async fn list_countries() -> anyhow::Result<Vec<I18nLocale>> {
    let response: LocalizationResponse = storefront_query(LOCALIZATION_QUERY, serde_json::json!({})).await?;
    let locales = map_countries(response.localization.available_countries);
    info!("storefront offers {} countries", locales.len());
    Ok(locales)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_locale_comes_first() {
        let raw: RawLocalization = serde_json::from_value(json!({
            "availableCountries": [
                {
                    "isoCode": "US",
                    "name": "United States",
                    "currency": {"isoCode": "USD", "symbol": "$"},
                    "availableLanguages": [{"isoCode": "EN"}]
                },
                {
                    "isoCode": "CZ",
                    "name": "Czechia",
                    "currency": {"isoCode": "CZK", "symbol": "Kč"},
                    "availableLanguages": [{"isoCode": "CS"}]
                },
                {
                    "isoCode": "DE",
                    "name": "Germany",
                    "currency": {"isoCode": "EUR", "symbol": "€"},
                    "availableLanguages": []
                }
            ]
        }))
        .unwrap();

        let locales = map_countries(raw.available_countries);
        assert_eq!(locales.len(), 3);
        assert_eq!(locales[0], I18nLocale::default());
        assert_eq!(locales[1].prefix_key(), "en-us");
        assert_eq!(locales[1].label, "United States (USD $)");
        assert_eq!(locales[2].prefix_key(), "en-de");
        assert_eq!(locales[2].currency, "EUR");
    }
}
