//! Applied-filter chips: URL filters matched back to the facets of the current result.

use serde::{Deserialize, Serialize};

use crate::{
    currency::format_currency,
    localization::I18nLocale,
    product_filter::{PriceRange, ProductFilter},
    storefront_model::Facet,
    ui_text::UiText,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedFilter {
    pub label: String,
    pub filter: ProductFilter,
}

/// `"<min> - <max>"` in the locale's currency. Without an upper bound the
/// generic price label is used.
pub fn price_filter_label(range: &PriceRange, locale: &I18nLocale) -> String {
    match range.max {
        Some(max) => format!(
            "{} - {}",
            format_currency(range.min.unwrap_or(0.0), locale),
            format_currency(max, locale)
        ),
        None => UiText::for_language(&locale.language).price.to_string(),
    }
}

/// Builds one chip per URL filter that matches a facet value of the current
/// result set. A price filter matches the price facet; any other filter must
/// equal a value's input. Filters without a match are left out.
pub fn derive_applied_filters(facets: &[Facet], filters: &[ProductFilter], locale: &I18nLocale) -> Vec<AppliedFilter> {
    let values = facets
        .iter()
        .flat_map(|facet| facet.values.iter())
        .filter_map(|value| value.filter().map(|input| (value, input)))
        .collect::<Vec<_>>();

    filters
        .iter()
        .filter_map(|filter| {
            let (value, _) = values.iter().find(|(_, input)| match (filter, input) {
                (ProductFilter::Price(_), ProductFilter::Price(_)) => true,
                _ => input == filter,
            })?;
            let label = match filter {
                ProductFilter::Price(range) => price_filter_label(range, locale),
                _ => value.label.clone(),
            };
            Some(AppliedFilter { label, filter: filter.clone() })
        })
        .collect()
}
