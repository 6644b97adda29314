//! Listing data exchanged between the storefront client and the UI.

use serde::{Deserialize, Serialize};

use crate::{
    product_filter::{FilterKind, ProductFilter},
    storefront_const::MAX_EAGER_IMAGE_COUNT,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacetType {
    List,
    Boolean,
    PriceRange,
}

impl FacetType {
    /// Maps the API's `FilterType` enum. Unknown types render as plain lists.
    pub fn from_api(value: &str) -> Self {
        match value {
            "PRICE_RANGE" => Self::PriceRange,
            "BOOLEAN" => Self::Boolean,
            _ => Self::List,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facet {
    pub id: String,
    pub label: String,
    pub facet_type: FacetType,
    pub values: Vec<FacetValue>,
}

impl Facet {
    /// Whether the facet has anything to offer: price inputs, or at least
    /// one value whose input decodes to a known filter.
    pub fn is_linkable(&self) -> bool {
        self.facet_type == FacetType::PriceRange || self.values.iter().any(|value| value.filter().is_some())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetValue {
    pub id: String,
    pub label: String,
    pub count: u64,
    /// Serialized `ProductFilter` this value applies, as sent by the API.
    pub input: String,
}

impl FacetValue {
    pub fn filter(&self) -> Option<ProductFilter> {
        ProductFilter::from_input(&self.input).ok()
    }

    pub fn is_price_range(&self) -> bool {
        self.filter().is_some_and(|f| f.kind() == FilterKind::PriceRange)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    pub amount: String,
    pub currency_code: String,
}

impl Money {
    pub fn value(&self) -> f64 {
        self.amount.trim().parse().unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    pub url: String,
    pub alt_text: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductBadge {
    Sale,
    New,
}

/// What a product card needs to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: String,
    pub title: String,
    pub handle: String,
    pub image: Option<ProductImage>,
    pub price: Money,
    /// Former price, only set when the product is discounted.
    pub compare_at_price: Option<Money>,
    pub badge: Option<ProductBadge>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageInfo {
    pub has_previous_page: bool,
    pub has_next_page: bool,
    pub start_cursor: Option<String>,
    pub end_cursor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductPage {
    pub products: Vec<ProductSummary>,
    pub page_info: PageInfo,
}

/// Everything one listing fetch returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductListing {
    pub title: String,
    pub description: Option<String>,
    pub facets: Vec<Facet>,
    pub page: ProductPage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListingSource {
    Collection { handle: String },
    AllProducts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageLoading {
    Eager,
    Lazy,
}

impl ImageLoading {
    pub fn for_index(index: usize) -> Self {
        if index < MAX_EAGER_IMAGE_COUNT { Self::Eager } else { Self::Lazy }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Eager => "eager",
            Self::Lazy => "lazy",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facets_without_known_inputs_are_not_linkable() {
        let value = |input: &str| FacetValue {
            id: "v".into(),
            label: "Value".into(),
            count: 1,
            input: input.into(),
        };
        let mut facet = Facet {
            id: "filter.p.m.custom.material".into(),
            label: "Material".into(),
            facet_type: FacetType::List,
            values: vec![value(r#"{"someFutureFilter":{"id":"1"}}"#)],
        };
        assert!(!facet.is_linkable());

        facet.values.push(value(r#"{"category":{"id":"gid://shopify/TaxonomyCategory/aa"}}"#));
        assert!(facet.is_linkable());

        let price = Facet { id: "filter.v.price".into(), label: "Price".into(), facet_type: FacetType::PriceRange, values: vec![] };
        assert!(price.is_linkable());
    }

    #[test]
    fn facet_value_exposes_its_filter() {
        let value = FacetValue {
            id: "filter.v.price".into(),
            label: "Price".into(),
            count: 0,
            input: r#"{"price":{"min":0,"max":1500}}"#.into(),
        };
        assert!(value.is_price_range());

        let broken = FacetValue { input: "{".into(), ..value };
        assert_eq!(broken.filter(), None);
        assert!(!broken.is_price_range());
    }

    #[test]
    fn first_cards_load_eagerly() {
        assert_eq!(ImageLoading::for_index(0), ImageLoading::Eager);
        assert_eq!(ImageLoading::for_index(MAX_EAGER_IMAGE_COUNT - 1), ImageLoading::Eager);
        assert_eq!(ImageLoading::for_index(MAX_EAGER_IMAGE_COUNT).as_str(), "lazy");
    }

    #[test]
    fn facet_type_from_api() {
        assert_eq!(FacetType::from_api("PRICE_RANGE"), FacetType::PriceRange);
        assert_eq!(FacetType::from_api("BOOLEAN"), FacetType::Boolean);
        assert_eq!(FacetType::from_api("LIST"), FacetType::List);
    }
}
