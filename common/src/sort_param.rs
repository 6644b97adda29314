//! Sort options offered by the listing pages.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortParam {
    #[default]
    Featured,
    PriceLowHigh,
    PriceHighLow,
    BestSelling,
    Newest,
}

/// Sort key and direction as understood by the storefront API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortValues {
    pub sort_key: &'static str,
    pub reverse: bool,
}

impl SortValues {
    const fn new(sort_key: &'static str, reverse: bool) -> Self {
        Self { sort_key, reverse }
    }
}

impl SortParam {
    /// Menu order. The first entry is the default.
    pub const ALL: [SortParam; 5] = [
        SortParam::Featured,
        SortParam::PriceLowHigh,
        SortParam::PriceHighLow,
        SortParam::BestSelling,
        SortParam::Newest,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceLowHigh => "price-low-high",
            Self::PriceHighLow => "price-high-low",
            Self::BestSelling => "best-selling",
            Self::Newest => "newest",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|sort| sort.key() == key)
    }

    /// Absent or unknown values fall back to the default, never an error.
    pub fn decode(value: Option<&str>) -> Self {
        value.and_then(Self::from_key).unwrap_or_default()
    }

    /// `ProductCollectionSortKeys` for collection listings.
    pub fn collection_sort_values(self) -> SortValues {
        match self {
            Self::Featured => SortValues::new("MANUAL", false),
            Self::PriceLowHigh => SortValues::new("PRICE", false),
            Self::PriceHighLow => SortValues::new("PRICE", true),
            Self::BestSelling => SortValues::new("BEST_SELLING", false),
            Self::Newest => SortValues::new("CREATED", true),
        }
    }

    /// `ProductSortKeys` for the all-products listing.
    pub fn product_sort_values(self) -> SortValues {
        match self {
            Self::Featured => SortValues::new("RELEVANCE", false),
            Self::PriceLowHigh => SortValues::new("PRICE", false),
            Self::PriceHighLow => SortValues::new("PRICE", true),
            Self::BestSelling => SortValues::new("BEST_SELLING", false),
            Self::Newest => SortValues::new("CREATED_AT", true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_defaults_to_featured() {
        assert_eq!(SortParam::decode(None), SortParam::Featured);
        assert_eq!(SortParam::decode(Some("")), SortParam::Featured);
        assert_eq!(SortParam::decode(Some("cheapest-first")), SortParam::Featured);
        assert_eq!(SortParam::decode(Some("newest")), SortParam::Newest);
    }

    #[test]
    fn keys_round_trip() {
        for sort in SortParam::ALL {
            assert_eq!(SortParam::from_key(sort.key()), Some(sort));
        }
    }

    #[test]
    fn maps_to_backend_sort_keys() {
        assert_eq!(SortParam::PriceHighLow.collection_sort_values(), SortValues::new("PRICE", true));
        assert_eq!(SortParam::Newest.collection_sort_values(), SortValues::new("CREATED", true));
        assert_eq!(SortParam::Newest.product_sort_values(), SortValues::new("CREATED_AT", true));
        assert_eq!(SortParam::Featured.product_sort_values(), SortValues::new("RELEVANCE", false));
    }
}
