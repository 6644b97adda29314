//! Filter predicates, as carried by facet values, URL parameters and API variables.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// Broad shape of a predicate, used to pick how a facet is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    PriceRange,
    Categorical,
    Boolean,
}

/// Inclusive price bounds. Either side may be open.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceRange {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_price_bound",
        deserialize_with = "deserialize_price_bound"
    )]
    pub min: Option<f64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_price_bound",
        deserialize_with = "deserialize_price_bound"
    )]
    pub max: Option<f64>,
}

impl PriceRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Reads one price input box. Blank or unreadable input is an open bound.
    pub fn parse_bound(input: &str) -> Option<f64> {
        let input = input.trim().replace(',', ".");
        input.parse::<f64>().ok().filter(|v| v.is_finite() && *v >= 0.0)
    }

    /// Inverse of [`PriceRange::parse_bound`] for seeding the inputs.
    pub fn format_bound(bound: Option<f64>) -> String {
        match bound {
            Some(v) if v.fract() == 0.0 => format!("{v:.0}"),
            Some(v) => v.to_string(),
            None => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantOptionFilter {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetafieldFilter {
    pub namespace: String,
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFilter {
    pub id: String,
}

/// One filter predicate. Serializes as the single-key object the storefront
/// API uses for `ProductFilter`, e.g. `{"price":{"min":100}}` or
/// `{"variantOption":{"name":"Color","value":"Red"}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProductFilter {
    Price(PriceRange),
    Available(bool),
    ProductType(String),
    ProductVendor(String),
    Tag(String),
    Category(CategoryFilter),
    VariantOption(VariantOptionFilter),
    ProductMetafield(MetafieldFilter),
    VariantMetafield(MetafieldFilter),
    TaxonomyMetafield(MetafieldFilter),
}

impl ProductFilter {
    /// The JSON key of the predicate; also the suffix of its URL parameter.
    pub fn dimension(&self) -> &'static str {
        match self {
            Self::Price(_) => "price",
            Self::Available(_) => "available",
            Self::ProductType(_) => "productType",
            Self::ProductVendor(_) => "productVendor",
            Self::Tag(_) => "tag",
            Self::Category(_) => "category",
            Self::VariantOption(_) => "variantOption",
            Self::ProductMetafield(_) => "productMetafield",
            Self::VariantMetafield(_) => "variantMetafield",
            Self::TaxonomyMetafield(_) => "taxonomyMetafield",
        }
    }

    pub fn kind(&self) -> FilterKind {
        match self {
            Self::Price(_) => FilterKind::PriceRange,
            Self::Available(_) => FilterKind::Boolean,
            _ => FilterKind::Categorical,
        }
    }

    /// Serialized value of the predicate, without its dimension key.
    /// This is what is stored under `filter.<dimension>` in the URL.
    pub fn value_json(&self) -> String {
        let value = match self {
            Self::Price(range) => serde_json::to_string(range),
            Self::Available(available) => serde_json::to_string(available),
            Self::ProductType(s) | Self::ProductVendor(s) | Self::Tag(s) => serde_json::to_string(s),
            Self::Category(category) => serde_json::to_string(category),
            Self::VariantOption(option) => serde_json::to_string(option),
            Self::ProductMetafield(field) | Self::VariantMetafield(field) | Self::TaxonomyMetafield(field) => {
                serde_json::to_string(field)
            }
        };
        value.unwrap_or_default()
    }

    /// Parses a facet value's opaque `input` payload.
    pub fn from_input(raw_input: &str) -> Result<Self, FilterParseError> {
        serde_json::from_str(raw_input).map_err(FilterParseError::Json)
    }

    /// Parses a URL entry: the dimension (key without prefix) and its serialized value.
    pub fn from_param(dimension: &str, value_json: &str) -> Result<Self, FilterParseError> {
        let value: serde_json::Value = serde_json::from_str(value_json).map_err(FilterParseError::Json)?;
        let mut wrapped = serde_json::Map::new();
        wrapped.insert(dimension.to_string(), value);
        serde_json::from_value(serde_json::Value::Object(wrapped)).map_err(FilterParseError::Json)
    }

    pub fn as_price(&self) -> Option<&PriceRange> {
        match self {
            Self::Price(range) => Some(range),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum FilterParseError {
    Json(serde_json::Error),
    NotAFilterParam(String),
}

impl std::fmt::Display for FilterParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "Failed to parse filter: {}", err),
            Self::NotAFilterParam(key) => write!(f, "Not a filter parameter: {}", key),
        }
    }
}

impl std::error::Error for FilterParseError {}

// Whole amounts are written as integers so `{"min":100}` from the API and
// from the price inputs compare equal as strings.
fn serialize_price_bound<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) if v.fract() == 0.0 && v.abs() < 9.0e15 => serializer.serialize_i64(*v as i64),
        Some(v) => serializer.serialize_f64(*v),
        None => serializer.serialize_none(),
    }
}

fn deserialize_price_bound<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::Number(n)) => Ok(n.as_f64()),
        Some(serde_json::Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("invalid price bound: {s:?}"))),
        Some(other) => Err(de::Error::custom(format!("invalid price bound: {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_serializes_whole_numbers_without_fraction() {
        let filter = ProductFilter::Price(PriceRange::new(Some(100.0), None));
        assert_eq!(filter.value_json(), r#"{"min":100}"#);
        assert_eq!(serde_json::to_string(&filter).unwrap(), r#"{"price":{"min":100}}"#);

        let filter = ProductFilter::Price(PriceRange::new(Some(9.5), Some(20.0)));
        assert_eq!(filter.value_json(), r#"{"min":9.5,"max":20}"#);
    }

    #[test]
    fn price_inputs() {
        assert_eq!(PriceRange::parse_bound(" 100 "), Some(100.0));
        assert_eq!(PriceRange::parse_bound("12,5"), Some(12.5));
        assert_eq!(PriceRange::parse_bound(""), None);
        assert_eq!(PriceRange::parse_bound("abc"), None);
        assert_eq!(PriceRange::parse_bound("-3"), None);
        assert_eq!(PriceRange::parse_bound("NaN"), None);
        assert_eq!(PriceRange::format_bound(Some(100.0)), "100");
        assert_eq!(PriceRange::format_bound(Some(9.5)), "9.5");
        assert_eq!(PriceRange::format_bound(None), "");
    }

    #[test]
    fn parses_category_and_taxonomy_inputs() {
        let category = ProductFilter::from_input(r#"{"category":{"id":"gid://shopify/TaxonomyCategory/aa-1"}}"#).unwrap();
        assert_eq!(category, ProductFilter::Category(CategoryFilter { id: "gid://shopify/TaxonomyCategory/aa-1".into() }));
        assert_eq!(category.dimension(), "category");
        assert_eq!(category.kind(), FilterKind::Categorical);

        let taxonomy = ProductFilter::from_input(
            r#"{"taxonomyMetafield":{"namespace":"shopify","key":"color-pattern","value":"gid://shopify/Metaobject/1"}}"#,
        )
        .unwrap();
        assert_eq!(taxonomy.dimension(), "taxonomyMetafield");
        assert_eq!(ProductFilter::from_param(taxonomy.dimension(), &taxonomy.value_json()).unwrap(), taxonomy);
    }

    #[test]
    fn parses_facet_inputs_from_the_api() {
        let variant = ProductFilter::from_input(r#"{"variantOption":{"name":"Color","value":"Red"}}"#).unwrap();
        assert_eq!(
            variant,
            ProductFilter::VariantOption(VariantOptionFilter { name: "Color".into(), value: "Red".into() })
        );
        assert_eq!(variant.dimension(), "variantOption");
        assert_eq!(variant.kind(), FilterKind::Categorical);

        let available = ProductFilter::from_input(r#"{"available":true}"#).unwrap();
        assert_eq!(available, ProductFilter::Available(true));
        assert_eq!(available.kind(), FilterKind::Boolean);

        let price = ProductFilter::from_input(r#"{"price":{"min":0,"max":1200}}"#).unwrap();
        assert_eq!(price.as_price(), Some(&PriceRange::new(Some(0.0), Some(1200.0))));
        assert_eq!(price.kind(), FilterKind::PriceRange);
    }

    #[test]
    fn price_bounds_accept_numeric_strings() {
        let price = ProductFilter::from_param("price", r#"{"min":"15","max":null}"#).unwrap();
        assert_eq!(price, ProductFilter::Price(PriceRange::new(Some(15.0), None)));
    }

    #[test]
    fn from_param_round_trips_value_json() {
        let filter = ProductFilter::ProductMetafield(MetafieldFilter {
            namespace: "custom".into(),
            key: "material".into(),
            value: "cotton".into(),
        });
        let parsed = ProductFilter::from_param(filter.dimension(), &filter.value_json()).unwrap();
        assert_eq!(parsed, filter);
    }

    #[test]
    fn rejects_unknown_dimensions_and_bad_json() {
        assert!(ProductFilter::from_param("colour", r#""red""#).is_err());
        assert!(ProductFilter::from_param("tag", "{not json").is_err());
        assert!(ProductFilter::from_param("price", r#"{"min":"cheap"}"#).is_err());
        assert!(ProductFilter::from_input(r#"{"tag":"a","available":true}"#).is_err());
    }
}
