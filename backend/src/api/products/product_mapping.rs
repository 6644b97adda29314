//! Storefront GraphQL payloads and their mapping onto the listing model.

use chrono::{DateTime, Utc};
use common::{
    storefront_const::NEW_ARRIVAL_DAYS,
    storefront_model::{Facet, FacetType, FacetValue, Money, PageInfo, ProductBadge, ProductImage, ProductPage, ProductSummary},
};
use serde::Deserialize;
use tracing::warn;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProductConnection {
    #[serde(default)]
    pub filters: Vec<RawFilter>,
    pub nodes: Vec<RawProduct>,
    pub page_info: RawPageInfo,
}

#[derive(Debug, Deserialize)]
pub struct RawFilter {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub filter_type: String,
    #[serde(default)]
    pub values: Vec<RawFilterValue>,
}

#[derive(Debug, Deserialize)]
pub struct RawFilterValue {
    pub id: String,
    pub label: String,
    pub count: u64,
    pub input: serde_json::Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProduct {
    pub id: String,
    pub title: String,
    pub handle: String,
    pub published_at: Option<String>,
    pub variants: RawVariants,
}

#[derive(Debug, Deserialize)]
pub struct RawVariants {
    pub nodes: Vec<RawVariant>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawVariant {
    pub image: Option<RawImage>,
    pub price: RawMoney,
    pub compare_at_price: Option<RawMoney>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawImage {
    pub url: String,
    pub alt_text: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMoney {
    pub amount: String,
    pub currency_code: String,
}

impl From<RawMoney> for Money {
    fn from(raw: RawMoney) -> Self {
        Money { amount: raw.amount, currency_code: raw.currency_code }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPageInfo {
    pub has_previous_page: bool,
    pub has_next_page: bool,
    pub start_cursor: Option<String>,
    pub end_cursor: Option<String>,
}

pub fn map_facet(raw: RawFilter) -> Facet {
    Facet {
        id: raw.id,
        label: raw.label,
        facet_type: FacetType::from_api(&raw.filter_type),
        values: raw
            .values
            .into_iter()
            .map(|value| FacetValue {
                id: value.id,
                label: value.label,
                count: value.count,
                // the API sends the input as a JSON string, but accept an inline object too
                input: match value.input {
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                },
            })
            .collect(),
    }
}

fn is_discounted(price: &Money, compare_at_price: &Money) -> bool {
    compare_at_price.value() > price.value()
}

fn is_new_arrival(published_at: Option<&str>, now: DateTime<Utc>) -> bool {
    let Some(published_at) = published_at else { return false };
    let Ok(published_at) = DateTime::parse_from_rfc3339(published_at) else { return false };
    now.signed_duration_since(published_at.with_timezone(&Utc)) < chrono::Duration::days(NEW_ARRIVAL_DAYS)
}

/// Maps one product node. Products without a variant cannot be shown or
/// bought and are skipped.
pub fn map_product(raw: RawProduct, now: DateTime<Utc>) -> Option<ProductSummary> {
    let Some(variant) = raw.variants.nodes.into_iter().next() else {
        warn!("skipping product {} without variants", raw.handle);
        return None;
    };
    let price = Money::from(variant.price);
    let compare_at_price = variant
        .compare_at_price
        .map(Money::from)
        .filter(|compare_at_price| is_discounted(&price, compare_at_price));
    let badge = if compare_at_price.is_some() {
        Some(ProductBadge::Sale)
    } else if is_new_arrival(raw.published_at.as_deref(), now) {
        Some(ProductBadge::New)
    } else {
        None
    };
    Some(ProductSummary {
        id: raw.id,
        title: raw.title,
        handle: raw.handle,
        image: variant.image.map(|image| ProductImage {
            url: image.url,
            alt_text: image.alt_text,
            width: image.width,
            height: image.height,
        }),
        price,
        compare_at_price,
        badge,
    })
}

pub fn map_connection(raw: RawProductConnection, now: DateTime<Utc>) -> (Vec<Facet>, ProductPage) {
    let facets = raw.filters.into_iter().map(map_facet).collect();
    let page = ProductPage {
        products: raw.nodes.into_iter().filter_map(|node| map_product(node, now)).collect(),
        page_info: PageInfo {
            has_previous_page: raw.page_info.has_previous_page,
            has_next_page: raw.page_info.has_next_page,
            start_cursor: raw.page_info.start_cursor,
            end_cursor: raw.page_info.end_cursor,
        },
    };
    (facets, page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-06-30T12:00:00Z").unwrap().with_timezone(&Utc)
    }

    fn connection() -> serde_json::Value {
        json!({
            "filters": [{
                "id": "filter.v.price",
                "label": "Price",
                "type": "PRICE_RANGE",
                "values": [{
                    "id": "filter.v.price",
                    "label": "Price",
                    "count": 0,
                    "input": "{\"price\":{\"min\":0,\"max\":120}}"
                }]
            }, {
                "id": "filter.v.availability",
                "label": "Availability",
                "type": "LIST",
                "values": [{
                    "id": "filter.v.availability.1",
                    "label": "In stock",
                    "count": 4,
                    "input": {"available": true}
                }]
            }],
            "nodes": [{
                "id": "gid://shopify/Product/1",
                "title": "Discounted hoodie",
                "handle": "hoodie",
                "publishedAt": "2023-01-01T00:00:00Z",
                "variants": {"nodes": [{
                    "image": {"url": "https://cdn.example/hoodie.png", "altText": null, "width": 800, "height": 800},
                    "price": {"amount": "80.0", "currencyCode": "USD"},
                    "compareAtPrice": {"amount": "100.0", "currencyCode": "USD"}
                }]}
            }, {
                "id": "gid://shopify/Product/2",
                "title": "Fresh cap",
                "handle": "cap",
                "publishedAt": "2024-06-20T00:00:00Z",
                "variants": {"nodes": [{
                    "image": null,
                    "price": {"amount": "20.0", "currencyCode": "USD"},
                    "compareAtPrice": {"amount": "20.0", "currencyCode": "USD"}
                }]}
            }, {
                "id": "gid://shopify/Product/3",
                "title": "Ghost",
                "handle": "ghost",
                "publishedAt": null,
                "variants": {"nodes": []}
            }],
            "pageInfo": {
                "hasPreviousPage": false,
                "hasNextPage": true,
                "startCursor": "s1",
                "endCursor": "e1"
            }
        })
    }

    #[test]
    fn maps_facets_products_and_page_info() {
        let raw: RawProductConnection = serde_json::from_value(connection()).unwrap();
        let (facets, page) = map_connection(raw, now());

        assert_eq!(facets.len(), 2);
        assert_eq!(facets[0].facet_type, FacetType::PriceRange);
        assert_eq!(facets[0].values[0].input, r#"{"price":{"min":0,"max":120}}"#);
        assert_eq!(facets[1].values[0].input, r#"{"available":true}"#);

        assert_eq!(page.products.len(), 2);
        assert_eq!(page.page_info.end_cursor.as_deref(), Some("e1"));
        assert!(page.page_info.has_next_page);
    }

    #[test]
    fn badges_sale_before_new() {
        let raw: RawProductConnection = serde_json::from_value(connection()).unwrap();
        let (_, page) = map_connection(raw, now());

        let hoodie = &page.products[0];
        assert_eq!(hoodie.badge, Some(ProductBadge::Sale));
        assert_eq!(hoodie.compare_at_price.as_ref().map(|m| m.amount.as_str()), Some("100.0"));
        assert_eq!(hoodie.image.as_ref().map(|i| i.url.as_str()), Some("https://cdn.example/hoodie.png"));

        let cap = &page.products[1];
        assert_eq!(cap.compare_at_price, None);
        assert_eq!(cap.badge, Some(ProductBadge::New));
    }

    #[test]
    fn new_arrival_window() {
        assert!(is_new_arrival(Some("2024-06-01T13:00:00Z"), now()));
        assert!(!is_new_arrival(Some("2024-05-01T00:00:00Z"), now()));
        assert!(!is_new_arrival(Some("yesterday"), now()));
        assert!(!is_new_arrival(None, now()));
    }
}
