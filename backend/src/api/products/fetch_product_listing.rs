//! Listing endpoint: one page of a collection or of the whole catalog.

use chrono::Utc;
use common::{
    collection_query::{CollectionQuery, PageDirection},
    localization::I18nLocale,
    storefront_const::PAGE_BY,
    storefront_model::{ListingSource, ProductListing},
};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::{
    api::{
        NotFound,
        products::{
            product_mapping::{RawProductConnection, map_connection},
            products_graphql::{all_products_query, collection_query},
        },
    },
    storefront_utils::storefront_graphql::storefront_query,
};

#[derive(Debug, Deserialize)]
struct CollectionResponse {
    collection: Option<RawCollection>,
}

#[derive(Debug, Deserialize)]
struct RawCollection {
    title: String,
    description: Option<String>,
    products: RawProductConnection,
}

#[derive(Debug, Deserialize)]
struct AllProductsResponse {
    products: RawProductConnection,
}

/// GraphQL variables for one listing page. Filters and sort are always
/// sent in full; the cursor only decides where the page starts.
pub fn build_listing_variables(source: &ListingSource, locale: &I18nLocale, query: &CollectionQuery) -> serde_json::Value {
    let sort_values = match source {
        ListingSource::Collection { .. } => query.sort.collection_sort_values(),
        ListingSource::AllProducts => query.sort.product_sort_values(),
    };
    let mut variables = json!({
        "country": locale.country,
        "language": locale.language,
        "sortKey": sort_values.sort_key,
        "reverse": sort_values.reverse,
    });

    match &query.page {
        Some(page) if page.direction == PageDirection::Previous => {
            variables["last"] = json!(PAGE_BY);
            variables["startCursor"] = json!(page.cursor);
        }
        Some(page) => {
            variables["first"] = json!(PAGE_BY);
            variables["endCursor"] = json!(page.cursor);
        }
        None => {
            variables["first"] = json!(PAGE_BY);
        }
    }

    if let ListingSource::Collection { handle } = source {
        variables["handle"] = json!(handle);
        variables["filters"] = json!(query.filters);
    }
    variables
}

pub async fn fetch_product_listing(
    source: ListingSource,
    locale: I18nLocale,
    query: CollectionQuery,
) -> anyhow::Result<ProductListing> {
    let variables = build_listing_variables(&source, &locale, &query);
    let now = Utc::now();

    let listing = match &source {
        ListingSource::Collection { handle } => {
            let response: CollectionResponse = storefront_query(&collection_query(), variables).await?;
            let Some(collection) = response.collection else {
                return Err(NotFound { resource: format!("collection {handle}") }.into());
            };
            let (facets, page) = map_connection(collection.products, now);
            ProductListing {
                title: collection.title,
                description: collection.description.filter(|d| !d.trim().is_empty()),
                facets,
                page,
            }
        }
        ListingSource::AllProducts => {
            let response: AllProductsResponse = storefront_query(&all_products_query(), variables).await?;
            let (_, page) = map_connection(response.products, now);
            ProductListing { title: String::new(), description: None, facets: vec![], page }
        }
    };

    info!(
        "listing {:?} ({}) -> {} products, next page: {}",
        source,
        locale.prefix_key(),
        listing.page.products.len(),
        listing.page.page_info.has_next_page
    );
    Ok(listing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{
        collection_query::PageCursor,
        product_filter::{PriceRange, ProductFilter},
        sort_param::SortParam,
    };

    fn shirts() -> ListingSource {
        ListingSource::Collection { handle: "shirts".into() }
    }

    #[test]
    fn first_page_of_a_collection() {
        let query = CollectionQuery {
            sort: SortParam::PriceHighLow,
            filters: vec![
                ProductFilter::Available(true),
                ProductFilter::Price(PriceRange::new(Some(100.0), None)),
            ],
            page: None,
        };
        let variables = build_listing_variables(&shirts(), &I18nLocale::default(), &query);
        assert_eq!(
            variables,
            json!({
                "country": "CZ",
                "language": "CS",
                "sortKey": "PRICE",
                "reverse": true,
                "first": PAGE_BY,
                "handle": "shirts",
                "filters": [{"available": true}, {"price": {"min": 100}}],
            })
        );
    }

    #[test]
    fn load_more_keeps_filters_and_sort() {
        let query = CollectionQuery {
            sort: SortParam::Newest,
            filters: vec![ProductFilter::Tag("summer".into())],
            page: None,
        };
        let variables = build_listing_variables(&shirts(), &I18nLocale::default(), &query.with_cursor("c1"));
        assert_eq!(variables["endCursor"], "c1");
        assert_eq!(variables["first"], PAGE_BY);
        assert_eq!(variables["sortKey"], "CREATED");
        assert_eq!(variables["filters"], json!([{"tag": "summer"}]));
    }

    #[test]
    fn previous_page_counts_backwards() {
        let query = CollectionQuery { page: Some(PageCursor::previous("s1")), ..Default::default() };
        let variables = build_listing_variables(&ListingSource::AllProducts, &I18nLocale::default(), &query);
        assert_eq!(variables["last"], PAGE_BY);
        assert_eq!(variables["startCursor"], "s1");
        assert!(variables.get("first").is_none());
        assert!(variables.get("filters").is_none());
        assert_eq!(variables["sortKey"], "RELEVANCE");
    }
}
