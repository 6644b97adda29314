//! Client API calls for the storefront endpoints.

use common::{
    collection_query::CollectionQuery,
    localization::I18nLocale,
    storefront_model::{ListingSource, ProductListing, ProductPage},
};
use dioxus::prelude::*;

/// Missing resources become 404 so pages can render their not-found view.
#[cfg(feature = "server")]
fn to_server_fn_error(e: anyhow::Error) -> ServerFnError {
    let code = if e.downcast_ref::<backend::api::NotFound>().is_some() { 404 } else { 500 };
    ServerFnError::ServerError { message: e.to_string(), code, details: None }
}

pub fn is_not_found(e: &ServerFnError) -> bool {
    matches!(e, ServerFnError::ServerError { code: 404, .. })
}

#[server]
pub async fn fetch_product_listing(source: ListingSource, locale: I18nLocale, query: CollectionQuery) -> Result<ProductListing, ServerFnError> {
    let x = backend::api::products::fetch_product_listing(source, locale, query).await;
    x.map_err(to_server_fn_error)
}

/// Products only, for appending to an already rendered listing.
#[server]
pub async fn fetch_product_page(source: ListingSource, locale: I18nLocale, query: CollectionQuery) -> Result<ProductPage, ServerFnError> {
    let x = backend::api::products::fetch_product_listing(source, locale, query).await;
    x.map(|listing| listing.page).map_err(to_server_fn_error)
}

#[server]
pub async fn list_countries() -> Result<Vec<I18nLocale>, ServerFnError> {
    let x = backend::api::localization::list_countries().await;
    x.map_err(to_server_fn_error)
}
