use serde::Deserialize;
use serde_json::json;

use crate::{api::products::products_graphql::COLLECTION_EXISTS_QUERY, storefront_utils::storefront_graphql::storefront_query};

#[derive(Debug, Deserialize)]
struct CollectionIdResponse {
    collection: Option<CollectionId>,
}

#[derive(Debug, Deserialize)]
struct CollectionId {
    #[allow(dead_code)]
    id: String,
}

pub async fn collection_exists(handle: &str) -> anyhow::Result<bool> {
    let response: CollectionIdResponse = storefront_query(COLLECTION_EXISTS_QUERY, json!({ "handle": handle })).await?;
    Ok(response.collection.is_some())
}
