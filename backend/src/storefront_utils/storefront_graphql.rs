use serde::{Deserialize, de::DeserializeOwned};
use tracing::{debug, info, warn};

use crate::storefront_utils::{response_cache::RESPONSE_CACHE, storefront_client::get_storefront_client};

#[derive(Debug, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQLError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQLError {
    pub message: String,
}

pub fn parse_graphql_response<T: DeserializeOwned>(response_txt: &str) -> anyhow::Result<T> {
    let response: GraphQLResponse<T> = serde_json::from_str(response_txt)?;
    if !response.errors.is_empty() {
        let messages = response.errors.into_iter().map(|e| e.message).collect::<Vec<_>>().join("; ");
        anyhow::bail!("Storefront API error: {}", messages);
    }
    let Some(data) = response.data else {
        anyhow::bail!("Storefront API returned no data");
    };
    Ok(data)
}

/// Runs one GraphQL query against the storefront API. Successful responses
/// are cached for the client's TTL under the sha256 of the request body.
pub async fn storefront_query<T: DeserializeOwned>(query: &str, variables: serde_json::Value) -> anyhow::Result<T> {
    let client = get_storefront_client();
    let body = serde_json::json!({ "query": query, "variables": variables }).to_string();
    let request_hash = sha256::digest(body.clone());

    if let Some(cached_response) = RESPONSE_CACHE.get(&request_hash, client.cache_ttl).await {
        match parse_graphql_response::<T>(&cached_response) {
            Ok(data) => {
                debug!("storefront cache hit: {}", request_hash);
                return Ok(data);
            }
            Err(e) => warn!("discarding unreadable cached response {}: {}", request_hash, e),
        }
    }
    debug!("storefront cache miss: {}", request_hash);

    let t0 = std::time::Instant::now();
    let mut request = client
        .http
        .post(&client.endpoint)
        .header("Content-Type", "application/json")
        .body(body);
    if let Some(token) = &client.access_token {
        request = request.header("X-Shopify-Storefront-Access-Token", token);
    }
    let response = request.send().await?;
    let status = response.status();
    let response_txt = response.text().await?;
    if status.is_client_error() || status.is_server_error() {
        anyhow::bail!("Error: {}: {}", status, response_txt);
    }
    let data = parse_graphql_response::<T>(&response_txt)?;

    let dt_ms = t0.elapsed().as_millis();
    info!("storefront query {} answered in {}ms ({} bytes)", request_hash, dt_ms, response_txt.len());
    RESPONSE_CACHE.insert(request_hash, response_txt, client.cache_ttl).await;
    Ok(data)
}
