use std::time::Duration;

const DEFAULT_API_VERSION: &str = "2024-07";
const DEFAULT_CACHE_TTL_SECS: u64 = 60;

/// Connection settings for the storefront GraphQL endpoint.
#[derive(Debug, Clone)]
pub struct StorefrontClient {
    pub http: reqwest::Client,
    pub endpoint: String,
    pub access_token: Option<String>,
    pub cache_ttl: Duration,
}

pub fn get_storefront_client() -> StorefrontClient {
    let api_version = std::env::var("PUBLIC_STOREFRONT_API_VERSION").unwrap_or(DEFAULT_API_VERSION.to_string());
    let endpoint = match (std::env::var("STOREFRONT_API_URL"), std::env::var("PUBLIC_STORE_DOMAIN")) {
        (Ok(url), _) => url,
        (Err(_), Ok(domain)) => format!("https://{}/api/{}/graphql.json", domain.trim_end_matches('/'), api_version),
        (Err(_), Err(_)) => "https://mock.shop/api".to_string(),
    };
    let cache_ttl = std::env::var("STOREFRONT_CACHE_TTL_SECS")
        .ok()
        .and_then(|secs| secs.parse::<u64>().ok())
        .unwrap_or(DEFAULT_CACHE_TTL_SECS);
    StorefrontClient {
        http: reqwest::Client::new(),
        endpoint,
        access_token: std::env::var("PUBLIC_STOREFRONT_API_TOKEN").ok(),
        cache_ttl: Duration::from_secs(cache_ttl),
    }
}
