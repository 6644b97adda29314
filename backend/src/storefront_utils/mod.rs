pub mod storefront_client;
pub mod storefront_graphql;
pub mod response_cache;
