//! Product listing routes and module exports.

mod fetch_product_listing;
pub use fetch_product_listing::{build_listing_variables, fetch_product_listing};

mod collection_exists;
pub use collection_exists::collection_exists;

mod product_mapping;
pub use product_mapping::{map_facet, map_product};

pub mod products_graphql;
