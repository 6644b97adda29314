//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod storefront_const;
pub mod storefront_model;
pub mod product_filter;
pub mod sort_param;
pub mod query_params;
pub mod collection_query;
pub mod applied_filters;
pub mod currency;
pub mod localization;
pub mod pagination;
pub mod ui_text;
