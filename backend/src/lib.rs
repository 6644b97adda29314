//! Server-side access to the hosted storefront API.

pub mod api;
pub mod storefront_utils;
pub mod server_extra;
