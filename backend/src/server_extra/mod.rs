//! Plain HTTP routes and layers mounted next to the server functions.

pub mod countries;
pub mod not_found_status;
