pub mod home_page;
pub mod listing_page;
pub mod collection_page;
pub mod all_products_page;
pub mod not_found_page;
