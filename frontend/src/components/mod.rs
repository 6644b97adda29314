pub mod error_boundary;
pub mod suspend_boundary;
pub mod layout;
pub mod footer;
pub mod newsletter_signup;
pub mod country_selector;
pub mod product_card;
pub mod product_grid;
pub mod pagination_links;
pub mod sort_filter;
