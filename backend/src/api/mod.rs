pub mod products;
pub mod localization;

mod not_found;
pub use not_found::NotFound;
