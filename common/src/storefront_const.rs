//! Constants shared by the listing pages and the storefront client.

/// Products fetched per page, for both the initial load and every "load more".
pub const PAGE_BY: u32 = 8;

/// Namespace of every filter parameter in the URL, e.g. `filter.price`.
pub const FILTER_URL_PREFIX: &str = "filter.";

pub const SORT_PARAM: &str = "sort";
pub const CURSOR_PARAM: &str = "cursor";
pub const DIRECTION_PARAM: &str = "direction";

pub const PRICE_RANGE_FILTER_DEBOUNCE_MS: u32 = 500;

/// Cards before this index load their image eagerly.
pub const MAX_EAGER_IMAGE_COUNT: usize = 8;

/// Products published less than this many days ago get the "New" badge.
pub const NEW_ARRIVAL_DAYS: i64 = 30;

pub const STORE_NAME: &str = "Hydrogen Store";
