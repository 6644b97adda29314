//! Client-side accumulation of product pages for "load more".
//!
//! The accumulator is seeded from the page's primary fetch and only ever
//! grows by appending later pages. A reset (new query) starts a new
//! generation; results of fetches started in an older generation are
//! ignored when they arrive.

use crate::storefront_model::{ProductPage, ProductSummary};

/// Handed out when a "load more" fetch starts; must be presented with its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadMoreTicket {
    pub generation: u64,
    pub cursor: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductAccumulator {
    items: Vec<ProductSummary>,
    end_cursor: Option<String>,
    has_next_page: bool,
    in_flight: bool,
    generation: u64,
    last_error: Option<String>,
}

impl ProductAccumulator {
    pub fn from_page(page: ProductPage) -> Self {
        let mut accumulator = Self::default();
        accumulator.seed(page);
        accumulator
    }

    /// Replaces everything with a freshly fetched first page.
    pub fn reset(&mut self, page: ProductPage) {
        self.generation += 1;
        self.seed(page);
    }

    fn seed(&mut self, page: ProductPage) {
        self.items = page.products;
        self.end_cursor = page.page_info.end_cursor;
        self.has_next_page = page.page_info.has_next_page;
        self.in_flight = false;
        self.last_error = None;
    }

    pub fn items(&self) -> &[ProductSummary] {
        &self.items
    }

    pub fn has_next_page(&self) -> bool {
        self.has_next_page
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn can_load_more(&self) -> bool {
        self.has_next_page && !self.in_flight && self.end_cursor.is_some()
    }

    /// Starts a fetch. `None` while one is already running or when there
    /// is nothing more to load.
    pub fn begin_load_more(&mut self) -> Option<LoadMoreTicket> {
        if !self.can_load_more() {
            return None;
        }
        let cursor = self.end_cursor.clone()?;
        self.in_flight = true;
        self.last_error = None;
        Some(LoadMoreTicket { generation: self.generation, cursor })
    }

    /// Appends the fetched page. Returns `false` and changes nothing when the
    /// ticket belongs to an earlier generation.
    pub fn complete_load_more(&mut self, ticket: &LoadMoreTicket, page: ProductPage) -> bool {
        if ticket.generation != self.generation || !self.in_flight {
            return false;
        }
        self.items.extend(page.products);
        self.end_cursor = page.page_info.end_cursor;
        self.has_next_page = page.page_info.has_next_page;
        self.in_flight = false;
        true
    }

    /// Records a failed fetch. The cursor is kept so the same page can be retried.
    pub fn fail_load_more(&mut self, ticket: &LoadMoreTicket, message: impl Into<String>) -> bool {
        if ticket.generation != self.generation || !self.in_flight {
            return false;
        }
        self.in_flight = false;
        self.last_error = Some(message.into());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storefront_model::{Money, PageInfo};

    fn product(id: &str) -> ProductSummary {
        ProductSummary {
            id: id.into(),
            title: format!("Product {id}"),
            handle: id.to_lowercase(),
            image: None,
            price: Money { amount: "10.0".into(), currency_code: "CZK".into() },
            compare_at_price: None,
            badge: None,
        }
    }

    fn page(ids: &[&str], end_cursor: &str, has_next_page: bool) -> ProductPage {
        ProductPage {
            products: ids.iter().map(|id| product(id)).collect(),
            page_info: PageInfo {
                has_previous_page: false,
                has_next_page,
                start_cursor: None,
                end_cursor: Some(end_cursor.into()),
            },
        }
    }

    fn ids(accumulator: &ProductAccumulator) -> Vec<&str> {
        accumulator.items().iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn load_more_appends_until_exhausted() {
        let mut accumulator = ProductAccumulator::from_page(page(&["A", "B", "C"], "c1", true));
        assert!(accumulator.can_load_more());

        let ticket = accumulator.begin_load_more().unwrap();
        assert_eq!(ticket.cursor, "c1");
        assert!(accumulator.is_loading());
        assert!(!accumulator.can_load_more());

        assert!(accumulator.complete_load_more(&ticket, page(&["D", "E"], "c2", false)));
        assert_eq!(ids(&accumulator), vec!["A", "B", "C", "D", "E"]);
        assert!(!accumulator.can_load_more());
        assert_eq!(accumulator.begin_load_more(), None);
    }

    #[test]
    fn only_one_fetch_in_flight() {
        let mut accumulator = ProductAccumulator::from_page(page(&["A"], "c1", true));
        let first = accumulator.begin_load_more();
        assert!(first.is_some());
        assert_eq!(accumulator.begin_load_more(), None);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut accumulator = ProductAccumulator::from_page(page(&["A", "B"], "c1", true));
        let ticket = accumulator.begin_load_more().unwrap();
        accumulator.complete_load_more(&ticket, page(&["B", "C"], "c2", true));
        assert_eq!(ids(&accumulator), vec!["A", "B", "B", "C"]);
        assert!(accumulator.can_load_more());
    }

    #[test]
    fn results_after_a_reset_are_ignored() {
        let mut accumulator = ProductAccumulator::from_page(page(&["A"], "c1", true));
        let stale = accumulator.begin_load_more().unwrap();
        accumulator.reset(page(&["X", "Y"], "x1", true));

        assert!(!accumulator.complete_load_more(&stale, page(&["B"], "c2", false)));
        assert_eq!(ids(&accumulator), vec!["X", "Y"]);
        assert!(accumulator.can_load_more());

        let ticket = accumulator.begin_load_more().unwrap();
        assert_eq!(ticket.cursor, "x1");
        assert!(!accumulator.fail_load_more(&stale, "late failure"));
        assert!(accumulator.is_loading());
    }

    #[test]
    fn failure_allows_retry_from_the_same_cursor() {
        let mut accumulator = ProductAccumulator::from_page(page(&["A"], "c1", true));
        let ticket = accumulator.begin_load_more().unwrap();
        assert!(accumulator.fail_load_more(&ticket, "network down"));
        assert_eq!(accumulator.last_error(), Some("network down"));
        assert!(accumulator.can_load_more());

        let retry = accumulator.begin_load_more().unwrap();
        assert_eq!(retry.cursor, "c1");
        assert_eq!(accumulator.last_error(), None);
    }

    #[test]
    fn missing_cursor_disables_load_more() {
        let mut first = page(&["A"], "c1", true);
        first.page_info.end_cursor = None;
        let mut accumulator = ProductAccumulator::from_page(first);
        assert!(!accumulator.can_load_more());
        assert_eq!(accumulator.begin_load_more(), None);
    }
}
