//! The query state of a listing page: sort, filters and page cursor.
//!
//! Decoded once per navigation from the URL and handed down to every
//! component and fetch that needs it.

use serde::{Deserialize, Serialize};

use crate::{
    product_filter::{PriceRange, ProductFilter},
    query_params::{SearchParams, add_filter, decode_filters, set_page_cursor, set_sort},
    sort_param::SortParam,
    storefront_const::{CURSOR_PARAM, DIRECTION_PARAM, SORT_PARAM},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PageDirection {
    #[default]
    Next,
    Previous,
}

impl PageDirection {
    pub fn key(self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Previous => "previous",
        }
    }

    pub fn decode(value: Option<&str>) -> Self {
        match value {
            Some("previous") => Self::Previous,
            _ => Self::Next,
        }
    }
}

/// Opaque cursor handed out by the API plus which way to page from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCursor {
    pub cursor: String,
    pub direction: PageDirection,
}

impl PageCursor {
    pub fn next(cursor: impl Into<String>) -> Self {
        Self { cursor: cursor.into(), direction: PageDirection::Next }
    }

    pub fn previous(cursor: impl Into<String>) -> Self {
        Self { cursor: cursor.into(), direction: PageDirection::Previous }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CollectionQuery {
    pub sort: SortParam,
    pub filters: Vec<ProductFilter>,
    pub page: Option<PageCursor>,
}

impl CollectionQuery {
    pub fn from_params(params: &SearchParams) -> Self {
        let page = params
            .get(CURSOR_PARAM)
            .filter(|cursor| !cursor.is_empty())
            .map(|cursor| PageCursor {
                cursor: cursor.to_string(),
                direction: PageDirection::decode(params.get(DIRECTION_PARAM)),
            });
        Self {
            sort: SortParam::decode(params.get(SORT_PARAM)),
            filters: decode_filters(params),
            page,
        }
    }

    /// Re-encodes the query. The default sort is left implicit.
    pub fn to_params(&self) -> SearchParams {
        let mut params = SearchParams::new();
        if self.sort != SortParam::default() {
            params = set_sort(&params, self.sort);
        }
        for filter in &self.filters {
            params = add_filter(&params, filter);
        }
        if let Some(page) = &self.page {
            params = set_page_cursor(&params, page);
        }
        params
    }

    /// Same sort and filters, continuing forward from `cursor`. Used by
    /// "load more" so every page is fetched with the full query.
    pub fn with_cursor(&self, cursor: impl Into<String>) -> Self {
        Self { page: Some(PageCursor::next(cursor)), ..self.clone() }
    }

    pub fn price_range(&self) -> Option<&PriceRange> {
        self.filters.iter().find_map(ProductFilter::as_price)
    }
}
