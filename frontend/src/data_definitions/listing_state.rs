//! Everything a listing page derives from its route.

use common::{
    collection_query::CollectionQuery, localization::I18nLocale, query_params::SearchParams,
    storefront_model::ListingSource, ui_text::UiText,
};

use crate::routes::Route;

/// How further products are reached from a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationMode {
    /// A button appends the next page to the grid.
    LoadMore,
    /// Previous/Next links, one page per URL.
    Links,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListingState {
    pub source: ListingSource,
    pub locale: I18nLocale,
    pub params: SearchParams,
}

impl ListingState {
    pub fn query(&self) -> CollectionQuery {
        CollectionQuery::from_params(&self.params)
    }

    pub fn text(&self) -> &'static UiText {
        UiText::for_language(&self.locale.language)
    }

    /// This listing with other query parameters.
    pub fn route_with(&self, params: SearchParams) -> Route {
        Route::listing(&self.source, &self.locale, params)
    }

    pub fn href_with(&self, params: SearchParams) -> String {
        self.route_with(params).to_string()
    }
}
