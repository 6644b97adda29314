use common::{localization::I18nLocale, query_params::SearchParams, storefront_model::ListingSource};
use dioxus::prelude::*;

use crate::data_definitions::listing_state::{ListingState, PaginationMode};
use crate::pages::listing_page::ListingPage;

/// The whole catalog, one page per URL.
#[component]
pub fn AllProductsPage(params: SearchParams) -> Element {
    rsx! {
        LocalizedAllProductsPage { locale: I18nLocale::default(), params }
    }
}

#[component]
pub fn LocalizedAllProductsPage(locale: I18nLocale, params: SearchParams) -> Element {
    let state = ListingState { source: ListingSource::AllProducts, locale, params };
    rsx! {
        ListingPage { state, mode: PaginationMode::Links }
    }
}
