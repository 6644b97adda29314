use common::{localization::I18nLocale, query_params::SearchParams, storefront_model::ListingSource};
use dioxus::prelude::*;

use crate::data_definitions::listing_state::{ListingState, PaginationMode};
use crate::pages::listing_page::ListingPage;

#[component]
pub fn CollectionPage(handle: String, params: SearchParams) -> Element {
    rsx! {
        LocalizedCollectionPage { locale: I18nLocale::default(), handle, params }
    }
}

#[component]
pub fn LocalizedCollectionPage(locale: I18nLocale, handle: String, params: SearchParams) -> Element {
    let state = ListingState { source: ListingSource::Collection { handle }, locale, params };
    rsx! {
        ListingPage { state, mode: PaginationMode::LoadMore }
    }
}
