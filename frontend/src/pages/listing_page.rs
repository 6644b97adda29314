//! A product listing: title, sort and filter controls, and the products
//! of the current query.

use common::storefront_const::STORE_NAME;
use dioxus::prelude::*;

use crate::{
    api::storefront_api::{fetch_product_listing, is_not_found},
    components::{
        error_boundary::ComponentErrorDisplay,
        pagination_links::PaginationLinks,
        product_grid::{LoadMoreGrid, ProductGrid},
        sort_filter::SortFilter,
        suspend_boundary::SuspendWrapper,
    },
    data_definitions::listing_state::{ListingState, PaginationMode},
    pages::not_found_page::NotFoundView,
};

#[component]
pub fn ListingPage(state: ReadSignal<ListingState>, mode: PaginationMode) -> Element {
    rsx! {
        SuspendWrapper {
            ListingContent { state, mode }
        }
    }
}

#[component]
fn ListingContent(state: ReadSignal<ListingState>, mode: PaginationMode) -> Element {
    let listing = use_resource(move || {
        let listing = state.read().clone();
        fetch_product_listing(listing.source.clone(), listing.locale.clone(), listing.query())
    })
    .suspend()?
    .cloned();
    let listing = match listing {
        Err(e) if is_not_found(&e) => return rsx! { NotFoundView {} },
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Ok(listing) => listing,
    };

    let title = if listing.title.is_empty() {
        state.read().text().all_products.to_string()
    } else {
        listing.title.clone()
    };
    let locale = state.read().locale.clone();
    let products = match mode {
        PaginationMode::LoadMore => rsx! {
            LoadMoreGrid { state, first_page: listing.page.clone() }
        },
        PaginationMode::Links => rsx! {
            PaginationLinks {
                state,
                page_info: listing.page.page_info.clone(),
                ProductGrid { products: listing.page.products.clone(), locale }
            }
        },
    };

    rsx! {
        Title { "{title} | {STORE_NAME}" }
        div {
            id: "x-listing-page",
            style: "display:flex; flex-direction: column; gap: 8px;",
            h1 { style: "font-size: 34px; font-weight: 500; margin: 0;", "{title}" }
            if let Some(description) = listing.description.clone() {
                p { style: "color: #4B5770; max-width: 720px;", "{description}" }
            }
            SortFilter {
                state,
                facets: listing.facets.clone(),
                {products}
            }
        }
    }
}
