//! Product grids: a plain page, and the growing "load more" list.

use common::{
    localization::I18nLocale,
    pagination::ProductAccumulator,
    storefront_model::{ImageLoading, ProductPage, ProductSummary},
};
use dioxus::logger::tracing::{debug, error, info};
use dioxus::prelude::*;

use crate::api::storefront_api::fetch_product_page;
use crate::components::product_card::ProductCard;
use crate::data_definitions::listing_state::ListingState;

#[component]
pub fn ProductGrid(products: Vec<ProductSummary>, locale: I18nLocale) -> Element {
    if products.is_empty() {
        let text = common::ui_text::UiText::for_language(&locale.language);
        return rsx! {
            p { class: "x-empty-listing", "{text.no_products}" }
        };
    }
    rsx! {
        div {
            class: "x-product-grid",
            for (index, product) in products.into_iter().enumerate() {
                ProductCard {
                    key: "{product.id}-{index}",
                    product,
                    locale: locale.clone(),
                    loading: ImageLoading::for_index(index),
                }
            }
        }
    }
}

/// Starts from the page the listing fetched and appends further pages on
/// request. A new first page (the query changed) starts over.
#[component]
pub fn LoadMoreGrid(state: ReadSignal<ListingState>, first_page: ReadSignal<ProductPage>) -> Element {
    let mut accumulator = use_signal(|| ProductAccumulator::from_page(first_page.peek().clone()));
    use_effect(move || {
        let page = first_page.read().clone();
        accumulator.write().reset(page);
    });

    let load_more = move |_| {
        let Some(ticket) = accumulator.write().begin_load_more() else {
            return;
        };
        let listing = state.peek().clone();
        spawn(async move {
            let query = listing.query().with_cursor(ticket.cursor.clone());
            match fetch_product_page(listing.source.clone(), listing.locale.clone(), query).await {
                Ok(page) => {
                    let count = page.products.len();
                    if accumulator.write().complete_load_more(&ticket, page) {
                        info!("loaded {} more products", count);
                    } else {
                        debug!("dropping products fetched for an earlier query");
                    }
                }
                Err(e) => {
                    error!("loading more products failed: {:#?}", e);
                    accumulator.write().fail_load_more(&ticket, e.to_string());
                }
            }
        });
    };

    let listing = state.read();
    let text = listing.text();
    let (items, has_next_page, is_loading, last_error) = {
        let accumulator = accumulator.read();
        (
            accumulator.items().to_vec(),
            accumulator.has_next_page(),
            accumulator.is_loading(),
            accumulator.last_error().map(str::to_string),
        )
    };
    let button_label = if is_loading {
        text.loading
    } else if last_error.is_some() {
        text.retry
    } else {
        text.load_more
    };

    rsx! {
        ProductGrid { products: items, locale: listing.locale.clone() }
        if let Some(last_error) = last_error {
            p {
                class: "x-load-more-error",
                "{text.load_more_failed} {last_error}"
            }
        }
        if has_next_page {
            div {
                style: "display:flex; justify-content: center; padding: 24px;",
                button {
                    class: "x-button",
                    disabled: is_loading,
                    onclick: load_more,
                    "{button_label}"
                }
            }
        }
    }
}
