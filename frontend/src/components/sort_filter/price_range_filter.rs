//! Min/max price inputs. Typing is debounced; the settled values are
//! written to the URL.

use common::{
    product_filter::PriceRange,
    query_params::{apply_price_range, without_pagination},
    storefront_const::PRICE_RANGE_FILTER_DEBOUNCE_MS,
};
use dioxus::logger::tracing::info;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::data_definitions::listing_state::ListingState;

#[component]
pub fn PriceRangeFilter(state: ReadSignal<ListingState>) -> Element {
    let nav = navigator();
    let current = state.peek().query().price_range().cloned().unwrap_or_default();
    let mut min_input = use_signal(|| PriceRange::format_bound(current.min));
    let mut max_input = use_signal(|| PriceRange::format_bound(current.max));
    let mut edited = use_signal(|| false);

    // every keystroke restarts the resource, which drops the pending timer
    let _commit = use_resource(move || {
        let min = PriceRange::parse_bound(&min_input.read());
        let max = PriceRange::parse_bound(&max_input.read());
        let edited = edited();
        async move {
            if !edited {
                return;
            }
            TimeoutFuture::new(PRICE_RANGE_FILTER_DEBOUNCE_MS).await;
            let listing = state.peek().clone();
            let params = without_pagination(&apply_price_range(&listing.params, min, max));
            if params != listing.params {
                info!("price range committed: {:?} - {:?}", min, max);
                nav.push(listing.route_with(params));
            }
        }
    });

    let text = state.read().text();
    rsx! {
        div {
            class: "x-price-range",
            style: "display:flex; flex-direction: row; gap: 8px; padding: 8px 0;",
            label {
                style: "display:flex; flex-direction: column; gap: 4px; font-size: 14px;",
                "{text.price_from}"
                input {
                    r#type: "number",
                    min: "0",
                    value: "{min_input}",
                    oninput: move |e| {
                        edited.set(true);
                        min_input.set(e.value());
                    },
                    style: "width: 100px; padding: 6px;",
                }
            }
            label {
                style: "display:flex; flex-direction: column; gap: 4px; font-size: 14px;",
                "{text.price_to}"
                input {
                    r#type: "number",
                    min: "0",
                    value: "{max_input}",
                    oninput: move |e| {
                        edited.set(true);
                        max_input.set(e.value());
                    },
                    style: "width: 100px; padding: 6px;",
                }
            }
        }
    }
}
