use common::{
    applied_filters::derive_applied_filters,
    query_params::{remove_filter, without_pagination},
    storefront_model::Facet,
};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_navigation_icons::MdClose;

use crate::data_definitions::listing_state::ListingState;

/// One removable chip per URL filter that the current facets know about.
#[component]
pub fn AppliedFilters(state: ReadSignal<ListingState>, facets: ReadSignal<Vec<Facet>>) -> Element {
    let listing = state.read();
    let applied = derive_applied_filters(&facets.read(), &listing.query().filters, &listing.locale);
    if applied.is_empty() {
        return rsx! {};
    }
    let text = listing.text();

    rsx! {
        div {
            class: "x-applied-filters",
            span { style: "font-weight: 600;", "{text.applied_filters}" }
            div {
                style: "display:flex; flex-direction: row; flex-wrap: wrap; gap: 8px;",
                for applied_filter in applied {
                    a {
                        key: "{applied_filter.filter.dimension()}-{applied_filter.filter.value_json()}",
                        class: "x-filter-chip",
                        href: listing.href_with(without_pagination(&remove_filter(&listing.params, &applied_filter.filter))),
                        "{applied_filter.label}"
                        Icon { icon: MdClose, style: "width: 14px; height: 14px;" }
                    }
                }
            }
        }
    }
}
