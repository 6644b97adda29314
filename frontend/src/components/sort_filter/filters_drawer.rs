use common::{
    query_params::{add_filter_input, remove_filter, without_pagination},
    storefront_model::{Facet, FacetType},
};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_navigation_icons::{MdExpandLess, MdExpandMore};
use dioxus_free_icons::icons::md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank};

use crate::components::sort_filter::price_range_filter::PriceRangeFilter;
use crate::data_definitions::listing_state::ListingState;

#[component]
pub fn FiltersDrawer(state: ReadSignal<ListingState>, facets: ReadSignal<Vec<Facet>>) -> Element {
    let text = state.read().text();
    let facets = facets.read().clone();
    rsx! {
        nav {
            class: "x-filters",
            span { style: "font-weight: 600;", "{text.filter_by}" }
            for facet in facets {
                FacetGroup { key: "{facet.id}", state, facet }
            }
        }
    }
}

/// One collapsible facet.
#[component]
fn FacetGroup(state: ReadSignal<ListingState>, facet: Facet) -> Element {
    let mut is_open = use_signal(|| false);
    if !facet.is_linkable() {
        return rsx! {};
    }
    let text = state.read().text();
    let label = text.filter_label(&facet.label).into_owned();

    rsx! {
        div {
            class: "x-facet-group",
            style: "border-bottom: 1px solid #E5E7EB; padding: 8px 0;",
            button {
                style: "
                    display:flex;
                    width: 100%;
                    align-items: center;
                    justify-content: space-between;
                    background: none;
                    border: none;
                    cursor: pointer;
                    font-size: 16px;
                    padding: 4px 0;
                ",
                onclick: move |_| is_open.toggle(),
                "{label}"
                if is_open() {
                    Icon { icon: MdExpandLess, style: "width: 20px; height: 20px;" }
                } else {
                    Icon { icon: MdExpandMore, style: "width: 20px; height: 20px;" }
                }
            }
            if is_open() {
                if facet.facet_type == FacetType::PriceRange {
                    PriceRangeFilter { state }
                } else {
                    FacetValueLinks { state, facet: facet.clone() }
                }
            }
        }
    }
}

#[component]
fn FacetValueLinks(state: ReadSignal<ListingState>, facet: Facet) -> Element {
    let listing = state.read();
    let filters = listing.query().filters;
    // values whose input does not parse cannot be linked and are left out
    let links = facet
        .values
        .iter()
        .filter_map(|value| {
            let filter = value.filter()?;
            let is_applied = filters.contains(&filter);
            let params = if is_applied {
                remove_filter(&listing.params, &filter)
            } else {
                add_filter_input(&listing.params, &value.input).ok()?
            };
            Some((value.clone(), is_applied, listing.href_with(without_pagination(&params))))
        })
        .collect::<Vec<_>>();

    rsx! {
        ul {
            style: "list-style: none; margin: 0; padding: 0;",
            for (value, is_applied, href) in links {
                li {
                    key: "{value.id}",
                    a {
                        class: "x-facet-value",
                        href,
                        if is_applied {
                            Icon { icon: MdCheckBox, style: "width: 20px; height: 20px; flex-shrink: 0;" }
                        } else {
                            Icon { icon: MdCheckBoxOutlineBlank, style: "width: 20px; height: 20px; flex-shrink: 0;" }
                        }
                        span { style: "flex-grow: 1;", "{value.label}" }
                        span { style: "color: #6B7280;", "{value.count}" }
                    }
                }
            }
        }
    }
}
