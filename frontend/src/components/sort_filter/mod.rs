//! Filter drawer, applied-filter chips and sort menu around a product grid.

pub mod applied_filters;
pub mod filters_drawer;
pub mod price_range_filter;
pub mod sort_menu;

use common::storefront_model::Facet;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_content_icons::MdFilterList;

use crate::data_definitions::listing_state::ListingState;
use applied_filters::AppliedFilters;
use filters_drawer::FiltersDrawer;
use sort_menu::SortMenu;

#[component]
pub fn SortFilter(state: ReadSignal<ListingState>, facets: ReadSignal<Vec<Facet>>, children: Element) -> Element {
    let mut is_open = use_signal(|| false);
    let text = state.read().text();

    rsx! {
        div {
            id: "x-sort-filter-controls",
            style: "
                display:flex;
                flex-direction: row;
                align-items: center;
                justify-content: space-between;
                gap: 16px;
                padding: 12px 0;
            ",
            button {
                class: "x-button",
                style: "display:flex; align-items:center; gap: 6px;",
                aria_expanded: "{is_open}",
                onclick: move |_| is_open.toggle(),
                Icon { icon: MdFilterList, style: "width: 20px; height: 20px;" }
                "{text.toggle_filters}"
            }
            SortMenu { state }
        }
        div {
            id: "x-sort-filter-body",
            style: "display:flex; flex-direction: row; gap: 24px; align-items: flex-start;",
            if is_open() {
                aside {
                    id: "x-filters-drawer",
                    style: "
                        display:flex;
                        flex-direction: column;
                        gap: 16px;
                        width: 260px;
                        flex-shrink: 0;
                    ",
                    AppliedFilters { state, facets }
                    FiltersDrawer { state, facets }
                }
            }
            div {
                style: "flex-grow:1; min-width: 0;",
                {children}
            }
        }
    }
}
