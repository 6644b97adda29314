use common::{
    query_params::{set_sort, without_pagination},
    sort_param::SortParam,
};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_navigation_icons::{MdArrowDropDown, MdArrowDropUp};

use crate::data_definitions::listing_state::ListingState;

#[component]
pub fn SortMenu(state: ReadSignal<ListingState>) -> Element {
    let mut is_open = use_signal(|| false);
    let listing = state.read();
    let text = listing.text();
    let active = listing.query().sort;

    rsx! {
        div {
            class: "x-sort-menu",
            style: "position: relative;",
            button {
                class: "x-button",
                style: "display:flex; align-items:center; gap: 6px;",
                onclick: move |_| is_open.toggle(),
                span { style: "color: #6B7280;", "{text.sort_by}" }
                span { "{text.sort_label(active)}" }
                if is_open() {
                    Icon { icon: MdArrowDropUp, style: "width: 20px; height: 20px;" }
                } else {
                    Icon { icon: MdArrowDropDown, style: "width: 20px; height: 20px;" }
                }
            }
            if is_open() {
                ul {
                    style: "
                        position: absolute;
                        right: 0;
                        top: 44px;
                        z-index: 100;
                        list-style: none;
                        margin: 0;
                        padding: 8px;
                        min-width: 200px;
                        background: white;
                        border: 1px solid #E5E7EB;
                        border-radius: 8px;
                        box-shadow: 0 6px 16px rgba(0,0,0,0.06);
                    ",
                    for sort in SortParam::ALL {
                        li {
                            key: "{sort.key()}",
                            a {
                                href: listing.href_with(without_pagination(&set_sort(&listing.params, sort))),
                                style: if sort == active { "display:block; padding: 6px 8px; font-weight: 700;" } else { "display:block; padding: 6px 8px;" },
                                "{text.sort_label(sort)}"
                            }
                        }
                    }
                }
            }
        }
    }
}
