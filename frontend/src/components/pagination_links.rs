use common::{
    collection_query::PageCursor,
    query_params::set_page_cursor,
    storefront_model::PageInfo,
};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_navigation_icons::{MdChevronLeft, MdChevronRight};

use crate::data_definitions::listing_state::ListingState;

/// Previous/Next links around a single page. The cursor travels in the URL.
#[component]
pub fn PaginationLinks(state: ReadSignal<ListingState>, page_info: ReadSignal<PageInfo>, children: Element) -> Element {
    let listing = state.read();
    let text = listing.text();
    let page_info = page_info.read();

    let previous_href = page_info
        .start_cursor
        .as_ref()
        .filter(|_| page_info.has_previous_page)
        .map(|cursor| listing.href_with(set_page_cursor(&listing.params, &PageCursor::previous(cursor.clone()))));
    let next_href = page_info
        .end_cursor
        .as_ref()
        .filter(|_| page_info.has_next_page)
        .map(|cursor| listing.href_with(set_page_cursor(&listing.params, &PageCursor::next(cursor.clone()))));

    rsx! {
        if let Some(href) = previous_href {
            div {
                class: "x-pagination-link",
                a { href, Icon { icon: MdChevronLeft, style: "width: 20px; height: 20px;" } "{text.previous_products}" }
            }
        }
        {children}
        if let Some(href) = next_href {
            div {
                class: "x-pagination-link",
                a { href, "{text.next_products}" Icon { icon: MdChevronRight, style: "width: 20px; height: 20px;" } }
            }
        }
    }
}
