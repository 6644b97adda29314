//! Page frame: header, routed content, footer.

use common::{storefront_const::STORE_NAME, storefront_model::ListingSource, ui_text::UiText};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::{MdShoppingCart, MdStore};

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::components::footer::Footer;
use crate::routes::Route;

/// Shared layout for every route.
#[component]
pub fn StorefrontLayout() -> Element {
    let route = use_route::<Route>();
    let locale = route.locale();
    let text = UiText::for_language(&locale.language);

    rsx! {
        div {
            id: "x-layout-container",
            style: "
                display:flex;
                flex-direction: column;
                min-height: 100vh;
                width: 100%;
            ",

            header {
                id: "x-header",
                style: "
                    display:flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 24px;
                    height: 64px;
                    padding: 0 24px;
                    border-bottom: 1px solid #E5E7EB;
                    background-color: white;
                ",

                Link {
                    to: Route::home(&locale),
                    style: "display:flex; align-items:center; gap: 8px; font-size: 22px; font-weight: 600;",
                    Icon { icon: MdStore, style: "width: 26px; height: 26px;" }
                    "{STORE_NAME}"
                }
                Link {
                    to: Route::listing(&ListingSource::AllProducts, &locale, Default::default()),
                    "{text.all_products}"
                }

                // empty space
                div {
                    style: "flex-grow:1;"
                }
                span {
                    title: "Cart",
                    Icon { icon: MdShoppingCart, style: "width: 24px; height: 24px;" }
                }
            }

            main {
                id: "x-page-container",
                style: "flex-grow:1; padding: 24px;",
                GlobalErrorBoundary {
                    boundary_name: "StorefrontLayout".to_string(),
                    Outlet::<Route> {}
                }
            }

            Footer { locale }
        }
    }
}
