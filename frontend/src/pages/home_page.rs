use common::{localization::I18nLocale, storefront_const::STORE_NAME, storefront_model::ListingSource, ui_text::UiText};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdShoppingCart;

use crate::routes::Route;

/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        HomeContent { locale: I18nLocale::default() }
    }
}

#[component]
pub fn LocalizedHomePage(locale: I18nLocale) -> Element {
    rsx! {
        HomeContent { locale }
    }
}

#[component]
fn HomeContent(locale: ReadSignal<I18nLocale>) -> Element {
    let locale = locale.read().clone();
    let text = UiText::for_language(&locale.language);
    rsx! {
        Title { "{STORE_NAME}" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                align-items: flex-start;
                gap: 20px;
                padding: 36px 40px;
                border-radius: 22px;
                background: linear-gradient(135deg, #1C212D 0%, #4B5770 100%);
                color: white;
            ",
            div {
                style: "
                    font-size: 46px;
                    font-weight: 500;
                    letter-spacing: -0.02em;
                ",
                "{text.home_heading}"
            }
            Link {
                to: Route::listing(&ListingSource::AllProducts, &locale, Default::default()),
                class: "x-button",
                style: "display:flex; align-items:center; gap: 8px;",
                Icon { icon: MdShoppingCart, style: "width: 20px; height: 20px;" }
                "{text.browse_catalog}"
            }
        }
    }
}
