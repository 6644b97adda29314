//! Country picker in the footer. The country list is fetched the first
//! time the picker is opened.

use common::localization::{I18nLocale, country_url_path};
use common::ui_text::UiText;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdLanguage;
use dioxus_free_icons::icons::md_navigation_icons::{MdArrowDropDown, MdCheck};

use crate::api::storefront_api::list_countries;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::suspend_boundary::LoadingIndicator;
use crate::routes::Route;

#[component]
pub fn CountrySelector() -> Element {
    let route = use_route::<Route>();
    let selected = route.locale();
    let text = UiText::for_language(&selected.language);
    let mut is_open = use_signal(|| false);
    let mut requested = use_signal(|| false);

    let countries = use_resource(move || {
        let requested = requested();
        async move {
            if requested { Some(list_countries().await) } else { None }
        }
    });

    let dropdown = match (is_open(), &*countries.read()) {
        (false, _) => rsx! {},
        (true, Some(Some(Ok(locales)))) => rsx! {
            CountryList { locales: locales.clone(), selected: selected.clone() }
        },
        (true, Some(Some(Err(e)))) => rsx! {
            ComponentErrorDisplay { error_txt: e.to_string() }
        },
        (true, _) => rsx! { LoadingIndicator {} },
    };

    rsx! {
        div {
            class: "x-country-selector",
            style: "display:flex; flex-direction: column; gap: 8px; min-width: 240px;",
            span { style: "font-weight: 600;", "{text.country}" }
            button {
                class: "x-button",
                style: "display:flex; align-items:center; gap: 6px;",
                onclick: move |_| {
                    requested.set(true);
                    is_open.toggle();
                },
                Icon { icon: MdLanguage, style: "width: 18px; height: 18px;" }
                "{selected.label}"
                Icon { icon: MdArrowDropDown, style: "width: 18px; height: 18px;" }
            }
            {dropdown}
        }
    }
}

#[component]
fn CountryList(locales: Vec<I18nLocale>, selected: I18nLocale) -> Element {
    let route = use_route::<Route>();
    let default_locale = I18nLocale::default();
    let path_without_locale = route.with_locale(&default_locale).to_string();

    rsx! {
        ul {
            style: "
                list-style: none;
                margin: 0;
                padding: 8px;
                max-height: 280px;
                overflow-y: auto;
                background: white;
                color: #111827;
                border-radius: 8px;
            ",
            for locale in locales {
                li {
                    key: "{locale.prefix_key()}",
                    a {
                        href: country_url_path(&locale, &default_locale, &path_without_locale),
                        style: "display:flex; align-items:center; justify-content: space-between; gap: 8px; padding: 6px 4px;",
                        "{locale.label}"
                        if locale.same_market(&selected) {
                            Icon { icon: MdCheck, style: "width: 18px; height: 18px;" }
                        }
                    }
                }
            }
        }
    }
}
