use common::{localization::I18nLocale, storefront_const::STORE_NAME, ui_text::UiText};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::fa_brands_icons::{FaFacebook, FaInstagram, FaYoutube};

use crate::components::country_selector::CountrySelector;
use crate::components::newsletter_signup::NewsletterSignup;

#[component]
pub fn Footer(locale: ReadSignal<I18nLocale>) -> Element {
    let text = UiText::for_language(&locale.read().language);
    rsx! {
        footer {
            id: "x-footer",
            style: "
                display:flex;
                flex-direction: column;
                gap: 24px;
                padding: 32px 24px;
                background-color: #1C212D;
                color: white;
            ",

            div {
                style: "display:flex; flex-direction: row; flex-wrap: wrap; gap: 48px; justify-content: space-between;",
                NewsletterSignup { text }
                div {
                    style: "display:flex; flex-direction: column; gap: 12px;",
                    span { style: "font-weight: 600;", "{text.follow_us}" }
                    div {
                        style: "display:flex; flex-direction: row; gap: 16px;",
                        a { href: "https://www.facebook.com", target: "_blank", rel: "noopener", title: "Facebook",
                            Icon { icon: FaFacebook, style: "width: 22px; height: 22px; color: white;" }
                        }
                        a { href: "https://www.instagram.com", target: "_blank", rel: "noopener", title: "Instagram",
                            Icon { icon: FaInstagram, style: "width: 22px; height: 22px; color: white;" }
                        }
                        a { href: "https://www.youtube.com", target: "_blank", rel: "noopener", title: "YouTube",
                            Icon { icon: FaYoutube, style: "width: 22px; height: 22px; color: white;" }
                        }
                    }
                }
                CountrySelector {}
            }

            div {
                style: "display:flex; flex-direction: row; gap: 24px; font-size: 14px; color: rgba(255,255,255,0.7);",
                span { "© {STORE_NAME}" }
                a { href: "/policies/privacy-policy", style: "color: inherit;", "{text.privacy_policy}" }
            }
        }
    }
}
