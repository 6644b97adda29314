use common::{
    currency::format_money,
    localization::I18nLocale,
    storefront_model::{ImageLoading, ProductBadge, ProductSummary},
    ui_text::UiText,
};
use dioxus::prelude::*;

#[component]
pub fn ProductCard(product: ProductSummary, locale: I18nLocale, loading: ImageLoading) -> Element {
    let text = UiText::for_language(&locale.language);
    let price = format_money(&product.price, &locale);
    let compare_at_price = product.compare_at_price.as_ref().map(|m| format_money(m, &locale));
    let href = if locale.is_default() {
        format!("/products/{}", product.handle)
    } else {
        format!("/{}/products/{}", locale.prefix_key(), product.handle)
    };

    rsx! {
        a {
            class: "x-product-card",
            href,
            div {
                style: "position: relative; aspect-ratio: 1 / 1; background: #F5F6F8; border-radius: 8px; overflow: hidden;",
                if let Some(image) = product.image.clone() {
                    img {
                        src: image.url,
                        alt: image.alt_text.unwrap_or(product.title.clone()),
                        width: image.width.map(|w| w.to_string()),
                        height: image.height.map(|h| h.to_string()),
                        loading: loading.as_str(),
                        style: "width: 100%; height: 100%; object-fit: cover;",
                    }
                }
                if let Some(badge) = product.badge {
                    span {
                        class: match badge {
                            ProductBadge::Sale => "x-badge x-badge-sale",
                            ProductBadge::New => "x-badge x-badge-new",
                        },
                        "{text.badge_label(badge)}"
                    }
                }
            }
            div {
                style: "display:flex; flex-direction: column; gap: 4px; padding-top: 8px;",
                span { style: "font-weight: 500;", "{product.title}" }
                div {
                    style: "display:flex; flex-direction: row; gap: 8px;",
                    span { "{price}" }
                    if let Some(compare_at_price) = compare_at_price {
                        del { style: "color: #6B7280;", "{compare_at_price}" }
                    }
                }
            }
        }
    }
}
