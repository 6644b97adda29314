use common::ui_text::UiText;
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::routes::Route;

/// Catch-all route.
#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    debug!("no route for /{}", segments.join("/"));
    rsx! {
        NotFoundView {}
    }
}

/// Also shown by listings whose collection does not exist.
#[component]
pub fn NotFoundView() -> Element {
    let route = use_route::<Route>();
    let locale = route.locale();
    let text = UiText::for_language(&locale.language);
    rsx! {
        Title { "{text.not_found}" }
        div {
            class: "x-not-found",
            style: "display:flex; flex-direction: column; gap: 16px; padding: 48px 0;",
            h1 { style: "font-size: 34px;", "404 {text.not_found}" }
            Link { to: Route::home(&locale), "{text.back_home}" }
        }
    }
}
