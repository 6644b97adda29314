//! Gives rendered pages of missing collections a 404 status. The page
//! itself is rendered by the app; this layer only fixes the status line.

use axum::{extract::Request, http::{Method, StatusCode}, middleware::Next, response::Response};
use common::localization::I18nLocale;
use tracing::{info, warn};

use crate::api::products::collection_exists;

/// The collection handle of a page path: `/collections/<handle>` or
/// `/<locale>/collections/<handle>`.
pub fn collection_handle_from_path(path: &str) -> Option<String> {
    let segments = path.split('/').filter(|s| !s.is_empty()).collect::<Vec<_>>();
    match segments.as_slice() {
        ["collections", handle] => Some(handle.to_string()),
        [locale, "collections", handle] if locale.parse::<I18nLocale>().is_ok() => Some(handle.to_string()),
        _ => None,
    }
}

pub async fn mark_missing_collections(request: Request, next: Next) -> Response {
    let handle = if request.method() == &Method::GET {
        collection_handle_from_path(request.uri().path())
    } else {
        None
    };
    let mut response = next.run(request).await;
    let Some(handle) = handle else {
        return response;
    };
    if response.status() != StatusCode::OK {
        return response;
    }
    match collection_exists(&handle).await {
        Ok(true) => {}
        Ok(false) => {
            info!("collection {} not found, answering 404", handle);
            *response.status_mut() = StatusCode::NOT_FOUND;
        }
        Err(e) => warn!("could not check collection {}: {:#}", handle, e),
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_collection_handles() {
        assert_eq!(collection_handle_from_path("/collections/shoes"), Some("shoes".to_string()));
        assert_eq!(collection_handle_from_path("/en-us/collections/shoes/"), Some("shoes".to_string()));
        assert_eq!(collection_handle_from_path("/products"), None);
        assert_eq!(collection_handle_from_path("/collections"), None);
        assert_eq!(collection_handle_from_path("/shop/collections/shoes"), None);
        assert_eq!(collection_handle_from_path("/collections/shoes/extra"), None);
    }
}
