use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, info};

use crate::api::localization::list_countries;

/// `GET /api/countries`
pub async fn countries() -> Response {
    info!("Listing countries");
    match list_countries().await {
        Ok(locales) => Json(locales).into_response(),
        Err(e) => {
            error!("Error listing countries: {:#?}", e);
            (StatusCode::BAD_GATEWAY, format!("Error listing countries: {}", e)).into_response()
        }
    }
}
