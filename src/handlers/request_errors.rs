use actix_web::{error, web, HttpRequest, HttpResponse};

use crate::models::common::ApiResponse;

/// Non-integer match ids are a client error, not a missing route.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, req| {
        tracing::debug!("Rejecting path {}: {}", req.path(), err);
        let response = HttpResponse::BadRequest()
            .json(ApiResponse::<()>::error_with_message("Invalid match id", err.to_string()));
        error::InternalError::from_response(err, response).into()
    })
}

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        tracing::debug!("Rejecting body for {}: {}", req.path(), err);
        let response = HttpResponse::BadRequest()
            .json(ApiResponse::<()>::error_with_message("Malformed JSON body", err.to_string()));
        error::InternalError::from_response(err, response).into()
    })
}

pub async fn not_found(req: HttpRequest) -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::<()>::error(format!(
        "No route for {} {}",
        req.method(),
        req.path()
    )))
}
