//! Conversions from query failures into HTTP responses.
//!
//! Handlers match on their `Result<_, QueryError>` and hand the error here:
//! ```ignore
//! match queries.get_match(match_id).await {
//!     Ok(found) => Ok(HttpResponse::Ok().json(found)),
//!     Err(e) => Ok(query_error_response(e)),
//! }
//! ```

use actix_web::HttpResponse;

use crate::db::QueryError;
use crate::models::common::ApiResponse;

/// Map a `QueryError` to its status code, logging store failures.
pub fn query_error_response(error: QueryError) -> HttpResponse {
    match error {
        QueryError::MatchNotFound(_) => {
            HttpResponse::NotFound().json(ApiResponse::<()>::error(error.to_string()))
        }
        QueryError::UnknownTeam { .. } => {
            HttpResponse::BadRequest().json(ApiResponse::<()>::error(error.to_string()))
        }
        QueryError::Database(e) => {
            tracing::error!("Database error: {}", e);
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error("Database error"))
        }
    }
}

/// 400 response for a request that failed validation.
pub fn bad_request(message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::<()>::error(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            query_error_response(QueryError::MatchNotFound(4)).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            query_error_response(QueryError::UnknownTeam { match_id: 4, team: "X".into() }).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            query_error_response(QueryError::Database(sqlx::Error::RowNotFound)).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(bad_request("nope").status(), StatusCode::BAD_REQUEST);
    }
}
