use actix_web::{web, HttpResponse, Result};
use sqlx::PgPool;

use crate::db::helpers::{bad_request, query_error_response};
use crate::db::match_queries::MatchQueries;
use crate::models::common::ApiResponse;
use crate::models::match_data::{MatchRequest, NewMatch};

#[tracing::instrument(name = "List matches", skip(pool))]
pub async fn list_matches(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let queries = MatchQueries::new(pool.get_ref().clone());

    match queries.list_matches().await {
        Ok(matches) => Ok(HttpResponse::Ok().json(matches)),
        Err(e) => Ok(query_error_response(e)),
    }
}

#[tracing::instrument(name = "Get match", skip(pool), fields(match_id = %match_id))]
pub async fn get_match(match_id: i32, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let queries = MatchQueries::new(pool.get_ref().clone());

    match queries.get_match(match_id).await {
        Ok(found) => Ok(HttpResponse::Ok().json(found)),
        Err(e) => Ok(query_error_response(e)),
    }
}

#[tracing::instrument(
    name = "Create match",
    skip(request, pool),
    fields(
        home_team = %request.home_team,
        away_team = %request.away_team
    )
)]
pub async fn create_match(
    request: web::Json<MatchRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let new_match = match NewMatch::try_from(request.into_inner()) {
        Ok(new_match) => new_match,
        Err(message) => return Ok(bad_request(message)),
    };
    let queries = MatchQueries::new(pool.get_ref().clone());

    match queries.create_match(&new_match).await {
        Ok(created) => Ok(HttpResponse::Ok().json(created)),
        Err(e) => Ok(query_error_response(e)),
    }
}

#[tracing::instrument(name = "Update match", skip(request, pool), fields(match_id = %match_id))]
pub async fn update_match(
    match_id: i32,
    request: web::Json<MatchRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let new_match = match NewMatch::try_from(request.into_inner()) {
        Ok(new_match) => new_match,
        Err(message) => return Ok(bad_request(message)),
    };
    let queries = MatchQueries::new(pool.get_ref().clone());

    match queries.update_match(match_id, &new_match).await {
        Ok(updated) => Ok(HttpResponse::Ok().json(updated)),
        Err(e) => Ok(query_error_response(e)),
    }
}

#[tracing::instrument(name = "Delete match", skip(pool), fields(match_id = %match_id))]
pub async fn delete_match(match_id: i32, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let queries = MatchQueries::new(pool.get_ref().clone());

    match queries.delete_match(match_id).await {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message(format!(
            "Match {} deleted",
            match_id
        )))),
        Err(e) => Ok(query_error_response(e)),
    }
}
