use actix_web::{web, HttpResponse, Result};
use sqlx::PgPool;

use crate::db::event_queries::EventQueries;
use crate::db::helpers::{bad_request, query_error_response};
use crate::models::common::ApiResponse;
use crate::models::match_events::{CardKind, CardRequest, ExtraTimeRequest, GoalRequest};

#[tracing::instrument(
    name = "Register goal",
    skip(request, pool),
    fields(match_id = %match_id, team_id = %request.team_id)
)]
pub async fn register_goal(
    match_id: i32,
    request: web::Json<GoalRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let queries = EventQueries::new(pool.get_ref().clone());

    match queries.register_goal(match_id, &request.team_id).await {
        Ok(updated) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            format!("Goal registered for {}", request.team_id.trim()),
            updated,
        ))),
        Err(e) => Ok(query_error_response(e)),
    }
}

#[tracing::instrument(
    name = "Register card",
    skip(request, pool),
    fields(match_id = %match_id, kind = %kind, player_id = %request.player_id)
)]
pub async fn register_card(
    match_id: i32,
    kind: CardKind,
    request: web::Json<CardRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    if let Err(message) = request.validate() {
        return Ok(bad_request(message));
    }
    let queries = EventQueries::new(pool.get_ref().clone());

    match queries
        .register_card(match_id, request.player_id, request.minute, kind)
        .await
    {
        Ok(card) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            format!("{} card registered for player {}", kind, request.player_id),
            card,
        ))),
        Err(e) => Ok(query_error_response(e)),
    }
}

#[tracing::instrument(
    name = "Set extra time",
    skip(request, pool),
    fields(match_id = %match_id, minutes = %request.minutes)
)]
pub async fn set_extra_time(
    match_id: i32,
    request: web::Json<ExtraTimeRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    if let Err(message) = request.validate() {
        return Ok(bad_request(message));
    }
    let queries = EventQueries::new(pool.get_ref().clone());

    match queries.set_extra_time(match_id, request.minutes).await {
        Ok(updated) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            format!("Extra time set to {} minutes", request.minutes),
            updated,
        ))),
        Err(e) => Ok(query_error_response(e)),
    }
}

#[tracing::instrument(name = "List goals", skip(pool), fields(match_id = %match_id))]
pub async fn list_goals(match_id: i32, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let queries = EventQueries::new(pool.get_ref().clone());

    match queries.list_goals(match_id).await {
        Ok(goals) => Ok(HttpResponse::Ok().json(goals)),
        Err(e) => Ok(query_error_response(e)),
    }
}

#[tracing::instrument(name = "List cards", skip(pool), fields(match_id = %match_id))]
pub async fn list_cards(match_id: i32, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let queries = EventQueries::new(pool.get_ref().clone());

    match queries.list_cards(match_id).await {
        Ok(cards) => Ok(HttpResponse::Ok().json(cards)),
        Err(e) => Ok(query_error_response(e)),
    }
}
