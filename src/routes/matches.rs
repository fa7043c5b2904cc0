use actix_web::{delete, get, patch, post, put, web, HttpResponse, Result};
use sqlx::PgPool;

use crate::handlers::{match_event_handler, match_handler};
use crate::models::match_data::MatchRequest;
use crate::models::match_events::{CardKind, CardRequest, ExtraTimeRequest, GoalRequest};

/// List every match
#[get("/matches")]
pub async fn list_matches(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    match_handler::list_matches(pool).await
}

/// Get a single match
#[get("/matches/{id}")]
pub async fn get_match(path: web::Path<i32>, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    match_handler::get_match(path.into_inner(), pool).await
}

/// Create a match
#[post("/matches")]
pub async fn create_match(
    request: web::Json<MatchRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    match_handler::create_match(request, pool).await
}

/// Overwrite a match
#[put("/matches/{id}")]
pub async fn update_match(
    path: web::Path<i32>,
    request: web::Json<MatchRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    match_handler::update_match(path.into_inner(), request, pool).await
}

#[delete("/matches/{id}")]
pub async fn delete_match(path: web::Path<i32>, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    match_handler::delete_match(path.into_inner(), pool).await
}

/// Register a goal for one of the two teams
#[patch("/matches/{id}/goals")]
pub async fn register_goal(
    path: web::Path<i32>,
    request: web::Json<GoalRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    match_event_handler::register_goal(path.into_inner(), request, pool).await
}

#[patch("/matches/{id}/yellowcards")]
pub async fn register_yellow_card(
    path: web::Path<i32>,
    request: web::Json<CardRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    match_event_handler::register_card(path.into_inner(), CardKind::Yellow, request, pool).await
}

#[patch("/matches/{id}/redcards")]
pub async fn register_red_card(
    path: web::Path<i32>,
    request: web::Json<CardRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    match_event_handler::register_card(path.into_inner(), CardKind::Red, request, pool).await
}

/// Set extra time minutes
#[patch("/matches/{id}/extratime")]
pub async fn set_extra_time(
    path: web::Path<i32>,
    request: web::Json<ExtraTimeRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    match_event_handler::set_extra_time(path.into_inner(), request, pool).await
}

/// Goal history of a match
#[get("/matches/{id}/goals")]
pub async fn list_goals(path: web::Path<i32>, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    match_event_handler::list_goals(path.into_inner(), pool).await
}

/// Card history of a match
#[get("/matches/{id}/cards")]
pub async fn list_cards(path: web::Path<i32>, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    match_event_handler::list_cards(path.into_inner(), pool).await
}
