//! # API Endpoint Handlers
//!
//! This module implements the actual HTTP endpoint handlers. Each handler
//! takes the catalog lock for the duration of one core operation.

use super::{
    AppState,
    error::ApiError,
    types::{FilmRequest, HealthResponse, PopularQuery, StatusResponse, UserRequest},
};
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use filmorate_core::{Film, FilmId, User, UserId, primitives::DEFAULT_POPULAR_COUNT};

type ApiResult<T> = Result<T, ApiError>;

// =============================================================================
// HEALTH / STATUS
// =============================================================================

/// Health check endpoint.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::default())
}

/// Record and edge counts.
pub async fn status_handler(State(state): State<AppState>) -> impl IntoResponse {
    let catalog = state.catalog.read().await;
    Json(StatusResponse::from(catalog.stats()))
}

// =============================================================================
// FILMS
// =============================================================================

pub async fn list_films(State(state): State<AppState>) -> Json<Vec<Film>> {
    let catalog = state.catalog.read().await;
    Json(catalog.films())
}

pub async fn get_film(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> ApiResult<Json<Film>> {
    let Path(id) = path?;
    let catalog = state.catalog.read().await;
    Ok(Json(catalog.film(FilmId(id))?))
}

pub async fn create_film(
    State(state): State<AppState>,
    payload: Result<Json<FilmRequest>, JsonRejection>,
) -> ApiResult<Json<Film>> {
    let Json(request) = payload?;
    let film = request.into_film()?;

    let mut catalog = state.catalog.write().await;
    let created = catalog.create_film(film)?;
    tracing::info!(film_id = ?created.id, name = %created.name, "Film created");
    Ok(Json(created))
}

pub async fn update_film(
    State(state): State<AppState>,
    payload: Result<Json<FilmRequest>, JsonRejection>,
) -> ApiResult<Json<Film>> {
    let Json(request) = payload?;
    let film = request.into_film()?;

    let mut catalog = state.catalog.write().await;
    let updated = catalog.update_film(film)?;
    tracing::info!(film_id = ?updated.id, "Film updated");
    Ok(Json(updated))
}

/// `PUT /films/{id}/like/{userId}`; responds with the film after the change.
pub async fn add_like(
    State(state): State<AppState>,
    path: Result<Path<(u64, u64)>, PathRejection>,
) -> ApiResult<Json<Film>> {
    let Path((film_id, user_id)) = path?;
    let mut catalog = state.catalog.write().await;
    let film = catalog.add_like(FilmId(film_id), UserId(user_id))?;
    tracing::info!(film_id, user_id, likes = film.like_count(), "Like added");
    Ok(Json(film))
}

pub async fn remove_like(
    State(state): State<AppState>,
    path: Result<Path<(u64, u64)>, PathRejection>,
) -> ApiResult<Json<Film>> {
    let Path((film_id, user_id)) = path?;
    let mut catalog = state.catalog.write().await;
    let film = catalog.remove_like(FilmId(film_id), UserId(user_id))?;
    tracing::info!(film_id, user_id, likes = film.like_count(), "Like removed");
    Ok(Json(film))
}

/// `GET /films/popular?count=N`; `count` defaults to 10.
pub async fn popular_films(
    State(state): State<AppState>,
    query: Result<Query<PopularQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Film>>> {
    let Query(query) = query?;
    let count = query.count.unwrap_or(DEFAULT_POPULAR_COUNT);

    let catalog = state.catalog.read().await;
    Ok(Json(catalog.popular(count)))
}

// =============================================================================
// USERS
// =============================================================================

pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    let catalog = state.catalog.read().await;
    Json(catalog.users())
}

pub async fn get_user(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> ApiResult<Json<User>> {
    let Path(id) = path?;
    let catalog = state.catalog.read().await;
    Ok(Json(catalog.user(UserId(id))?))
}

pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> ApiResult<Json<User>> {
    let Json(request) = payload?;
    let user = request.into_user()?;

    let mut catalog = state.catalog.write().await;
    let created = catalog.create_user(user)?;
    tracing::info!(user_id = ?created.id, login = %created.login, "User created");
    Ok(Json(created))
}

pub async fn update_user(
    State(state): State<AppState>,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> ApiResult<Json<User>> {
    let Json(request) = payload?;
    let user = request.into_user()?;

    let mut catalog = state.catalog.write().await;
    let updated = catalog.update_user(user)?;
    tracing::info!(user_id = ?updated.id, "User updated");
    Ok(Json(updated))
}

// =============================================================================
// FRIENDS
// =============================================================================

pub async fn add_friend(
    State(state): State<AppState>,
    path: Result<Path<(u64, u64)>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path((user_id, friend_id)) = path?;
    let mut catalog = state.catalog.write().await;
    catalog.add_friend(UserId(user_id), UserId(friend_id))?;
    tracing::info!(user_id, friend_id, "Friendship added");
    Ok(StatusCode::OK)
}

pub async fn remove_friend(
    State(state): State<AppState>,
    path: Result<Path<(u64, u64)>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path((user_id, friend_id)) = path?;
    let mut catalog = state.catalog.write().await;
    catalog.remove_friend(UserId(user_id), UserId(friend_id))?;
    tracing::info!(user_id, friend_id, "Friendship removed");
    Ok(StatusCode::OK)
}

pub async fn list_friends(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> ApiResult<Json<Vec<User>>> {
    let Path(user_id) = path?;
    let catalog = state.catalog.read().await;
    Ok(Json(catalog.friends(UserId(user_id))?))
}

pub async fn common_friends(
    State(state): State<AppState>,
    path: Result<Path<(u64, u64)>, PathRejection>,
) -> ApiResult<Json<Vec<User>>> {
    let Path((user_id, other_id)) = path?;
    let catalog = state.catalog.read().await;
    Ok(Json(
        catalog.common_friends(UserId(user_id), UserId(other_id))?,
    ))
}
