//! Handlers for the `/photographer` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use microgram_core::validation::is_valid_username;
use microgram_db::models::photographer::Photographer;
use microgram_db::repositories::PhotographerRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Response for path usernames failing the character-class check.
/// Wording kept verbatim for compatibility with existing clients.
const INVALID_USERNAME_MSG: &str = "User should not be exist";

/// Response for undecodable request bodies.
const INVALID_PAYLOAD_MSG: &str = "Invalid request payload";

/// Reject path usernames that miss the character-class pattern before any
/// database access happens.
fn check_username(username: &str) -> Result<(), AppError> {
    if is_valid_username(username) {
        Ok(())
    } else {
        Err(AppError::BadRequest(INVALID_USERNAME_MSG.to_string()))
    }
}

/// Unwrap a JSON body extraction, translating any rejection into the
/// fixed bad-payload response.
fn decode_body(body: Result<Json<Photographer>, JsonRejection>) -> Result<Photographer, AppError> {
    let Json(photographer) =
        body.map_err(|_| AppError::BadRequest(INVALID_PAYLOAD_MSG.to_string()))?;
    Ok(photographer)
}

/// POST /photographer
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Photographer>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Photographer>)> {
    let photographer = decode_body(body)?;
    PhotographerRepo::create(&state.pool, &photographer).await?;
    Ok((StatusCode::CREATED, Json(photographer)))
}

/// GET /photographer/{username}
pub async fn get_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<Photographer>> {
    check_username(&username)?;
    let photographer = PhotographerRepo::fetch(&state.pool, &username).await?;
    Ok(Json(photographer))
}

/// PUT /photographer/{username}
pub async fn update(
    State(state): State<AppState>,
    Path(username): Path<String>,
    body: Result<Json<Photographer>, JsonRejection>,
) -> AppResult<Json<Photographer>> {
    check_username(&username)?;
    let mut photographer = decode_body(body)?;

    // The path parameter always wins over a body-supplied username.
    photographer.username = username;

    PhotographerRepo::update(&state.pool, &photographer).await?;
    Ok(Json(photographer))
}

/// DELETE /photographer/{username}
pub async fn delete(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<Photographer>> {
    check_username(&username)?;
    PhotographerRepo::delete(&state.pool, &username).await?;

    // Echo a record carrying only the username; nothing is re-fetched.
    Ok(Json(Photographer {
        username,
        ..Photographer::default()
    }))
}

/// Pagination parameters for the list endpoint.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub offset: i64,
    #[serde(default = "default_count")]
    pub count: i64,
}

fn default_count() -> i64 {
    10
}

/// GET /photographer
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Photographer>>> {
    let photographers =
        PhotographerRepo::list(&state.pool, params.offset, params.count).await?;
    Ok(Json(photographers))
}
