//! Application management routes.

#[cfg(test)]
#[path = "applications_test.rs"]
mod applications_test;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::services::application::{self, ApplicationError, ApplicationRow};
use crate::state::AppState;

#[derive(Serialize)]
pub struct ApplicationResponse {
    pub id: Uuid,
    pub name: String,
}

fn to_response(row: ApplicationRow) -> ApplicationResponse {
    ApplicationResponse { id: row.id, name: row.name }
}

#[derive(Deserialize)]
pub struct ApplicationBody {
    pub name: String,
}

/// `POST /api/applications` — create an application.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<ApplicationBody>,
) -> Result<(StatusCode, Json<ApplicationResponse>), (StatusCode, String)> {
    let row = application::create(&state.pool, &body.name)
        .await
        .map_err(error_to_response)?;
    Ok((StatusCode::CREATED, Json(to_response(row))))
}

/// `GET /api/applications` — list applications, most recently updated first.
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<ApplicationResponse>>, (StatusCode, String)> {
    let rows = application::list(&state.pool).await.map_err(error_to_response)?;
    Ok(Json(rows.into_iter().map(to_response).collect()))
}

/// `GET /api/applications/:id` — fetch one application.
pub async fn fetch(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApplicationResponse>, (StatusCode, String)> {
    let row = application::get(&state.pool, id).await.map_err(error_to_response)?;
    Ok(Json(to_response(row)))
}

/// `PUT /api/applications/:id` — rename an application.
pub async fn rename(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<ApplicationBody>,
) -> Result<Json<ApplicationResponse>, (StatusCode, String)> {
    let row = application::rename(&state.pool, id, &body.name)
        .await
        .map_err(error_to_response)?;
    Ok(Json(to_response(row)))
}

/// `DELETE /api/applications/:id` — delete an application and its screens.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    application::delete(&state.pool, id).await.map_err(error_to_response)?;
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) fn error_to_response(err: ApplicationError) -> (StatusCode, String) {
    match err {
        ApplicationError::NotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
        ApplicationError::DuplicateName(_) | ApplicationError::EmptyName => {
            (StatusCode::BAD_REQUEST, err.to_string())
        }
        ApplicationError::Database(_) => {
            tracing::error!(error = %err, "application route failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_owned())
        }
    }
}
