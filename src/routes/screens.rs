//! Screen persistence routes.
//!
//! Bodies and responses are camelCase, matching the designer client's wire
//! types (`ScreenRecord` / `ScreenSummary`).

#[cfg(test)]
#[path = "screens_test.rs"]
mod screens_test;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::services::screen::{self, ScreenError, ScreenRow, ScreenSummaryRow};
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenResponse {
    pub id: Uuid,
    pub application_id: Uuid,
    pub name: String,
    pub layout_json: String,
}

#[derive(Serialize)]
pub struct ScreenSummaryResponse {
    pub id: Uuid,
    pub name: String,
}

fn to_response(row: ScreenRow) -> ScreenResponse {
    ScreenResponse {
        id: row.id,
        application_id: row.application_id,
        name: row.name,
        layout_json: row.layout_json,
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateScreenBody {
    pub application_id: Uuid,
    pub name: String,
    pub layout_json: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateScreenBody {
    pub name: String,
    pub layout_json: String,
}

/// `POST /api/screens` — create a screen.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateScreenBody>,
) -> Result<(StatusCode, Json<ScreenResponse>), (StatusCode, String)> {
    let row = screen::create(&state.pool, body.application_id, &body.name, &body.layout_json)
        .await
        .map_err(error_to_response)?;
    Ok((StatusCode::CREATED, Json(to_response(row))))
}

/// `GET /api/screens/:id` — fetch one screen.
pub async fn fetch(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ScreenResponse>, (StatusCode, String)> {
    let row = screen::get(&state.pool, id).await.map_err(error_to_response)?;
    Ok(Json(to_response(row)))
}

/// `PUT /api/screens/:id` — overwrite a screen's name and layout.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateScreenBody>,
) -> Result<Json<ScreenResponse>, (StatusCode, String)> {
    let row = screen::update(&state.pool, id, &body.name, &body.layout_json)
        .await
        .map_err(error_to_response)?;
    Ok(Json(to_response(row)))
}

/// `GET /api/screens/application/:application_id` — list screens, newest first.
pub async fn list_for_application(
    State(state): State<AppState>,
    Path(application_id): Path<Uuid>,
) -> Result<Json<Vec<ScreenSummaryResponse>>, (StatusCode, String)> {
    let rows = screen::list_for_application(&state.pool, application_id)
        .await
        .map_err(error_to_response)?;
    Ok(Json(
        rows.into_iter()
            .map(|ScreenSummaryRow { id, name }| ScreenSummaryResponse { id, name })
            .collect(),
    ))
}

/// `DELETE /api/screens/:id` — delete a screen.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    screen::delete(&state.pool, id).await.map_err(error_to_response)?;
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) fn error_to_response(err: ScreenError) -> (StatusCode, String) {
    match err {
        ScreenError::NotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
        ScreenError::ApplicationNotFound(_)
        | ScreenError::DuplicateName(_)
        | ScreenError::EmptyName
        | ScreenError::InvalidLayout(_) => (StatusCode::BAD_REQUEST, err.to_string()),
        ScreenError::Database(_) => {
            tracing::error!(error = %err, "screen route failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_owned())
        }
    }
}
