//! Screen service — CRUD over the `screens` table.
//!
//! DESIGN
//! ======
//! A screen's layout travels as the serialized layout document produced by
//! the designer crate; the server validates it with the same parser the
//! editor loads with, so nothing unloadable can be persisted. Screen names
//! are unique case-insensitively within their application. Every screen
//! write bumps the parent application's `updated_at`.

#[cfg(test)]
#[path = "screen_test.rs"]
mod screen_test;

use designer::layout::LayoutDocument;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::services::application;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ScreenError {
    #[error("screen not found: {0}")]
    NotFound(Uuid),
    #[error("application not found: {0}")]
    ApplicationNotFound(Uuid),
    #[error("a screen named \"{0}\" already exists in this application")]
    DuplicateName(String),
    #[error("screen name must not be empty")]
    EmptyName,
    #[error("invalid layout document: {0}")]
    InvalidLayout(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Row returned from screen queries.
#[derive(Debug, Clone)]
pub struct ScreenRow {
    pub id: Uuid,
    pub application_id: Uuid,
    pub name: String,
    pub layout_json: String,
}

/// Lightweight listing entry.
#[derive(Debug, Clone)]
pub struct ScreenSummaryRow {
    pub id: Uuid,
    pub name: String,
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Check a screen name, returning the trimmed form.
///
/// # Errors
///
/// [`ScreenError::EmptyName`] for whitespace-only names.
pub fn validate_name(name: &str) -> Result<&str, ScreenError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ScreenError::EmptyName);
    }
    Ok(trimmed)
}

/// Check that a layout document parses (wrapped or legacy bare-array form).
///
/// # Errors
///
/// [`ScreenError::InvalidLayout`] with the parser's message.
pub fn validate_layout(layout_json: &str) -> Result<(), ScreenError> {
    LayoutDocument::from_json(layout_json)
        .map(|_| ())
        .map_err(|e| ScreenError::InvalidLayout(e.to_string()))
}

async fn application_exists(pool: &PgPool, application_id: Uuid) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM applications WHERE id = $1)")
        .bind(application_id)
        .fetch_one(pool)
        .await
}

async fn name_taken(
    pool: &PgPool,
    application_id: Uuid,
    name: &str,
    exclude: Option<Uuid>,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(
            SELECT 1 FROM screens
            WHERE application_id = $1
              AND LOWER(name) = LOWER($2)
              AND ($3::uuid IS NULL OR id <> $3)
         )",
    )
    .bind(application_id)
    .bind(name)
    .bind(exclude)
    .fetch_one(pool)
    .await
}

// =============================================================================
// CRUD
// =============================================================================

/// Create a new screen under an application.
///
/// # Errors
///
/// Name/layout validation errors, [`ScreenError::ApplicationNotFound`] for an
/// unknown parent, [`ScreenError::DuplicateName`] for a sibling name clash,
/// otherwise a database error.
pub async fn create(
    pool: &PgPool,
    application_id: Uuid,
    name: &str,
    layout_json: &str,
) -> Result<ScreenRow, ScreenError> {
    let name = validate_name(name)?;
    validate_layout(layout_json)?;
    if !application_exists(pool, application_id).await? {
        return Err(ScreenError::ApplicationNotFound(application_id));
    }
    if name_taken(pool, application_id, name, None).await? {
        return Err(ScreenError::DuplicateName(name.to_owned()));
    }

    let id = Uuid::new_v4();
    sqlx::query("INSERT INTO screens (id, application_id, name, layout_json) VALUES ($1, $2, $3, $4)")
        .bind(id)
        .bind(application_id)
        .bind(name)
        .bind(layout_json)
        .execute(pool)
        .await?;
    application::touch(pool, application_id).await?;

    info!(screen_id = %id, %application_id, name, "screen created");
    Ok(ScreenRow { id, application_id, name: name.to_owned(), layout_json: layout_json.to_owned() })
}

/// Overwrite a screen's name and layout.
///
/// # Errors
///
/// As for [`create`], plus [`ScreenError::NotFound`] for an unknown screen.
pub async fn update(
    pool: &PgPool,
    id: Uuid,
    name: &str,
    layout_json: &str,
) -> Result<ScreenRow, ScreenError> {
    let existing = get(pool, id).await?;
    let name = validate_name(name)?;
    validate_layout(layout_json)?;
    if name_taken(pool, existing.application_id, name, Some(id)).await? {
        return Err(ScreenError::DuplicateName(name.to_owned()));
    }

    sqlx::query("UPDATE screens SET name = $2, layout_json = $3, updated_at = now() WHERE id = $1")
        .bind(id)
        .bind(name)
        .bind(layout_json)
        .execute(pool)
        .await?;
    application::touch(pool, existing.application_id).await?;

    info!(screen_id = %id, name, "screen updated");
    Ok(ScreenRow {
        id,
        application_id: existing.application_id,
        name: name.to_owned(),
        layout_json: layout_json.to_owned(),
    })
}

/// Fetch one screen.
///
/// # Errors
///
/// [`ScreenError::NotFound`] when no row matches.
pub async fn get(pool: &PgPool, id: Uuid) -> Result<ScreenRow, ScreenError> {
    let row = sqlx::query_as::<_, (Uuid, Uuid, String, String)>(
        "SELECT id, application_id, name, layout_json FROM screens WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(ScreenError::NotFound(id))?;

    Ok(ScreenRow { id: row.0, application_id: row.1, name: row.2, layout_json: row.3 })
}

/// List an application's screens, newest first.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_for_application(
    pool: &PgPool,
    application_id: Uuid,
) -> Result<Vec<ScreenSummaryRow>, ScreenError> {
    let rows = sqlx::query_as::<_, (Uuid, String)>(
        "SELECT id, name FROM screens WHERE application_id = $1 ORDER BY created_at DESC",
    )
    .bind(application_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|(id, name)| ScreenSummaryRow { id, name }).collect())
}

/// Delete a screen.
///
/// # Errors
///
/// [`ScreenError::NotFound`] when no row matches.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), ScreenError> {
    let existing = get(pool, id).await?;
    sqlx::query("DELETE FROM screens WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    application::touch(pool, existing.application_id).await?;

    info!(screen_id = %id, "screen deleted");
    Ok(())
}
