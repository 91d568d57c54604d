//! Application service — CRUD over the `applications` table.
//!
//! DESIGN
//! ======
//! An application is a named container for screens. Names are unique
//! case-insensitively (enforced both here and by a unique index on
//! `LOWER(name)`). Screen writes bump the parent's `updated_at` via
//! [`touch`], so the application list can be ordered by recent activity.

#[cfg(test)]
#[path = "application_test.rs"]
mod application_test;

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ApplicationError {
    #[error("application not found: {0}")]
    NotFound(Uuid),
    #[error("an application named \"{0}\" already exists")]
    DuplicateName(String),
    #[error("application name must not be empty")]
    EmptyName,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Row returned from application queries.
#[derive(Debug, Clone)]
pub struct ApplicationRow {
    pub id: Uuid,
    pub name: String,
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Check an application name, returning the trimmed form.
///
/// # Errors
///
/// [`ApplicationError::EmptyName`] for whitespace-only names.
pub fn validate_name(name: &str) -> Result<&str, ApplicationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ApplicationError::EmptyName);
    }
    Ok(trimmed)
}

async fn name_taken(pool: &PgPool, name: &str, exclude: Option<Uuid>) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(
            SELECT 1 FROM applications
            WHERE LOWER(name) = LOWER($1) AND ($2::uuid IS NULL OR id <> $2)
         )",
    )
    .bind(name)
    .bind(exclude)
    .fetch_one(pool)
    .await
}

// =============================================================================
// CRUD
// =============================================================================

/// Create a new application.
///
/// # Errors
///
/// [`ApplicationError::EmptyName`] or [`ApplicationError::DuplicateName`] on
/// validation failure, otherwise a database error.
pub async fn create(pool: &PgPool, name: &str) -> Result<ApplicationRow, ApplicationError> {
    let name = validate_name(name)?;
    if name_taken(pool, name, None).await? {
        return Err(ApplicationError::DuplicateName(name.to_owned()));
    }

    let id = Uuid::new_v4();
    sqlx::query("INSERT INTO applications (id, name) VALUES ($1, $2)")
        .bind(id)
        .bind(name)
        .execute(pool)
        .await?;

    info!(application_id = %id, name, "application created");
    Ok(ApplicationRow { id, name: name.to_owned() })
}

/// List all applications, most recently updated first.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list(pool: &PgPool) -> Result<Vec<ApplicationRow>, ApplicationError> {
    let rows = sqlx::query_as::<_, (Uuid, String)>(
        "SELECT id, name FROM applications ORDER BY updated_at DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|(id, name)| ApplicationRow { id, name }).collect())
}

/// Fetch one application.
///
/// # Errors
///
/// [`ApplicationError::NotFound`] when no row matches.
pub async fn get(pool: &PgPool, id: Uuid) -> Result<ApplicationRow, ApplicationError> {
    let row = sqlx::query_as::<_, (Uuid, String)>("SELECT id, name FROM applications WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(ApplicationError::NotFound(id))?;

    Ok(ApplicationRow { id: row.0, name: row.1 })
}

/// Rename an application.
///
/// # Errors
///
/// Validation errors as for [`create`], plus [`ApplicationError::NotFound`].
pub async fn rename(pool: &PgPool, id: Uuid, name: &str) -> Result<ApplicationRow, ApplicationError> {
    let name = validate_name(name)?;
    if name_taken(pool, name, Some(id)).await? {
        return Err(ApplicationError::DuplicateName(name.to_owned()));
    }

    let result = sqlx::query("UPDATE applications SET name = $2, updated_at = now() WHERE id = $1")
        .bind(id)
        .bind(name)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(ApplicationError::NotFound(id));
    }

    Ok(ApplicationRow { id, name: name.to_owned() })
}

/// Delete an application; its screens go with it (cascade).
///
/// # Errors
///
/// [`ApplicationError::NotFound`] when no row matches.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), ApplicationError> {
    let result = sqlx::query("DELETE FROM applications WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(ApplicationError::NotFound(id));
    }

    info!(application_id = %id, "application deleted");
    Ok(())
}

/// Bump an application's `updated_at`. Called on screen writes; a missing
/// parent is not an error here (the screen write already validated it).
///
/// # Errors
///
/// Returns a database error if the update fails.
pub async fn touch(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE applications SET updated_at = now() WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
