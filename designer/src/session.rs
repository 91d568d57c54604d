//! Screen session: save/load/delete orchestration between the editor and the
//! persistence service.
//!
//! ERROR HANDLING
//! ==============
//! Validation runs before any network call and short-circuits with a
//! [`ValidationError`]. A failed save leaves the editor in its current
//! unsaved state; a failed load (network or parse) leaves the previous
//! canvas completely untouched — the editor is only reset after the fetched
//! document parses.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use tracing::info;

use crate::consts::{MIN_SCREEN_NAME_LEN, PLACEHOLDER_SCREEN_NAME};
use crate::editor::Editor;
use crate::error::ValidationError;
use crate::layout::{LayoutDocument, LayoutError};
use crate::store::{ApplicationId, ScreenId, ScreenStore, StoreError};

/// Failure to save, load, or delete a screen.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The identity side of one editing session: which application the screen
/// belongs to, its persisted id (if any), and its display name.
#[derive(Debug, Clone)]
pub struct ScreenSession {
    application_id: ApplicationId,
    screen_id: Option<ScreenId>,
    name: String,
}

impl ScreenSession {
    /// A fresh, unsaved session under an application.
    #[must_use]
    pub fn new(application_id: ApplicationId) -> Self {
        Self {
            application_id,
            screen_id: None,
            name: PLACEHOLDER_SCREEN_NAME.to_owned(),
        }
    }

    /// The persisted screen id, or `None` while unsaved.
    #[must_use]
    pub fn screen_id(&self) -> Option<ScreenId> {
        self.screen_id
    }

    /// The current display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Change the display name (validated at the next save).
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Start over with an empty, unnamed, unsaved screen.
    pub fn begin_new(&mut self, editor: &mut Editor) {
        editor.clear();
        self.screen_id = None;
        self.name = PLACEHOLDER_SCREEN_NAME.to_owned();
    }

    /// Persist the editor's canvas under this session's name.
    ///
    /// Creates a new screen when the session has never been saved, otherwise
    /// updates in place. On success the editor is marked clean.
    ///
    /// # Errors
    ///
    /// [`ValidationError`] (before any network call) when the canvas is
    /// empty, the name is missing, still the placeholder, too short, or
    /// duplicates a sibling screen's name case-insensitively; otherwise any
    /// [`StoreError`] from the service.
    pub async fn save(&mut self, editor: &mut Editor, store: &dyn ScreenStore) -> Result<ScreenId, SessionError> {
        if editor.store().is_empty() {
            return Err(ValidationError::EmptyCanvas.into());
        }
        let name = validate_name(&self.name)?.to_owned();

        let siblings = store.list(self.application_id).await?;
        let lowered = name.to_lowercase();
        if siblings
            .iter()
            .any(|s| Some(s.id) != self.screen_id && s.name.to_lowercase() == lowered)
        {
            return Err(ValidationError::DuplicateName(name).into());
        }

        let layout_json = editor.snapshot().to_json()?;
        let record = match self.screen_id {
            Some(id) => store.update(id, &name, &layout_json).await?,
            None => store.create(self.application_id, &name, &layout_json).await?,
        };

        info!(screen_id = %record.id, name = %record.name, "screen saved");
        self.screen_id = Some(record.id);
        self.name = record.name;
        editor.mark_clean();
        // The validated name may differ from the raw one only by trimming.
        Ok(record.id)
    }

    /// Fetch a persisted screen and open it in the editor.
    ///
    /// # Errors
    ///
    /// [`StoreError`] when the fetch fails and [`LayoutError`] when the
    /// fetched document does not parse; in both cases the editor keeps its
    /// previous contents.
    pub async fn load(
        &mut self,
        editor: &mut Editor,
        store: &dyn ScreenStore,
        id: ScreenId,
    ) -> Result<(), SessionError> {
        let record = store.get(id).await?;
        let document = LayoutDocument::from_json(&record.layout_json)?;

        editor.load_layout(document);
        self.screen_id = Some(record.id);
        self.name = record.name;
        info!(screen_id = %id, name = %self.name, "screen loaded");
        Ok(())
    }

    /// Delete a persisted screen; it need not be the one currently open.
    /// If it is, the session reverts to unsaved.
    ///
    /// # Errors
    ///
    /// Any [`StoreError`] from the service.
    pub async fn delete(&mut self, store: &dyn ScreenStore, id: ScreenId) -> Result<(), SessionError> {
        store.delete(id).await?;
        if self.screen_id == Some(id) {
            self.screen_id = None;
        }
        info!(screen_id = %id, "screen deleted");
        Ok(())
    }
}

/// Check a screen name against the naming rules, returning the trimmed name.
///
/// # Errors
///
/// [`ValidationError::EmptyName`] for whitespace-only names,
/// [`ValidationError::PlaceholderName`] for the literal "New Screen"
/// placeholder, and [`ValidationError::NameTooShort`] below the minimum
/// length.
pub fn validate_name(name: &str) -> Result<&str, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if trimmed == PLACEHOLDER_SCREEN_NAME {
        return Err(ValidationError::PlaceholderName);
    }
    if trimmed.chars().count() < MIN_SCREEN_NAME_LEN {
        return Err(ValidationError::NameTooShort);
    }
    Ok(trimmed)
}
