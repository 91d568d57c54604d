//! Validation errors reported to the user before any persistence call.

use crate::consts::MIN_SCREEN_NAME_LEN;

/// A user-facing validation failure. Caught before any network call and
/// reported without retry; never fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("cannot save an empty canvas — add at least one component first")]
    EmptyCanvas,
    #[error("screen name is required")]
    EmptyName,
    #[error("choose a real screen name before saving")]
    PlaceholderName,
    #[error("screen name must be at least {MIN_SCREEN_NAME_LEN} characters")]
    NameTooShort,
    #[error("a screen named '{0}' already exists in this application")]
    DuplicateName(String),
    #[error("{field} must be an integer")]
    InvalidNumber {
        /// The property-panel field that failed to parse.
        field: &'static str,
    },
}
