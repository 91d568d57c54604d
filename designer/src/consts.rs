//! Shared numeric constants for the designer crate.

// ── Canvas ──────────────────────────────────────────────────────

/// Logical canvas width in pixels (fixed, matches the target phone frame).
pub const CANVAS_WIDTH: i32 = 375;

/// Default logical canvas height in pixels.
pub const DEFAULT_CANVAS_HEIGHT: i32 = 667;

/// Lowest height the canvas may be adjusted to.
pub const MIN_CANVAS_HEIGHT: i32 = 400;

/// Highest height the canvas may be adjusted to.
pub const MAX_CANVAS_HEIGHT: i32 = 1000;

// ── Components ──────────────────────────────────────────────────

/// Minimum component width; resize saturates here instead of inverting.
pub const MIN_COMPONENT_WIDTH: i32 = 50;

/// Minimum component height; resize saturates here instead of inverting.
pub const MIN_COMPONENT_HEIGHT: i32 = 30;

/// Width assigned to a freshly placed component.
pub const DEFAULT_COMPONENT_WIDTH: i32 = 100;

/// Height assigned to a freshly placed component.
pub const DEFAULT_COMPONENT_HEIGHT: i32 = 50;

/// Text color assigned to a freshly placed component.
pub const DEFAULT_TEXT_COLOR: &str = "#000000";

/// Background color of a new canvas and of legacy layout documents.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#FFFFFF";

// ── Hit-testing ─────────────────────────────────────────────────

/// Hit slop in pixels around a corner resize handle.
pub const HANDLE_SLOP_PX: i32 = 8;

// ── Screens ─────────────────────────────────────────────────────

/// Display name of a screen that has never been named or saved.
pub const PLACEHOLDER_SCREEN_NAME: &str = "New Screen";

/// Minimum length of a screen name after trimming whitespace.
pub const MIN_SCREEN_NAME_LEN: usize = 2;
