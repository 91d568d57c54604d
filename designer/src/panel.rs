//! Property panel state and edits.
//!
//! The panel mirrors the selected component's attributes; when nothing is
//! selected it shows the canvas background controls instead — the two views
//! are mutually exclusive, which `PanelView` encodes as a sum type. Edits flow
//! one way: field → `PropertyEdit` → model → visuals. Raw form strings parse
//! through [`PropertyEdit::parse`]; numeric fields must be integers.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use crate::error::ValidationError;
use crate::model::{Component, ComponentId, ComponentKind};

/// What the side panel currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelView {
    /// No selection: canvas background controls.
    Background {
        /// Current canvas background color.
        color: String,
        /// Current canvas background image, if any.
        image: Option<String>,
    },
    /// A component is selected: its editable attributes.
    Component(ComponentPanel),
}

/// Snapshot of the selected component's editable attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentPanel {
    pub id: ComponentId,
    /// Kind, shown read-only; also decides which optional controls appear.
    pub kind: ComponentKind,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub text: String,
    pub placeholder: String,
    pub text_color: String,
    pub z_index: i32,
    /// Toggle state; `None` hides the control (non-toggle kinds).
    pub checked: Option<bool>,
    /// Image reference; the control is shown only for the image kind.
    pub image_path: Option<String>,
}

impl ComponentPanel {
    /// Build the panel snapshot for a component.
    #[must_use]
    pub fn for_component(component: &Component) -> Self {
        Self {
            id: component.id.clone(),
            kind: component.kind,
            x: component.x,
            y: component.y,
            width: component.width,
            height: component.height,
            text: component.text.clone(),
            placeholder: component.placeholder.clone(),
            text_color: component.text_color.clone(),
            z_index: component.z_index,
            checked: component.kind.is_toggle().then_some(component.checked),
            image_path: component.image_path.clone(),
        }
    }
}

/// A panel field that accepts free-form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyField {
    X,
    Y,
    Width,
    Height,
    Text,
    Placeholder,
    TextColor,
    ZIndex,
}

impl PropertyField {
    /// User-facing field name for error messages.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Width => "width",
            Self::Height => "height",
            Self::Text => "text",
            Self::Placeholder => "placeholder",
            Self::TextColor => "text color",
            Self::ZIndex => "z-index",
        }
    }
}

/// One edit to apply to the selected component.
///
/// Geometry values are applied verbatim; the next move or resize clamps them
/// back into canvas bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyEdit {
    X(i32),
    Y(i32),
    Width(i32),
    Height(i32),
    Text(String),
    Placeholder(String),
    TextColor(String),
    ZIndex(i32),
    Checked(bool),
    ImagePath(Option<String>),
}

impl PropertyEdit {
    /// Parse a raw form value for `field` into a typed edit.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidNumber`] when a numeric field does
    /// not hold an integer.
    pub fn parse(field: PropertyField, raw: &str) -> Result<Self, ValidationError> {
        let int = |raw: &str| {
            raw.trim()
                .parse::<i32>()
                .map_err(|_| ValidationError::InvalidNumber { field: field.label() })
        };
        match field {
            PropertyField::X => Ok(Self::X(int(raw)?)),
            PropertyField::Y => Ok(Self::Y(int(raw)?)),
            PropertyField::Width => Ok(Self::Width(int(raw)?)),
            PropertyField::Height => Ok(Self::Height(int(raw)?)),
            PropertyField::ZIndex => Ok(Self::ZIndex(int(raw)?)),
            PropertyField::Text => Ok(Self::Text(raw.to_owned())),
            PropertyField::Placeholder => Ok(Self::Placeholder(raw.to_owned())),
            PropertyField::TextColor => Ok(Self::TextColor(raw.to_owned())),
        }
    }

    /// Write this edit into `component`.
    pub fn apply(&self, component: &mut Component) {
        match self {
            Self::X(v) => component.x = *v,
            Self::Y(v) => component.y = *v,
            Self::Width(v) => component.width = *v,
            Self::Height(v) => component.height = *v,
            Self::Text(v) => component.text.clone_from(v),
            Self::Placeholder(v) => component.placeholder.clone_from(v),
            Self::TextColor(v) => component.text_color.clone_from(v),
            Self::ZIndex(v) => component.z_index = *v,
            Self::Checked(v) => component.checked = *v,
            Self::ImagePath(v) => component.image_path.clone_from(v),
        }
    }
}
