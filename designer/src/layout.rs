//! Layout document serialization.
//!
//! A screen persists as one JSON document: the ordered component list plus
//! canvas background state. Early editors saved a bare component array with
//! no wrapping object; `from_json` still accepts that shape and fills in the
//! default white background, while `to_json` always writes the wrapped form.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_BACKGROUND_COLOR;
use crate::model::Component;

/// Failure to read or write a layout document.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("layout document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("layout document must be an object or a component array")]
    Shape,
}

/// The persisted form of a screen's canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutDocument {
    /// Components in insertion order.
    pub components: Vec<Component>,
    /// Canvas background color as `#RRGGBB`.
    #[serde(default = "default_background_color")]
    pub background_color: String,
    /// Canvas background image as a data URI or resource path.
    #[serde(default)]
    pub background_image: Option<String>,
}

fn default_background_color() -> String {
    DEFAULT_BACKGROUND_COLOR.to_owned()
}

impl LayoutDocument {
    /// An empty document with the default background.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            components: Vec::new(),
            background_color: default_background_color(),
            background_image: None,
        }
    }

    /// Parse a layout document, accepting both the wrapped object form and
    /// the legacy bare component array.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Json`] when the text is not valid JSON or the
    /// fields violate the documented shape, and [`LayoutError::Shape`] when
    /// the top-level value is neither an object nor an array.
    pub fn from_json(raw: &str) -> Result<Self, LayoutError> {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        match value {
            serde_json::Value::Array(_) => Ok(Self {
                components: serde_json::from_value(value)?,
                background_color: default_background_color(),
                background_image: None,
            }),
            serde_json::Value::Object(_) => Ok(serde_json::from_value(value)?),
            _ => Err(LayoutError::Shape),
        }
    }

    /// Serialize to the wrapped JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, LayoutError> {
        Ok(serde_json::to_string(self)?)
    }
}
