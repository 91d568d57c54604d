//! Component model: typed widgets and the insertion-ordered canvas store.
//!
//! This module defines what is on the canvas (`Component`, `ComponentKind`)
//! and the store that owns every live component for the open screen
//! (`ComponentStore`). Data flows in from layout deserialization and from the
//! editor (placement and gesture mutations); the host reads `stacked` to draw
//! components in z order.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::consts::{DEFAULT_COMPONENT_HEIGHT, DEFAULT_COMPONENT_WIDTH, DEFAULT_TEXT_COLOR};
use crate::geometry::{self, Canvas, Geometry};

/// Opaque unique identifier for a component.
///
/// Fresh ids are UUIDv4 strings, but any string deserializes unchanged so
/// layout documents written by earlier editors keep their original ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(String);

impl ComponentId {
    /// Generate a fresh id, never reused within a process.
    #[must_use]
    pub fn fresh() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ComponentId {
    fn from(raw: &str) -> Self {
        Self(raw.to_owned())
    }
}

/// The kind of a placed widget. Immutable after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    /// Push button with a centered label.
    Button,
    /// Single-line text input.
    TextBox,
    /// Multi-line text input.
    TextArea,
    /// Checkbox with a trailing label.
    Checkbox,
    /// Radio button with a trailing label.
    Radio,
    /// Image placeholder or uploaded picture.
    Image,
}

impl ComponentKind {
    /// Label assigned when a component of this kind is first placed.
    #[must_use]
    pub fn default_text(self) -> &'static str {
        match self {
            Self::Button => "Button",
            Self::Checkbox => "Checkbox",
            Self::Radio => "Radio",
            Self::Image => "Image",
            Self::TextBox | Self::TextArea => "",
        }
    }

    /// Whether the `checked` attribute is meaningful for this kind.
    #[must_use]
    pub fn is_toggle(self) -> bool {
        matches!(self, Self::Checkbox | Self::Radio)
    }

    /// Whether the `placeholder` attribute is meaningful for this kind.
    #[must_use]
    pub fn is_text_entry(self) -> bool {
        matches!(self, Self::TextBox | Self::TextArea)
    }
}

/// One placed widget, as stored in the model and in the layout document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    /// Stable unique identifier, assigned at creation.
    pub id: ComponentId,
    /// Widget kind; fixed for the component's lifetime.
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    /// Left edge in canvas-local pixels.
    pub x: i32,
    /// Top edge in canvas-local pixels.
    pub y: i32,
    /// Box width in pixels.
    pub width: i32,
    /// Box height in pixels.
    pub height: i32,
    /// Display label or content; empty allowed for input kinds.
    #[serde(default)]
    pub text: String,
    /// Hint text; meaningful only for text-entry kinds.
    #[serde(default)]
    pub placeholder: String,
    /// Text color as `#RRGGBB`.
    #[serde(default = "default_text_color")]
    pub text_color: String,
    /// Toggle state; meaningful only for checkbox/radio kinds.
    #[serde(default)]
    pub checked: bool,
    /// Image resource reference; meaningful only for the image kind.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub image_path: Option<String>,
    /// Stacking order; higher draws on top. Not necessarily contiguous.
    #[serde(default)]
    pub z_index: i32,
}

fn default_text_color() -> String {
    DEFAULT_TEXT_COLOR.to_owned()
}

/// Legacy documents stored `imagePath: ""` for "no image"; fold that to `None`.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.is_empty()))
}

impl Component {
    /// This component's bounding box.
    #[must_use]
    pub fn geometry(&self) -> Geometry {
        Geometry::new(self.x, self.y, self.width, self.height)
    }

    /// Overwrite this component's bounding box.
    pub fn set_geometry(&mut self, geometry: Geometry) {
        self.x = geometry.x;
        self.y = geometry.y;
        self.width = geometry.width;
        self.height = geometry.height;
    }
}

/// In-memory store of the open screen's components, in insertion order.
///
/// Insertion order is irrelevant to stacking (`z_index` governs that) but is
/// preserved for iteration stability and for breaking z ties.
#[derive(Debug, Default)]
pub struct ComponentStore {
    components: Vec<Component>,
}

impl ComponentStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { components: Vec::new() }
    }

    /// Place a new component of `kind` with its top-left corner at `(x, y)`,
    /// clamped so the default-sized box lands fully inside `canvas`.
    ///
    /// The component gets a fresh id, the default 100×50 size, per-kind
    /// default attributes, and a z-index above every existing component.
    pub fn add(&mut self, kind: ComponentKind, x: i32, y: i32, canvas: Canvas) -> &Component {
        let geometry = geometry::constrain_placement(
            Geometry::new(x, y, DEFAULT_COMPONENT_WIDTH, DEFAULT_COMPONENT_HEIGHT),
            canvas,
        );
        let component = Component {
            id: ComponentId::fresh(),
            kind,
            x: geometry.x,
            y: geometry.y,
            width: geometry.width,
            height: geometry.height,
            text: kind.default_text().to_owned(),
            placeholder: String::new(),
            text_color: DEFAULT_TEXT_COLOR.to_owned(),
            checked: false,
            image_path: None,
            z_index: self.next_z_index(),
        };
        self.components.push(component);
        // Just pushed, so the store is non-empty.
        &self.components[self.components.len() - 1]
    }

    /// Remove a component by id, returning it if present.
    pub fn remove(&mut self, id: &ComponentId) -> Option<Component> {
        let index = self.components.iter().position(|c| &c.id == id)?;
        Some(self.components.remove(index))
    }

    /// Look up a component by id.
    #[must_use]
    pub fn get(&self, id: &ComponentId) -> Option<&Component> {
        self.components.iter().find(|c| &c.id == id)
    }

    /// Mutable lookup by id.
    pub fn get_mut(&mut self, id: &ComponentId) -> Option<&mut Component> {
        self.components.iter_mut().find(|c| &c.id == id)
    }

    /// All components in insertion order.
    #[must_use]
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// All components sorted for stacking: ascending `z_index`, insertion
    /// order breaking ties (later insertions draw on top).
    #[must_use]
    pub fn stacked(&self) -> Vec<&Component> {
        let mut out: Vec<&Component> = self.components.iter().collect();
        out.sort_by_key(|c| c.z_index);
        out
    }

    /// Replace the whole collection, e.g. when loading a saved layout.
    ///
    /// Components repeating an earlier id are dropped; ids must be unique.
    pub fn replace_all(&mut self, components: Vec<Component>) {
        self.components.clear();
        for component in components {
            if self.get(&component.id).is_some() {
                tracing::warn!(id = %component.id, "dropping component with duplicate id");
                continue;
            }
            self.components.push(component);
        }
    }

    /// Drop every component.
    pub fn clear(&mut self) {
        self.components.clear();
    }

    /// Z-index for the next placement: one above the current maximum, or 0 on
    /// an empty canvas. Derived from the live maximum rather than the count,
    /// so deletions can never cause stacking collisions.
    #[must_use]
    pub fn next_z_index(&self) -> i32 {
        self.max_z_index().map_or(0, |z| z.saturating_add(1))
    }

    /// Highest z-index currently in use.
    #[must_use]
    pub fn max_z_index(&self) -> Option<i32> {
        self.components.iter().map(|c| c.z_index).max()
    }

    /// Lowest z-index currently in use.
    #[must_use]
    pub fn min_z_index(&self) -> Option<i32> {
        self.components.iter().map(|c| c.z_index).min()
    }

    /// Number of components on the canvas.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether the canvas has no components.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
