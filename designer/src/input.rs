//! The pointer gesture state machine.
//!
//! `Gesture` is the single source of truth for what the pointer is doing
//! between pointer-down and pointer-up. Exactly one variant is active at a
//! time, so a drag and a resize can never overlap. Each active variant
//! carries the context needed to turn later pointer-move positions into
//! geometry deltas.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geometry::{Geometry, Handle, Point};
use crate::model::ComponentId;

/// The active pointer gesture, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gesture {
    /// No gesture in progress; waiting for the next pointer-down.
    Idle,
    /// A component is being moved across the canvas.
    Dragging {
        /// Id of the component being dragged.
        id: ComponentId,
        /// Offset from the component's top-left corner to the grab point,
        /// kept constant for the whole drag.
        grab: Point,
    },
    /// The selected component is being resized from one corner handle.
    Resizing {
        /// Id of the component being resized.
        id: ComponentId,
        /// Which corner handle is being dragged.
        handle: Handle,
        /// Component geometry at pointer-down.
        start: Geometry,
        /// Pointer position at pointer-down.
        start_pointer: Point,
    },
}

impl Gesture {
    /// Whether no gesture is in progress.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

impl Default for Gesture {
    fn default() -> Self {
        Self::Idle
    }
}
