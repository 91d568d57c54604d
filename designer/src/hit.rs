//! Hit-testing pointer positions against components and resize handles.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::HANDLE_SLOP_PX;
use crate::geometry::{Geometry, Handle, Point};
use crate::model::{ComponentId, ComponentStore};

/// Which part of a component was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    /// The component's body.
    Body,
    /// One of the four corner resize handles.
    ResizeHandle(Handle),
}

/// Result of a hit test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub id: ComponentId,
    pub part: HitPart,
}

/// Test what is under `point`.
///
/// The selected component's corner handles are checked first (they are only
/// shown while selected, and they overhang the body), then component bodies
/// from topmost down: descending `z_index`, later insertions winning ties.
#[must_use]
pub fn hit_test(point: Point, store: &ComponentStore, selected: Option<&ComponentId>) -> Option<Hit> {
    if let Some(id) = selected
        && let Some(component) = store.get(id)
        && let Some(handle) = handle_at(point, component.geometry())
    {
        return Some(Hit { id: id.clone(), part: HitPart::ResizeHandle(handle) });
    }

    store
        .stacked()
        .into_iter()
        .rev()
        .find(|c| c.geometry().contains(point))
        .map(|c| Hit { id: c.id.clone(), part: HitPart::Body })
}

fn handle_at(point: Point, g: Geometry) -> Option<Handle> {
    let corners = [
        (Handle::Nw, g.x, g.y),
        (Handle::Ne, g.x + g.width, g.y),
        (Handle::Sw, g.x, g.y + g.height),
        (Handle::Se, g.x + g.width, g.y + g.height),
    ];
    corners
        .into_iter()
        .find(|&(_, cx, cy)| (point.x - cx).abs() <= HANDLE_SLOP_PX && (point.y - cy).abs() <= HANDLE_SLOP_PX)
        .map(|(handle, _, _)| handle)
}
