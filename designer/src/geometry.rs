//! Pure geometry for placing, moving, and resizing components.
//!
//! Every function here is a stateless computation over an integer bounding box
//! and the canvas bounds. Callers apply the returned geometry to the model;
//! nothing in this module mutates anything.
//!
//! Preconditions: the input box is assumed to satisfy the model invariant
//! (inside the canvas, at least `MIN_COMPONENT_WIDTH × MIN_COMPONENT_HEIGHT`).
//! Given that, every function guarantees the output satisfies it too, for any
//! delta, however large or reversed.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use crate::consts::{
    CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT, MAX_CANVAS_HEIGHT, MIN_CANVAS_HEIGHT,
    MIN_COMPONENT_HEIGHT, MIN_COMPONENT_WIDTH,
};

/// A point in canvas-local pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A component bounding box in canvas-local pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Geometry {
    #[must_use]
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Whether `point` lies inside this box (edges inclusive).
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

/// The editing surface bounds: fixed width, adjustable height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width: i32,
    pub height: i32,
}

impl Canvas {
    /// Canvas at the default 375×667 phone frame.
    #[must_use]
    pub fn new() -> Self {
        Self { width: CANVAS_WIDTH, height: DEFAULT_CANVAS_HEIGHT }
    }

    /// Canvas with `height` clamped to the adjustable range.
    #[must_use]
    pub fn with_height(height: i32) -> Self {
        Self { width: CANVAS_WIDTH, height: height.clamp(MIN_CANVAS_HEIGHT, MAX_CANVAS_HEIGHT) }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

/// Which corner handle is being dragged during a resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    Nw,
    Ne,
    Sw,
    Se,
}

impl Handle {
    /// Whether this handle drags the west (left) edge; otherwise the east edge.
    #[must_use]
    pub fn moves_west(self) -> bool {
        matches!(self, Self::Nw | Self::Sw)
    }

    /// Whether this handle drags the north (top) edge; otherwise the south edge.
    #[must_use]
    pub fn moves_north(self) -> bool {
        matches!(self, Self::Nw | Self::Ne)
    }
}

/// Clamp a box's position so it sits fully inside the canvas.
///
/// Size is untouched. Used at placement time so a drop far outside the canvas
/// still lands fully inside it.
#[must_use]
pub fn constrain_placement(geometry: Geometry, canvas: Canvas) -> Geometry {
    let max_x = (canvas.width - geometry.width).max(0);
    let max_y = (canvas.height - geometry.height).max(0);
    Geometry {
        x: geometry.x.clamp(0, max_x),
        y: geometry.y.clamp(0, max_y),
        ..geometry
    }
}

/// Move a box by a pointer delta, clamped to the canvas. Size is unchanged.
#[must_use]
pub fn translate(geometry: Geometry, dx: i32, dy: i32, canvas: Canvas) -> Geometry {
    let max_x = (canvas.width - geometry.width).max(0);
    let max_y = (canvas.height - geometry.height).max(0);
    Geometry {
        x: geometry.x.saturating_add(dx).clamp(0, max_x),
        y: geometry.y.saturating_add(dy).clamp(0, max_y),
        ..geometry
    }
}

/// Resize a box by dragging one corner handle.
///
/// The two edges adjacent to `handle` follow the delta; the opposite edges
/// stay fixed. When the drag would shrink the box below the minimum size the
/// moving edge saturates against the fixed edge — the box never inverts, even
/// when the handle crosses past the opposite side. The result never leaves
/// the canvas.
#[must_use]
pub fn resize(start: Geometry, handle: Handle, dx: i32, dy: i32, canvas: Canvas) -> Geometry {
    let right = start.x + start.width;
    let bottom = start.y + start.height;
    let mut out = start;

    if handle.moves_west() {
        let max_left = (right - MIN_COMPONENT_WIDTH).max(0);
        let left = start.x.saturating_add(dx).clamp(0, max_left);
        out.x = left;
        out.width = right - left;
    } else {
        let max_width = (canvas.width - start.x).max(MIN_COMPONENT_WIDTH);
        out.width = start
            .width
            .saturating_add(dx)
            .clamp(MIN_COMPONENT_WIDTH, max_width);
    }

    if handle.moves_north() {
        let max_top = (bottom - MIN_COMPONENT_HEIGHT).max(0);
        let top = start.y.saturating_add(dy).clamp(0, max_top);
        out.y = top;
        out.height = bottom - top;
    } else {
        let max_height = (canvas.height - start.y).max(MIN_COMPONENT_HEIGHT);
        out.height = start
            .height
            .saturating_add(dy)
            .clamp(MIN_COMPONENT_HEIGHT, max_height);
    }

    out
}

/// Shrink and reposition a box so it fits a (possibly smaller) canvas.
///
/// Used when the canvas height is adjusted after components were placed.
#[must_use]
pub fn fit_to_canvas(geometry: Geometry, canvas: Canvas) -> Geometry {
    let fitted = Geometry {
        width: geometry.width.min(canvas.width),
        height: geometry.height.min(canvas.height),
        ..geometry
    };
    constrain_placement(fitted, canvas)
}
