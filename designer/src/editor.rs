//! The canvas editor: one owned object holding the component store, canvas
//! background state, selection, and the active pointer gesture.
//!
//! Pointer handlers return [`Action`]s describing what changed so the host
//! can update visuals and queue persistence; an optional change hook fires
//! after every committed mutation as well. There is no ambient state — every
//! lookup goes through this struct.
//!
//! GESTURE EXCLUSIVITY
//! ===================
//! The host is expected to take pointer capture on pointer-down and release
//! it on pointer-up; on this side, a pointer-down while a gesture is active
//! is ignored outright, so at most one gesture can ever be in flight. A
//! pointer-up from anywhere (including outside the canvas) terminates the
//! gesture.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use crate::consts::DEFAULT_BACKGROUND_COLOR;
use crate::geometry::{self, Canvas, Point};
use crate::hit::{self, HitPart};
use crate::input::Gesture;
use crate::layout::LayoutDocument;
use crate::model::{Component, ComponentId, ComponentKind, ComponentStore};
use crate::panel::{ComponentPanel, PanelView, PropertyEdit};

/// What a mutation changed, for the host to mirror into the UI and persist.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A new component was placed on the canvas.
    ComponentPlaced(Component),
    /// An existing component's attributes or geometry changed.
    ComponentUpdated(Component),
    /// A component was deleted.
    ComponentRemoved(ComponentId),
    /// The selection changed; `None` means deselected.
    SelectionChanged(Option<ComponentId>),
    /// The property panel's backing values changed; re-read `panel_view`.
    PanelRefreshed,
    /// Canvas background or bounds changed.
    CanvasChanged,
    /// The visual canvas should be redrawn.
    RenderNeeded,
}

/// The owned editing session for one open screen.
pub struct Editor {
    store: ComponentStore,
    canvas: Canvas,
    background_color: String,
    background_image: Option<String>,
    selection: Option<ComponentId>,
    gesture: Gesture,
    dirty: bool,
    on_change: Option<Box<dyn FnMut()>>,
}

impl Editor {
    /// Editor over an empty canvas at the default size.
    #[must_use]
    pub fn new() -> Self {
        Self::with_canvas(Canvas::new())
    }

    /// Editor over an empty canvas with explicit bounds.
    #[must_use]
    pub fn with_canvas(canvas: Canvas) -> Self {
        Self {
            store: ComponentStore::new(),
            canvas,
            background_color: DEFAULT_BACKGROUND_COLOR.to_owned(),
            background_image: None,
            selection: None,
            gesture: Gesture::Idle,
            dirty: false,
            on_change: None,
        }
    }

    /// Register a hook invoked after every committed mutation.
    pub fn set_change_hook(&mut self, hook: impl FnMut() + 'static) {
        self.on_change = Some(Box::new(hook));
    }

    fn notify(&mut self) {
        if let Some(hook) = self.on_change.as_mut() {
            hook();
        }
    }

    // --- Placement ---

    /// Place a new component of `kind` at the drop point, clamped fully
    /// inside the canvas, and select it.
    pub fn place(&mut self, kind: ComponentKind, drop: Point) -> Vec<Action> {
        let placed = self.store.add(kind, drop.x, drop.y, self.canvas).clone();
        let id = placed.id.clone();
        self.selection = Some(id.clone());
        self.dirty = true;
        self.notify();
        vec![
            Action::ComponentPlaced(placed),
            Action::SelectionChanged(Some(id)),
            Action::PanelRefreshed,
            Action::RenderNeeded,
        ]
    }

    // --- Pointer gestures ---

    /// Pointer-down on the canvas at `point`.
    ///
    /// Starts a resize when a selected component's corner handle is hit, a
    /// drag when a component body is hit, and deselects on empty space.
    /// Pointer-downs landing on a component's embedded editable sub-controls
    /// are the host's job to filter out before calling this. Ignored while a
    /// gesture is already active.
    pub fn pointer_down(&mut self, point: Point) -> Vec<Action> {
        if !self.gesture.is_idle() {
            return Vec::new();
        }

        match hit::hit_test(point, &self.store, self.selection.as_ref()) {
            Some(hit) => match hit.part {
                HitPart::ResizeHandle(handle) => {
                    let Some(component) = self.store.get(&hit.id) else {
                        return Vec::new();
                    };
                    self.gesture = Gesture::Resizing {
                        id: hit.id,
                        handle,
                        start: component.geometry(),
                        start_pointer: point,
                    };
                    Vec::new()
                }
                HitPart::Body => {
                    let Some(component) = self.store.get(&hit.id) else {
                        return Vec::new();
                    };
                    let grab = Point::new(point.x - component.x, point.y - component.y);
                    self.gesture = Gesture::Dragging { id: hit.id.clone(), grab };
                    self.select(&hit.id)
                }
            },
            None => self.deselect(),
        }
    }

    /// Pointer-move at `point`; advances the active gesture, if any.
    pub fn pointer_move(&mut self, point: Point) -> Vec<Action> {
        let next = match &self.gesture {
            Gesture::Idle => return Vec::new(),
            Gesture::Dragging { id, grab } => {
                let Some(component) = self.store.get(id) else {
                    return Vec::new();
                };
                let dx = point.x - grab.x - component.x;
                let dy = point.y - grab.y - component.y;
                (id.clone(), geometry::translate(component.geometry(), dx, dy, self.canvas))
            }
            Gesture::Resizing { id, handle, start, start_pointer } => {
                let dx = point.x - start_pointer.x;
                let dy = point.y - start_pointer.y;
                (id.clone(), geometry::resize(*start, *handle, dx, dy, self.canvas))
            }
        };

        let (id, geometry) = next;
        let Some(component) = self.store.get_mut(&id) else {
            return Vec::new();
        };
        component.set_geometry(geometry);
        let updated = component.clone();
        self.notify();
        vec![Action::ComponentUpdated(updated), Action::PanelRefreshed, Action::RenderNeeded]
    }

    /// Pointer-up anywhere; finalizes the active gesture and marks the
    /// screen as having unsaved changes.
    pub fn pointer_up(&mut self, _point: Point) -> Vec<Action> {
        let id = match std::mem::replace(&mut self.gesture, Gesture::Idle) {
            Gesture::Idle => return Vec::new(),
            Gesture::Dragging { id, .. } | Gesture::Resizing { id, .. } => id,
        };
        self.dirty = true;
        self.notify();
        match self.store.get(&id) {
            Some(component) => vec![Action::ComponentUpdated(component.clone()), Action::RenderNeeded],
            None => Vec::new(),
        }
    }

    // --- Selection ---

    /// Select a component, deselecting any previous selection.
    pub fn select(&mut self, id: &ComponentId) -> Vec<Action> {
        if self.store.get(id).is_none() {
            return Vec::new();
        }
        if self.selection.as_ref() == Some(id) {
            return vec![Action::PanelRefreshed];
        }
        self.selection = Some(id.clone());
        vec![
            Action::SelectionChanged(Some(id.clone())),
            Action::PanelRefreshed,
            Action::RenderNeeded,
        ]
    }

    /// Clear the selection; the panel falls back to the background controls.
    pub fn deselect(&mut self) -> Vec<Action> {
        if self.selection.take().is_none() {
            return Vec::new();
        }
        vec![Action::SelectionChanged(None), Action::PanelRefreshed, Action::RenderNeeded]
    }

    // --- Component mutation ---

    /// Delete a component; clears the selection when it was selected.
    /// Confirmation is the host's concern.
    pub fn remove(&mut self, id: &ComponentId) -> Vec<Action> {
        if self.store.remove(id).is_none() {
            return Vec::new();
        }
        let mut actions = vec![Action::ComponentRemoved(id.clone())];
        if self.selection.as_ref() == Some(id) {
            self.selection = None;
            actions.push(Action::SelectionChanged(None));
            actions.push(Action::PanelRefreshed);
        }
        actions.push(Action::RenderNeeded);
        self.dirty = true;
        self.notify();
        actions
    }

    /// Delete the selected component, if any.
    pub fn remove_selected(&mut self) -> Vec<Action> {
        match self.selection.clone() {
            Some(id) => self.remove(&id),
            None => Vec::new(),
        }
    }

    /// Apply a property-panel edit to the selected component.
    pub fn apply_edit(&mut self, edit: &PropertyEdit) -> Vec<Action> {
        let Some(id) = self.selection.clone() else {
            return Vec::new();
        };
        let Some(component) = self.store.get_mut(&id) else {
            return Vec::new();
        };
        edit.apply(component);
        let updated = component.clone();
        self.dirty = true;
        self.notify();
        vec![Action::ComponentUpdated(updated), Action::RenderNeeded]
    }

    // --- Z-order ---

    /// Raise the selected component above every other component.
    pub fn bring_to_front(&mut self) -> Vec<Action> {
        let z = self.store.max_z_index().map_or(0, |z| z.saturating_add(1));
        self.set_selected_z(z)
    }

    /// Lower the selected component below every other component.
    pub fn send_to_back(&mut self) -> Vec<Action> {
        let z = self.store.min_z_index().map_or(0, |z| z.saturating_sub(1));
        self.set_selected_z(z)
    }

    fn set_selected_z(&mut self, z_index: i32) -> Vec<Action> {
        let Some(id) = self.selection.clone() else {
            return Vec::new();
        };
        let Some(component) = self.store.get_mut(&id) else {
            return Vec::new();
        };
        component.z_index = z_index;
        let updated = component.clone();
        self.dirty = true;
        self.notify();
        vec![Action::ComponentUpdated(updated), Action::PanelRefreshed, Action::RenderNeeded]
    }

    // --- Canvas background & bounds ---

    /// Set the canvas background color.
    pub fn set_background_color(&mut self, color: impl Into<String>) -> Vec<Action> {
        self.background_color = color.into();
        self.dirty = true;
        self.notify();
        vec![Action::CanvasChanged, Action::PanelRefreshed, Action::RenderNeeded]
    }

    /// Set or clear the canvas background image. What is previewed here is
    /// what gets persisted and rendered.
    pub fn set_background_image(&mut self, image: Option<String>) -> Vec<Action> {
        self.background_image = image;
        self.dirty = true;
        self.notify();
        vec![Action::CanvasChanged, Action::PanelRefreshed, Action::RenderNeeded]
    }

    /// Adjust the canvas height (clamped to the supported range), re-clamping
    /// every component so the in-bounds invariant keeps holding.
    pub fn set_canvas_height(&mut self, height: i32) -> Vec<Action> {
        self.canvas = Canvas::with_height(height);
        let canvas = self.canvas;

        let refitted: Vec<ComponentId> = self
            .store
            .components()
            .iter()
            .filter(|c| geometry::fit_to_canvas(c.geometry(), canvas) != c.geometry())
            .map(|c| c.id.clone())
            .collect();

        let mut actions = vec![Action::CanvasChanged];
        for id in refitted {
            if let Some(component) = self.store.get_mut(&id) {
                let fitted = geometry::fit_to_canvas(component.geometry(), canvas);
                component.set_geometry(fitted);
                actions.push(Action::ComponentUpdated(component.clone()));
            }
        }
        actions.push(Action::RenderNeeded);
        self.dirty = true;
        self.notify();
        actions
    }

    // --- Screen lifecycle ---

    /// Reset to the contents of a loaded layout document. Clears selection
    /// and any active gesture; the result counts as unmodified.
    pub fn load_layout(&mut self, document: LayoutDocument) {
        self.store.replace_all(document.components);
        self.background_color = document.background_color;
        self.background_image = document.background_image;
        self.selection = None;
        self.gesture = Gesture::Idle;
        self.dirty = false;
        self.notify();
    }

    /// Clear everything for a fresh screen.
    pub fn clear(&mut self) {
        self.load_layout(LayoutDocument::empty());
    }

    /// Snapshot the canvas as a layout document.
    #[must_use]
    pub fn snapshot(&self) -> LayoutDocument {
        LayoutDocument {
            components: self.store.components().to_vec(),
            background_color: self.background_color.clone(),
            background_image: self.background_image.clone(),
        }
    }

    // --- Queries ---

    /// The currently selected component id, if any.
    #[must_use]
    pub fn selection(&self) -> Option<&ComponentId> {
        self.selection.as_ref()
    }

    /// Look up a component by id.
    #[must_use]
    pub fn component(&self, id: &ComponentId) -> Option<&Component> {
        self.store.get(id)
    }

    /// The component store (read-only).
    #[must_use]
    pub fn store(&self) -> &ComponentStore {
        &self.store
    }

    /// Current canvas bounds.
    #[must_use]
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// The active gesture (for host cursor feedback).
    #[must_use]
    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    /// Whether there are unsaved changes.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the current state as saved.
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// What the side panel should currently show.
    #[must_use]
    pub fn panel_view(&self) -> PanelView {
        match self.selection.as_ref().and_then(|id| self.store.get(id)) {
            Some(component) => PanelView::Component(ComponentPanel::for_component(component)),
            None => PanelView::Background {
                color: self.background_color.clone(),
                image: self.background_image.clone(),
            },
        }
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}
