use std::cell::Cell;
use std::rc::Rc;

use super::*;
use crate::geometry::{Geometry, Handle};

fn pt(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

fn has_action<F>(actions: &[Action], pred: F) -> bool
where
    F: Fn(&Action) -> bool,
{
    actions.iter().any(pred)
}

fn has_render_needed(actions: &[Action]) -> bool {
    has_action(actions, |a| matches!(a, Action::RenderNeeded))
}

fn has_panel_refreshed(actions: &[Action]) -> bool {
    has_action(actions, |a| matches!(a, Action::PanelRefreshed))
}

fn has_component_updated(actions: &[Action]) -> bool {
    has_action(actions, |a| matches!(a, Action::ComponentUpdated(_)))
}

/// Editor with one button placed at (50, 60) and selected.
fn editor_with_button() -> (Editor, ComponentId) {
    let mut editor = Editor::new();
    editor.place(ComponentKind::Button, pt(50, 60));
    let id = editor.selection().cloned().unwrap();
    (editor, id)
}

fn geometry_of(editor: &Editor, id: &ComponentId) -> Geometry {
    editor.component(id).unwrap().geometry()
}

// =============================================================
// Placement
// =============================================================

#[test]
fn place_creates_selects_and_dirties() {
    let mut editor = Editor::new();
    let actions = editor.place(ComponentKind::Button, pt(50, 60));

    assert!(has_action(&actions, |a| matches!(a, Action::ComponentPlaced(_))));
    assert!(has_action(&actions, |a| matches!(a, Action::SelectionChanged(Some(_)))));
    assert!(has_panel_refreshed(&actions));
    assert!(has_render_needed(&actions));
    assert!(editor.is_dirty());

    let id = editor.selection().cloned().unwrap();
    let c = editor.component(&id).unwrap();
    assert_eq!((c.x, c.y, c.width, c.height), (50, 60, 100, 50));
    assert_eq!(c.text, "Button");
}

#[test]
fn place_clamps_drop_point_to_canvas() {
    let mut editor = Editor::new();
    editor.place(ComponentKind::Button, pt(400, 700));
    let id = editor.selection().cloned().unwrap();
    assert_eq!(geometry_of(&editor, &id), Geometry::new(275, 617, 100, 50));
}

#[test]
fn place_stacks_each_component_above_the_last() {
    let mut editor = Editor::new();
    editor.place(ComponentKind::Button, pt(0, 0));
    editor.place(ComponentKind::Checkbox, pt(0, 0));
    let id = editor.selection().cloned().unwrap();
    assert_eq!(editor.component(&id).unwrap().z_index, 1);
}

// =============================================================
// Drag gesture
// =============================================================

#[test]
fn pointer_down_on_body_selects_and_starts_drag() {
    let (mut editor, id) = editor_with_button();
    editor.deselect();

    let actions = editor.pointer_down(pt(60, 70));
    assert!(has_action(&actions, |a| matches!(a, Action::SelectionChanged(Some(_)))));
    assert!(!editor.gesture().is_idle());
    assert_eq!(editor.selection(), Some(&id));
}

#[test]
fn drag_keeps_the_grab_offset() {
    let (mut editor, id) = editor_with_button();
    // Grab 10px inside the top-left corner.
    editor.pointer_down(pt(60, 70));
    let actions = editor.pointer_move(pt(200, 300));

    assert_eq!(geometry_of(&editor, &id), Geometry::new(190, 290, 100, 50));
    assert!(has_component_updated(&actions));
    assert!(has_panel_refreshed(&actions));
    assert!(has_render_needed(&actions));
}

#[test]
fn drag_clamps_to_canvas_bounds() {
    let (mut editor, id) = editor_with_button();
    editor.pointer_down(pt(60, 70));
    editor.pointer_move(pt(5000, 5000));
    assert_eq!(geometry_of(&editor, &id), Geometry::new(275, 617, 100, 50));

    editor.pointer_move(pt(-5000, -5000));
    assert_eq!(geometry_of(&editor, &id), Geometry::new(0, 0, 100, 50));
}

#[test]
fn pointer_up_finalizes_and_marks_unsaved() {
    let (mut editor, _id) = editor_with_button();
    editor.mark_clean();

    editor.pointer_down(pt(60, 70));
    editor.pointer_move(pt(100, 100));
    let actions = editor.pointer_up(pt(100, 100));

    assert!(editor.gesture().is_idle());
    assert!(editor.is_dirty());
    assert!(has_component_updated(&actions));
}

#[test]
fn pointer_move_without_gesture_is_a_no_op() {
    let (mut editor, id) = editor_with_button();
    let before = geometry_of(&editor, &id);
    assert!(editor.pointer_move(pt(300, 300)).is_empty());
    assert_eq!(geometry_of(&editor, &id), before);
}

#[test]
fn pointer_up_without_gesture_is_a_no_op() {
    let (mut editor, _id) = editor_with_button();
    editor.mark_clean();
    assert!(editor.pointer_up(pt(0, 0)).is_empty());
    assert!(!editor.is_dirty());
}

#[test]
fn second_pointer_down_during_gesture_is_ignored() {
    let mut editor = Editor::new();
    editor.place(ComponentKind::Button, pt(0, 0));
    editor.place(ComponentKind::Button, pt(200, 200));

    editor.pointer_down(pt(10, 10));
    let gesture = editor.gesture().clone();
    // A stray second pointer-down (e.g. a second mouse button) changes nothing.
    assert!(editor.pointer_down(pt(210, 210)).is_empty());
    assert_eq!(editor.gesture(), &gesture);
}

#[test]
fn pointer_down_on_empty_space_deselects() {
    let (mut editor, _id) = editor_with_button();
    let actions = editor.pointer_down(pt(300, 500));

    assert!(has_action(&actions, |a| matches!(a, Action::SelectionChanged(None))));
    assert_eq!(editor.selection(), None);
    assert!(matches!(editor.panel_view(), PanelView::Background { .. }));
}

// =============================================================
// Resize gesture
// =============================================================

#[test]
fn corner_handle_on_selected_component_starts_resize() {
    let (mut editor, _id) = editor_with_button();
    // se corner of (50,60,100,50) is (150,110); place() left it selected.
    editor.pointer_down(pt(150, 110));
    assert!(matches!(editor.gesture(), Gesture::Resizing { handle: Handle::Se, .. }));
}

#[test]
fn resize_follows_the_pointer_delta() {
    let (mut editor, id) = editor_with_button();
    editor.pointer_down(pt(150, 110));
    editor.pointer_move(pt(190, 130));
    assert_eq!(geometry_of(&editor, &id), Geometry::new(50, 60, 140, 70));
}

#[test]
fn resize_saturates_at_minimum_size() {
    let (mut editor, id) = editor_with_button();
    editor.pointer_down(pt(150, 110));
    editor.pointer_move(pt(150 - 80, 110 - 40));
    assert_eq!(geometry_of(&editor, &id), Geometry::new(50, 60, 50, 30));
}

#[test]
fn resize_is_relative_to_start_geometry_not_cumulative() {
    let (mut editor, id) = editor_with_button();
    editor.pointer_down(pt(150, 110));
    editor.pointer_move(pt(250, 160));
    editor.pointer_move(pt(160, 115));
    // Net delta (+10, +5) from the start, not from the previous move.
    assert_eq!(geometry_of(&editor, &id), Geometry::new(50, 60, 110, 55));
}

#[test]
fn handle_on_unselected_component_drags_instead() {
    let (mut editor, _id) = editor_with_button();
    editor.deselect();
    editor.pointer_down(pt(150, 110));
    assert!(matches!(editor.gesture(), Gesture::Dragging { .. }));
}

// =============================================================
// Selection
// =============================================================

#[test]
fn select_replaces_previous_selection() {
    let mut editor = Editor::new();
    editor.place(ComponentKind::Button, pt(0, 0));
    let first = editor.selection().cloned().unwrap();
    editor.place(ComponentKind::Radio, pt(200, 200));

    let actions = editor.select(&first);
    assert!(has_action(&actions, |a| matches!(a, Action::SelectionChanged(Some(_)))));
    assert_eq!(editor.selection(), Some(&first));
}

#[test]
fn select_unknown_id_is_a_no_op() {
    let (mut editor, id) = editor_with_button();
    assert!(editor.select(&ComponentId::from("missing")).is_empty());
    assert_eq!(editor.selection(), Some(&id));
}

#[test]
fn deselect_twice_is_harmless() {
    let (mut editor, _id) = editor_with_button();
    assert!(!editor.deselect().is_empty());
    assert!(editor.deselect().is_empty());
}

// =============================================================
// Removal
// =============================================================

#[test]
fn remove_selected_clears_selection() {
    let (mut editor, id) = editor_with_button();
    let actions = editor.remove_selected();

    assert!(has_action(&actions, |a| matches!(a, Action::ComponentRemoved(_))));
    assert!(has_action(&actions, |a| matches!(a, Action::SelectionChanged(None))));
    assert_eq!(editor.selection(), None);
    assert!(editor.component(&id).is_none());
}

#[test]
fn remove_unselected_component_keeps_selection() {
    let mut editor = Editor::new();
    editor.place(ComponentKind::Button, pt(0, 0));
    let first = editor.selection().cloned().unwrap();
    editor.place(ComponentKind::Radio, pt(200, 200));
    let second = editor.selection().cloned().unwrap();

    let actions = editor.remove(&first);
    assert!(has_action(&actions, |a| matches!(a, Action::ComponentRemoved(_))));
    assert!(!has_action(&actions, |a| matches!(a, Action::SelectionChanged(_))));
    assert_eq!(editor.selection(), Some(&second));
}

#[test]
fn remove_missing_component_is_a_no_op() {
    let (mut editor, _id) = editor_with_button();
    assert!(editor.remove(&ComponentId::from("missing")).is_empty());
}

#[test]
fn remove_selected_without_selection_is_a_no_op() {
    let mut editor = Editor::new();
    assert!(editor.remove_selected().is_empty());
}

// =============================================================
// Z-order
// =============================================================

#[test]
fn bring_to_front_clears_the_maximum() {
    let mut editor = Editor::new();
    editor.place(ComponentKind::Button, pt(0, 0));
    let first = editor.selection().cloned().unwrap();
    editor.place(ComponentKind::Button, pt(50, 50));

    editor.select(&first);
    editor.bring_to_front();
    assert_eq!(editor.component(&first).unwrap().z_index, 2);
}

#[test]
fn send_to_back_goes_strictly_below_the_minimum() {
    let mut editor = Editor::new();
    editor.place(ComponentKind::Button, pt(0, 0));
    editor.place(ComponentKind::Button, pt(50, 50));
    let second = editor.selection().cloned().unwrap();

    editor.send_to_back();
    assert_eq!(editor.component(&second).unwrap().z_index, -1);
}

#[test]
fn front_then_back_leaves_others_untouched() {
    let mut editor = Editor::new();
    editor.place(ComponentKind::Button, pt(0, 0));
    let a = editor.selection().cloned().unwrap();
    editor.place(ComponentKind::Button, pt(30, 30));
    let b = editor.selection().cloned().unwrap();
    editor.place(ComponentKind::Button, pt(60, 60));
    let c = editor.selection().cloned().unwrap();

    editor.select(&b);
    editor.bring_to_front();
    editor.send_to_back();

    assert_eq!(editor.component(&a).unwrap().z_index, 0);
    assert_eq!(editor.component(&c).unwrap().z_index, 2);
    assert!(editor.component(&b).unwrap().z_index < 0);
}

#[test]
fn z_order_ops_require_a_selection() {
    let mut editor = Editor::new();
    assert!(editor.bring_to_front().is_empty());
    assert!(editor.send_to_back().is_empty());
}

// =============================================================
// Property edits
// =============================================================

#[test]
fn apply_edit_writes_into_the_selected_component() {
    let (mut editor, id) = editor_with_button();
    editor.mark_clean();

    let actions = editor.apply_edit(&PropertyEdit::Text("Sign in".to_owned()));
    assert!(has_component_updated(&actions));
    assert_eq!(editor.component(&id).unwrap().text, "Sign in");
    assert!(editor.is_dirty());

    editor.apply_edit(&PropertyEdit::X(200));
    assert_eq!(editor.component(&id).unwrap().x, 200);
}

#[test]
fn apply_edit_without_selection_is_a_no_op() {
    let (mut editor, _id) = editor_with_button();
    editor.deselect();
    assert!(editor.apply_edit(&PropertyEdit::X(5)).is_empty());
}

// =============================================================
// Panel view
// =============================================================

#[test]
fn panel_shows_background_controls_when_nothing_is_selected() {
    let mut editor = Editor::new();
    editor.set_background_color("#123456");
    match editor.panel_view() {
        PanelView::Background { color, image } => {
            assert_eq!(color, "#123456");
            assert_eq!(image, None);
        }
        PanelView::Component(_) => panic!("expected background view"),
    }
}

#[test]
fn panel_shows_component_attributes_when_selected() {
    let (editor, id) = editor_with_button();
    match editor.panel_view() {
        PanelView::Component(panel) => {
            assert_eq!(panel.id, id);
            assert_eq!((panel.x, panel.y), (50, 60));
            assert_eq!(panel.checked, None);
        }
        PanelView::Background { .. } => panic!("expected component view"),
    }
}

// =============================================================
// Canvas background & bounds
// =============================================================

#[test]
fn background_changes_dirty_the_screen_and_persist() {
    let mut editor = Editor::new();
    let actions = editor.set_background_image(Some("data:image/png;base64,AAAA".to_owned()));
    assert!(has_action(&actions, |a| matches!(a, Action::CanvasChanged)));
    assert!(editor.is_dirty());

    // Persist what is previewed.
    let doc = editor.snapshot();
    assert_eq!(doc.background_image.as_deref(), Some("data:image/png;base64,AAAA"));
}

#[test]
fn canvas_height_change_reclamps_components() {
    let mut editor = Editor::new();
    editor.place(ComponentKind::Button, pt(100, 600));
    let id = editor.selection().cloned().unwrap();

    let actions = editor.set_canvas_height(400);
    assert_eq!(editor.canvas().height, 400);
    assert!(has_component_updated(&actions));
    assert_eq!(geometry_of(&editor, &id), Geometry::new(100, 350, 100, 50));
}

#[test]
fn canvas_height_growth_moves_nothing() {
    let mut editor = Editor::new();
    editor.place(ComponentKind::Button, pt(100, 100));
    let id = editor.selection().cloned().unwrap();

    let actions = editor.set_canvas_height(1000);
    assert_eq!(editor.canvas().height, 1000);
    assert!(!has_component_updated(&actions));
    assert_eq!(geometry_of(&editor, &id), Geometry::new(100, 100, 100, 50));
}

#[test]
fn canvas_height_clamps_to_supported_range() {
    let mut editor = Editor::new();
    editor.set_canvas_height(5);
    assert_eq!(editor.canvas().height, 400);
    editor.set_canvas_height(99_999);
    assert_eq!(editor.canvas().height, 1000);
}

// =============================================================
// Screen lifecycle
// =============================================================

#[test]
fn load_layout_resets_selection_gesture_and_dirty() {
    let (mut editor, _id) = editor_with_button();
    editor.pointer_down(pt(60, 70));

    let doc = LayoutDocument {
        components: vec![],
        background_color: "#222222".to_owned(),
        background_image: None,
    };
    editor.load_layout(doc);

    assert!(editor.gesture().is_idle());
    assert_eq!(editor.selection(), None);
    assert!(!editor.is_dirty());
    assert!(editor.store().is_empty());
    match editor.panel_view() {
        PanelView::Background { color, .. } => assert_eq!(color, "#222222"),
        PanelView::Component(_) => panic!("expected background view"),
    }
}

#[test]
fn snapshot_load_roundtrip_preserves_the_canvas() {
    let mut editor = Editor::new();
    editor.place(ComponentKind::Button, pt(10, 10));
    editor.place(ComponentKind::Image, pt(200, 300));
    editor.set_background_color("#ABCDEF");

    let doc = editor.snapshot();
    let mut other = Editor::new();
    other.load_layout(doc.clone());
    assert_eq!(other.snapshot(), doc);
}

#[test]
fn clear_resets_to_an_empty_default_canvas() {
    let (mut editor, _id) = editor_with_button();
    editor.set_background_color("#333333");
    editor.clear();
    assert!(editor.store().is_empty());
    assert_eq!(editor.snapshot(), LayoutDocument::empty());
}

// =============================================================
// Change hook
// =============================================================

#[test]
fn change_hook_fires_on_every_committed_mutation() {
    let mut editor = Editor::new();
    let count = Rc::new(Cell::new(0_usize));
    let seen = Rc::clone(&count);
    editor.set_change_hook(move || seen.set(seen.get() + 1));

    editor.place(ComponentKind::Button, pt(50, 60)); // 1
    editor.pointer_down(pt(60, 70));
    editor.pointer_move(pt(100, 100)); // 2
    editor.pointer_up(pt(100, 100)); // 3
    editor.apply_edit(&PropertyEdit::Text("Go".to_owned())); // 4
    editor.set_background_color("#000000"); // 5

    assert_eq!(count.get(), 5);
}

#[test]
fn selection_changes_do_not_fire_the_change_hook() {
    let (mut editor, id) = editor_with_button();
    let count = Rc::new(Cell::new(0_usize));
    let seen = Rc::clone(&count);
    editor.set_change_hook(move || seen.set(seen.get() + 1));

    editor.deselect();
    editor.select(&id);
    assert_eq!(count.get(), 0);
}
