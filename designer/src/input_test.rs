use super::*;

#[test]
fn default_gesture_is_idle() {
    assert!(Gesture::default().is_idle());
}

#[test]
fn active_gestures_are_not_idle() {
    let dragging = Gesture::Dragging {
        id: ComponentId::from("a"),
        grab: Point::new(4, 7),
    };
    assert!(!dragging.is_idle());

    let resizing = Gesture::Resizing {
        id: ComponentId::from("a"),
        handle: Handle::Se,
        start: Geometry::new(10, 10, 100, 50),
        start_pointer: Point::new(110, 60),
    };
    assert!(!resizing.is_idle());
}

#[test]
fn dragging_carries_grab_offset() {
    let gesture = Gesture::Dragging {
        id: ComponentId::from("a"),
        grab: Point::new(12, 34),
    };
    match gesture {
        Gesture::Dragging { grab, .. } => assert_eq!(grab, Point::new(12, 34)),
        _ => panic!("expected dragging"),
    }
}

#[test]
fn resizing_carries_start_geometry_and_pointer() {
    let gesture = Gesture::Resizing {
        id: ComponentId::from("a"),
        handle: Handle::Nw,
        start: Geometry::new(10, 20, 100, 50),
        start_pointer: Point::new(10, 20),
    };
    match gesture {
        Gesture::Resizing { handle, start, start_pointer, .. } => {
            assert_eq!(handle, Handle::Nw);
            assert_eq!(start, Geometry::new(10, 20, 100, 50));
            assert_eq!(start_pointer, Point::new(10, 20));
        }
        _ => panic!("expected resizing"),
    }
}
