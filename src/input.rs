use wasm_bindgen::JsCast;
use web_sys::{Document, DomRect, Event, MouseEvent, TouchEvent};

use crate::history::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DeviceKind {
    Mouse,
    Touch,
}

/// Event names the canvas subscribes to for one device mode. Picked once
/// at startup; there is no runtime switching between the two sets.
pub struct EventNames {
    pub down: &'static str,
    pub moved: &'static str,
    pub up: &'static str,
    pub leave: &'static str,
}

pub fn detect_device(document: &Document) -> DeviceKind {
    // Constructing a TouchEvent only succeeds where the touch API exists;
    // failure is the expected branch on mouse-driven browsers.
    if document.create_event("TouchEvent").is_ok() {
        DeviceKind::Touch
    } else {
        DeviceKind::Mouse
    }
}

pub fn event_names(device: DeviceKind) -> EventNames {
    match device {
        DeviceKind::Mouse => EventNames {
            down: "mousedown",
            moved: "mousemove",
            up: "mouseup",
            leave: "mouseleave",
        },
        DeviceKind::Touch => EventNames {
            down: "touchstart",
            moved: "touchmove",
            up: "touchend",
            leave: "touchleave",
        },
    }
}

pub type CoordinateResolver = fn(&Event, &DomRect) -> Option<Point>;

/// One normalization entry point per device mode, selected at startup, so
/// the handlers never inspect the concrete event subtype themselves.
pub fn coordinate_resolver(device: DeviceKind) -> CoordinateResolver {
    match device {
        DeviceKind::Mouse => mouse_position,
        DeviceKind::Touch => touch_position,
    }
}

fn mouse_position(event: &Event, rect: &DomRect) -> Option<Point> {
    let event = event.dyn_ref::<MouseEvent>()?;
    Some(relative_position(
        f64::from(event.client_x()),
        f64::from(event.client_y()),
        rect.left(),
        rect.top(),
    ))
}

fn touch_position(event: &Event, rect: &DomRect) -> Option<Point> {
    let event = event.dyn_ref::<TouchEvent>()?;
    let touch = event
        .touches()
        .get(0)
        .or_else(|| event.changed_touches().get(0))?;
    Some(relative_position(
        f64::from(touch.client_x()),
        f64::from(touch.client_y()),
        rect.left(),
        rect.top(),
    ))
}

/// Client coordinates relative to the surface's top-left corner, floored
/// to whole pixels.
pub fn relative_position(client_x: f64, client_y: f64, origin_x: f64, origin_y: f64) -> Point {
    Point {
        x: (client_x - origin_x).floor(),
        y: (client_y - origin_y).floor(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touch_normalizes_against_surface_origin() {
        let point = relative_position(150.0, 80.0, 100.0, 50.0);
        assert_eq!(point, Point { x: 50.0, y: 30.0 });
    }

    #[test]
    fn positions_are_floored_to_whole_pixels() {
        let point = relative_position(10.9, 20.1, 0.5, 0.5);
        assert_eq!(point, Point { x: 10.0, y: 19.0 });
    }

    #[test]
    fn each_device_mode_maps_to_its_event_set() {
        let mouse = event_names(DeviceKind::Mouse);
        assert_eq!(mouse.down, "mousedown");
        assert_eq!(mouse.leave, "mouseleave");

        let touch = event_names(DeviceKind::Touch);
        assert_eq!(touch.down, "touchstart");
        assert_eq!(touch.up, "touchend");
    }
}
