use serde::{Deserialize, Serialize};

use crate::render::Surface;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Stroke {
    pub color: String,
    pub width: f64,
    pub points: Vec<Point>,
}

/// Two-stack undo/redo record of committed strokes.
///
/// `done` and `undone` are disjoint: strokes move between them only through
/// `undo` and `redo`. The stroke on top of `done` is mutable while `active`
/// is set (pointer held), immutable after `end`.
#[derive(Default)]
pub struct History {
    done: Vec<Stroke>,
    undone: Vec<Stroke>,
    active: bool,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, color: String, width: f64, point: Point) {
        self.done.push(Stroke {
            color,
            width,
            points: vec![point],
        });
        self.active = true;
    }

    pub fn extend(&mut self, point: Point) {
        if !self.active {
            return;
        }
        if let Some(stroke) = self.done.last_mut() {
            stroke.points.push(point);
        }
    }

    pub fn end(&mut self) {
        self.active = false;
    }

    /// Moves the last committed stroke onto `undone`. Returns whether the
    /// board needs a redraw.
    pub fn undo(&mut self) -> bool {
        match self.done.pop() {
            Some(stroke) => {
                self.active = false;
                self.undone.push(stroke);
                true
            }
            None => false,
        }
    }

    /// Moves the last undone stroke back onto `done`. Returns whether the
    /// board needs a redraw.
    pub fn redo(&mut self) -> bool {
        match self.undone.pop() {
            Some(stroke) => {
                self.done.push(stroke);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.done.clear();
        self.undone.clear();
        self.active = false;
    }

    /// Replays every committed stroke in order. The caller is expected to
    /// clear the surface first; replaying onto stale ink doubles it up.
    pub fn replay(&self, surface: &mut impl Surface) {
        for stroke in &self.done {
            let Some(start) = stroke.points.first() else {
                continue;
            };
            surface.set_stroke_color(&stroke.color);
            surface.set_line_width(stroke.width);
            surface.begin_path();
            surface.move_to(start.x, start.y);
            for point in &stroke.points[1..] {
                surface.line_to(point.x, point.y);
                surface.stroke();
            }
        }
    }

    pub fn done(&self) -> &[Stroke] {
        &self.done
    }

    pub fn undone(&self) -> &[Stroke] {
        &self.undone
    }
}
