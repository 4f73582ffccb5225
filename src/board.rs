use crate::history::{History, Point};
use crate::render::Surface;

pub const DEFAULT_COLOR: &str = "#1f1f1f";
pub const DEFAULT_WIDTH: f64 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tool {
    Draw,
    Erase,
}

pub fn sanitize_color(color: String) -> String {
    if color.is_empty() {
        return DEFAULT_COLOR.to_string();
    }
    color
}

pub fn sanitize_width(width: f64) -> f64 {
    let width = if width.is_finite() { width } else { DEFAULT_WIDTH };
    width.clamp(1.0, 100.0)
}

/// Stateful controller for the drawing surface. Every mutation of the
/// stroke history and every drawing command goes through here; the event
/// wiring in `app` only extracts coordinates and forwards them.
pub struct Board {
    pub history: History,
    tool: Tool,
    holding: bool,
    brush_color: String,
    brush_width: f64,
}

impl Board {
    pub fn new() -> Self {
        Self {
            history: History::new(),
            tool: Tool::Draw,
            holding: false,
            brush_color: DEFAULT_COLOR.to_string(),
            brush_width: DEFAULT_WIDTH,
        }
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn select_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    pub fn is_holding(&self) -> bool {
        self.holding
    }

    /// Pointer pressed: latch the brush settings, then either erase at the
    /// point or open a new stroke (history push plus live path start).
    pub fn pointer_down(
        &mut self,
        surface: &mut impl Surface,
        color: String,
        width: f64,
        point: Point,
    ) {
        self.holding = true;
        self.brush_color = sanitize_color(color);
        self.brush_width = sanitize_width(width);
        surface.set_stroke_color(&self.brush_color);
        surface.set_line_width(self.brush_width);

        if self.tool == Tool::Erase {
            self.erase(surface, point);
            return;
        }

        surface.begin_path();
        surface.move_to(point.x, point.y);
        self.history
            .begin(self.brush_color.clone(), self.brush_width, point);
    }

    /// Pointer dragged. Ignored unless the button is held.
    pub fn pointer_move(&mut self, surface: &mut impl Surface, point: Point) {
        if !self.holding {
            return;
        }
        if self.tool == Tool::Erase {
            self.erase(surface, point);
            return;
        }
        self.history.extend(point);
        surface.line_to(point.x, point.y);
        surface.stroke();
    }

    /// Pointer released or left the surface: the active stroke, if any,
    /// becomes immutable.
    pub fn pointer_release(&mut self) {
        self.holding = false;
        self.history.end();
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    pub fn clear(&mut self) {
        self.holding = false;
        self.history.clear();
    }

    // Erasing clears pixels immediately and records nothing, so erased ink
    // is not restorable by undo.
    fn erase(&self, surface: &mut impl Surface, point: Point) {
        let side = self.brush_width;
        surface.clear_rect(point.x - side / 2.0, point.y - side / 2.0, side, side);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::recording::{Command, Recorder};

    fn point(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    #[test]
    fn draw_sequence_commits_one_stroke() {
        let mut board = Board::new();
        let mut surface = Recorder::default();

        board.pointer_down(&mut surface, "#ff0000".to_string(), 5.0, point(10.0, 10.0));
        board.pointer_move(&mut surface, point(20.0, 10.0));
        board.pointer_move(&mut surface, point(20.0, 20.0));
        board.pointer_release();

        assert_eq!(board.history.done().len(), 1);
        let stroke = &board.history.done()[0];
        assert_eq!(stroke.color, "#ff0000");
        assert_eq!(stroke.width, 5.0);
        assert_eq!(stroke.points.len(), 3);
    }

    #[test]
    fn move_without_held_button_is_ignored() {
        let mut board = Board::new();
        let mut surface = Recorder::default();

        board.pointer_move(&mut surface, point(5.0, 5.0));
        assert!(board.history.done().is_empty());
        assert!(surface.commands.is_empty());

        board.pointer_down(&mut surface, "#1f1f1f".to_string(), 4.0, point(0.0, 0.0));
        board.pointer_release();
        board.pointer_move(&mut surface, point(9.0, 9.0));
        assert_eq!(board.history.done()[0].points.len(), 1);
    }

    #[test]
    fn erase_tool_records_nothing() {
        let mut board = Board::new();
        let mut surface = Recorder::default();
        board.select_tool(Tool::Erase);

        board.pointer_down(&mut surface, "#ff0000".to_string(), 5.0, point(10.0, 10.0));
        board.pointer_move(&mut surface, point(12.0, 12.0));
        board.pointer_release();

        assert!(board.history.done().is_empty());
        assert!(board.history.undone().is_empty());
    }

    #[test]
    fn erase_clears_a_centered_square_of_brush_width() {
        let mut board = Board::new();
        let mut surface = Recorder::default();
        board.select_tool(Tool::Erase);

        board.pointer_down(&mut surface, String::new(), 6.0, point(10.0, 10.0));
        assert!(surface
            .commands
            .contains(&Command::ClearRect(7.0, 7.0, 6.0, 6.0)));
    }

    #[test]
    fn switching_to_erase_mid_session_leaves_history_untouched() {
        let mut board = Board::new();
        let mut surface = Recorder::default();

        board.pointer_down(&mut surface, "#ff0000".to_string(), 5.0, point(0.0, 0.0));
        board.pointer_move(&mut surface, point(1.0, 1.0));
        board.pointer_release();

        board.select_tool(Tool::Erase);
        board.pointer_down(&mut surface, "#ff0000".to_string(), 5.0, point(0.0, 0.0));
        board.pointer_move(&mut surface, point(1.0, 1.0));
        board.pointer_release();

        assert_eq!(board.history.done().len(), 1);
        assert!(board.history.undone().is_empty());
    }

    #[test]
    fn brush_settings_are_sanitized_at_pointer_down() {
        let mut board = Board::new();
        let mut surface = Recorder::default();

        board.pointer_down(&mut surface, String::new(), f64::NAN, point(0.0, 0.0));
        board.pointer_release();

        let stroke = &board.history.done()[0];
        assert_eq!(stroke.color, DEFAULT_COLOR);
        assert_eq!(stroke.width, DEFAULT_WIDTH);
    }

    #[test]
    fn clear_resets_history_and_holding_flag() {
        let mut board = Board::new();
        let mut surface = Recorder::default();

        board.pointer_down(&mut surface, "#ff0000".to_string(), 5.0, point(0.0, 0.0));
        board.clear();

        assert!(!board.is_holding());
        assert!(board.history.done().is_empty());
        assert!(board.history.undone().is_empty());
    }
}
