use web_sys::CanvasRenderingContext2d;

use crate::state::State;

/// Drawing commands the board issues against its 2d surface.
pub trait Surface {
    fn set_stroke_color(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn stroke(&mut self);
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
}

pub struct CanvasSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface<'_> {
    fn set_stroke_color(&mut self, color: &str) {
        self.ctx.set_stroke_style_str(color);
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.clear_rect(x, y, width, height);
    }
}

pub fn clear_surface(state: &State) {
    let width = f64::from(state.canvas.width());
    let height = f64::from(state.canvas.height());
    state.ctx.clear_rect(0.0, 0.0, width, height);
}

/// Full redraw from scratch: wipe the surface, replay every committed stroke.
pub fn redraw(state: &State) {
    clear_surface(state);
    let mut surface = CanvasSurface::new(&state.ctx);
    state.board.history.replay(&mut surface);
}

#[cfg(test)]
pub(crate) mod recording {
    use super::Surface;

    #[derive(Clone, Debug, PartialEq)]
    pub enum Command {
        StrokeColor(String),
        LineWidth(f64),
        BeginPath,
        MoveTo(f64, f64),
        LineTo(f64, f64),
        Stroke,
        ClearRect(f64, f64, f64, f64),
    }

    /// Captures drawing commands so replay and erase behavior can be
    /// asserted without a canvas.
    #[derive(Default)]
    pub struct Recorder {
        pub commands: Vec<Command>,
    }

    impl Surface for Recorder {
        fn set_stroke_color(&mut self, color: &str) {
            self.commands.push(Command::StrokeColor(color.to_string()));
        }

        fn set_line_width(&mut self, width: f64) {
            self.commands.push(Command::LineWidth(width));
        }

        fn begin_path(&mut self) {
            self.commands.push(Command::BeginPath);
        }

        fn move_to(&mut self, x: f64, y: f64) {
            self.commands.push(Command::MoveTo(x, y));
        }

        fn line_to(&mut self, x: f64, y: f64) {
            self.commands.push(Command::LineTo(x, y));
        }

        fn stroke(&mut self) {
            self.commands.push(Command::Stroke);
        }

        fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
            self.commands.push(Command::ClearRect(x, y, width, height));
        }
    }
}
