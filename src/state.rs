use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::board::Board;
use crate::input::DeviceKind;

/// Everything one drawing session owns. Destroyed on page reload; nothing
/// is persisted.
pub struct State {
    pub canvas: HtmlCanvasElement,
    pub ctx: CanvasRenderingContext2d,
    pub device: DeviceKind,
    pub board: Board,
}
