use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    CanvasRenderingContext2d, Event, HtmlButtonElement, HtmlCanvasElement, HtmlElement,
    HtmlInputElement, Window,
};

use crate::board::{Board, Tool};
use crate::dom::{
    download_snapshot, query_element, selected_color, set_tool_buttons, update_line_preview,
};
use crate::input::{coordinate_resolver, detect_device, event_names};
use crate::render::{clear_surface, redraw, CanvasSurface};
use crate::state::State;

fn window_dimension(value: Result<JsValue, JsValue>) -> u32 {
    value
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0) as u32
}

fn size_canvas_to_window(window: &Window, canvas: &HtmlCanvasElement) {
    canvas.set_width(window_dimension(window.inner_width()));
    canvas.set_height(window_dimension(window.inner_height()));
}

#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Missing window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Missing document"))?;

    let canvas: HtmlCanvasElement = query_element(&document, "#canvas")?;
    let undo_button: HtmlButtonElement = query_element(&document, "button[data-event='undo']")?;
    let redo_button: HtmlButtonElement = query_element(&document, "button[data-event='redo']")?;
    let save_button: HtmlButtonElement = query_element(&document, "button[data-event='save']")?;
    let draw_button: HtmlButtonElement =
        query_element(&document, "button[data-event='draw-tool']")?;
    let erase_button: HtmlButtonElement =
        query_element(&document, "button[data-event='erase-tool']")?;
    let clear_button: HtmlButtonElement = query_element(&document, "button[data-event='clear']")?;
    let line_range: HtmlInputElement = query_element(&document, "#line-range")?;
    let line_preview: HtmlElement = query_element(&document, ".line")?;
    let swatches: HtmlElement = query_element(&document, ".colors")?;

    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("Missing canvas context"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    size_canvas_to_window(&window, &canvas);
    ctx.set_line_cap("round");
    ctx.set_line_join("round");

    let device = detect_device(&document);
    web_sys::console::log_1(
        &format!(
            "Board ready device={device:?} surface={}x{}",
            canvas.width(),
            canvas.height()
        )
        .into(),
    );

    let state = Rc::new(RefCell::new(State {
        canvas: canvas.clone(),
        ctx,
        device,
        board: Board::new(),
    }));

    set_tool_buttons(&draw_button, &erase_button, Tool::Draw);

    let names = event_names(device);
    let resolve = coordinate_resolver(device);

    {
        let down_state = state.clone();
        let down_canvas = canvas.clone();
        let down_range = line_range.clone();
        let down_swatches = swatches.clone();
        let ondown = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let rect = down_canvas.get_bounding_client_rect();
            let Some(point) = resolve(&event, &rect) else {
                return;
            };
            let width = down_range.value_as_number();
            let color = selected_color(&down_swatches).unwrap_or_default();
            let mut guard = down_state.borrow_mut();
            let state = &mut *guard;
            let mut surface = CanvasSurface::new(&state.ctx);
            state.board.pointer_down(&mut surface, color, width, point);
        });
        canvas.add_event_listener_with_callback(names.down, ondown.as_ref().unchecked_ref())?;
        ondown.forget();
    }

    {
        let move_state = state.clone();
        let move_canvas = canvas.clone();
        let onmove = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if !move_state.borrow().board.is_holding() {
                return;
            }
            let rect = move_canvas.get_bounding_client_rect();
            let Some(point) = resolve(&event, &rect) else {
                return;
            };
            let mut guard = move_state.borrow_mut();
            let state = &mut *guard;
            let mut surface = CanvasSurface::new(&state.ctx);
            state.board.pointer_move(&mut surface, point);
        });
        canvas.add_event_listener_with_callback(names.moved, onmove.as_ref().unchecked_ref())?;
        onmove.forget();
    }

    {
        let up_state = state.clone();
        let onup = Closure::<dyn FnMut(Event)>::new(move |_| {
            up_state.borrow_mut().board.pointer_release();
        });
        canvas.add_event_listener_with_callback(names.up, onup.as_ref().unchecked_ref())?;
        onup.forget();
    }

    {
        let leave_state = state.clone();
        let onleave = Closure::<dyn FnMut(Event)>::new(move |_| {
            leave_state.borrow_mut().board.pointer_release();
        });
        canvas.add_event_listener_with_callback(names.leave, onleave.as_ref().unchecked_ref())?;
        onleave.forget();
    }

    {
        let range_cb = line_range.clone();
        let preview_cb = line_preview.clone();
        let onchange = Closure::<dyn FnMut(Event)>::new(move |_| {
            update_line_preview(&preview_cb, &range_cb.value());
        });
        line_range.add_event_listener_with_callback("change", onchange.as_ref().unchecked_ref())?;
        onchange.forget();
    }

    {
        let tool_state = state.clone();
        let draw_button_cb = draw_button.clone();
        let erase_button_cb = erase_button.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |_| {
            tool_state.borrow_mut().board.select_tool(Tool::Draw);
            set_tool_buttons(&draw_button_cb, &erase_button_cb, Tool::Draw);
        });
        draw_button.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    {
        let tool_state = state.clone();
        let draw_button_cb = draw_button.clone();
        let erase_button_cb = erase_button.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |_| {
            tool_state.borrow_mut().board.select_tool(Tool::Erase);
            set_tool_buttons(&draw_button_cb, &erase_button_cb, Tool::Erase);
        });
        erase_button.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    {
        let clear_state = state.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |_| {
            let mut state = clear_state.borrow_mut();
            state.board.clear();
            clear_surface(&state);
        });
        clear_button.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    {
        let undo_state = state.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |_| {
            let mut state = undo_state.borrow_mut();
            if state.board.undo() {
                redraw(&state);
            }
        });
        undo_button.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    {
        let redo_state = state.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |_| {
            let mut state = redo_state.borrow_mut();
            if state.board.redo() {
                redraw(&state);
            }
        });
        redo_button.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    {
        let save_document = document.clone();
        let save_canvas = canvas.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |_| {
            if let Err(err) = download_snapshot(&save_document, &save_canvas) {
                web_sys::console::error_1(&err);
            }
        });
        save_button.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    Ok(())
}
