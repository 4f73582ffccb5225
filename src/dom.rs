use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, HtmlAnchorElement, HtmlButtonElement, HtmlCanvasElement, HtmlElement,
    HtmlInputElement,
};

use crate::board::Tool;

pub fn query_element<T: JsCast>(document: &Document, selector: &str) -> Result<T, JsValue> {
    let element = document
        .query_selector(selector)?
        .ok_or_else(|| JsValue::from_str(&format!("Missing element: {selector}")))?;
    element
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Invalid element type: {selector}")))
}

pub fn set_tool_buttons(
    draw_button: &HtmlButtonElement,
    erase_button: &HtmlButtonElement,
    tool: Tool,
) {
    let (active, inactive) = match tool {
        Tool::Draw => (draw_button, erase_button),
        Tool::Erase => (erase_button, draw_button),
    };
    let _ = active.class_list().add_1("selected");
    let _ = inactive.class_list().remove_1("selected");
}

/// Currently checked swatch in the color radio group.
pub fn selected_color(swatches: &HtmlElement) -> Option<String> {
    let node = swatches.query_selector("input:checked").ok().flatten()?;
    let input = node.dyn_into::<HtmlInputElement>().ok()?;
    Some(input.value())
}

pub fn update_line_preview(preview: &HtmlElement, width: &str) {
    let _ = preview
        .style()
        .set_property("--line-width", &format!("{width}px"));
}

/// Snapshots the rendered canvas and triggers a timestamped PNG download.
pub fn download_snapshot(document: &Document, canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
    let data_url = canvas.to_data_url()?;
    let anchor = document
        .create_element("a")?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| JsValue::from_str("Invalid anchor element"))?;
    anchor.set_href(&data_url);
    anchor.set_download(&format!("draw-{}.png", js_sys::Date::now() as u64));
    anchor.click();
    Ok(())
}
