//! Browser surface: the four patch operations and batch application,
//! exported to JavaScript. Node arguments arrive as JSON strings in the
//! wire format; failures reject with a JS `Error`.

use moss_dom::{DomError, Patch, VNode};
use wasm_bindgen::prelude::*;

pub mod dom;

use dom::WebDom;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Render the JSON tree and append it as the last child of the element
/// with `id`.
#[wasm_bindgen(js_name = appendChild)]
pub fn append_child(id: &str, json: &str) -> Result<(), JsValue> {
    let node = parse_node(json)?;
    let mut dom = WebDom::new()?;
    moss_dom::append_child(&mut dom, id, &node).map_err(into_js)
}

/// Render the JSON tree and insert it immediately before the element
/// with `id`.
#[wasm_bindgen(js_name = insertBefore)]
pub fn insert_before(id: &str, json: &str) -> Result<(), JsValue> {
    let node = parse_node(json)?;
    let mut dom = WebDom::new()?;
    moss_dom::insert_before(&mut dom, id, &node).map_err(into_js)
}

/// Render the JSON tree and replace the element with `id`, preserving its
/// position.
#[wasm_bindgen(js_name = update)]
pub fn update(id: &str, json: &str) -> Result<(), JsValue> {
    let node = parse_node(json)?;
    let mut dom = WebDom::new()?;
    moss_dom::update(&mut dom, id, &node).map_err(into_js)
}

/// Detach the element with `id` from its parent.
#[wasm_bindgen(js_name = remove)]
pub fn remove(id: &str) -> Result<(), JsValue> {
    let mut dom = WebDom::new()?;
    moss_dom::remove(&mut dom, id).map_err(into_js)
}

/// Apply a JSON array of patches in order, stopping at the first failure.
#[wasm_bindgen(js_name = applyPatches)]
pub fn apply_patches(json: &str) -> Result<(), JsValue> {
    let patches: Vec<Patch> =
        serde_json::from_str(json).map_err(|e| js_error(&e.to_string()))?;
    let mut dom = WebDom::new()?;
    moss_dom::apply_all(&mut dom, &patches).map_err(into_js)
}

fn parse_node(json: &str) -> Result<VNode, JsValue> {
    VNode::from_json(json).map_err(|e| js_error(&e.to_string()))
}

fn js_error(message: &str) -> JsValue {
    js_sys::Error::new(message).into()
}

fn into_js(err: DomError<JsValue>) -> JsValue {
    match err {
        DomError::Backend(e) => e,
        other => js_error(&other.to_string()),
    }
}
