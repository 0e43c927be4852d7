// ============================================================================
// ELEMENT HELPERS - Lookup, creation, classes, form inputs
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, File, HtmlInputElement, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

/// Add or remove one class without touching the others
pub fn toggle_class(element: &Element, class: &str, on: bool) -> Result<(), JsValue> {
    element.class_list().toggle_with_force(class, on).map(|_| ())
}

/// `toggle_class` on the element with this id; a missing element is ignored
pub fn toggle_class_by_id(id: &str, class: &str, on: bool) -> Result<(), JsValue> {
    match get_element_by_id(id) {
        Some(element) => toggle_class(&element, class, on),
        None => Ok(()),
    }
}

/// Remove every child node
pub fn clear_children(element: &Element) {
    element.set_inner_html("");
}

fn input_by_id(id: &str) -> Option<HtmlInputElement> {
    get_element_by_id(id)?.dyn_into::<HtmlInputElement>().ok()
}

/// Current value of an `<input>`, empty when the element is missing
pub fn input_value(id: &str) -> String {
    input_by_id(id).map(|input| input.value()).unwrap_or_default()
}

pub fn set_input_value(id: &str, value: &str) {
    if let Some(input) = input_by_id(id) {
        input.set_value(value);
    }
}

/// First file picked in an `<input type="file">`
pub fn selected_file(id: &str) -> Option<File> {
    input_by_id(id)?.files()?.get(0)
}

/// Switch a password field between `password` and `text`
pub fn set_input_type(id: &str, input_type: &str) {
    if let Some(input) = input_by_id(id) {
        input.set_type(input_type);
    }
}
