//! Browser-side smoke tests, run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_version_is_exposed() {
    assert!(!gridedit::version().is_empty());
}

#[wasm_bindgen_test]
fn test_widget_mounts_with_defaults() {
    let document = web_sys::window().unwrap().document().unwrap();
    let container: web_sys::HtmlElement = document
        .create_element("div")
        .unwrap()
        .dyn_into()
        .unwrap();
    document.body().unwrap().append_child(&container).unwrap();

    let grid = gridedit::GridEdit::new(container, JsValue::UNDEFINED).unwrap();
    assert_eq!(grid.rows(), 15);
    assert_eq!(grid.cols(), 18);
    assert_eq!(grid.focused_label(), "A1");
    assert_eq!(grid.cell(0, 0), "");
}

#[wasm_bindgen_test]
fn test_widget_state_mutations() {
    let document = web_sys::window().unwrap().document().unwrap();
    let container: web_sys::HtmlElement = document
        .create_element("div")
        .unwrap()
        .dyn_into()
        .unwrap();
    document.body().unwrap().append_child(&container).unwrap();

    let mut grid = gridedit::GridEdit::new(container, JsValue::UNDEFINED).unwrap();
    grid.set_cell(1, 2, "hello");
    assert_eq!(grid.cell(1, 2), "hello");

    grid.insert_row_at(0);
    assert_eq!(grid.rows(), 16);
    assert_eq!(grid.cell(2, 2), "hello");
}
