//! Browser-surface tests. Run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use portfolio_terminal::Terminal;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn field(value: &JsValue, key: &str) -> JsValue {
    js_sys::Reflect::get(value, &JsValue::from_str(key)).unwrap()
}

#[wasm_bindgen_test]
fn test_new_without_config_greets() {
    let term = Terminal::new(JsValue::UNDEFINED).unwrap();
    let transcript = js_sys::Array::from(&term.transcript().unwrap());
    assert_eq!(transcript.length(), 2);
    assert_eq!(term.location(), "/");
}

#[wasm_bindgen_test]
fn test_submit_ls_returns_listing() {
    let mut term = Terminal::new(JsValue::NULL).unwrap();
    let resp = term.submit(Some("ls".to_string())).unwrap();
    assert_eq!(field(&resp, "success"), JsValue::TRUE);
    let output = field(&resp, "output");
    assert_eq!(field(&output, "kind").as_string().as_deref(), Some("listing"));
}

#[wasm_bindgen_test]
fn test_cd_calls_registered_navigator() {
    let mut term = Terminal::new(JsValue::NULL).unwrap();
    let seen = js_sys::Array::new();
    let to = js_sys::Function::new_with_args("path", "this.push(path)").bind(&seen);
    let back = js_sys::Function::new_no_args("this.push('back')").bind(&seen);
    term.set_navigator(to, back);

    let resp = term.submit(Some("cd about".to_string())).unwrap();
    assert_eq!(field(&resp, "special_action").as_string().as_deref(), Some("navigate"));
    term.submit(Some("cd ..".to_string())).unwrap();

    assert_eq!(seen.length(), 2);
    assert_eq!(seen.get(0).as_string().as_deref(), Some("/about"));
    assert_eq!(seen.get(1).as_string().as_deref(), Some("back"));
}

#[wasm_bindgen_test]
fn test_tab_through_key_down() {
    let mut term = Terminal::new(JsValue::NULL).unwrap();
    term.set_input("cd pro");
    let resp = term.key_down("Tab").unwrap();
    assert_eq!(field(&resp, "handled"), JsValue::TRUE);
    assert_eq!(term.input(), "cd projects");

    let resp = term.key_down("Enter").unwrap();
    assert_eq!(field(&resp, "handled"), JsValue::FALSE);
}

#[wasm_bindgen_test]
fn test_tab_without_candidates_is_still_handled() {
    let mut term = Terminal::new(JsValue::NULL).unwrap();
    term.set_input("ls");
    let resp = term.key_down("Tab").unwrap();
    assert_eq!(field(&resp, "handled"), JsValue::TRUE);
    assert_eq!(field(&resp, "changed"), JsValue::FALSE);
    assert_eq!(term.input(), "ls");

    let resp = term.key_down("ArrowUp").unwrap();
    assert_eq!(field(&resp, "handled"), JsValue::TRUE);
}

#[wasm_bindgen_test]
fn test_blank_submit_is_null() {
    let mut term = Terminal::new(JsValue::NULL).unwrap();
    assert!(term.submit(Some("  ".to_string())).unwrap().is_null());
}

#[wasm_bindgen_test]
fn test_bundled_projects_has_five_cards() {
    let cards = js_sys::Array::from(&portfolio_terminal::bundled_projects().unwrap());
    assert_eq!(cards.length(), 5);
}
