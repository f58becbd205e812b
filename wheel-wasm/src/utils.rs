use wasm_bindgen::JsValue;

/// Log a message to the browser console.
pub fn log(s: &str) {
    web_sys::console::log_1(&JsValue::from_str(s));
}

/// Turn an error into the string value thrown back to JavaScript.
pub fn js_error(err: impl std::fmt::Display) -> JsValue {
    let msg = err.to_string();
    log(&msg);
    JsValue::from_str(&msg)
}
