use js_sys::Array;
use wasm_bindgen::prelude::*;
use wheel_core::{Color, ColorAssigner, Palette};

mod console;
mod random;
mod state;
mod utils;

use state::{STATE, State};
use utils::{js_error, log};

#[wasm_bindgen(start)]
pub fn start() {
    console::init(tracing::Level::DEBUG);
}

/// Color for a prize about to be added to the wheel.
///
/// `usedColors` holds the colors of the prizes already on the wheel; entries
/// that are not strings are ignored.
#[wasm_bindgen(js_name = getNewPrizeColor)]
pub fn get_new_prize_color(used_colors: Array) -> Result<String, JsValue> {
    let used: Vec<String> = used_colors.iter().filter_map(|v| v.as_string()).collect();
    let skipped = used_colors.length() as usize - used.len();
    if skipped > 0 {
        log(&format!("getNewPrizeColor: ignoring {skipped} non-string entries"));
    }
    STATE.with(|st| {
        let mut st = st.borrow_mut();
        let State { assigner, rng } = &mut *st;
        assigner
            .get_new_prize_color(&used, rng)
            .map(|c| c.to_string())
            .map_err(js_error)
    })
}

#[wasm_bindgen(js_name = defaultColors)]
pub fn default_colors() -> Array {
    STATE.with(|st| to_array(&st.borrow().assigner.palette().colors))
}

#[wasm_bindgen(js_name = excludedColors)]
pub fn excluded_colors() -> Array {
    STATE.with(|st| to_array(&st.borrow().assigner.palette().excluded))
}

/// Replace the palette, e.g. `{"colors": ["#112233"], "excluded": ["#ffffff"]}`.
/// Missing fields fall back to the built-in lists.
#[wasm_bindgen(js_name = setPalette)]
pub fn set_palette(json: &str) -> Result<(), JsValue> {
    let palette = Palette::from_json(json).map_err(js_error)?;
    STATE.with(|st| st.borrow_mut().assigner = ColorAssigner::new(palette));
    Ok(())
}

fn to_array(colors: &[Color]) -> Array {
    colors
        .iter()
        .map(|c| JsValue::from_str(&c.to_string()))
        .collect()
}
