use crate::{
    config::SceneConfig, constants::WINDOW_TITLE, fullscreen::CanvasFullscreen,
    render_loop::RenderLoop,
};
use three_d::WindowSettings;
use wasm_bindgen::{JsCast, prelude::*};
use web_sys::HtmlCanvasElement;

fn to_js(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{:#}", e))
}

/// Browser entry point: appends a canvas to the page body and animates into it.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_log::init_with_level(log::Level::Info)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    console_error_panic_hook::set_once();

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;

    let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    body.append_child(&canvas)?;

    let rl = RenderLoop::initialize(SceneConfig::default()).map_err(to_js)?;

    let settings = WindowSettings {
        title: WINDOW_TITLE.to_string(),
        max_size: None,
        canvas: Some(canvas.clone()),
        ..Default::default()
    };

    rl.run(settings, CanvasFullscreen { canvas }).map_err(to_js)
}
