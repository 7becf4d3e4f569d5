//! Browser environment: `window.innerWidth/innerHeight` and `querySelector(..).clientHeight`.

use corelib::sizes::ViewportEnv;
use corelib::{CoreError, CoreResult};
use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

/// [`ViewportEnv`] backed by the page's `window` and `document`.
#[derive(Clone, Debug)]
pub struct BrowserViewport {
    window: Window,
    document: Document,
}

impl BrowserViewport {
    /// Fails outside a browser main thread (no `window` or `document`).
    pub fn new() -> CoreResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| CoreError::Environment("no global `window`".into()))?;
        let document = window
            .document()
            .ok_or_else(|| CoreError::Environment("window has no document".into()))?;
        Ok(Self { window, document })
    }
}

fn js_number(value: Result<JsValue, JsValue>) -> f32 {
    value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
}

impl ViewportEnv for BrowserViewport {
    fn inner_size(&self) -> (f32, f32) {
        (
            js_number(self.window.inner_width()),
            js_number(self.window.inner_height()),
        )
    }

    fn element_height(&self, selector: &str) -> Option<f32> {
        // Invalid selectors throw; treat them like a missing element.
        match self.document.query_selector(selector) {
            Ok(Some(element)) => Some(element.client_height() as f32),
            Ok(None) => None,
            Err(err) => {
                log::warn!("Invalid chrome selector '{selector}': {err:?}");
                None
            }
        }
    }
}
