//! WASM bindings for the scribe blog editor.
//!
//! Provides the rich text editor and page enhancements to plain JavaScript:
//!
//! ```js
//! import init, { JsEditor, enhancePage } from "scribe_editor_js";
//! await init();
//! const page = enhancePage({});
//! const editor = new JsEditor("content", { draftKey: "post-42" });
//! ```

mod editor;
mod page;
mod types;

pub use editor::*;
pub use page::*;
pub use types::*;

use wasm_bindgen::prelude::*;

use scribe_editor_core::EditorError;

/// Install the panic hook and console logging.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    #[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
    {
        use tracing::Level;
        use tracing::subscriber::set_global_default;
        use tracing_subscriber::Registry;
        use tracing_subscriber::layer::SubscriberExt;

        let console_level = if cfg!(debug_assertions) {
            Level::DEBUG
        } else {
            Level::INFO
        };

        let wasm_layer = tracing_wasm::WASMLayer::new(
            tracing_wasm::WASMLayerConfigBuilder::new()
                .set_max_level(console_level)
                .build(),
        );

        // A host page may have installed its own subscriber already.
        let _ = set_global_default(Registry::default().with(wasm_layer));
    }
}

pub(crate) fn to_js_error(error: EditorError) -> JsError {
    JsError::new(&error.to_string())
}

/// Deserialize an optional config object; `undefined` or `null` gives the defaults.
pub(crate) fn parse_config<T>(value: JsValue) -> Result<T, JsError>
where
    T: Default + serde::de::DeserializeOwned,
{
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&format!("Invalid config: {}", e)))
}
