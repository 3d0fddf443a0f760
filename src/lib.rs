//! # Graw configuration page
//!
//! Browser bundle for the Graw bot configuration page. Loading the WASM
//! module binds the validation round-trip to `#config_form`; everything
//! else lives in [`pages`] (the `graw-config-pages` crate).
//!
//! ## Building
//!
//! ```text
//! wasm-pack build --target web
//! ```
//!
//! The page then only needs:
//!
//! ```html
//! <script type="module">
//!   import init from "/static/pkg/graw_config.js";
//!   init();
//! </script>
//! ```

pub use graw_config_pages as pages;

use graw_config_pages::{ConfigError, FormConfig, error_log};

/// Falls back to the default page contract when the settings block is unusable.
pub fn config_or_default(config: Result<FormConfig, ConfigError>) -> FormConfig {
	config.unwrap_or_else(|e| {
		error_log!("ignoring form settings: {}", e);
		FormConfig::default()
	})
}

/// WASM entry point
///
/// Binds the submit handler once the module is instantiated. A page
/// without the configuration form fails loudly in the console.
#[cfg(target_arch = "wasm32")]
#[allow(clippy::main_recursion)]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() -> Result<(), wasm_bindgen::JsValue> {
	use wasm_bindgen::JsValue;

	#[cfg(feature = "console_error_panic_hook")]
	console_error_panic_hook::set_once();

	let document = web_sys::window()
		.and_then(|window| window.document())
		.ok_or_else(|| JsValue::from_str("No document object"))?;

	let config = config_or_default(graw_config_pages::page_config(&document));

	graw_config_pages::bind_submit_handler(config).map_err(|e| JsValue::from_str(&e.to_string()))?;

	Ok(())
}
