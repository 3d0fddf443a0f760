//! Console logging for the form client.
//!
//! On `wasm32` the macros write to the browser console; elsewhere they go to
//! stderr so native tests show the same trail. Release builds compile every
//! macro to nothing.
//!
//! | Macro | Enabled when | wasm32 | native |
//! |-------|--------------|--------|--------|
//! | `debug_log!` | `debug-hooks` + `debug_assertions` | `console.debug` | `eprintln!` |
//! | `info_log!` | `debug_assertions` | `console.info` | `eprintln!` |
//! | `warn_log!` | `debug_assertions` | `console.warn` | `eprintln!` |
//! | `error_log!` | `debug_assertions` | `console.error` | `eprintln!` |
//!
//! ```ignore
//! use graw_config_pages::{debug_log, error_log};
//!
//! debug_log!("dispatching submission #{}", ticket);
//! error_log!("validation request failed: {}", err);
//! ```

#[doc(hidden)]
#[macro_export]
#[cfg(target_arch = "wasm32")]
macro_rules! __console {
	($level:ident, $tag:literal, $($arg:tt)*) => {{
		$crate::__private::web_sys::console::$level(&format!($($arg)*).into());
	}};
}

#[doc(hidden)]
#[macro_export]
#[cfg(not(target_arch = "wasm32"))]
macro_rules! __console {
	($level:ident, $tag:literal, $($arg:tt)*) => {{
		eprintln!("[{}] {}", $tag, format!($($arg)*));
	}};
}

/// Logs submission internals (sequence tickets, discarded responses).
#[macro_export]
#[cfg(all(debug_assertions, feature = "debug-hooks"))]
macro_rules! debug_log {
	($($arg:tt)*) => {
		$crate::__console!(debug_1, "DEBUG", $($arg)*)
	};
}

/// No-op without `debug-hooks`
#[macro_export]
#[cfg(not(all(debug_assertions, feature = "debug-hooks")))]
macro_rules! debug_log {
	($($arg:tt)*) => {{}};
}

/// Logs an informational message in debug builds.
#[macro_export]
#[cfg(debug_assertions)]
macro_rules! info_log {
	($($arg:tt)*) => {
		$crate::__console!(info_1, "INFO", $($arg)*)
	};
}

/// No-op in release builds
#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! info_log {
	($($arg:tt)*) => {{}};
}

/// Logs a warning in debug builds.
#[macro_export]
#[cfg(debug_assertions)]
macro_rules! warn_log {
	($($arg:tt)*) => {
		$crate::__console!(warn_1, "WARN", $($arg)*)
	};
}

/// No-op in release builds
#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! warn_log {
	($($arg:tt)*) => {{}};
}

/// Logs an error in debug builds.
#[macro_export]
#[cfg(debug_assertions)]
macro_rules! error_log {
	($($arg:tt)*) => {
		$crate::__console!(error_1, "ERROR", $($arg)*)
	};
}

/// No-op in release builds
#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! error_log {
	($($arg:tt)*) => {{}};
}
