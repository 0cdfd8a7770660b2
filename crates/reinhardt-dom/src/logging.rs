//! Development logging for reinhardt-dom
//!
//! Node construction is traced through these macros instead of a logging
//! framework, so the crate stays usable from a bare `wasm32-unknown-unknown`
//! build. Every macro is a no-op in release builds.
//!
//! | Macro | Debug Assertions | Feature Required | WASM | Non-WASM |
//! |-------|------------------|------------------|------|----------|
//! | `debug_log!` | Required | `debug-hooks` | `console.debug` | `eprintln!` |
//! | `info_log!` | Required | None | `console.info` | `eprintln!` |
//! | `warn_log!` | Required | None | `console.warn` | `eprintln!` |
//! | `error_log!` | Required | None | `console.error` | `eprintln!` |
//!
//! ## Example
//!
//! ```ignore
//! use reinhardt_dom::{debug_log, warn_log};
//!
//! debug_log!("create_element: <{}> with {} props", tag, props.len());
//! warn_log!("localStorage unavailable, falling back to memory");
//! ```

/// Writes one formatted line at the given console level.
///
/// Shared backend of the public logging macros; not meant to be called
/// directly.
#[doc(hidden)]
#[macro_export]
#[cfg(target_arch = "wasm32")]
macro_rules! __dom_console {
	(debug, $($arg:tt)*) => {{
		$crate::__web_sys::console::debug_1(&format!($($arg)*).into());
	}};
	(info, $($arg:tt)*) => {{
		$crate::__web_sys::console::info_1(&format!($($arg)*).into());
	}};
	(warn, $($arg:tt)*) => {{
		$crate::__web_sys::console::warn_1(&format!($($arg)*).into());
	}};
	(error, $($arg:tt)*) => {{
		$crate::__web_sys::console::error_1(&format!($($arg)*).into());
	}};
}

#[doc(hidden)]
#[macro_export]
#[cfg(not(target_arch = "wasm32"))]
macro_rules! __dom_console {
	(debug, $($arg:tt)*) => {{
		eprintln!("[DEBUG] {}", format!($($arg)*));
	}};
	(info, $($arg:tt)*) => {{
		eprintln!("[INFO] {}", format!($($arg)*));
	}};
	(warn, $($arg:tt)*) => {{
		eprintln!("[WARN] {}", format!($($arg)*));
	}};
	(error, $($arg:tt)*) => {{
		eprintln!("[ERROR] {}", format!($($arg)*));
	}};
}

/// Logs a debug message (requires `debug-hooks` feature + `debug_assertions`)
///
/// Used for per-node construction traces, which are far too chatty for
/// ordinary development builds.
#[macro_export]
#[cfg(all(debug_assertions, feature = "debug-hooks"))]
macro_rules! debug_log {
	($($arg:tt)*) => {
		$crate::__dom_console!(debug, $($arg)*)
	};
}

/// No-op debug_log when conditions are not met
#[macro_export]
#[cfg(not(all(debug_assertions, feature = "debug-hooks")))]
macro_rules! debug_log {
	($($arg:tt)*) => {{}};
}

/// Logs an info message (requires `debug_assertions`)
#[macro_export]
#[cfg(debug_assertions)]
macro_rules! info_log {
	($($arg:tt)*) => {
		$crate::__dom_console!(info, $($arg)*)
	};
}

/// No-op info_log in release builds
#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! info_log {
	($($arg:tt)*) => {{}};
}

/// Logs a warning message (requires `debug_assertions`)
#[macro_export]
#[cfg(debug_assertions)]
macro_rules! warn_log {
	($($arg:tt)*) => {
		$crate::__dom_console!(warn, $($arg)*)
	};
}

/// No-op warn_log in release builds
#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! warn_log {
	($($arg:tt)*) => {{}};
}

/// Logs an error message (requires `debug_assertions`)
#[macro_export]
#[cfg(debug_assertions)]
macro_rules! error_log {
	($($arg:tt)*) => {
		$crate::__dom_console!(error, $($arg)*)
	};
}

/// No-op error_log in release builds
#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! error_log {
	($($arg:tt)*) => {{}};
}
