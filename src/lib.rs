//! # Reinhardt Nodes
//!
//! One-shot DOM node construction and browser storage probing for Reinhardt
//! WASM frontends.
//!
//! This facade re-exports [`reinhardt-dom`](reinhardt_dom), which provides:
//!
//! - `create_element` / `create_element!`: build an element, text node or
//!   fragment from a tag, a property/event map and children
//! - `is_storage_supported`: check whether a storage such as `localStorage`
//!   accepts writes
//!
//! ## Feature Flags
//!
//! - `dom` (default) - The node builder and storage prober
//! - `debug-hooks` - Per-node construction traces via `debug_log!`
//! - `console_error_panic_hook` - Readable panics in the browser console
//! - `web-sys-full` - All `web-sys` features an application typically needs
//! - `full` - Everything above except `debug-hooks`
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use reinhardt_nodes::dom::{create_element, event_handler, Props, WebDocument};
//! use reinhardt_nodes::dom::{is_storage_supported, local_storage};
//!
//! let doc = WebDocument::current()?;
//! let banner = create_element!(
//!     &doc,
//!     "p",
//!     Props::new().with("className", "banner"),
//!     if is_storage_supported(local_storage) {
//!         "Settings are saved in this browser"
//!     } else {
//!         "Settings will be lost when you leave"
//!     },
//! )?;
//! ```

/// DOM node builder and storage prober
#[cfg(feature = "dom")]
pub mod dom {
	pub use reinhardt_dom::*;
}

#[cfg(feature = "dom")]
pub use reinhardt_dom::{
	Props, create_element, event_handler, is_storage_supported, set_panic_hook,
};
