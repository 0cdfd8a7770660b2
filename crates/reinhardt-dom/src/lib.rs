//! Reinhardt DOM - one-shot node construction for WASM frontends
//!
//! A small, React-inspired `createElement` helper that builds real DOM nodes
//! from a tag, a property/event map and children. Unlike React it never
//! re-renders. Later state changes happen as side effects of the event
//! handlers it wires up. A companion probe reports whether browser storage
//! such as `localStorage` can actually be written.
//!
//! ## Architecture
//!
//! - [`builder`]: [`create_element`] and the variadic [`create_element!`] macro
//! - [`tag`]: tag descriptors (`"<>"` fragment, `""` text node, element tags)
//! - [`props`]: configuration maps and `on*` event key classification
//! - [`callback`]: cloneable event listeners
//! - [`dom`]: the [`DomHost`] seam with a browser host (WASM) and an
//!   in-memory host (native)
//! - [`storage`]: [`is_storage_supported`] and storage handles
//! - [`logging`]: development logging macros
//!
//! ## Example
//!
//! ```ignore
//! use reinhardt_dom::{create_element, event_handler, Props};
//! use reinhardt_dom::dom::web::WebDocument;
//!
//! let doc = WebDocument::current()?;
//! let counter = create_element!(
//!     &doc,
//!     "button",
//!     Props::new()
//!         .with("className", "btn")
//!         .with("onClick", event_handler(|_| info_log!("clicked"))),
//!     "Click me",
//! )?;
//! ```

#![warn(missing_docs)]

pub mod builder;
pub mod callback;
pub mod dom;
pub mod error;
pub mod logging;
pub mod props;
pub mod storage;
pub mod tag;

pub use builder::create_element;
#[cfg(not(target_arch = "wasm32"))]
pub use callback::DummyEvent;
pub use callback::{EventArg, EventHandler, event_handler};
#[cfg(not(target_arch = "wasm32"))]
pub use dom::memory::{MemoryDocument, MemoryNode};
#[cfg(target_arch = "wasm32")]
pub use dom::web::WebDocument;
pub use dom::{Child, DomHost, NodeKind};
pub use error::{DomError, StorageError};
pub use props::{PropKind, PropValue, Props};
#[cfg(target_arch = "wasm32")]
pub use storage::{local_storage, session_storage};
pub use storage::{
	MemoryStorage, PROBE_KEY, StorageHandle, StorageProbe, is_storage_supported,
};
pub use tag::{FRAGMENT_TAG, TEXT_TAG, Tag};

/// Installs `console_error_panic_hook` so panics show up in the browser
/// console. Does nothing unless the `console_error_panic_hook` feature is
/// enabled. Safe to call more than once.
pub fn set_panic_hook() {
	#[cfg(feature = "console_error_panic_hook")]
	console_error_panic_hook::set_once();
}

// Logging macros are exported at the crate root via #[macro_export] and
// reach web-sys through this path, so callers need no direct dependency
#[doc(hidden)]
pub use web_sys as __web_sys;
