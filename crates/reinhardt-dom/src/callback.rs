//! Event listener type.
//!
//! [`EventHandler`] is the value stored under `on*` keys of a
//! [`Props`](crate::Props) map. It wraps the listener in an `Arc`, so cloning
//! a handler is cheap, and two clones are identified as the same listener by
//! [`EventHandler::ptr_eq`].
//!
//! ## Example
//!
//! ```ignore
//! use reinhardt_dom::{EventHandler, Props};
//!
//! let on_click = EventHandler::new(|_event| {
//!     info_log!("clicked");
//! });
//!
//! let props = Props::new().with("className", "btn").with("onClick", on_click.clone());
//! ```

use std::sync::Arc;

/// Event argument passed to listeners.
#[cfg(target_arch = "wasm32")]
pub type EventArg = web_sys::Event;

/// Event argument passed to listeners.
#[cfg(not(target_arch = "wasm32"))]
pub type EventArg = DummyEvent;

/// Stand-in for `web_sys::Event` on native targets.
///
/// The memory host hands one of these to every listener it dispatches to.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DummyEvent {
	/// The dispatched event type, e.g. `"click"`.
	pub event_type: String,
}

#[cfg(not(target_arch = "wasm32"))]
impl DummyEvent {
	/// Creates an event of the given type.
	pub fn new(event_type: impl Into<String>) -> Self {
		Self {
			event_type: event_type.into(),
		}
	}
}

/// A cloneable event listener.
// Send + Sync is only required off-WASM, where listeners may be built on
// another thread before the tree is assembled.
#[cfg(target_arch = "wasm32")]
#[derive(Clone)]
pub struct EventHandler {
	inner: Arc<dyn Fn(EventArg) + 'static>,
}

/// A cloneable event listener (server-side version).
///
/// See the WASM version for documentation.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone)]
pub struct EventHandler {
	inner: Arc<dyn Fn(EventArg) + Send + Sync + 'static>,
}

#[cfg(target_arch = "wasm32")]
impl EventHandler {
	/// Wraps a closure as a listener.
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(EventArg) + 'static,
	{
		Self { inner: Arc::new(f) }
	}
}

#[cfg(not(target_arch = "wasm32"))]
impl EventHandler {
	/// Wraps a closure as a listener.
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(EventArg) + Send + Sync + 'static,
	{
		Self { inner: Arc::new(f) }
	}
}

impl EventHandler {
	/// Invokes the listener.
	pub fn call(&self, event: EventArg) {
		(self.inner)(event)
	}

	/// Returns true if both handlers wrap the same closure.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.inner, &other.inner)
	}
}

impl std::fmt::Debug for EventHandler {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("EventHandler")
			.field("inner", &"<function>")
			.finish()
	}
}

/// Builds an [`EventHandler`] with a concrete argument type, so closure
/// parameters need no annotation.
///
/// ```ignore
/// let props = Props::new().with("onInput", event_handler(|_| info_log!("typed")));
/// ```
#[cfg(target_arch = "wasm32")]
pub fn event_handler(f: impl Fn(EventArg) + 'static) -> EventHandler {
	EventHandler::new(f)
}

/// Server-side version of [`event_handler`].
#[cfg(not(target_arch = "wasm32"))]
pub fn event_handler(f: impl Fn(EventArg) + Send + Sync + 'static) -> EventHandler {
	EventHandler::new(f)
}
