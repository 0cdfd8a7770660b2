//! DOM host abstraction
//!
//! [`DomHost`] is the set of node primitives the builder needs from its
//! environment. Two hosts ship with the crate:
//!
//! - [`web::WebDocument`] (WASM): the browser's `document`. Errors are the
//!   `JsValue` the browser threw.
//! - [`memory::MemoryDocument`] (native): an in-memory tree with the same
//!   semantics for creation, property assignment, listeners and child
//!   insertion. Errors are [`DomError`](crate::DomError).
//!
//! The builder only ever calls these primitives. Anything they reject is
//! returned to the caller unchanged.

#[cfg(not(target_arch = "wasm32"))]
pub mod memory;
#[cfg(target_arch = "wasm32")]
pub mod web;

use crate::props::{PropValue, number_to_text};

/// Kind of a constructed node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
	/// An element (`Node.ELEMENT_NODE`).
	Element,
	/// A text node (`Node.TEXT_NODE`).
	Text,
	/// A document fragment (`Node.DOCUMENT_FRAGMENT_NODE`).
	Fragment,
}

/// One entry of a child sequence.
///
/// Plain strings are accepted wherever a child node is, and become text
/// nodes when appended.
#[derive(Debug, Clone, PartialEq)]
pub enum Child<N> {
	/// An already constructed node.
	Node(N),
	/// Text to append as a new text node.
	Text(String),
}

impl<N> From<&str> for Child<N> {
	fn from(text: &str) -> Self {
		Self::Text(text.to_string())
	}
}

impl<N> From<String> for Child<N> {
	fn from(text: String) -> Self {
		Self::Text(text)
	}
}

impl<N> From<bool> for Child<N> {
	fn from(value: bool) -> Self {
		Self::Text(value.to_string())
	}
}

// Numbers render exactly like a numeric `textContent`
macro_rules! impl_child_from_number {
	($($ty:ty),*) => {
		$(
			impl<N> From<$ty> for Child<N> {
				fn from(value: $ty) -> Self {
					Self::Text(number_to_text(f64::from(value)))
				}
			}
		)*
	};
}

impl_child_from_number!(i8, i16, i32, u8, u16, u32, f32, f64);

/// Node primitives of a DOM environment.
pub trait DomHost {
	/// Handle to a node owned by the host.
	type Node: Clone;
	/// Error raised by a failing primitive.
	type Error;

	/// `document.createElement(tag)`.
	fn create_element(&self, tag: &str) -> Result<Self::Node, Self::Error>;

	/// `document.createTextNode(data)`.
	fn create_text_node(&self, data: &str) -> Result<Self::Node, Self::Error>;

	/// `document.createDocumentFragment()`.
	fn create_document_fragment(&self) -> Result<Self::Node, Self::Error>;

	/// Reports what kind of node `node` is (`node.nodeType`).
	fn node_kind(&self, node: &Self::Node) -> NodeKind;

	/// `node[key] = value`.
	fn set_property(&self, node: &Self::Node, key: &str, value: &PropValue)
	-> Result<(), Self::Error>;

	/// `node.addEventListener(event_type, listener)`.
	///
	/// `listener` is passed as given. Hosts reject values that cannot be
	/// called.
	fn add_event_listener(
		&self,
		node: &Self::Node,
		event_type: &str,
		listener: &PropValue,
	) -> Result<(), Self::Error>;

	/// `parent.appendChild(child)`.
	///
	/// Appending a fragment moves its children. Appending a node that is
	/// already in a tree moves it.
	fn append_child(&self, parent: &Self::Node, child: &Self::Node) -> Result<(), Self::Error>;
}
