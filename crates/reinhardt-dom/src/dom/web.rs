//! Browser DOM host (WASM only).
//!
//! Every primitive maps onto the matching `web-sys` call, and failures are
//! returned as the `JsValue` the browser threw (`InvalidCharacterError`,
//! `HierarchyRequestError`, `TypeError`, ...).
//!
//! Listener closures are converted with [`Closure::into_js_value`], which hands
//! ownership to the JS garbage collector. Once the node is collected, its
//! listeners are too. Listeners are never removed by this crate, so there is
//! no handle to keep.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, DocumentFragment, Element, Node, Text};

use crate::builder;
use crate::callback::{EventArg, EventHandler};
use crate::dom::{Child, DomHost, NodeKind};
use crate::props::{PropValue, Props};
use crate::tag::Tag;

/// Host backed by a browser [`Document`].
#[derive(Debug, Clone)]
pub struct WebDocument {
	document: Document,
}

impl WebDocument {
	/// Wraps a document.
	pub fn new(document: Document) -> Self {
		Self { document }
	}

	/// The document of the current global `window`.
	pub fn current() -> Result<Self, JsValue> {
		let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window`"))?;
		let document = window
			.document()
			.ok_or_else(|| JsValue::from_str("`window.document` is not available"))?;
		Ok(Self::new(document))
	}

	/// The wrapped document.
	pub fn document(&self) -> &Document {
		&self.document
	}
}

/// Converts a property value into the JS value assigned to the node.
fn to_js(value: &PropValue) -> Result<JsValue, JsValue> {
	Ok(match value {
		PropValue::Null => JsValue::NULL,
		PropValue::Bool(b) => JsValue::from_bool(*b),
		PropValue::Number(n) => JsValue::from_f64(*n),
		PropValue::Text(s) => JsValue::from_str(s),
		PropValue::Json(json) => js_sys::JSON::parse(&json.to_string())?,
		PropValue::Handler(handler) => handler_to_js(handler),
		PropValue::Js(value) => value.clone(),
	})
}

fn handler_to_js(handler: &EventHandler) -> JsValue {
	let handler = handler.clone();
	Closure::<dyn Fn(EventArg)>::new(move |event: EventArg| handler.call(event)).into_js_value()
}

impl DomHost for WebDocument {
	type Node = Node;
	type Error = JsValue;

	fn create_element(&self, tag: &str) -> Result<Node, JsValue> {
		self.document.create_element(tag).map(Node::from)
	}

	fn create_text_node(&self, data: &str) -> Result<Node, JsValue> {
		Ok(self.document.create_text_node(data).into())
	}

	fn create_document_fragment(&self) -> Result<Node, JsValue> {
		Ok(self.document.create_document_fragment().into())
	}

	fn node_kind(&self, node: &Node) -> NodeKind {
		match node.node_type() {
			Node::DOCUMENT_FRAGMENT_NODE => NodeKind::Fragment,
			Node::TEXT_NODE => NodeKind::Text,
			_ => NodeKind::Element,
		}
	}

	fn set_property(&self, node: &Node, key: &str, value: &PropValue) -> Result<(), JsValue> {
		// Reflect.set reports read-only slots with `false`; plain assignment
		// ignores them too
		js_sys::Reflect::set(node, &JsValue::from_str(key), &to_js(value)?)?;
		Ok(())
	}

	fn add_event_listener(
		&self,
		node: &Node,
		event_type: &str,
		listener: &PropValue,
	) -> Result<(), JsValue> {
		let listener = to_js(listener)?;
		node.add_event_listener_with_callback(event_type, listener.unchecked_ref())
	}

	fn append_child(&self, parent: &Node, child: &Node) -> Result<(), JsValue> {
		parent.append_child(child).map(drop)
	}
}

impl From<Node> for Child<Node> {
	fn from(node: Node) -> Self {
		Self::Node(node)
	}
}

impl From<&Node> for Child<Node> {
	fn from(node: &Node) -> Self {
		Self::Node(node.clone())
	}
}

impl From<Element> for Child<Node> {
	fn from(element: Element) -> Self {
		Self::Node(element.into())
	}
}

impl From<Text> for Child<Node> {
	fn from(text: Text) -> Self {
		Self::Node(text.into())
	}
}

impl From<DocumentFragment> for Child<Node> {
	fn from(fragment: DocumentFragment) -> Self {
		Self::Node(fragment.into())
	}
}

/// [`create_element`](crate::create_element) against the current document.
///
/// ```ignore
/// let item = web::create_element("li", &Props::new().with("className", "item"), [Child::from("first")])?;
/// ```
pub fn create_element<T, C>(tag: T, props: &Props, children: C) -> Result<Node, JsValue>
where
	T: Into<Tag>,
	C: IntoIterator<Item = Child<Node>>,
{
	builder::create_element(&WebDocument::current()?, tag, props, children)
}
