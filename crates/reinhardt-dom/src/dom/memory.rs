//! In-memory DOM host.
//!
//! Native stand-in for the browser document. Nodes are reference-counted
//! handles (`Rc<RefCell<..>>`), so cloning a [`MemoryNode`] yields another
//! handle to the same node, just like holding a JS reference. Equality is node
//! identity.
//!
//! Semantics follow the DOM where the builder can observe them:
//!
//! - element names are validated and ASCII-lowercased.
//! - assigning `textContent` to an element replaces its children. On a text
//!   node it replaces the data.
//! - any other property is stored as-is. Text nodes accept unknown
//!   properties silently.
//! - listeners must be callable.
//! - appending a fragment moves its children. Appending an attached node
//!   moves it. Text nodes cannot have children.
//!
//! Events are dispatched to the target's own listeners only; there is no
//! capture or bubbling phase.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::callback::{DummyEvent, EventHandler};
use crate::dom::{Child, DomHost, NodeKind};
use crate::error::DomError;
use crate::props::{PropValue, TEXT_CONTENT};

enum NodeData {
	Element { tag: String },
	Text { data: String },
	Fragment,
}

struct NodeInner {
	data: NodeData,
	properties: Vec<(String, PropValue)>,
	listeners: Vec<(String, EventHandler)>,
	children: Vec<MemoryNode>,
	parent: Weak<RefCell<NodeInner>>,
}

/// Handle to a node of a [`MemoryDocument`].
#[derive(Clone)]
pub struct MemoryNode(Rc<RefCell<NodeInner>>);

impl MemoryNode {
	fn new(data: NodeData) -> Self {
		Self(Rc::new(RefCell::new(NodeInner {
			data,
			properties: Vec::new(),
			listeners: Vec::new(),
			children: Vec::new(),
			parent: Weak::new(),
		})))
	}

	/// What kind of node this is.
	pub fn kind(&self) -> NodeKind {
		match self.0.borrow().data {
			NodeData::Element { .. } => NodeKind::Element,
			NodeData::Text { .. } => NodeKind::Text,
			NodeData::Fragment => NodeKind::Fragment,
		}
	}

	/// Lowercased tag name, for elements.
	pub fn tag_name(&self) -> Option<String> {
		match &self.0.borrow().data {
			NodeData::Element { tag } => Some(tag.clone()),
			_ => None,
		}
	}

	/// `node.textContent`: the data of a text node, or the concatenated text
	/// of all descendants.
	pub fn text_content(&self) -> String {
		let inner = self.0.borrow();
		match &inner.data {
			NodeData::Text { data } => data.clone(),
			_ => inner.children.iter().map(MemoryNode::text_content).collect(),
		}
	}

	/// Value previously assigned to property `key`.
	///
	/// `textContent` is not stored as a property; use
	/// [`text_content`](Self::text_content).
	pub fn property(&self, key: &str) -> Option<PropValue> {
		self.0
			.borrow()
			.properties
			.iter()
			.find_map(|(k, v)| (k == key).then(|| v.clone()))
	}

	/// Names of all assigned properties, in assignment order.
	pub fn property_names(&self) -> Vec<String> {
		self.0
			.borrow()
			.properties
			.iter()
			.map(|(k, _)| k.clone())
			.collect()
	}

	/// Child nodes in document order.
	pub fn children(&self) -> Vec<MemoryNode> {
		self.0.borrow().children.clone()
	}

	/// Number of child nodes.
	pub fn child_count(&self) -> usize {
		self.0.borrow().children.len()
	}

	/// Parent node, if attached.
	pub fn parent(&self) -> Option<MemoryNode> {
		self.0.borrow().parent.upgrade().map(MemoryNode)
	}

	/// Listeners registered for `event_type`, in registration order.
	pub fn listeners(&self, event_type: &str) -> Vec<EventHandler> {
		self.0
			.borrow()
			.listeners
			.iter()
			.filter(|(t, _)| t == event_type)
			.map(|(_, handler)| handler.clone())
			.collect()
	}

	/// Total number of registered listeners.
	pub fn listener_count(&self) -> usize {
		self.0.borrow().listeners.len()
	}

	/// Invokes every listener registered for `event_type` on this node.
	///
	/// Returns how many listeners ran.
	pub fn dispatch_event(&self, event_type: &str) -> usize {
		// Collected first so listeners may touch this node
		let listeners = self.listeners(event_type);
		for listener in &listeners {
			listener.call(DummyEvent::new(event_type));
		}
		listeners.len()
	}

	/// Returns true if `node` is this node or one of its descendants.
	pub fn contains(&self, node: &MemoryNode) -> bool {
		let mut current = Some(node.clone());
		while let Some(candidate) = current {
			if candidate == *self {
				return true;
			}
			current = candidate.parent();
		}
		false
	}

	fn detach(&self) {
		if let Some(parent) = self.parent() {
			parent
				.0
				.borrow_mut()
				.children
				.retain(|child| child != self);
		}
		self.0.borrow_mut().parent = Weak::new();
	}

	fn adopt(&self, child: MemoryNode) {
		child.0.borrow_mut().parent = Rc::downgrade(&self.0);
		self.0.borrow_mut().children.push(child);
	}

	fn replace_children_with_text(&self, text: String) {
		let old = std::mem::take(&mut self.0.borrow_mut().children);
		for child in old {
			child.0.borrow_mut().parent = Weak::new();
		}
		if !text.is_empty() {
			self.adopt(MemoryNode::new(NodeData::Text { data: text }));
		}
	}
}

impl PartialEq for MemoryNode {
	fn eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.0, &other.0)
	}
}

impl Eq for MemoryNode {}

impl fmt::Debug for MemoryNode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let inner = self.0.borrow();
		match &inner.data {
			NodeData::Element { tag } => f
				.debug_struct("Element")
				.field("tag", tag)
				.field("properties", &inner.properties)
				.field("listeners", &inner.listeners.len())
				.field("children", &inner.children)
				.finish(),
			NodeData::Text { data } => f.debug_tuple("Text").field(data).finish(),
			NodeData::Fragment => f
				.debug_struct("Fragment")
				.field("children", &inner.children)
				.finish(),
		}
	}
}

impl From<MemoryNode> for Child<MemoryNode> {
	fn from(node: MemoryNode) -> Self {
		Self::Node(node)
	}
}

impl From<&MemoryNode> for Child<MemoryNode> {
	fn from(node: &MemoryNode) -> Self {
		Self::Node(node.clone())
	}
}

/// Host that builds [`MemoryNode`] trees.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryDocument;

impl MemoryDocument {
	/// Creates a document.
	pub fn new() -> Self {
		Self
	}
}

fn is_valid_tag_name(tag: &str) -> bool {
	let mut chars = tag.chars();
	match chars.next() {
		Some(first) if first.is_alphabetic() => {}
		_ => return false,
	}
	chars.all(|c| !c.is_whitespace() && !matches!(c, '\0' | '/' | '<' | '>' | '"' | '\'' | '='))
}

impl DomHost for MemoryDocument {
	type Node = MemoryNode;
	type Error = DomError;

	fn create_element(&self, tag: &str) -> Result<MemoryNode, DomError> {
		if !is_valid_tag_name(tag) {
			return Err(DomError::InvalidCharacter {
				tag: tag.to_string(),
			});
		}
		Ok(MemoryNode::new(NodeData::Element {
			tag: tag.to_ascii_lowercase(),
		}))
	}

	fn create_text_node(&self, data: &str) -> Result<MemoryNode, DomError> {
		Ok(MemoryNode::new(NodeData::Text {
			data: data.to_string(),
		}))
	}

	fn create_document_fragment(&self) -> Result<MemoryNode, DomError> {
		Ok(MemoryNode::new(NodeData::Fragment))
	}

	fn node_kind(&self, node: &MemoryNode) -> NodeKind {
		node.kind()
	}

	fn set_property(&self, node: &MemoryNode, key: &str, value: &PropValue) -> Result<(), DomError> {
		match (node.kind(), key) {
			(NodeKind::Element | NodeKind::Fragment, TEXT_CONTENT) => {
				node.replace_children_with_text(value.to_text());
			}
			(NodeKind::Text, TEXT_CONTENT | "data" | "nodeValue") => {
				if let NodeData::Text { data } = &mut node.0.borrow_mut().data {
					*data = value.to_text();
				}
			}
			_ => {
				let mut inner = node.0.borrow_mut();
				match inner.properties.iter_mut().find(|(k, _)| k == key) {
					Some((_, slot)) => *slot = value.clone(),
					None => inner.properties.push((key.to_string(), value.clone())),
				}
			}
		}
		Ok(())
	}

	fn add_event_listener(
		&self,
		node: &MemoryNode,
		event_type: &str,
		listener: &PropValue,
	) -> Result<(), DomError> {
		let handler = listener.as_handler().ok_or_else(|| DomError::NotCallable {
			event_type: event_type.to_string(),
		})?;
		node.0
			.borrow_mut()
			.listeners
			.push((event_type.to_string(), handler.clone()));
		Ok(())
	}

	fn append_child(&self, parent: &MemoryNode, child: &MemoryNode) -> Result<(), DomError> {
		if parent.kind() == NodeKind::Text {
			return Err(DomError::HierarchyRequest {
				reason: "text nodes cannot have children".to_string(),
			});
		}
		if child.contains(parent) {
			return Err(DomError::HierarchyRequest {
				reason: "the new child contains the parent".to_string(),
			});
		}

		if child.kind() == NodeKind::Fragment {
			let moved = std::mem::take(&mut child.0.borrow_mut().children);
			for grandchild in moved {
				parent.adopt(grandchild);
			}
		} else {
			child.detach();
			parent.adopt(child.clone());
		}
		Ok(())
	}
}
