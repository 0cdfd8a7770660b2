//! createElement-style node builder
//!
//! [`create_element`] builds one node from a tag descriptor, a [`Props`] map
//! and a child sequence, in a single pass:
//!
//! 1. `"<>"` creates a fragment, `""` a text node holding
//!    `props["textContent"]`, and any other string an element.
//! 2. Unless the node is a fragment, every property entry is assigned, then
//!    every `on*` entry is registered as a listener for the lower-cased event
//!    name.
//! 3. Unless the node is a text node, the children are appended in order.
//!
//! Nothing is re-run later. The node is built once and handed to the caller.
//! Host errors are returned unchanged and stop construction at the failing
//! step.
//!
//! ## Example
//!
//! ```ignore
//! use reinhardt_dom::{create_element, event_handler, MemoryDocument, Props};
//!
//! let doc = MemoryDocument::new();
//! let on_click = event_handler(|_| info_log!("clicked"));
//!
//! let card = create_element!(
//!     &doc,
//!     "div",
//!     Props::new().with("className", "card").with("onClick", on_click),
//!     create_element!(&doc, "h2", Props::new(), "Title")?,
//!     "body text",
//! )?;
//! ```

use crate::debug_log;
use crate::dom::{Child, DomHost, NodeKind};
use crate::props::Props;
use crate::tag::Tag;

/// Builds a node and returns it detached from any document tree.
///
/// # Arguments
///
/// * `host` - The DOM environment that creates and mutates the node
/// * `tag` - `"<>"` for a fragment, `""` for a text node, otherwise an element tag
/// * `props` - Properties and `on*` event listeners to apply
/// * `children` - Nodes or text appended in order (ignored for text nodes)
///
/// # Errors
///
/// Returns the host's error if creating the node, assigning a property,
/// registering a listener or appending a child fails.
pub fn create_element<H, T, C>(
	host: &H,
	tag: T,
	props: &Props,
	children: C,
) -> Result<H::Node, H::Error>
where
	H: DomHost,
	T: Into<Tag>,
	C: IntoIterator<Item = Child<H::Node>>,
{
	let tag = tag.into();
	debug_log!("create_element: {:?} with {} props", tag, props.len());

	let node = match &tag {
		Tag::Fragment => host.create_document_fragment()?,
		Tag::Text => host.create_text_node(&props.text_content())?,
		Tag::Element(name) => host.create_element(name)?,
	};
	let kind = host.node_kind(&node);

	// Fragments have no attribute surface
	if kind != NodeKind::Fragment {
		for (key, value) in props.properties() {
			host.set_property(&node, key, value)?;
		}
		for (event_type, listener) in props.events() {
			host.add_event_listener(&node, &event_type, listener)?;
		}
	}

	// Text nodes cannot have children
	if kind != NodeKind::Text {
		for child in children {
			match child {
				Child::Node(child) => host.append_child(&node, &child)?,
				Child::Text(text) => {
					let text = host.create_text_node(&text)?;
					host.append_child(&node, &text)?;
				}
			}
		}
	}

	Ok(node)
}

/// Variadic form of [`create_element`].
///
/// The configuration is optional and defaults to an empty [`Props`].
/// Children are any values convertible into [`Child`]: host nodes, `&str` or
/// `String`.
///
/// ```ignore
/// create_element!(&doc, "br")?;
/// create_element!(&doc, "", Props::new().with("textContent", "hi"))?;
/// create_element!(&doc, "<>", Props::new(), first, second)?;
/// ```
#[macro_export]
macro_rules! create_element {
	($host:expr, $tag:expr $(,)?) => {
		$crate::builder::create_element($host, $tag, &$crate::Props::new(), ::std::iter::empty())
	};
	($host:expr, $tag:expr, $props:expr $(, $child:expr)* $(,)?) => {
		$crate::builder::create_element(
			$host,
			$tag,
			&$props,
			::std::vec![$($crate::Child::from($child)),*],
		)
	};
}
