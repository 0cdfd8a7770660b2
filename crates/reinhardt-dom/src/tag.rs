//! Tag descriptors.
//!
//! The tag string passed to [`create_element`](crate::create_element) selects
//! the kind of node to build. Two strings are reserved:
//!
//! | Descriptor | Node built |
//! |------------|------------|
//! | `"<>"` | document fragment |
//! | `""` | text node |
//! | anything else | element with that tag name |
//!
//! Element tags are not checked against the HTML tag list; the host decides
//! what it accepts.

use std::fmt;

/// Descriptor reserved for document fragments.
pub const FRAGMENT_TAG: &str = "<>";

/// Descriptor reserved for text nodes.
pub const TEXT_TAG: &str = "";

/// What kind of node to construct.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
	/// A document fragment (`"<>"`).
	Fragment,
	/// A text node (`""`).
	Text,
	/// A standard host element, forwarded to the host verbatim.
	Element(String),
}

impl Tag {
	/// Classifies a descriptor string.
	pub fn parse(descriptor: &str) -> Self {
		match descriptor {
			FRAGMENT_TAG => Self::Fragment,
			TEXT_TAG => Self::Text,
			name => Self::Element(name.to_string()),
		}
	}

	/// Returns the descriptor string this tag was parsed from.
	pub fn as_str(&self) -> &str {
		match self {
			Self::Fragment => FRAGMENT_TAG,
			Self::Text => TEXT_TAG,
			Self::Element(name) => name,
		}
	}
}

impl From<&str> for Tag {
	fn from(descriptor: &str) -> Self {
		Self::parse(descriptor)
	}
}

impl From<String> for Tag {
	fn from(descriptor: String) -> Self {
		match descriptor.as_str() {
			FRAGMENT_TAG => Self::Fragment,
			TEXT_TAG => Self::Text,
			_ => Self::Element(descriptor),
		}
	}
}

impl From<&String> for Tag {
	fn from(descriptor: &String) -> Self {
		Self::parse(descriptor)
	}
}

impl fmt::Display for Tag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
