//! Configuration maps for node construction.
//!
//! A [`Props`] map is a flat key/value set. The shape of the key alone decides
//! what happens to its value:
//!
//! - keys starting with `"on"` are event bindings. `"onClick"` registers a
//!   listener for `"click"`.
//! - every other key is assigned as a property of the node, e.g.
//!   `"className"`, `"hidden"` or `"textContent"`.
//!
//! Classification never looks at the value. An `"onClick"` entry holding a
//! string is still handed to listener registration (and rejected by the
//! host). A `"handler"` entry holding an [`EventHandler`] is assigned as a
//! plain property.

use serde_json::{Map, Value};

use crate::callback::EventHandler;

/// Prefix marking event binding keys.
pub const EVENT_PREFIX: &str = "on";

/// Key whose value becomes the content of a text node.
pub const TEXT_CONTENT: &str = "textContent";

/// Returns true if `key` is an event binding.
///
/// Only the prefix is matched, and case-sensitively: `"OnClick"` is a
/// property.
pub fn is_event(key: &str) -> bool {
	key.starts_with(EVENT_PREFIX)
}

/// Returns true if `key` is a property assignment.
pub fn is_property(key: &str) -> bool {
	!is_event(key)
}

/// Derives the event type of an event binding key.
///
/// The prefix is removed and the remainder lower-cased, so `"onMouseEnter"`
/// becomes `"mouseenter"`. Returns `None` for property keys.
pub fn event_type(key: &str) -> Option<String> {
	key.strip_prefix(EVENT_PREFIX).map(str::to_lowercase)
}

/// A value stored in a [`Props`] map.
#[derive(Clone)]
pub enum PropValue {
	/// `null`.
	Null,
	/// A boolean property such as `hidden` or `disabled`.
	Bool(bool),
	/// A numeric property such as `tabIndex`.
	Number(f64),
	/// A string property such as `className`.
	Text(String),
	/// A JSON array or object, assigned as a structured value.
	Json(Value),
	/// A function reference. Listener for `on*` keys.
	Handler(EventHandler),
	/// An arbitrary JavaScript value.
	#[cfg(target_arch = "wasm32")]
	Js(wasm_bindgen::JsValue),
}

impl PropValue {
	/// Coerces the value to text the way `document.createTextNode` does.
	///
	/// `Null` becomes the empty string, matching the nullish fallback used
	/// for a missing `textContent`.
	pub fn to_text(&self) -> String {
		match self {
			Self::Null => String::new(),
			Self::Bool(b) => b.to_string(),
			Self::Number(n) => number_to_text(*n),
			Self::Text(s) => s.clone(),
			Self::Json(Value::Array(items)) => items
				.iter()
				.map(|item| match item {
					Value::Null => String::new(),
					Value::String(s) => s.clone(),
					other => PropValue::from(other.clone()).to_text(),
				})
				.collect::<Vec<_>>()
				.join(","),
			Self::Json(_) => "[object Object]".to_string(),
			Self::Handler(_) => "function () { [native code] }".to_string(),
			#[cfg(target_arch = "wasm32")]
			Self::Js(value) => {
				if let Some(s) = value.as_string() {
					s
				} else if let Some(n) = value.as_f64() {
					number_to_text(n)
				} else if let Some(b) = value.as_bool() {
					b.to_string()
				} else if value.is_null() || value.is_undefined() {
					String::new()
				} else {
					"[object Object]".to_string()
				}
			}
		}
	}

	/// Returns the listener if this value is callable.
	pub fn as_handler(&self) -> Option<&EventHandler> {
		match self {
			Self::Handler(handler) => Some(handler),
			_ => None,
		}
	}

	/// Returns the string if this is a `Text` value.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Text(s) => Some(s),
			_ => None,
		}
	}

	/// Returns the boolean if this is a `Bool` value.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(b) => Some(*b),
			_ => None,
		}
	}

	/// Returns the number if this is a `Number` value.
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Self::Number(n) => Some(*n),
			_ => None,
		}
	}
}

/// Formats a number the way `Number.prototype.toString` does.
///
/// Magnitudes at or above `1e21` and below `1e-6` use exponent notation with
/// the shortest round-trip digits, as in `1e+21` or `1.5e-7`.
pub(crate) fn number_to_text(n: f64) -> String {
	if n == 0.0 {
		return "0".to_string();
	}
	if n.is_infinite() {
		return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
	}
	if n.is_nan() || (1e-6..1e21).contains(&n.abs()) {
		return n.to_string();
	}
	let formatted = format!("{n:e}");
	match formatted.split_once('e') {
		Some((mantissa, exponent)) if !exponent.starts_with('-') => {
			format!("{mantissa}e+{exponent}")
		}
		_ => formatted,
	}
}

impl PartialEq for PropValue {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::Null, Self::Null) => true,
			(Self::Bool(a), Self::Bool(b)) => a == b,
			(Self::Number(a), Self::Number(b)) => a == b,
			(Self::Text(a), Self::Text(b)) => a == b,
			(Self::Json(a), Self::Json(b)) => a == b,
			(Self::Handler(a), Self::Handler(b)) => a.ptr_eq(b),
			#[cfg(target_arch = "wasm32")]
			(Self::Js(a), Self::Js(b)) => a == b,
			_ => false,
		}
	}
}

impl std::fmt::Debug for PropValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Null => f.write_str("Null"),
			Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
			Self::Number(n) => f.debug_tuple("Number").field(n).finish(),
			Self::Text(s) => f.debug_tuple("Text").field(s).finish(),
			Self::Json(v) => f.debug_tuple("Json").field(v).finish(),
			Self::Handler(h) => f.debug_tuple("Handler").field(h).finish(),
			#[cfg(target_arch = "wasm32")]
			Self::Js(v) => f.debug_tuple("Js").field(v).finish(),
		}
	}
}

impl From<&str> for PropValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<String> for PropValue {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<bool> for PropValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

macro_rules! impl_from_number {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for PropValue {
				fn from(value: $ty) -> Self {
					Self::Number(f64::from(value))
				}
			}
		)*
	};
}

impl_from_number!(i8, i16, i32, u8, u16, u32, f32, f64);

impl From<EventHandler> for PropValue {
	fn from(handler: EventHandler) -> Self {
		Self::Handler(handler)
	}
}

impl<T: Into<PropValue>> From<Option<T>> for PropValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Null, Into::into)
	}
}

impl From<Value> for PropValue {
	fn from(value: Value) -> Self {
		match value {
			Value::Null => Self::Null,
			Value::Bool(b) => Self::Bool(b),
			// Every JSON number is representable as an f64 (lossy above 2^53,
			// exactly like JavaScript)
			Value::Number(n) => n.as_f64().map_or(Self::Null, Self::Number),
			Value::String(s) => Self::Text(s),
			structured @ (Value::Array(_) | Value::Object(_)) => Self::Json(structured),
		}
	}
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for PropValue {
	fn from(value: wasm_bindgen::JsValue) -> Self {
		Self::Js(value)
	}
}

/// How a configuration key is applied to a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropKind<'a> {
	/// Assign the value to the property of this name.
	Property(&'a str),
	/// Register the value as a listener for this event type.
	Event(String),
}

impl<'a> PropKind<'a> {
	/// Classifies a configuration key.
	pub fn classify(key: &'a str) -> Self {
		match event_type(key) {
			Some(event_type) => Self::Event(event_type),
			None => Self::Property(key),
		}
	}
}

/// Configuration map for [`create_element`](crate::create_element).
///
/// Keys are unique: inserting an existing key replaces its value in place.
/// Iteration follows first-insertion order.
///
/// ## Example
///
/// ```ignore
/// let props = Props::new()
///     .with("className", "card")
///     .with("hidden", false)
///     .with("onClick", event_handler(|_| {}));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props {
	entries: Vec<(String, PropValue)>,
}

impl Props {
	/// Creates an empty map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a map from a JSON object, keeping the object's key order.
	pub fn from_json(object: Map<String, Value>) -> Self {
		object.into_iter().collect()
	}

	/// Adds an entry and returns the map (builder style).
	pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
		self.insert(key, value);
		self
	}

	/// Inserts an entry, returning the value it replaced.
	pub fn insert(
		&mut self,
		key: impl Into<String>,
		value: impl Into<PropValue>,
	) -> Option<PropValue> {
		let key = key.into();
		let value = value.into();
		match self.entries.iter_mut().find(|(k, _)| *k == key) {
			Some((_, slot)) => Some(std::mem::replace(slot, value)),
			None => {
				self.entries.push((key, value));
				None
			}
		}
	}

	/// Removes an entry.
	pub fn remove(&mut self, key: &str) -> Option<PropValue> {
		let index = self.entries.iter().position(|(k, _)| k == key)?;
		Some(self.entries.remove(index).1)
	}

	/// Looks up a value by key.
	pub fn get(&self, key: &str) -> Option<&PropValue> {
		self.entries
			.iter()
			.find_map(|(k, v)| (k == key).then_some(v))
	}

	/// Returns true if the key is present.
	pub fn contains_key(&self, key: &str) -> bool {
		self.get(key).is_some()
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if the map has no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates over all entries.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Iterates over property assignments (keys without the `on` prefix).
	pub fn properties(&self) -> impl Iterator<Item = (&str, &PropValue)> {
		self.iter().filter(|(key, _)| is_property(key))
	}

	/// Iterates over event bindings as `(event_type, listener)` pairs.
	pub fn events(&self) -> impl Iterator<Item = (String, &PropValue)> {
		self.iter()
			.filter_map(|(key, value)| event_type(key).map(|event_type| (event_type, value)))
	}

	/// Content for a text node: the `textContent` entry coerced to text, or
	/// the empty string when absent.
	pub fn text_content(&self) -> String {
		self.get(TEXT_CONTENT)
			.map(PropValue::to_text)
			.unwrap_or_default()
	}
}

impl<K, V> FromIterator<(K, V)> for Props
where
	K: Into<String>,
	V: Into<PropValue>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut props = Self::new();
		for (key, value) in iter {
			props.insert(key, value);
		}
		props
	}
}

impl<K, V, const N: usize> From<[(K, V); N]> for Props
where
	K: Into<String>,
	V: Into<PropValue>,
{
	fn from(entries: [(K, V); N]) -> Self {
		entries.into_iter().collect()
	}
}

impl From<Map<String, Value>> for Props {
	fn from(object: Map<String, Value>) -> Self {
		Self::from_json(object)
	}
}
