//! Browser tests for the node builder.
//!
//! Run with: wasm-pack test --headless --chrome crates/reinhardt-dom

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use reinhardt_dom::{Props, WebDocument, create_element, event_handler, set_panic_hook};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use web_sys::{Element, Node};

wasm_bindgen_test_configure!(run_in_browser);

fn doc() -> WebDocument {
	set_panic_hook();
	WebDocument::current().expect("test runs in a browser")
}

#[wasm_bindgen_test]
fn test_div_with_class_listener_and_text_child() {
	let doc = doc();
	let clicks = Rc::new(Cell::new(0));
	let on_click = event_handler({
		let clicks = Rc::clone(&clicks);
		move |_| clicks.set(clicks.get() + 1)
	});

	let div = create_element!(
		&doc,
		"div",
		Props::new()
			.with("className", "x")
			.with("onClick", on_click),
		create_element!(&doc, "", Props::new().with("textContent", "hi")).unwrap()
	)
	.unwrap();

	let element: Element = div.clone().dyn_into().unwrap();
	assert_eq!(element.tag_name(), "DIV");
	assert_eq!(element.class_name(), "x");
	assert!(element.get_attribute("onClick").is_none());

	let children = div.child_nodes();
	assert_eq!(children.length(), 1);
	let text = children.get(0).unwrap();
	assert_eq!(text.node_type(), Node::TEXT_NODE);
	assert_eq!(text.text_content().as_deref(), Some("hi"));

	let event = web_sys::Event::new("click").unwrap();
	div.dispatch_event(&event).unwrap();
	assert_eq!(clicks.get(), 1);
}

#[wasm_bindgen_test]
fn test_fragment_with_two_spans() {
	let doc = doc();

	let fragment = create_element!(
		&doc,
		"<>",
		Props::new().with("className", "ignored"),
		create_element!(&doc, "span").unwrap(),
		create_element!(&doc, "span").unwrap()
	)
	.unwrap();

	assert_eq!(fragment.node_type(), Node::DOCUMENT_FRAGMENT_NODE);
	assert_eq!(fragment.child_nodes().length(), 2);
	let class_name = js_sys::Reflect::get(&fragment, &JsValue::from_str("className")).unwrap();
	assert!(class_name.is_undefined());
}

#[wasm_bindgen_test]
fn test_text_node_ignores_children() {
	let doc = doc();

	let text = create_element!(
		&doc,
		"",
		Props::new().with("textContent", "plain"),
		create_element!(&doc, "b").unwrap()
	)
	.unwrap();

	assert_eq!(text.node_type(), Node::TEXT_NODE);
	assert_eq!(text.text_content().as_deref(), Some("plain"));
	assert!(!text.has_child_nodes());
}

#[wasm_bindgen_test]
fn test_invalid_tag_surfaces_browser_error() {
	let result = create_element!(&doc(), "not a tag");

	assert!(result.is_err());
}

#[wasm_bindgen_test]
fn test_boolean_property_is_assigned() {
	let doc = doc();

	let div = create_element!(&doc, "div", Props::new().with("hidden", true)).unwrap();

	let element: web_sys::Element = div.dyn_into().unwrap();
	assert!(element.has_attribute("hidden"));
}

#[wasm_bindgen_test]
fn test_json_property_is_assigned_as_js_object() {
	let doc = doc();

	let div = create_element!(
		&doc,
		"div",
		Props::new().with("settings", serde_json::json!({"id": "7", "tags": ["a", "b"]}))
	)
	.unwrap();

	let settings = js_sys::Reflect::get(&div, &JsValue::from_str("settings")).unwrap();
	assert!(settings.is_object());
	let id = js_sys::Reflect::get(&settings, &JsValue::from_str("id")).unwrap();
	assert_eq!(id.as_string().as_deref(), Some("7"));
	let tags = js_sys::Reflect::get(&settings, &JsValue::from_str("tags")).unwrap();
	assert!(js_sys::Array::is_array(&tags));
	assert_eq!(js_sys::Array::from(&tags).length(), 2);
}

#[wasm_bindgen_test]
fn test_non_callable_listener_is_rejected_by_browser() {
	let doc = doc();

	let result = create_element!(&doc, "button", Props::new().with("onClick", "x"));

	assert!(result.is_err());
}
