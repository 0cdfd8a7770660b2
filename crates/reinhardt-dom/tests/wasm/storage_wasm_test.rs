//! Browser tests for the storage prober.
//!
//! Run with: wasm-pack test --headless --chrome crates/reinhardt-dom

#![cfg(target_arch = "wasm32")]

use reinhardt_dom::{PROBE_KEY, is_storage_supported, local_storage, session_storage};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_local_storage_is_supported_and_clean() {
	assert!(is_storage_supported(local_storage));

	let storage = local_storage().unwrap();
	assert_eq!(storage.get_item(PROBE_KEY).unwrap(), None);
}

#[wasm_bindgen_test]
fn test_session_storage_is_supported() {
	assert!(is_storage_supported(session_storage));
}

#[wasm_bindgen_test]
fn test_throwing_factory_is_not_supported() {
	assert!(!is_storage_supported(|| {
		Err::<web_sys::Storage, _>(JsValue::from_str("SecurityError"))
	}));
}
