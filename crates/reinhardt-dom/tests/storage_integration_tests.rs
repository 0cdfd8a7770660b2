//! Storage prober integration tests
//!
//! Success Criteria:
//! 1. A writable storage is reported usable and left without the probe key
//! 2. Every failure mode (missing handle, disabled, quota, failing remove) yields `false`
//! 3. No error or panic escapes the probe
//!
//! Test Categories:
//! - Happy Path: 2 tests
//! - Error Path: 2 tests
//! - Decision Table: 5 cases
//! - Property-based: 1 test
//!
//! Total: 10 tests

#![cfg(not(target_arch = "wasm32"))]

use std::cell::RefCell;
use std::rc::Rc;

use proptest::prelude::*;
use reinhardt_dom::{MemoryStorage, PROBE_KEY, StorageError, StorageHandle, StorageProbe, is_storage_supported};
use rstest::*;

/// Records every call so the probe sequence can be asserted.
#[derive(Default)]
struct RecordingStorage {
	calls: RefCell<Vec<String>>,
}

impl StorageHandle for RecordingStorage {
	type Error = StorageError;

	fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
		self.calls.borrow_mut().push(format!("set {key}={value}"));
		Ok(())
	}

	fn remove_item(&self, key: &str) -> Result<(), StorageError> {
		self.calls.borrow_mut().push(format!("remove {key}"));
		Ok(())
	}
}

// ============================================================================
// Happy Path
// ============================================================================

#[rstest]
fn test_probe_writes_then_removes_probe_key() {
	let storage = Rc::new(RecordingStorage::default());

	assert!(is_storage_supported(|| Ok::<_, ()>(Rc::clone(&storage))));

	assert_eq!(
		*storage.calls.borrow(),
		vec![
			format!("set {PROBE_KEY}={PROBE_KEY}"),
			format!("remove {PROBE_KEY}"),
		]
	);
}

#[rstest]
fn test_existing_items_survive_probe() {
	let storage = MemoryStorage::new();
	storage.set_item("session", "abc").unwrap();

	assert!(is_storage_supported(|| Ok::<_, ()>(storage.clone())));

	assert_eq!(storage.length(), 1);
	assert_eq!(storage.get_item("session").as_deref(), Some("abc"));
	assert!(!storage.contains_key(PROBE_KEY));
}

// ============================================================================
// Error Path
// ============================================================================

#[rstest]
fn test_factory_error_is_swallowed() {
	assert!(!is_storage_supported(|| {
		Err::<MemoryStorage, _>(StorageError::Disabled)
	}));
}

#[rstest]
fn test_custom_key_failure_is_swallowed() {
	let storage = MemoryStorage::with_quota(0);

	assert!(!StorageProbe::new()
		.key("reinhardt:probe")
		.is_supported(|| Ok::<_, ()>(&storage)));
	assert_eq!(storage.length(), 0);
}

// ============================================================================
// Decision Table
// ============================================================================

#[rstest]
#[case::unlimited(None, false, true)]
#[case::roomy_quota(Some(10), false, true)]
#[case::zero_quota(Some(0), false, false)]
#[case::disabled(None, true, false)]
#[case::disabled_with_quota(Some(10), true, false)]
fn test_support_decision_table(
	#[case] quota: Option<usize>,
	#[case] disabled: bool,
	#[case] expected: bool,
) {
	let storage = quota.map_or_else(MemoryStorage::new, MemoryStorage::with_quota);
	storage.set_disabled(disabled);

	assert_eq!(is_storage_supported(|| Ok::<_, ()>(&storage)), expected);
	assert!(!storage.contains_key(PROBE_KEY));
}

// ============================================================================
// Property-based
// ============================================================================

proptest! {
	#[test]
	fn prop_probe_never_leaves_key_on_success(
		existing in prop::collection::hash_map("[a-z]{1,6}", "[a-z]{0,6}", 0..8),
		key in "[a-z_]{1,12}",
	) {
		prop_assume!(!existing.contains_key(&key));
		let storage = MemoryStorage::with_data(existing.clone());

		let supported = StorageProbe::new().key(key.clone()).is_supported(|| Ok::<_, ()>(&storage));

		prop_assert!(supported);
		prop_assert!(!storage.contains_key(&key));
		prop_assert_eq!(storage.length(), existing.len());
	}
}
