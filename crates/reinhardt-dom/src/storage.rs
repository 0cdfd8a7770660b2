//! Storage availability probing
//!
//! `window.localStorage` is not always usable. Private browsing modes,
//! disabled cookies, sandboxed iframes and full quotas all make access or
//! writes throw. [`is_storage_supported`] answers "can I write here?" by
//! trying it: it writes a probe key, removes it again, and reports whether
//! both steps succeeded.
//!
//! ```ignore
//! use reinhardt_dom::storage::{is_storage_supported, local_storage};
//!
//! if is_storage_supported(local_storage) {
//!     // persist settings
//! }
//! ```
//!
//! Any type with `set_item` / `remove_item` can be probed by implementing
//! [`StorageHandle`].

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;

use crate::error::StorageError;

/// Key (and value) written by the probe.
pub const PROBE_KEY: &str = "__test__";

/// A key/value store that can be written to and cleared.
pub trait StorageHandle {
	/// Error raised by a failing operation.
	type Error;

	/// `storage.setItem(key, value)`.
	fn set_item(&self, key: &str, value: &str) -> Result<(), Self::Error>;

	/// `storage.removeItem(key)`.
	fn remove_item(&self, key: &str) -> Result<(), Self::Error>;
}

impl<T: StorageHandle + ?Sized> StorageHandle for &T {
	type Error = T::Error;

	fn set_item(&self, key: &str, value: &str) -> Result<(), Self::Error> {
		(**self).set_item(key, value)
	}

	fn remove_item(&self, key: &str) -> Result<(), Self::Error> {
		(**self).remove_item(key)
	}
}

impl<T: StorageHandle + ?Sized> StorageHandle for Rc<T> {
	type Error = T::Error;

	fn set_item(&self, key: &str, value: &str) -> Result<(), Self::Error> {
		(**self).set_item(key, value)
	}

	fn remove_item(&self, key: &str) -> Result<(), Self::Error> {
		(**self).remove_item(key)
	}
}

impl<T: StorageHandle + ?Sized> StorageHandle for Arc<T> {
	type Error = T::Error;

	fn set_item(&self, key: &str, value: &str) -> Result<(), Self::Error> {
		(**self).set_item(key, value)
	}

	fn remove_item(&self, key: &str) -> Result<(), Self::Error> {
		(**self).remove_item(key)
	}
}

/// Write/remove probe with a configurable key.
///
/// [`StorageProbe::default`] uses [`PROBE_KEY`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageProbe {
	key: String,
}

impl Default for StorageProbe {
	fn default() -> Self {
		Self {
			key: PROBE_KEY.to_string(),
		}
	}
}

impl StorageProbe {
	/// Creates a probe using [`PROBE_KEY`].
	pub fn new() -> Self {
		Self::default()
	}

	/// Uses `key` as the probe key and value.
	pub fn key(mut self, key: impl Into<String>) -> Self {
		self.key = key.into();
		self
	}

	/// The probe key.
	pub fn probe_key(&self) -> &str {
		&self.key
	}

	/// Returns true if a storage obtained from `get_storage` accepts a write
	/// followed by a remove.
	///
	/// `get_storage` is called once per operation. Every failure, including
	/// the factory's own, is discarded and reported as `false`. A failed remove
	/// leaves the probe key behind.
	pub fn is_supported<F, S, E>(&self, get_storage: F) -> bool
	where
		F: Fn() -> Result<S, E>,
		S: StorageHandle,
	{
		let probe = || -> Result<(), ()> {
			get_storage()
				.map_err(drop)?
				.set_item(&self.key, &self.key)
				.map_err(drop)?;
			get_storage()
				.map_err(drop)?
				.remove_item(&self.key)
				.map_err(drop)?;
			Ok(())
		};
		probe().is_ok()
	}
}

/// Returns true if the storage produced by `get_storage` is usable.
///
/// Never fails: an unavailable handle, a rejected write and a rejected remove
/// all yield `false`.
pub fn is_storage_supported<F, S, E>(get_storage: F) -> bool
where
	F: Fn() -> Result<S, E>,
	S: StorageHandle,
{
	StorageProbe::default().is_supported(get_storage)
}

/// In-memory storage.
///
/// Clones share the same data, like two references to `localStorage`. An
/// optional quota and a disabled switch reproduce the browser's failure
/// modes.
///
/// ```ignore
/// let storage = MemoryStorage::with_quota(0);
/// assert!(!is_storage_supported(|| Ok::<_, ()>(storage.clone())));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
	data: Rc<RefCell<HashMap<String, String>>>,
	quota: Option<usize>,
	disabled: Rc<Cell<bool>>,
}

impl MemoryStorage {
	/// Creates an empty, unlimited storage.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an empty storage that holds at most `quota` items.
	pub fn with_quota(quota: usize) -> Self {
		Self {
			quota: Some(quota),
			..Self::default()
		}
	}

	/// Creates a storage with initial data.
	pub fn with_data(data: HashMap<String, String>) -> Self {
		Self {
			data: Rc::new(RefCell::new(data)),
			..Self::default()
		}
	}

	/// Turns every write and remove into [`StorageError::Disabled`].
	pub fn set_disabled(&self, disabled: bool) {
		self.disabled.set(disabled);
	}

	/// Returns true if storage access is turned off.
	pub fn is_disabled(&self) -> bool {
		self.disabled.get()
	}

	/// Number of stored items.
	pub fn length(&self) -> usize {
		self.data.borrow().len()
	}

	/// Gets an item by key.
	pub fn get_item(&self, key: &str) -> Option<String> {
		self.data.borrow().get(key).cloned()
	}

	/// Returns true if the key exists.
	pub fn contains_key(&self, key: &str) -> bool {
		self.data.borrow().contains_key(key)
	}

	/// Stores an item.
	///
	/// Overwriting an existing key never counts against the quota.
	pub fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
		if self.is_disabled() {
			return Err(StorageError::Disabled);
		}
		let mut data = self.data.borrow_mut();
		if let Some(quota) = self.quota {
			if !data.contains_key(key) && data.len() >= quota {
				return Err(StorageError::QuotaExceeded { quota });
			}
		}
		data.insert(key.to_string(), value.to_string());
		Ok(())
	}

	/// Removes an item. Removing a missing key succeeds.
	pub fn remove_item(&self, key: &str) -> Result<(), StorageError> {
		if self.is_disabled() {
			return Err(StorageError::Disabled);
		}
		self.data.borrow_mut().remove(key);
		Ok(())
	}

	/// Removes every item.
	pub fn clear(&self) {
		self.data.borrow_mut().clear();
	}
}

impl StorageHandle for MemoryStorage {
	type Error = StorageError;

	fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
		MemoryStorage::set_item(self, key, value)
	}

	fn remove_item(&self, key: &str) -> Result<(), StorageError> {
		MemoryStorage::remove_item(self, key)
	}
}

#[cfg(target_arch = "wasm32")]
mod web {
	use wasm_bindgen::JsValue;
	use web_sys::Storage;

	use super::StorageHandle;

	impl StorageHandle for Storage {
		type Error = JsValue;

		fn set_item(&self, key: &str, value: &str) -> Result<(), JsValue> {
			Storage::set_item(self, key, value)
		}

		fn remove_item(&self, key: &str) -> Result<(), JsValue> {
			Storage::remove_item(self, key)
		}
	}

	fn window() -> Result<web_sys::Window, JsValue> {
		web_sys::window().ok_or_else(|| JsValue::from_str("no global `window`"))
	}

	/// `window.localStorage`. A `null` storage is reported as an error.
	pub fn local_storage() -> Result<Storage, JsValue> {
		window()?
			.local_storage()?
			.ok_or_else(|| JsValue::from_str("`window.localStorage` is null"))
	}

	/// `window.sessionStorage`. A `null` storage is reported as an error.
	pub fn session_storage() -> Result<Storage, JsValue> {
		window()?
			.session_storage()?
			.ok_or_else(|| JsValue::from_str("`window.sessionStorage` is null"))
	}
}

#[cfg(target_arch = "wasm32")]
pub use web::{local_storage, session_storage};

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::*;

	/// Storage whose remove always fails, for partial-failure checks.
	struct WriteOnly(MemoryStorage);

	impl StorageHandle for WriteOnly {
		type Error = &'static str;

		fn set_item(&self, key: &str, value: &str) -> Result<(), Self::Error> {
			self.0.set_item(key, value).map_err(|_| "write failed")
		}

		fn remove_item(&self, _key: &str) -> Result<(), Self::Error> {
			Err("remove failed")
		}
	}

	#[fixture]
	fn storage() -> MemoryStorage {
		MemoryStorage::new()
	}

	#[rstest]
	fn test_working_storage_is_supported_and_left_clean(storage: MemoryStorage) {
		storage.set_item("theme", "dark").unwrap();

		assert!(is_storage_supported(|| Ok::<_, ()>(storage.clone())));

		assert!(!storage.contains_key(PROBE_KEY));
		assert_eq!(storage.get_item("theme").as_deref(), Some("dark"));
		assert_eq!(storage.length(), 1);
	}

	#[rstest]
	fn test_unavailable_storage_is_not_supported() {
		assert!(!is_storage_supported(|| {
			Err::<MemoryStorage, _>("SecurityError")
		}));
	}

	#[rstest]
	fn test_disabled_storage_is_not_supported(storage: MemoryStorage) {
		storage.set_disabled(true);
		assert!(!is_storage_supported(|| Ok::<_, ()>(&storage)));

		storage.set_disabled(false);
		assert!(is_storage_supported(|| Ok::<_, ()>(&storage)));
	}

	#[rstest]
	#[case(0, false)]
	#[case(1, true)]
	fn test_quota(#[case] quota: usize, #[case] expected: bool) {
		let storage = MemoryStorage::with_quota(quota);
		assert_eq!(is_storage_supported(|| Ok::<_, ()>(&storage)), expected);
	}

	#[rstest]
	fn test_full_storage_accepts_overwrites() {
		let storage = MemoryStorage::with_quota(1);
		storage.set_item("a", "1").unwrap();

		assert_eq!(
			storage.set_item("b", "2"),
			Err(StorageError::QuotaExceeded { quota: 1 })
		);
		assert_eq!(storage.set_item("a", "3"), Ok(()));
		assert!(!is_storage_supported(|| Ok::<_, ()>(&storage)));
	}

	#[rstest]
	fn test_failed_remove_reports_false_and_leaves_key(storage: MemoryStorage) {
		let handle = WriteOnly(storage.clone());

		assert!(!is_storage_supported(|| Ok::<_, ()>(&handle)));
		assert_eq!(storage.get_item(PROBE_KEY).as_deref(), Some(PROBE_KEY));
	}

	#[rstest]
	fn test_factory_failing_on_second_call(storage: MemoryStorage) {
		let calls = Cell::new(0);

		let supported = is_storage_supported(|| {
			calls.set(calls.get() + 1);
			if calls.get() == 1 {
				Ok(storage.clone())
			} else {
				Err(())
			}
		});

		assert!(!supported);
		assert_eq!(calls.get(), 2);
		assert!(storage.contains_key(PROBE_KEY));
	}

	#[rstest]
	fn test_custom_probe_key(storage: MemoryStorage) {
		let probe = StorageProbe::new().key("__probe__");

		assert_eq!(probe.probe_key(), "__probe__");
		assert!(probe.is_supported(|| Ok::<_, ()>(Rc::new(storage.clone()))));
		assert_eq!(storage.length(), 0);
	}

	#[rstest]
	fn test_probe_removes_preexisting_probe_key(storage: MemoryStorage) {
		// Overwritten by the probe, then removed
		storage.set_item(PROBE_KEY, "user data").unwrap();

		assert!(is_storage_supported(|| Ok::<_, ()>(Arc::new(storage.clone()))));
		assert!(!storage.contains_key(PROBE_KEY));
	}

	#[rstest]
	fn test_clones_share_data(storage: MemoryStorage) {
		let other = storage.clone();
		other.set_item("k", "v").unwrap();
		assert_eq!(storage.get_item("k").as_deref(), Some("v"));

		storage.clear();
		assert_eq!(other.length(), 0);
	}

	#[rstest]
	fn test_with_data() {
		let storage = MemoryStorage::with_data(HashMap::from([("k".to_string(), "v".to_string())]));
		assert_eq!(storage.length(), 1);
		assert!(is_storage_supported(|| Ok::<_, ()>(&storage)));
		assert_eq!(storage.length(), 1);
	}
}
