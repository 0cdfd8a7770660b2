//! Error types raised by the native backends.
//!
//! The web backend never produces these: browser failures surface as the raw
//! `JsValue` the DOM threw. [`DomError`] mirrors the `DOMException` names the
//! browser would use for the same mistake, so code tested against the memory
//! host fails the same way it would in a page.

use thiserror::Error;

/// Failure of a memory-host DOM primitive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
	/// The tag name is not a valid element name (`InvalidCharacterError`).
	#[error("InvalidCharacterError: '{tag}' is not a valid tag name")]
	InvalidCharacter {
		/// The rejected tag name.
		tag: String,
	},

	/// A listener value that cannot be invoked (`TypeError`).
	#[error("TypeError: listener for '{event_type}' is not callable")]
	NotCallable {
		/// The event type the listener was registered for.
		event_type: String,
	},

	/// The requested insertion would produce an invalid tree
	/// (`HierarchyRequestError`).
	#[error("HierarchyRequestError: {reason}")]
	HierarchyRequest {
		/// Why the insertion was refused.
		reason: String,
	},
}

/// Failure of a [`MemoryStorage`](crate::storage::MemoryStorage) operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
	/// Writing would exceed the configured item quota.
	#[error("QuotaExceededError: storage quota of {quota} items exceeded")]
	QuotaExceeded {
		/// Maximum number of items the storage accepts.
		quota: usize,
	},

	/// Storage access is turned off (private mode, blocked by policy).
	#[error("SecurityError: storage is disabled")]
	Disabled,
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(DomError::InvalidCharacter { tag: "a b".into() }, "InvalidCharacterError: 'a b' is not a valid tag name")]
	#[case(DomError::NotCallable { event_type: "click".into() }, "TypeError: listener for 'click' is not callable")]
	#[case(DomError::HierarchyRequest { reason: "text nodes cannot have children".into() }, "HierarchyRequestError: text nodes cannot have children")]
	fn test_dom_error_display(#[case] error: DomError, #[case] expected: &str) {
		assert_eq!(error.to_string(), expected);
	}

	#[rstest]
	fn test_storage_error_display() {
		assert_eq!(
			StorageError::QuotaExceeded { quota: 0 }.to_string(),
			"QuotaExceededError: storage quota of 0 items exceeded"
		);
		assert_eq!(
			StorageError::Disabled.to_string(),
			"SecurityError: storage is disabled"
		);
	}
}
