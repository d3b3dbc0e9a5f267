//! Error types for Comprar
//!
//! Centralized error handling using thiserror. `StoreError` covers failures of
//! the key-value layer; `ComprarError` tags them with the items operation that
//! triggered them.

use std::fmt;

use thiserror::Error;

/// Failures raised by a key-value store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// SQLite error
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Backend-specific failure (poisoned lock, aborted task, ...)
    #[error("Backend error: {0}")]
    Backend(String),
}

/// The items operation an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    LoadAll,
    SaveAll,
    GetByStatus,
    Add,
    Remove,
    ToggleStatus,
    Clear,
    Counts,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::LoadAll => "load_all",
            Operation::SaveAll => "save_all",
            Operation::GetByStatus => "get_by_status",
            Operation::Add => "add",
            Operation::Remove => "remove",
            Operation::ToggleStatus => "toggle_status",
            Operation::Clear => "clear",
            Operation::Counts => "counts",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All error types that can occur in Comprar
#[derive(Debug, Error)]
pub enum ComprarError {
    /// Reading or decoding the items blob failed
    #[error("{op}: failed to read items: {source}")]
    StorageRead {
        op: Operation,
        #[source]
        source: StoreError,
    },

    /// Encoding or writing the items blob failed
    #[error("{op}: failed to save items: {source}")]
    StorageWrite {
        op: Operation,
        #[source]
        source: StoreError,
    },

    /// Removing the items key failed
    #[error("{op}: failed to clear items: {source}")]
    StorageClear {
        op: Operation,
        #[source]
        source: StoreError,
    },

    /// Item description was empty or whitespace
    #[error("Item description must not be empty")]
    EmptyDescription,

    /// Unrecognized status text
    #[error("Invalid status: {0} (expected pending or done)")]
    InvalidStatus(String),
}

impl ComprarError {
    /// The operation that failed, for storage errors.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            ComprarError::StorageRead { op, .. }
            | ComprarError::StorageWrite { op, .. }
            | ComprarError::StorageClear { op, .. } => Some(*op),
            _ => None,
        }
    }

    /// Short user-facing message for the action that failed.
    pub fn notice(&self) -> &'static str {
        match self {
            ComprarError::EmptyDescription => "Enter a description to add.",
            ComprarError::InvalidStatus(_) => "Unknown status filter.",
            _ => match self.operation() {
                Some(Operation::Add) => "Could not add the item.",
                Some(Operation::Remove) => "Could not remove the item.",
                Some(Operation::ToggleStatus) => "Could not update the status.",
                Some(Operation::Clear) => "Could not remove all items.",
                _ => "Could not load the items.",
            },
        }
    }
}

/// Result type alias for Comprar operations
pub type Result<T> = std::result::Result<T, ComprarError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn backend(msg: &str) -> StoreError {
        StoreError::Backend(msg.to_string())
    }

    #[test]
    fn test_storage_read_error_display() {
        let err = ComprarError::StorageRead {
            op: Operation::GetByStatus,
            source: backend("disk gone"),
        };
        assert_eq!(
            err.to_string(),
            "get_by_status: failed to read items: Backend error: disk gone"
        );
    }

    #[test]
    fn test_storage_write_error_display() {
        let err = ComprarError::StorageWrite {
            op: Operation::Add,
            source: backend("full"),
        };
        assert_eq!(err.to_string(), "add: failed to save items: Backend error: full");
    }

    #[test]
    fn test_storage_clear_error_display() {
        let err = ComprarError::StorageClear {
            op: Operation::Clear,
            source: backend("locked"),
        };
        assert_eq!(err.to_string(), "clear: failed to clear items: Backend error: locked");
    }

    #[test]
    fn test_source_is_preserved() {
        use std::error::Error as _;

        let err = ComprarError::StorageRead {
            op: Operation::LoadAll,
            source: backend("x"),
        };
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "Backend error: x");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: StoreError = io_err.into();
        assert!(matches!(err, StoreError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: StoreError = json_err.into();
        assert!(matches!(err, StoreError::Json(_)));
    }

    #[test]
    fn test_operation_tag() {
        let err = ComprarError::StorageWrite {
            op: Operation::ToggleStatus,
            source: backend("x"),
        };
        assert_eq!(err.operation(), Some(Operation::ToggleStatus));
        assert_eq!(ComprarError::EmptyDescription.operation(), None);
    }

    #[test]
    fn test_notice_follows_operation() {
        let read = ComprarError::StorageRead {
            op: Operation::Remove,
            source: backend("x"),
        };
        assert_eq!(read.notice(), "Could not remove the item.");

        let clear = ComprarError::StorageClear {
            op: Operation::Clear,
            source: backend("x"),
        };
        assert_eq!(clear.notice(), "Could not remove all items.");

        let list = ComprarError::StorageRead {
            op: Operation::GetByStatus,
            source: backend("x"),
        };
        assert_eq!(list.notice(), "Could not load the items.");
        assert_eq!(ComprarError::EmptyDescription.notice(), "Enter a description to add.");
    }
}
