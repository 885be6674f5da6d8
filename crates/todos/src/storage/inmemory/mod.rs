//! In-memory storage backend for testing.
//!
//! Stores records in a `BTreeMap` wrapped in `Arc<RwLock<_>>`. Follows the
//! same missing-key rules as the DynamoDB store: updates fail with
//! `NotFound`, deletes succeed.
//!
//! # Example
//!
//! ```rust,ignore
//! use todos::storage::InMemoryStore;
//!
//! let store = InMemoryStore::new();
//! // Use store for testing...
//! ```

mod repository;

pub use repository::InMemoryStore;
