//! Storage backend implementations.
//!
//! Concrete implementations of `todos_core::storage::TodoStore`, selected
//! via feature flags.
//!
//! # Feature Flags
//!
//! - `dynamodb` (default): AWS DynamoDB backend using `aws-sdk-dynamodb`
//! - `inmemory` (default): `BTreeMap`-backed store for tests and local runs
//!
//! Both may be enabled at once; the caller picks one at construction time.

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(feature = "inmemory")]
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbStore;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryStore;
