//! DynamoDB storage backend implementation.
//!
//! Table layout: partition key `userId`, sort key `todoId`, plus a global
//! secondary index keyed by `todoId` (sort key `createdAt`) projecting all
//! attributes.

mod conversions;
mod error;
mod keys;
mod repository;

pub use repository::DynamoDbStore;
