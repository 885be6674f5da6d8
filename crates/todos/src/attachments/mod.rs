//! Attachment signer implementations.
//!
//! Concrete implementations of `todos_core::attachment::UploadSigner`.
//!
//! - `s3` (default): pre-signed S3 PUT URLs via `aws-sdk-s3`
//! - `inmemory` (default): deterministic URLs for tests and local runs

#[cfg(feature = "inmemory")]
mod fixed;
#[cfg(feature = "s3")]
mod s3;

#[cfg(feature = "inmemory")]
pub use fixed::FixedUrlSigner;
#[cfg(feature = "s3")]
pub use s3::S3Signer;
