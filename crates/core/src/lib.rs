//! Core types for the todos data-access layer.
//!
//! Pure data and functions only: record types, request payloads, the
//! repository error taxonomy and the capability traits that storage and
//! signing backends implement. No I/O happens in this crate.

pub mod attachment;
pub mod storage;
pub mod todo;
