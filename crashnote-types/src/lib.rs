//! This crate provides common types for working with the crashnote notice
//! protocol.  It's used by the parsers in `crashnote-backtrace` as well as by
//! the client in `crashnote-core`.
//!
//! Most of the types in this crate are serializable.  The types in the
//! `protocol` module are only serializable to JSON as that is the only format
//! the collector accepts.
//!
//! ## Contents
//!
//! The crate provides the outbound notice shape (`Notice`, `Frame`,
//! `Backtrace`, ...) as well as the inbound payloads that the native
//! exception bridges of the host runtime deliver.
//!
//! ## API Concepts
//!
//! Most types are directly serializable or deserializable and try to implement
//! the `Default` type.  This means that objects can be created conveniently
//! and missing attributes can be filled in:
//!
//! ```rust
//! use crashnote_types::protocol::{Frame, LineNo};
//!
//! let frame = Frame {
//!     method: "render".to_string(),
//!     file: "App.js".to_string(),
//!     line: LineNo::Number(42),
//!     ..Default::default()
//! };
//! assert!(!frame.is_empty());
//! ```
#![warn(missing_docs)]

#[cfg(feature = "protocol")]
mod utils;

pub mod protocol;
