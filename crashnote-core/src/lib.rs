//! This crate provides the core of the crashnote client.
//!
//! It receives errors from the script engine, from the native exception
//! bridges of iOS and Android, and from explicit `notify` calls.  Each error
//! is normalized into a [`Notice`](protocol::Notice): its class and message
//! are derived from the origin, the most trustworthy of the available
//! backtraces becomes the primary one and the rest are kept as details.
//!
//! Notices are handed to a [`Transport`], which is created from the
//! [`TransportFactory`] in the [`ClientOptions`] once the [`Client`] has been
//! configured with an API key.  The `crashnote` crate provides the HTTP
//! transport and the usual entry point, `crashnote::init`.
//!
//! # Examples
//!
//! ```
//! use crashnote_core::test::with_captured_notices;
//!
//! let notices = with_captured_notices(|client| {
//!     client.set_context(serde_json::json!({"user_id": 42}));
//!     client.handle_script_error(
//!         &serde_json::json!({
//!             "message": "undefined is not a function",
//!             "stack": "onPress@App.js:12:5",
//!         }),
//!         true,
//!     );
//! });
//! assert_eq!(notices[0].backtrace()[0].method, "onPress");
//! assert_eq!(notices[0].context()["user_id"], 42);
//! ```
//!
//! # Feature Flags
//!
//! - `test`: Enables the [`test`] module with a capturing transport.

#![warn(missing_docs)]

// macros; these need to be first to be used by other modules
#[macro_use]
mod macros;

mod assemble;
mod client;
mod clientoptions;
mod constants;
mod context;
mod descriptor;
mod error;
mod integration;
mod transport;

pub use crate::assemble::{assemble, split_localized_description, CALL_STACK_MARKER};
pub use crate::client::Client;
pub use crate::clientoptions::{BeforeCallback, ClientOptions, Platform};
pub use crate::constants::{DEFAULT_ENDPOINT, NOTIFIER_NAME, VERSION};
pub use crate::context::Context;
pub use crate::descriptor::{ErrorDescriptor, ManualError, ScriptError};
pub use crate::error::{manual_error_from_std_error, parse_type_from_debug, CaptureError};
pub use crate::integration::Integration;
pub use crate::transport::{Transport, TransportFactory};


#[doc(hidden)]
pub use log as __log;

// public api from other crates
pub use crashnote_backtrace as backtrace;
pub use crashnote_types as types;
pub use crashnote_types::protocol;
