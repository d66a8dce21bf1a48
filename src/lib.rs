//! This crate reports crashes and errors of mobile apps that run a script
//! engine on top of iOS or Android.
//!
//! Errors reach the client from three places: the script engine's uncaught
//! error handler, the native exception bridges of the two platforms and
//! explicit [`notify`](Client::notify) calls.  Each one is normalized into a
//! notice carrying a class, a message, the most trustworthy backtrace that
//! could be recovered and the session context, and is posted to the
//! collector in the background.
//!
//! # Quickstart
//!
//! The most convenient way to use this library is the [`init`] function,
//! which creates a configured client with the default transport.
//!
//! The [`init`] function returns a guard that when dropped will flush
//! notices that were not yet sent.  It has a two second deadline for this
//! so shutdown of applications might slightly delay as a result of this.
//!
//! ```no_run
//! let guard = crashnote::init(crashnote::ClientOptions::default(), "my-api-key");
//! let client = guard.client();
//! client.set_context(serde_json::json!({"user_id": 42}));
//! client.notify("Something went wrong", ());
//! ```
//!
//! # Features
//!
//! Default features:
//!
//! * `transport`: Enables the default transport, which is currently
//!   `reqwest` with `native-tls`.
//!
//! Additional features:
//!
//! * `reqwest`: Enables the `reqwest` transport.
//! * `native-tls`: Uses `native-tls` for the `reqwest` transport.
//! * `rustls`: Uses `rustls` for the `reqwest` transport.  Needs
//!   `default-features = false` to drop `native-tls` completely.
//! * `test`: Enables testing support.

#![warn(missing_docs)]

mod defaults;
mod init;
pub mod transports;

// re-export from core
#[doc(inline)]
pub use crashnote_core::*;

// added public API
pub use crate::defaults::apply_defaults;
pub use crate::init::{init, ClientInitGuard};
