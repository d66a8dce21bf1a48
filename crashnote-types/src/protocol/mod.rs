//! This module exposes the types of the notice protocol.

#[cfg(feature = "protocol")]
mod bridge;
#[cfg(feature = "protocol")]
mod notice;

#[cfg(feature = "protocol")]
pub use self::bridge::*;
#[cfg(feature = "protocol")]
pub use self::notice::*;

/// An arbitrary (JSON) value.
pub mod value {
    pub use serde_json::value::{from_value, to_value, Map, Number, Value};
}

/// An arbitrary (JSON) value.
pub use self::value::Value;

/// The map type used for context and details.
pub use self::value::Map;
