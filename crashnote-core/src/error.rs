use std::error::Error;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::descriptor::ManualError;

/// Reasons a capture can not produce a notice.
///
/// The public capture entry points never return these; they log them and
/// drop the error instead.  The `try_*` builders on the client expose them.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// The client has not been given an API key yet.
    #[error("crashnote has not been configured with an API key")]
    NotConfigured,
    /// The API key passed to `configure` was blank.
    #[error("the API key must not be empty")]
    InvalidApiKey,
    /// The value passed to `notify` can not describe an error.
    #[error("notify() was called without a usable error ({0})")]
    InvalidError(&'static str),
    /// A native exception event did not have the expected shape.
    #[error("malformed native exception event")]
    MalformedEvent(#[from] serde_json::Error),
}

/// Parse the types name from `Debug` output.
///
/// # Examples
///
/// ```
/// use crashnote_core::parse_type_from_debug;
///
/// let err = "NaN".parse::<usize>().unwrap_err();
/// assert_eq!(parse_type_from_debug(&err), "ParseIntError");
/// ```
pub fn parse_type_from_debug(d: &dyn std::fmt::Debug) -> String {
    format!("{:?}", d)
        .split(&[' ', '(', '{', '\r', '\n'][..])
        .next()
        .unwrap_or_default()
        .trim()
        .to_owned()
}

/// Builds the manual error for a Rust [`Error`].
///
/// The error's type becomes the name and its `Display` output the message.
/// The messages of the error's sources are listed under `causes` in the
/// additional data.
pub fn manual_error_from_std_error<E>(err: &E) -> ManualError
where
    E: Error + ?Sized,
{
    let mut error = Map::new();
    error.insert("name".into(), parse_type_from_debug(&err).into());
    error.insert("message".into(), err.to_string().into());

    let causes: Vec<Value> = std::iter::successors(err.source(), |&e| e.source())
        .map(|e| Value::String(e.to_string()))
        .collect();
    let mut additional_data = Map::new();
    if !causes.is_empty() {
        additional_data.insert("causes".into(), Value::Array(causes));
    }

    ManualError {
        error,
        additional_data,
    }
}
