use serde_json::{Map, Value};

use crate::backtrace::Origin;
use crate::protocol::{AndroidException, IosException};
use crate::{CaptureError, Platform};

/// The handler name recorded for errors from the script engine.
pub const DEFAULT_SCRIPT_HANDLER: &str = "Global JavaScript Error Handler";

/// The handler name recorded for `notify` calls.
pub const MANUAL_HANDLER: &str = "notify";

/// An error thrown inside the script engine.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScriptError {
    /// The error object as the engine reported it.
    ///
    /// Recognized fields are `message`, `stack` and `componentStack`.  A
    /// bare string is taken as the message.
    pub error: Value,
    /// The handler that observed the error.
    pub initial_handler: Option<String>,
    /// Whether the error terminated the application.
    pub is_fatal: bool,
}

/// An error reported explicitly through `notify`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ManualError {
    /// The error fields, `name`, `message`, `stack` and `componentStack`.
    pub error: Map<String, Value>,
    /// Extra values merged over the context of this one notice.
    pub additional_data: Map<String, Value>,
}

impl ManualError {
    /// Validates the arguments of a `notify` call.
    ///
    /// The error is rejected when it is null, `false`, zero, a blank string
    /// or an empty object or array.  A string error becomes the message.  The
    /// additional data may be an object, which is merged into the notice's
    /// context, or a non-blank string stored under `additionalData`.
    /// Anything else is ignored.
    pub fn new(error: Value, additional_data: Value) -> Result<ManualError, CaptureError> {
        let error = match error {
            Value::Null => return Err(CaptureError::InvalidError("null")),
            Value::Bool(false) => return Err(CaptureError::InvalidError("false")),
            Value::Number(ref n) if n.as_f64() == Some(0.0) => {
                return Err(CaptureError::InvalidError("zero"))
            }
            Value::String(ref s) if s.trim().is_empty() => {
                return Err(CaptureError::InvalidError("blank string"))
            }
            Value::Object(ref map) if map.is_empty() => {
                return Err(CaptureError::InvalidError("empty object"))
            }
            Value::Array(ref items) if items.is_empty() => {
                return Err(CaptureError::InvalidError("empty array"))
            }
            Value::String(s) => {
                let mut map = Map::new();
                map.insert("message".into(), s.trim().into());
                map
            }
            Value::Object(map) => map,
            _ => Map::new(),
        };

        let additional_data = match additional_data {
            Value::Object(map) => map,
            Value::String(s) if !s.trim().is_empty() => {
                let mut map = Map::new();
                map.insert("additionalData".into(), s.trim().into());
                map
            }
            _ => Map::new(),
        };

        Ok(ManualError {
            error,
            additional_data,
        })
    }
}

/// Returns `true` for the values that mean "no error": null, `false`, zero
/// and the empty string.
pub(crate) fn is_empty_error(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Everything the capture layer knows about one error, by origin.
#[derive(Clone, Debug, PartialEq)]
pub enum ErrorDescriptor {
    /// An uncaught error from the script engine.
    Script(ScriptError),
    /// A native exception raised on iOS.
    Ios(IosException),
    /// A native exception raised on Android.
    Android(AndroidException),
    /// An explicit `notify` call.
    Manual(ManualError),
}

impl ErrorDescriptor {
    /// Decodes a native exception event emitted by the platform bridge.
    pub fn from_native_event(
        platform: Platform,
        event: &Value,
    ) -> Result<ErrorDescriptor, CaptureError> {
        Ok(match platform {
            Platform::Ios => ErrorDescriptor::Ios(serde_json::from_value::<IosException>(event.clone())?),
            Platform::Android => {
                ErrorDescriptor::Android(serde_json::from_value::<AndroidException>(event.clone())?)
            },
        })
    }

    /// Where the error was observed.
    pub fn origin(&self) -> Origin {
        match self {
            ErrorDescriptor::Script(_) => Origin::Script,
            ErrorDescriptor::Ios(_) => Origin::Ios,
            ErrorDescriptor::Android(_) => Origin::Android,
            ErrorDescriptor::Manual(_) => Origin::Manual,
        }
    }
}
