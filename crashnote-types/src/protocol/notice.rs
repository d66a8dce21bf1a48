//! The outbound notice shape.
//!
//! A `Notice` is what gets handed to the transport.  Its JSON form is the
//! payload accepted by the collector's notices endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Map, Value};

/// A line or column number.
///
/// Stack formats are loosely structured, so a position is either missing,
/// numeric, or some opaque text the origin emitted in its place.  A missing
/// position is kept distinct from a real zero.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineNo {
    /// No position was captured.  Serialized as an empty string.
    #[default]
    Empty,
    /// A numeric position.
    Number(u64),
    /// A non-numeric position, preserved as emitted.
    Text(String),
}

impl LineNo {
    /// Interprets a captured position.
    ///
    /// Blank input yields `Empty`, decimal digits yield `Number` and
    /// everything else is preserved as `Text`.
    pub fn parse(s: &str) -> LineNo {
        let s = s.trim();
        if s.is_empty() {
            LineNo::Empty
        } else if let Ok(number) = s.parse() {
            LineNo::Number(number)
        } else {
            LineNo::Text(s.to_string())
        }
    }

    /// Interprets an optional capture, `None` yielding `Empty`.
    pub fn from_capture(s: Option<&str>) -> LineNo {
        s.map_or(LineNo::Empty, LineNo::parse)
    }

    /// Returns `true` if no position was captured.
    pub fn is_empty(&self) -> bool {
        matches!(self, LineNo::Empty)
    }

    /// Returns the numeric position if there is one.
    pub fn as_number(&self) -> Option<u64> {
        match *self {
            LineNo::Number(number) => Some(number),
            _ => None,
        }
    }
}

impl From<u64> for LineNo {
    fn from(number: u64) -> LineNo {
        LineNo::Number(number)
    }
}

impl fmt::Display for LineNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineNo::Empty => Ok(()),
            LineNo::Number(number) => write!(f, "{}", number),
            LineNo::Text(text) => write!(f, "{}", text),
        }
    }
}

impl Serialize for LineNo {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            LineNo::Empty => serializer.serialize_str(""),
            LineNo::Number(number) => serializer.serialize_u64(*number),
            LineNo::Text(text) => serializer.serialize_str(text),
        }
    }
}

impl<'de> Deserialize<'de> for LineNo {
    fn deserialize<D>(deserializer: D) -> Result<LineNo, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(crate::utils::LineNoVisitor)
    }
}

/// Represents one stack location.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Frame {
    /// The function, method or component name.  May be empty.
    #[serde(default)]
    pub method: String,
    /// The source path or binary module name.  May be empty.
    #[serde(default)]
    pub file: String,
    /// The line number if known.
    #[serde(default, rename = "number")]
    pub line: LineNo,
    /// The column number, for formats that carry one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<LineNo>,
    /// The instruction address of a native symbol frame.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_address: Option<String>,
}

impl Frame {
    /// Returns `true` if the frame carries neither a method, a file nor a line.
    pub fn is_empty(&self) -> bool {
        self.method.is_empty() && self.file.is_empty() && self.line.is_empty()
    }
}

/// Identifies the raw format a [`Backtrace`] was parsed from.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// The component hierarchy reported by the UI layer (`in Component`).
    #[serde(rename = "ReactNativeComponentStack")]
    ComponentStack,
    /// The script engine's `stack` property.
    #[serde(rename = "JavaScriptErrorStack")]
    ScriptStack,
    /// A stack trace the native bridge delivered already split into fields.
    #[serde(rename = "ReactNativeIOSStackTrace")]
    NativeStack,
    /// The symbolicated native call stack.
    #[serde(rename = "iOSCallStack")]
    CallStack,
}

impl SourceKind {
    /// The name reported as the primary backtrace source.
    pub fn name(self) -> &'static str {
        match self {
            SourceKind::ComponentStack => "ReactNativeComponentStack",
            SourceKind::ScriptStack => "JavaScriptErrorStack",
            SourceKind::NativeStack => "ReactNativeIOSStackTrace",
            SourceKind::CallStack => "iOSCallStack",
        }
    }

    /// The key under which a demoted backtrace of this kind is stored in
    /// the notice details.
    pub fn detail_key(self) -> &'static str {
        match self {
            SourceKind::ComponentStack => "componentStack",
            SourceKind::ScriptStack => "javaScriptStackTrace",
            SourceKind::NativeStack => "reactNativeIOSStackTrace",
            SourceKind::CallStack => "iosCallStack",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An ordered list of frames parsed from one source.
///
/// An empty backtrace means a parse was attempted but nothing could be
/// recovered.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Backtrace {
    /// The format the frames were parsed from.
    pub source: SourceKind,
    /// The frames, in the order the origin emitted them.
    #[serde(default)]
    pub frames: Vec<Frame>,
}

impl Backtrace {
    /// Creates a backtrace from already parsed frames.
    pub fn new(source: SourceKind, frames: Vec<Frame>) -> Backtrace {
        Backtrace { source, frames }
    }

    /// Returns `true` if frames were recovered.
    pub fn is_available(&self) -> bool {
        !self.frames.is_empty()
    }

    /// The number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Returns `true` if no frames were recovered.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Describes the library that produced a notice.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Notifier {
    /// The name of the notifier package.
    pub name: String,
    /// Where the notifier lives.
    pub url: String,
    /// The version of the notifier package.
    pub version: String,
}

/// The error identity and primary backtrace of a notice.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct NoticeError {
    /// The error class, e.g. `React Native iOS NSRangeException`.
    pub class: String,
    /// The human readable error message.
    pub message: String,
    /// The frames of the primary backtrace.
    #[serde(default)]
    pub backtrace: Vec<Frame>,
}

/// Request information of a notice.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Request {
    /// The session context merged with per-call data.
    #[serde(default)]
    pub context: Map<String, Value>,
}

/// Server information of a notice.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Server {
    /// The deployment mode, e.g. `development` or `production`.
    pub environment_name: String,
}

/// The canonical normalized error record sent to the collector.
///
/// ```
/// use crashnote_types::protocol::{Notice, NoticeError};
///
/// let notice = Notice {
///     error: NoticeError {
///         class: "React Native iOS Error".into(),
///         message: "undefined is not an object".into(),
///         ..Default::default()
///     },
///     ..Default::default()
/// };
/// let json = serde_json::to_value(&notice).unwrap();
/// assert_eq!(json["error"]["class"], "React Native iOS Error");
/// assert!(json.get("details").is_none());
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Notice {
    /// The library that produced the notice.
    pub notifier: Notifier,
    /// Error identity and primary backtrace.
    pub error: NoticeError,
    /// The context snapshot.
    pub request: Request,
    /// The deployment environment.
    pub server: Server,
    /// Supplementary backtraces and origin metadata.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub details: Map<String, Value>,
}

impl Notice {
    /// The error class.
    pub fn class(&self) -> &str {
        &self.error.class
    }

    /// The error message.
    pub fn message(&self) -> &str {
        &self.error.message
    }

    /// The frames of the primary backtrace.
    pub fn backtrace(&self) -> &[Frame] {
        &self.error.backtrace
    }

    /// The context snapshot attached to the notice.
    pub fn context(&self) -> &Map<String, Value> {
        &self.request.context
    }

    /// Looks up a supplementary detail.
    pub fn detail(&self, key: &str) -> Option<&Value> {
        self.details.get(key)
    }

    /// Returns the name of the primary backtrace source, if any frames were
    /// recovered at all.
    pub fn primary_source(&self) -> Option<&str> {
        self.details
            .get("primaryBackTraceSource")
            .and_then(Value::as_str)
    }
}
