//! Payloads delivered by the native exception bridges.
//!
//! The host runtime forwards native exceptions as JSON events.  These types
//! describe the shape of those events on each platform.  Every field is
//! optional since the bridges omit whatever the platform did not report.

use serde::{Deserialize, Serialize};

use super::{LineNo, Map, Value};

/// A structured frame of the runtime's own native stack trace (iOS).
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NativeFrame {
    /// The method name.
    #[serde(default)]
    pub method_name: Option<String>,
    /// The line number.
    #[serde(default)]
    pub line_number: LineNo,
    /// The source file.
    #[serde(default)]
    pub file: Option<String>,
    /// The column number.
    #[serde(default)]
    pub column: LineNo,
}

/// An exception raised on iOS.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IosException {
    /// The exception type, e.g. `NSRangeException`.
    #[serde(default, rename = "type")]
    pub ty: Option<String>,
    /// The exception name.
    #[serde(default)]
    pub name: Option<String>,
    /// The exception reason.
    #[serde(default)]
    pub reason: Option<String>,
    /// The localized description.  May embed a component stack and a
    /// symbolicated call stack after the message.
    #[serde(default)]
    pub localized_description: Option<String>,
    /// The symbolicated call stack, one frame per entry.
    #[serde(default)]
    pub call_stack_symbols: Vec<String>,
    /// The runtime's structured stack trace.
    #[serde(default)]
    pub react_native_stack_trace: Option<Vec<NativeFrame>>,
    /// The `NSError` domain.
    #[serde(default)]
    pub error_domain: Option<String>,
    /// Which native handler caught the exception.
    #[serde(default)]
    pub initial_handler: Option<String>,
    /// The `userInfo` dictionary.
    #[serde(default)]
    pub user_info: Option<Map<String, Value>>,
    /// The CPU architecture.
    #[serde(default)]
    pub architecture: Option<String>,
}

/// A frame of a Java/Kotlin stack trace.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct AndroidFrame {
    /// The declaring class.
    #[serde(default)]
    pub class: Option<String>,
    /// The method name.
    #[serde(default)]
    pub method: Option<String>,
    /// The source file.
    #[serde(default)]
    pub file: Option<String>,
    /// The line number.
    #[serde(default)]
    pub line: LineNo,
}

/// An exception raised on Android.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AndroidException {
    /// The exception class, e.g. `java.lang.NullPointerException`.
    #[serde(default, rename = "type")]
    pub ty: Option<String>,
    /// The exception message.
    #[serde(default)]
    pub message: Option<String>,
    /// The stack trace, innermost frame first.
    #[serde(default)]
    pub stack_trace: Option<Vec<AndroidFrame>>,
}
