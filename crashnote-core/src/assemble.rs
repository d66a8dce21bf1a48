//! Turns error descriptors into notices.
//!
//! Every origin collects its candidate backtraces, hands them to
//! [`select_backtrace`] and derives class and message from its own fields.
//! The shared tail in [`finish_notice`] records the selection in the
//! notice's details and fills in defaults.

use serde_json::{Map, Value};

use crate::backtrace::{
    frames_from_android_stack, frames_from_native_stack, non_blank, or_empty, parse_call_stack,
    parse_component_stack, parse_script_stack, select_backtrace, Origin, Selection,
};
use crate::constants::{NOTIFIER, UNKNOWN_ERROR_MESSAGE, UNKNOWN_MANUAL_MESSAGE};
use crate::descriptor::{ErrorDescriptor, ManualError, ScriptError};
use crate::descriptor::{DEFAULT_SCRIPT_HANDLER, MANUAL_HANDLER};
use crate::protocol::{
    AndroidException, Backtrace, IosException, Notice, NoticeError, Request, Server, SourceKind,
};
use crate::ClientOptions;

/// Separates the message from the call stack in an iOS localized description.
pub const CALL_STACK_MARKER: &str = "callstack: (\n";

/// The details key naming the primary backtrace source.
pub const PRIMARY_SOURCE_KEY: &str = "primaryBackTraceSource";

/// Assembles the notice for an error.
///
/// `context` is the snapshot of the session context taken for this notice;
/// manual errors merge their additional data over it.
pub fn assemble(
    descriptor: &ErrorDescriptor,
    options: &ClientOptions,
    context: Map<String, Value>,
) -> Notice {
    match descriptor {
        ErrorDescriptor::Script(err) => notice_from_script_error(err, options, context),
        ErrorDescriptor::Ios(exc) => notice_from_ios_exception(exc, options, context),
        ErrorDescriptor::Android(exc) => notice_from_android_exception(exc, options, context),
        ErrorDescriptor::Manual(err) => notice_from_manual_error(err, options, context),
    }
}

fn notice_from_script_error(
    err: &ScriptError,
    options: &ClientOptions,
    context: Map<String, Value>,
) -> Notice {
    let class = format!("{} {} Error", options.runtime_name, options.platform);
    let message = script_error_message(&err.error);

    let mut details = Map::new();
    details.insert(
        "initialHandler".into(),
        err.initial_handler
            .as_deref()
            .unwrap_or(DEFAULT_SCRIPT_HANDLER)
            .into(),
    );
    details.insert("isFatal".into(), err.is_fatal.into());

    let selection = select_backtrace(Origin::Script, script_backtraces(&err.error));
    finish_notice(options, class, message, selection, context, details)
}

fn notice_from_ios_exception(
    exc: &IosException,
    options: &ClientOptions,
    context: Map<String, Value>,
) -> Notice {
    let class = format!(
        "{} iOS {}",
        options.runtime_name,
        non_blank(exc.ty.as_deref()).unwrap_or("Error")
    );
    let message = ios_exception_message(exc);

    let description = exc.localized_description.as_deref().unwrap_or_default();
    let call_stack_text = split_localized_description(description)
        .1
        .unwrap_or(description);
    let mut candidates = vec![Backtrace::new(
        SourceKind::ComponentStack,
        parse_component_stack(description),
    )];
    if let Some(ref stack) = exc.react_native_stack_trace {
        candidates.push(Backtrace::new(
            SourceKind::NativeStack,
            frames_from_native_stack(stack),
        ));
    }
    candidates.push(Backtrace::new(
        SourceKind::CallStack,
        parse_call_stack(Some(call_stack_text), &exc.call_stack_symbols),
    ));

    let mut details = Map::new();
    details.insert("errorDomain".into(), or_empty(exc.error_domain.as_deref()).into());
    details.insert("initialHandler".into(), or_empty(exc.initial_handler.as_deref()).into());
    details.insert(
        "userInfo".into(),
        Value::Object(exc.user_info.clone().unwrap_or_default()),
    );
    details.insert("architecture".into(), or_empty(exc.architecture.as_deref()).into());

    let selection = select_backtrace(Origin::Ios, candidates);
    finish_notice(options, class, message, selection, context, details)
}

fn notice_from_android_exception(
    exc: &AndroidException,
    options: &ClientOptions,
    context: Map<String, Value>,
) -> Notice {
    let class = format!(
        "{} Android {}",
        options.runtime_name,
        non_blank(exc.ty.as_deref()).unwrap_or("Error")
    );
    let message = non_blank(exc.message.as_deref())
        .unwrap_or_default()
        .to_string();

    let candidates = exc
        .stack_trace
        .as_deref()
        .map(|stack| Backtrace::new(SourceKind::NativeStack, frames_from_android_stack(stack)))
        .into_iter()
        .collect();

    let selection = select_backtrace(Origin::Android, candidates);
    let mut notice = finish_notice(options, class, message, selection, context, Map::new());
    // Android has a single stack source, so its notices carry no details.
    notice.details.remove(PRIMARY_SOURCE_KEY);
    notice
}

fn notice_from_manual_error(
    err: &ManualError,
    options: &ClientOptions,
    mut context: Map<String, Value>,
) -> Notice {
    let name = err
        .error
        .get("name")
        .and_then(Value::as_str)
        .and_then(|name| non_blank(Some(name)))
        .unwrap_or("Error via notify()");
    let class = format!("{} {} {}", options.runtime_name, options.platform, name);
    let message = err
        .error
        .get("message")
        .and_then(Value::as_str)
        .and_then(|message| non_blank(Some(message)))
        .unwrap_or(UNKNOWN_MANUAL_MESSAGE)
        .to_string();

    context.extend(
        err.additional_data
            .iter()
            .map(|(k, v)| (k.clone(), v.clone())),
    );

    let mut details = Map::new();
    details.insert("initialHandler".into(), MANUAL_HANDLER.into());

    let selection = select_backtrace(Origin::Manual, backtraces_from_fields(&err.error));
    finish_notice(options, class, message, selection, context, details)
}

fn finish_notice(
    options: &ClientOptions,
    class: String,
    message: String,
    selection: Selection,
    context: Map<String, Value>,
    mut details: Map<String, Value>,
) -> Notice {
    if let Some(source) = selection.primary_source() {
        details.insert(PRIMARY_SOURCE_KEY.into(), source.name().into());
    }
    for backtrace in &selection.supplementary {
        if let Ok(frames) = serde_json::to_value(&backtrace.frames) {
            details.insert(backtrace.source.detail_key().into(), frames);
        }
    }

    let class = if class.trim().is_empty() {
        format!("{} Error", options.runtime_name)
    } else {
        class
    };
    let message = if message.trim().is_empty() {
        UNKNOWN_ERROR_MESSAGE.to_string()
    } else {
        message
    };

    Notice {
        notifier: NOTIFIER.clone(),
        error: NoticeError {
            class,
            message,
            backtrace: selection.into_primary_frames(),
        },
        request: Request { context },
        server: Server {
            environment_name: options.environment_name().into_owned(),
        },
        details,
    }
}

/// The message of a script error.
///
/// Objects contribute their `message` field and strings their trimmed
/// text.  Other values carry no message.
fn script_error_message(error: &Value) -> String {
    match error {
        Value::Object(fields) => fields
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        Value::String(s) => s.trim().to_string(),
        _ => String::new(),
    }
}

fn script_backtraces(error: &Value) -> Vec<Backtrace> {
    match error {
        Value::Object(fields) => backtraces_from_fields(fields),
        _ => vec![],
    }
}

/// Parses the `componentStack` and `stack` fields that are present.
fn backtraces_from_fields(fields: &Map<String, Value>) -> Vec<Backtrace> {
    let mut candidates = vec![];
    if let Some(stack) = fields.get("componentStack") {
        candidates.push(Backtrace::new(
            SourceKind::ComponentStack,
            parse_component_stack(stack.as_str().unwrap_or_default()),
        ));
    }
    if let Some(stack) = fields.get("stack") {
        candidates.push(Backtrace::new(
            SourceKind::ScriptStack,
            parse_script_stack(stack.as_str().unwrap_or_default()),
        ));
    }
    candidates
}

/// Splits an iOS localized description into message and call stack text.
///
/// With the [`CALL_STACK_MARKER`] present, the message is the trimmed text
/// before it and the call stack everything after it.  Otherwise the message
/// is the trimmed first line and there is no call stack text.
pub fn split_localized_description(description: &str) -> (&str, Option<&str>) {
    match description.find(CALL_STACK_MARKER) {
        Some(idx) => (
            description[..idx].trim(),
            Some(&description[idx + CALL_STACK_MARKER.len()..]),
        ),
        None => (description.lines().next().unwrap_or_default().trim(), None),
    }
}

fn ios_exception_message(exc: &IosException) -> String {
    if let Some(description) = exc.localized_description.as_deref() {
        if !description.is_empty() {
            return split_localized_description(description).0.to_string();
        }
    }
    match (non_blank(exc.name.as_deref()), non_blank(exc.reason.as_deref())) {
        (Some(name), Some(reason)) => format!("{} : {}", name, reason),
        (Some(part), None) | (None, Some(part)) => part.to_string(),
        (None, None) => String::new(),
    }
}
