use crashnote::test::with_captured_notices_options;
use crashnote::{ClientOptions, Platform, VERSION};
use serde_json::json;

#[test]
fn test_notice_wire_format() {
    let notices = with_captured_notices_options(
        |client| {
            client.set_context(json!({"user_id": 42}));
            client.handle_script_error(
                &json!({
                    "message": "boom",
                    "componentStack": "\n    in Button (at App.js:12)",
                    "stack": "onPress@App.js:20:3\nforEach@[native code]",
                }),
                true,
            );
        },
        ClientOptions {
            platform: Platform::Ios,
            environment: Some("production".into()),
            ..Default::default()
        },
    );

    let payload = serde_json::to_value(&notices[0]).unwrap();
    assert_eq!(
        payload,
        json!({
            "notifier": {
                "name": "crashnote",
                "url": payload["notifier"]["url"],
                "version": VERSION,
            },
            "error": {
                "class": "React Native iOS Error",
                "message": "boom",
                "backtrace": [
                    {"method": "Button", "file": "App.js", "number": 12},
                ],
            },
            "request": {
                "context": {"user_id": 42},
            },
            "server": {
                "environment_name": "production",
            },
            "details": {
                "primaryBackTraceSource": "ReactNativeComponentStack",
                "initialHandler": "Global JavaScript Error Handler",
                "isFatal": true,
                "javaScriptStackTrace": [
                    {"method": "onPress", "file": "App.js", "number": 20, "column": 3},
                    {"method": "forEach", "file": "[native code]", "number": "", "column": ""},
                ],
            },
        })
    );
}

#[test]
fn test_notice_roundtrips_through_json() {
    let notices = with_captured_notices_options(
        |client| {
            client.handle_native_exception(&json!({
                "type": "java.lang.OutOfMemoryError",
                "stackTrace": [{"class": "a.B", "method": "c", "file": "B.java", "line": "native"}],
            }));
        },
        ClientOptions {
            platform: Platform::Android,
            ..Default::default()
        },
    );
    let payload = serde_json::to_string(&notices[0]).unwrap();
    let parsed: crashnote::protocol::Notice = serde_json::from_str(&payload).unwrap();
    assert_eq!(parsed, notices[0]);
    assert_eq!(parsed.backtrace()[0].line.to_string(), "native");
}
