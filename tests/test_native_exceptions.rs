use crashnote::test::with_captured_notices_options;
use crashnote::{ClientOptions, Platform};
use serde_json::json;

fn options(platform: Platform) -> ClientOptions {
    ClientOptions {
        platform,
        ..Default::default()
    }
}

#[test]
fn test_ios_exception_from_bridge() {
    let notices = with_captured_notices_options(
        |client| {
            client.handle_native_exception(&json!({
                "type": "NSInvalidArgumentException",
                "name": "NSInvalidArgumentException",
                "reason": "-[__NSCFNumber length]: unrecognized selector",
                "localizedDescription": "-[__NSCFNumber length]: unrecognized selector sent to instance 0xb000000000000003 callstack: (\n\t0   CoreFoundation                      0x00000001804f0d7c __exceptionPreprocess + 176\n\t1   libobjc.A.dylib                     0x0000000180093ee4 objc_exception_throw + 56\n\t2   MyApp                               0x0000000102a4c1b0 -[RNLabel setText:] + 120 (RNLabel.m:42)\n)",
                "callStackSymbols": [
                    "0   CoreFoundation   0x00000001804f0d7c __exceptionPreprocess + 176"
                ],
                "errorDomain": "RCTErrorDomain",
                "initialHandler": "RCTFatalHandler",
                "userInfo": {"NSLocalizedFailureReason": "bad argument"},
                "architecture": "arm64",
            }));
        },
        options(Platform::Ios),
    );
    assert_eq!(notices.len(), 1);
    let notice = &notices[0];

    assert_eq!(notice.class(), "React Native iOS NSInvalidArgumentException");
    assert_eq!(
        notice.message(),
        "-[__NSCFNumber length]: unrecognized selector sent to instance 0xb000000000000003"
    );
    assert_eq!(notice.primary_source(), Some("iOSCallStack"));
    assert_eq!(notice.backtrace().len(), 3);
    assert_eq!(notice.backtrace()[2].method, "-[RNLabel setText:]");
    assert_eq!(notice.backtrace()[2].file, "RNLabel.m");
    assert_eq!(notice.backtrace()[2].line.as_number(), Some(42));
    assert_eq!(notice.detail("errorDomain"), Some(&json!("RCTErrorDomain")));
    assert_eq!(notice.detail("initialHandler"), Some(&json!("RCTFatalHandler")));
    assert_eq!(
        notice.detail("userInfo"),
        Some(&json!({"NSLocalizedFailureReason": "bad argument"}))
    );
    assert_eq!(notice.detail("architecture"), Some(&json!("arm64")));
}

#[test]
fn test_ios_structured_stack_wins_over_call_stack() {
    let notices = with_captured_notices_options(
        |client| {
            client.handle_native_exception(&json!({
                "name": "RCTFatalException: Unhandled JS Exception",
                "reason": "Cannot read property 'id' of undefined",
                "callStackSymbols": [
                    "0   CoreFoundation   0x00000001804f0d7c __exceptionPreprocess + 176",
                    "1   libobjc.A.dylib  0x0000000180093ee4 objc_exception_throw + 56"
                ],
                "reactNativeStackTrace": [
                    {"methodName": "loadUser", "lineNumber": 120, "file": "main.jsbundle", "column": 14},
                    {"methodName": "componentDidMount", "lineNumber": "88", "file": "main.jsbundle", "column": null}
                ],
            }));
        },
        options(Platform::Ios),
    );
    let notice = &notices[0];
    assert_eq!(notice.class(), "React Native iOS Error");
    assert_eq!(
        notice.message(),
        "RCTFatalException: Unhandled JS Exception : Cannot read property 'id' of undefined"
    );
    assert_eq!(notice.primary_source(), Some("ReactNativeIOSStackTrace"));
    assert_eq!(notice.backtrace()[0].method, "loadUser");
    assert_eq!(notice.backtrace()[1].line.as_number(), Some(88));
    let call_stack = notice.detail("iosCallStack").unwrap().as_array().unwrap();
    assert_eq!(call_stack.len(), 2);
    assert_eq!(call_stack[1]["file"], "libobjc.A.dylib");
}

#[test]
fn test_ios_component_stack_wins_over_native_stacks() {
    let notices = with_captured_notices_options(
        |client| {
            client.handle_native_exception(&json!({
                "type": "RCTFatalException",
                "localizedDescription": "Render failed\n    in ProfileCard (at Profile.js:41)\n    in App\ncallstack: (\n0   CoreFoundation   0x00000001804f0d7c __exceptionPreprocess + 176\n)",
                "reactNativeStackTrace": [
                    {"methodName": "renderProfile", "lineNumber": 41, "file": "main.jsbundle", "column": 7}
                ],
            }));
        },
        options(Platform::Ios),
    );
    let notice = &notices[0];
    assert_eq!(notice.primary_source(), Some("ReactNativeComponentStack"));
    assert_eq!(notice.backtrace()[0].method, "ProfileCard");

    let mut keys: Vec<&str> = notice.details.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        [
            "architecture",
            "errorDomain",
            "initialHandler",
            "iosCallStack",
            "primaryBackTraceSource",
            "reactNativeIOSStackTrace",
            "userInfo",
        ]
    );
    assert_eq!(
        notice.detail("reactNativeIOSStackTrace").unwrap()[0]["method"],
        "renderProfile"
    );
    assert_eq!(
        notice.detail("iosCallStack").unwrap()[0]["method"],
        "__exceptionPreprocess"
    );
}

#[test]
fn test_android_exception_from_bridge() {
    let notices = with_captured_notices_options(
        |client| {
            client.handle_native_exception(&json!({
                "type": "java.lang.IllegalStateException",
                "message": "Fragment not attached to a context.",
                "stackTrace": [
                    {"class": "androidx.fragment.app.Fragment", "method": "requireContext", "file": "Fragment.java", "line": 900},
                    {"class": "com.example.ProfileFragment", "method": "onResume", "file": "ProfileFragment.kt", "line": 57},
                    {}
                ],
            }));
        },
        options(Platform::Android),
    );
    let notice = &notices[0];
    assert_eq!(
        notice.class(),
        "React Native Android java.lang.IllegalStateException"
    );
    assert_eq!(notice.message(), "Fragment not attached to a context.");
    assert_eq!(notice.primary_source(), None);
    assert!(notice.details.is_empty());
    assert_eq!(notice.backtrace().len(), 2);
    assert_eq!(
        notice.backtrace()[1].method,
        "com.example.ProfileFragment.onResume"
    );
}

#[test]
fn test_malformed_events_are_dropped() {
    let notices = with_captured_notices_options(
        |client| {
            client.handle_native_exception(&json!("not an event"));
            client.handle_native_exception(&json!({"stackTrace": {"class": "x"}}));
        },
        options(Platform::Android),
    );
    assert!(notices.is_empty());
}
