use std::fmt;

use crashnote::test::{with_captured_notices, with_captured_notices_options};
use crashnote::{ClientOptions, Platform};
use rstest::rstest;
use serde_json::{json, Value};

#[test]
fn test_notify_with_error_object() {
    let notices = with_captured_notices_options(
        |client| {
            client.notify(
                json!({
                    "name": "PaymentError",
                    "message": "card declined",
                    "stack": "submitPayment@App.js:210:11\nonPress@App.js:98:4",
                }),
                json!({"order_id": "A-1001"}),
            );
        },
        ClientOptions {
            platform: Platform::Ios,
            ..Default::default()
        },
    );
    assert_eq!(notices.len(), 1);
    let notice = &notices[0];
    assert_eq!(notice.class(), "React Native iOS PaymentError");
    assert_eq!(notice.message(), "card declined");
    assert_eq!(notice.backtrace()[0].method, "submitPayment");
    assert_eq!(notice.context()["order_id"], "A-1001");
    assert_eq!(notice.detail("initialHandler"), Some(&json!("notify")));
}

#[rstest]
#[case(Value::Null)]
#[case(json!(""))]
#[case(json!("  \t "))]
#[case(json!(false))]
#[case(json!({}))]
#[case(json!([]))]
fn test_notify_rejects_unusable_errors(#[case] error: Value) {
    let notices = with_captured_notices(|client| {
        client.notify(error, json!({"ignored": true}));
    });
    assert!(notices.is_empty());
}

#[test]
fn test_notify_defaults() {
    let notices = with_captured_notices_options(
        |client| {
            client.notify(json!({"code": 500}), ());
        },
        ClientOptions {
            platform: Platform::Android,
            ..Default::default()
        },
    );
    assert_eq!(notices[0].class(), "React Native Android Error via notify()");
    assert_eq!(notices[0].message(), "Unknown error message");
    assert_eq!(notices[0].primary_source(), None);
}

#[derive(Debug)]
struct SyncFailed {
    records: usize,
}

impl fmt::Display for SyncFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to sync {} records", self.records)
    }
}

impl std::error::Error for SyncFailed {}

#[test]
fn test_notify_rust_error() {
    let notices = with_captured_notices_options(
        |client| {
            client.notify_error(&SyncFailed { records: 3 });
        },
        ClientOptions {
            runtime_name: "Hermes".into(),
            platform: Platform::Android,
            ..Default::default()
        },
    );
    assert_eq!(notices[0].class(), "Hermes Android SyncFailed");
    assert_eq!(notices[0].message(), "failed to sync 3 records");
}

#[test]
fn test_context_follows_session() {
    let notices = with_captured_notices(|client| {
        client.set_context(json!({"user_id": 7, "screen": "home"}));
        client.notify("first", ());
        client.set_context(json!({"screen": "settings"}));
        client.notify("second", "toggled dark mode");
        client.reset_context(json!({"user_id": 8}));
        client.notify("third", json!({"user_id": 9}));
        client.notify("fourth", ());
    });
    let contexts: Vec<Value> = notices
        .iter()
        .map(|notice| Value::Object(notice.context().clone()))
        .collect();
    assert_eq!(
        contexts,
        vec![
            json!({"user_id": 7, "screen": "home"}),
            json!({"user_id": 7, "screen": "settings", "additionalData": "toggled dark mode"}),
            json!({"user_id": 9}),
            json!({"user_id": 8}),
        ]
    );
}
