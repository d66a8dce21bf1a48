use crashnote_types::protocol::{AndroidFrame, Frame, NativeFrame};

use crate::utils::{non_blank, or_empty};

/// Converts the runtime's structured iOS stack trace into frames.
///
/// Frames without method, file and line are dropped.
pub fn frames_from_native_stack(stack: &[NativeFrame]) -> Vec<Frame> {
    stack
        .iter()
        .map(|frame| Frame {
            method: or_empty(frame.method_name.as_deref()),
            file: or_empty(frame.file.as_deref()),
            line: frame.line_number.clone(),
            column: Some(frame.column.clone()),
            stack_address: None,
        })
        .filter(|frame| !frame.is_empty())
        .collect()
}

/// Converts an Android stack trace into frames.
///
/// The method is qualified with its class (`com.app.Main.onCreate`) when
/// both are known.  Frames without method, file and line are dropped.
pub fn frames_from_android_stack(stack: &[AndroidFrame]) -> Vec<Frame> {
    stack
        .iter()
        .map(|frame| {
            let method = match (
                non_blank(frame.class.as_deref()),
                non_blank(frame.method.as_deref()),
            ) {
                (Some(class), Some(method)) => format!("{}.{}", class, method),
                _ => or_empty(frame.method.as_deref()),
            };
            Frame {
                method,
                file: or_empty(frame.file.as_deref()),
                line: frame.line.clone(),
                column: None,
                stack_address: None,
            }
        })
        .filter(|frame| !frame.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use crashnote_types::protocol::LineNo;

    use super::*;

    #[test]
    fn test_android_method_is_qualified() {
        let frames = frames_from_android_stack(&[
            AndroidFrame {
                class: Some("com.app.MainActivity".into()),
                method: Some("onCreate".into()),
                file: Some("MainActivity.java".into()),
                line: LineNo::Number(42),
            },
            AndroidFrame {
                class: Some(" ".into()),
                method: Some("run".into()),
                file: None,
                line: LineNo::Empty,
            },
        ]);
        assert_eq!(frames[0].method, "com.app.MainActivity.onCreate");
        assert_eq!(frames[0].file, "MainActivity.java");
        assert_eq!(frames[0].line, LineNo::Number(42));
        assert_eq!(frames[0].column, None);
        assert_eq!(frames[1].method, "run");
        assert_eq!(frames[1].file, "");
    }

    #[test]
    fn test_empty_frames_are_dropped() {
        let frames = frames_from_android_stack(&[AndroidFrame::default()]);
        assert!(frames.is_empty());

        let frames = frames_from_native_stack(&[NativeFrame::default()]);
        assert!(frames.is_empty());
    }

    #[test]
    fn test_native_stack() {
        let frames = frames_from_native_stack(&[NativeFrame {
            method_name: Some("render".into()),
            line_number: LineNo::Number(10),
            file: Some("App.js".into()),
            column: LineNo::Empty,
        }]);
        assert_eq!(
            frames,
            vec![Frame {
                method: "render".into(),
                file: "App.js".into(),
                line: LineNo::Number(10),
                column: Some(LineNo::Empty),
                stack_address: None,
            }]
        );
    }
}
