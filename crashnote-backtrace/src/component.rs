use once_cell::sync::Lazy;
use regex::Regex;

use crashnote_types::protocol::{Frame, LineNo};

static COMPONENT_FRAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?mx)
        ^\s*in\s(?P<method>\S+)           # component name
        (?:
            \s\(at\s(?P<file>\S+):(?P<line>\S+)\)\s*$
        )?
    ",
    )
    .unwrap()
});

/// Parses a component stack as reported by the UI layer.
///
/// The input consists of lines such as `in Button (at App.js:12)` or just
/// `in View`.  Every component yields one frame; file and line are only
/// filled in when the `(at file:line)` suffix is present.
///
/// # Examples
///
/// ```
/// use crashnote_backtrace::parse_component_stack;
///
/// assert!(parse_component_stack("no components here").is_empty());
/// ```
pub fn parse_component_stack(stack: &str) -> Vec<Frame> {
    COMPONENT_FRAME_RE
        .captures_iter(stack)
        .map(|caps| Frame {
            method: caps["method"].to_string(),
            file: caps
                .name("file")
                .map_or("", |m| m.as_str())
                .to_string(),
            line: LineNo::from_capture(caps.name("line").map(|m| m.as_str())),
            column: None,
            stack_address: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_stack() {
        let stack = "
    in Button (at App.js:12)
    in RCTView (at View.js:34)
    in App";
        let frames = parse_component_stack(stack);
        assert_eq!(
            frames,
            vec![
                Frame {
                    method: "Button".into(),
                    file: "App.js".into(),
                    line: LineNo::Number(12),
                    ..Default::default()
                },
                Frame {
                    method: "RCTView".into(),
                    file: "View.js".into(),
                    line: LineNo::Number(34),
                    ..Default::default()
                },
                Frame {
                    method: "App".into(),
                    ..Default::default()
                },
            ]
        );
    }

    #[test]
    fn test_component_without_location() {
        let frames = parse_component_stack("in MyComponent (created by Root)");
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].method, "MyComponent");
        assert_eq!(frames[0].file, "");
        assert!(frames[0].line.is_empty());
    }

    #[test]
    fn test_non_numeric_line_is_kept_as_text() {
        let frames = parse_component_stack("in Foo (at Foo.js:unknown)");
        assert_eq!(frames[0].line, LineNo::Text("unknown".into()));
    }

    #[test]
    fn test_no_components() {
        assert!(parse_component_stack("").is_empty());
        assert!(parse_component_stack("Invariant Violation: something broke").is_empty());
        assert!(parse_component_stack("    in \n    in ").is_empty());
    }

    #[test]
    fn test_fresh_matching_per_call() {
        let stack = "in A (at a.js:1)\nin B (at b.js:2)";
        assert_eq!(parse_component_stack(stack).len(), 2);
        assert_eq!(parse_component_stack(stack).len(), 2);
    }
}
