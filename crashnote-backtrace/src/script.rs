use once_cell::sync::Lazy;
use regex::Regex;

use crashnote_types::protocol::{Frame, LineNo};

static SCRIPT_FRAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        ^\s*
        (?:
            (?P<method>[^@]*)           # function name, may be empty
            (?:\((?P<args>.*?)\))?      # optional argument list
            @
        )?
        (?P<file>\S.*?)
        :(?P<line>[0-9]+)
        (?::(?P<column>[0-9]+))?
        \s*$
    ",
    )
    .unwrap()
});

/// Marks frames of functions implemented natively by the script engine.
const NATIVE_CODE_MARKER: &str = "[native code]";

/// Parses the `stack` property of a script engine error.
///
/// Every line of the form `name(args)@file:line:col`, `name@file:line:col`
/// or `@file:line:col` yields one frame.  Lines of native engine functions
/// (`name@[native code]`) yield a frame with an empty position.  Anything
/// else is skipped.
///
/// Positions that were not captured stay empty rather than becoming `0`.
pub fn parse_script_stack(stack: &str) -> Vec<Frame> {
    stack.lines().filter_map(parse_script_line).collect()
}

fn parse_script_line(line: &str) -> Option<Frame> {
    if let Some(caps) = SCRIPT_FRAME_RE.captures(line) {
        return Some(Frame {
            method: caps
                .name("method")
                .map_or("", |m| m.as_str())
                .to_string(),
            file: caps["file"].to_string(),
            line: LineNo::from_capture(caps.name("line").map(|m| m.as_str())),
            column: Some(LineNo::from_capture(caps.name("column").map(|m| m.as_str()))),
            stack_address: None,
        });
    }

    if line.contains(NATIVE_CODE_MARKER) {
        let mut parts = line.trim().split('@');
        if let (Some(method), Some(file), None) = (parts.next(), parts.next(), parts.next()) {
            return Some(Frame {
                method: method.to_string(),
                file: file.to_string(),
                line: LineNo::Empty,
                column: Some(LineNo::Empty),
                stack_address: None,
            });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("render(a,b)@App.js:3:4", "render(a,b)", "App.js", 3, Some(4))]
    #[case("render@http://localhost:8081/index.bundle:1042:17", "render", "http://localhost:8081/index.bundle", 1042, Some(17))]
    #[case("@http://localhost:8081/index.bundle:10:2", "", "http://localhost:8081/index.bundle", 10, Some(2))]
    #[case("   onPress@main.jsbundle:7", "onPress", "main.jsbundle", 7, None)]
    #[case("http://localhost:8081/index.bundle:3:4", "", "http://localhost:8081/index.bundle", 3, Some(4))]
    #[case("global code@main.jsbundle:1:0", "global code", "main.jsbundle", 1, Some(0))]
    fn test_parse_script_line(
        #[case] input: &str,
        #[case] method: &str,
        #[case] file: &str,
        #[case] line: u64,
        #[case] column: Option<u64>,
    ) {
        let frames = parse_script_stack(input);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].method, method);
        assert_eq!(frames[0].file, file);
        assert_eq!(frames[0].line, LineNo::Number(line));
        assert_eq!(
            frames[0].column,
            Some(column.map_or(LineNo::Empty, LineNo::Number))
        );
    }

    #[test]
    fn test_frames_keep_input_order() {
        let stack = "\
a@app.js:1:1
b@app.js:2:2
c@app.js:3:3
d@app.js:4:4";
        let frames = parse_script_stack(stack);
        let methods: Vec<_> = frames.iter().map(|f| f.method.as_str()).collect();
        assert_eq!(methods, vec!["a", "b", "c", "d"]);
        let lines: Vec<_> = frames.iter().map(|f| f.line.as_number()).collect();
        assert_eq!(lines, vec![Some(1), Some(2), Some(3), Some(4)]);
    }

    #[test]
    fn test_native_code_frame() {
        let frames = parse_script_stack("forEach@[native code]");
        assert_eq!(
            frames,
            vec![Frame {
                method: "forEach".into(),
                file: "[native code]".into(),
                line: LineNo::Empty,
                column: Some(LineNo::Empty),
                stack_address: None,
            }]
        );
    }

    #[test]
    fn test_native_code_frame_needs_single_separator() {
        assert!(parse_script_stack("[native code]").is_empty());
        assert!(parse_script_stack("a@b@[native code]").is_empty());
    }

    #[test]
    fn test_garbage_lines_are_skipped() {
        let stack = "\
TypeError: undefined is not an object
    render@App.js:12:9

not a frame at all
    forEach@[native code]
    @App.js:40:1";
        let frames = parse_script_stack(stack);
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0].method, "render");
        assert_eq!(frames[1].file, "[native code]");
        assert_eq!(frames[2].method, "");
    }

    #[test]
    fn test_empty_stack() {
        assert!(parse_script_stack("").is_empty());
    }
}
