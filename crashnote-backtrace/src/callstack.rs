use once_cell::sync::Lazy;
use regex::Regex;

use crashnote_types::protocol::{Frame, LineNo};

use crate::utils::non_blank;

static CALL_STACK_FRAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        [0-9]+\s+                       # frame index
        (?P<module>\S+)\s+              # binary image
        (?P<address>\S+)\s              # instruction address
        (?P<symbol>.+)\s\+\s            # symbol or load address
        (?P<offset>[0-9]+)              # offset into the symbol
        (?:\s+\((?P<file>\S+):(?P<line>\S+)\))?
    ",
    )
    .unwrap()
});

/// Parses a symbolicated native call stack.
///
/// The frames are read from `description` if it has any content, otherwise
/// from the individual `symbols`.  Each line has the form
/// `<index> <module> <address> <symbol> + <offset>`, optionally followed by
/// `(<file>:<line>)`.  Lines that do not match are skipped.
///
/// The frame's `file` is the source file when known, otherwise the module.
///
/// # Examples
///
/// ```
/// use crashnote_backtrace::parse_call_stack;
///
/// let symbols = ["2   libobjc.A.dylib   0x0000000180a8b1d4 objc_exception_throw + 60"];
/// let frames = parse_call_stack(None, &symbols);
/// assert_eq!(frames[0].file, "libobjc.A.dylib");
/// assert_eq!(frames[0].method, "objc_exception_throw");
/// assert_eq!(frames[0].stack_address.as_deref(), Some("0x0000000180a8b1d4"));
/// ```
pub fn parse_call_stack<S: AsRef<str>>(description: Option<&str>, symbols: &[S]) -> Vec<Frame> {
    match non_blank(description) {
        Some(description) => parse_call_stack_lines(description.lines()),
        None => parse_call_stack_lines(symbols.iter().map(AsRef::as_ref)),
    }
}

/// Parses call stack lines, one or more frames per line.
pub fn parse_call_stack_lines<'a, I>(lines: I) -> Vec<Frame>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .map(str::trim)
        .flat_map(|line| CALL_STACK_FRAME_RE.captures_iter(line))
        .map(|caps| {
            let file = caps
                .name("file")
                .or_else(|| caps.name("module"))
                .map_or("", |m| m.as_str());
            Frame {
                method: caps["symbol"].to_string(),
                file: file.to_string(),
                line: LineNo::from_capture(caps.name("line").map(|m| m.as_str())),
                column: None,
                stack_address: Some(caps["address"].to_string()),
            }
        })
        .collect()
}
