//! Backtrace parsing and source selection for crashnote.
//!
//! Exposes one parser per textual stack format the host runtime reports,
//! converters for the stack traces the native bridges deliver pre-split into
//! fields, and the selector that decides which of several backtraces of the
//! same error is the primary one.
//!
//! All parsers are total: lines that do not match are skipped and the result
//! may be empty, but parsing never fails.
//!
//! ```
//! use crashnote_backtrace::{parse_component_stack, parse_script_stack, select_backtrace, Origin};
//! use crashnote_backtrace::{Backtrace, SourceKind};
//!
//! let component = parse_component_stack("\n    in Button (at App.js:12)\n    in App");
//! let script = parse_script_stack("onPress@http://localhost:8081/index.bundle:1042:17");
//!
//! let selection = select_backtrace(
//!     Origin::Script,
//!     vec![
//!         Backtrace::new(SourceKind::ScriptStack, script),
//!         Backtrace::new(SourceKind::ComponentStack, component),
//!     ],
//! );
//! assert_eq!(selection.primary_source(), Some(SourceKind::ComponentStack));
//! assert_eq!(selection.primary_frames()[0].method, "Button");
//! assert_eq!(selection.supplementary.len(), 1);
//! ```

#![deny(missing_docs)]

mod callstack;
mod component;
mod native;
mod script;
mod select;
mod utils;

pub use crate::callstack::{parse_call_stack, parse_call_stack_lines};
pub use crate::component::parse_component_stack;
pub use crate::native::{frames_from_android_stack, frames_from_native_stack};
pub use crate::script::parse_script_stack;
pub use crate::select::{select_backtrace, Origin, Selection};
pub use crate::utils::{non_blank, or_empty};
pub use crashnote_types::protocol::{Backtrace, Frame, LineNo, SourceKind};
