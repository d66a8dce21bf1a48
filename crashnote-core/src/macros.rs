/// Logs a debug message to the `crashnote` log target.
#[macro_export]
#[doc(hidden)]
macro_rules! crashnote_debug {
    ($($arg:tt)*) => {
        $crate::__log::debug!(target: "crashnote", $($arg)*)
    };
}

/// Logs an error to the `crashnote` log target.
///
/// Used for problems the caller should hear about even though the library
/// never propagates them, such as an unusable error passed to `notify`.
#[macro_export]
#[doc(hidden)]
macro_rules! crashnote_error {
    ($($arg:tt)*) => {
        $crate::__log::error!(target: "crashnote", $($arg)*)
    };
}
