use once_cell::sync::Lazy;

use crate::protocol::Notifier;

/// The version of the library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name the notifier reports itself under.
pub const NOTIFIER_NAME: &str = "crashnote";

/// The default endpoint notices are posted to.
pub const DEFAULT_ENDPOINT: &str = "https://api.honeybadger.io/v1/notices/js";

/// The runtime label used when none is configured.
pub const DEFAULT_RUNTIME_NAME: &str = "React Native";

/// Message used when no message could be derived from an error.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown Error";

/// Message used for `notify` calls whose error carries no message.
pub const UNKNOWN_MANUAL_MESSAGE: &str = "Unknown error message";

pub(crate) static NOTIFIER: Lazy<Notifier> = Lazy::new(|| Notifier {
    name: NOTIFIER_NAME.into(),
    url: env!("CARGO_PKG_REPOSITORY").into(),
    version: VERSION.into(),
});
