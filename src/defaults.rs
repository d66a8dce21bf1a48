use std::borrow::Cow;
use std::env;
use std::sync::Arc;

use crate::transports::DefaultTransportFactory;
use crate::ClientOptions;

/// Apply default client options.
///
/// Extends the given `ClientOptions` with default options such as the
/// default transport and values taken from the environment.  The following
/// options are filled in when unset:
///
/// * `transport`: the [`DefaultTransportFactory`].
/// * `environment`: `CRASHNOTE_ENVIRONMENT`.
/// * `os_name` / `os_version`: `CRASHNOTE_OS_NAME` and `CRASHNOTE_OS_VERSION`.
/// * `runtime_version`: `CRASHNOTE_RUNTIME_VERSION`.
///
/// A `CRASHNOTE_ENDPOINT` that parses as a URL replaces the endpoint.
///
/// # Examples
///
/// ```
/// std::env::set_var("CRASHNOTE_ENVIRONMENT", "staging");
/// let options = crashnote::apply_defaults(crashnote::ClientOptions::default());
/// assert_eq!(options.environment.as_deref(), Some("staging"));
/// assert!(options.transport.is_some());
/// ```
pub fn apply_defaults(mut opts: ClientOptions) -> ClientOptions {
    if opts.transport.is_none() {
        opts.transport = Some(Arc::new(DefaultTransportFactory));
    }
    if opts.environment.is_none() {
        opts.environment = env_var("CRASHNOTE_ENVIRONMENT");
    }
    if opts.os_name.is_none() {
        opts.os_name = env_var("CRASHNOTE_OS_NAME");
    }
    if opts.os_version.is_none() {
        opts.os_version = env_var("CRASHNOTE_OS_VERSION");
    }
    if opts.runtime_version.is_none() {
        opts.runtime_version = env_var("CRASHNOTE_RUNTIME_VERSION");
    }
    if let Some(endpoint) = env::var("CRASHNOTE_ENDPOINT")
        .ok()
        .and_then(|url| url.parse().ok())
    {
        opts.endpoint = endpoint;
    }
    opts
}

/// The API key from `CRASHNOTE_API_KEY`, if set.
pub(crate) fn api_key_from_env() -> Option<String> {
    env::var("CRASHNOTE_API_KEY")
        .ok()
        .filter(|key| !key.trim().is_empty())
}

fn env_var(name: &str) -> Option<Cow<'static, str>> {
    env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .map(Cow::Owned)
}
