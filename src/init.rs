use std::sync::Arc;

use crate::defaults::{api_key_from_env, apply_defaults};
use crate::{crashnote_debug, Client, ClientOptions};

/// Helper struct that is returned from `init`.
///
/// When this is dropped notices are drained with the configured shutdown
/// timeout.
#[must_use = "when the init guard is dropped the transport will be shut down and no further \
              notices can be sent.  If you do want to ignore this use mem::forget on it."]
pub struct ClientInitGuard(Arc<Client>);

impl ClientInitGuard {
    /// Quick check if the client accepted its API key.
    pub fn is_configured(&self) -> bool {
        self.0.is_configured()
    }

    /// The client created by `init`.
    pub fn client(&self) -> &Arc<Client> {
        &self.0
    }
}

impl Drop for ClientInitGuard {
    fn drop(&mut self) {
        if self.is_configured() {
            crashnote_debug!("dropping client guard -> disposing client");
        } else {
            crashnote_debug!("dropping client guard (no client to dispose)");
        }
        self.0.close(None);
    }
}

/// Creates and configures the crashnote client.
///
/// The options are completed with [`apply_defaults`], so unless a transport
/// was set the notices are posted over HTTP.  An empty `api_key` falls back
/// to the `CRASHNOTE_API_KEY` environment variable; without any key the
/// client stays unconfigured and drops every error.
///
/// This returns a client init guard that must be kept in scope to help the
/// client send notices before the application closes.
///
/// # Examples
///
/// ```no_run
/// let _crashnote = crashnote::init(crashnote::ClientOptions::default(), "my-api-key");
/// ```
///
/// Or if draining on shutdown should be ignored:
///
/// ```no_run
/// std::mem::forget(crashnote::init(crashnote::ClientOptions::default(), "my-api-key"));
/// ```
pub fn init(options: ClientOptions, api_key: &str) -> ClientInitGuard {
    let client = Arc::new(Client::with_options(apply_defaults(options)));
    let api_key = match api_key.trim() {
        "" => api_key_from_env().unwrap_or_default(),
        key => key.to_owned(),
    };
    if client.configure(&api_key) {
        crashnote_debug!("enabled crashnote client");
    } else {
        crashnote_debug!("initialized unconfigured crashnote client due to missing API key");
    }
    ClientInitGuard(client)
}
