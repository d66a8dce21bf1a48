use std::any::type_name;
use std::sync::Arc;

use crate::Client;

/// Integration abstraction.
///
/// An integration is an error source: it hooks into the host runtime and
/// forwards the errors it observes to the client, typically through
/// [`Client::handle_script_error`] or [`Client::handle_native_exception`].
///
/// Integrations are installed exactly once, when the client is first
/// configured with an API key.
pub trait Integration: Sync + Send + 'static {
    /// Name of this integration.
    fn name(&self) -> &'static str {
        type_name::<Self>()
    }

    /// Called when the client has been configured.
    ///
    /// The client is handed out as an `Arc` so that handlers registered with
    /// the host runtime can keep it alive.
    fn install(&self, client: &Arc<Client>) {
        let _ = client;
    }
}
