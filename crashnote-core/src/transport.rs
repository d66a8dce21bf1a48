use std::sync::Arc;
use std::time::Duration;

use crate::protocol::Notice;
use crate::ClientOptions;

/// The trait for transports.
///
/// A transport is responsible for sending notices to the collector.  A custom
/// transport can be passed through the [`ClientOptions::transport`] option.
pub trait Transport: Send + Sync + 'static {
    /// Sends a notice.
    ///
    /// Implementations must not block the caller for the duration of the
    /// request.
    fn send_notice(&self, notice: Notice);

    /// Flushes the transport queue, returning `true` if it was drained
    /// within `timeout`.
    fn flush(&self, timeout: Duration) -> bool {
        let _timeout = timeout;
        true
    }

    /// Instructs the transport to shut down.
    fn shutdown(&self, timeout: Duration) -> bool {
        self.flush(timeout)
    }
}

/// A factory creating transport instances.
///
/// A transport is only created once the client has been configured with an
/// API key, which is passed along to authenticate requests.
///
/// Because options are cloned when a client is created, the factory itself
/// is shared behind an `Arc`.  Blanket implementations exist for closures
/// and for any `Arc<Transport>`, the latter reusing the same transport.
pub trait TransportFactory: Send + Sync {
    /// Given some options and an API key, creates a transport.
    fn create_transport(&self, options: &ClientOptions, api_key: &str) -> Arc<dyn Transport>;
}

impl<F> TransportFactory for F
where
    F: Fn(&ClientOptions, &str) -> Arc<dyn Transport> + Send + Sync,
{
    fn create_transport(&self, options: &ClientOptions, api_key: &str) -> Arc<dyn Transport> {
        (*self)(options, api_key)
    }
}

impl<T: Transport> Transport for Arc<T> {
    fn send_notice(&self, notice: Notice) {
        (**self).send_notice(notice)
    }

    fn flush(&self, timeout: Duration) -> bool {
        (**self).flush(timeout)
    }

    fn shutdown(&self, timeout: Duration) -> bool {
        (**self).shutdown(timeout)
    }
}

impl<T: Transport> TransportFactory for Arc<T> {
    fn create_transport(&self, options: &ClientOptions, api_key: &str) -> Arc<dyn Transport> {
        let _ = (options, api_key);
        self.clone()
    }
}
