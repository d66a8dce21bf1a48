//! The provided transports.
//!
//! This module exposes the transports that are compiled into the library.
//! The `reqwest` feature turns on the HTTP transport.

use std::sync::Arc;

use crate::{ClientOptions, Transport, TransportFactory};

#[cfg(feature = "reqwest")]
mod thread;

#[cfg(feature = "reqwest")]
mod reqwest;
#[cfg(feature = "reqwest")]
pub use self::reqwest::ReqwestHttpTransport;

/// The default http transport.
#[cfg(feature = "reqwest")]
pub type HttpTransport = ReqwestHttpTransport;

/// Creates the default HTTP transport.
///
/// This is the default value for `transport` on the client options.  It
/// creates a [`HttpTransport`].  If no http transport was compiled into the
/// library every notice is dropped with a log message instead.
#[derive(Clone, Debug, Default)]
pub struct DefaultTransportFactory;

impl TransportFactory for DefaultTransportFactory {
    fn create_transport(&self, options: &ClientOptions, api_key: &str) -> Arc<dyn Transport> {
        #[cfg(feature = "reqwest")]
        {
            Arc::new(HttpTransport::new(options, api_key))
        }
        #[cfg(not(feature = "reqwest"))]
        {
            let _ = (options, api_key);
            Arc::new(NoopTransport)
        }
    }
}

#[cfg(not(feature = "reqwest"))]
struct NoopTransport;

#[cfg(not(feature = "reqwest"))]
impl Transport for NoopTransport {
    fn send_notice(&self, notice: crate::protocol::Notice) {
        crate::crashnote_error!(
            "crashnote was compiled without a transport, dropping notice: {}",
            notice.class()
        );
    }
}
