use std::error::Error;
use std::fmt;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;
use serde_json::Value;

use crate::assemble::assemble;
use crate::context::{context_from_value, Context};
use crate::descriptor::{is_empty_error, ErrorDescriptor, ManualError, ScriptError};
use crate::error::manual_error_from_std_error;
use crate::protocol::Notice;
use crate::{CaptureError, ClientOptions, Transport};

impl<T: Into<ClientOptions>> From<T> for Client {
    fn from(o: T) -> Client {
        Client::with_options(o.into())
    }
}

/// The crashnote client.
///
/// The client receives errors from every source, assembles them into
/// notices and hands those to the configured [`Transport`].  It also owns
/// the session context attached to every notice.
///
/// A client does nothing until it has been [configured](Client::configure)
/// with an API key.  Errors observed before that are dropped.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// let client = Arc::new(crashnote_core::Client::from(crashnote_core::ClientOptions::default()));
/// assert!(!client.is_configured());
/// ```
pub struct Client {
    options: ClientOptions,
    api_key: OnceCell<String>,
    transport: RwLock<Option<Arc<dyn Transport>>>,
    context: Context,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("configured", &self.is_configured())
            .field("options", &self.options)
            .finish()
    }
}

impl Client {
    /// Creates a new client for the given options.
    ///
    /// The client stays inert until [`configure`](Client::configure) is
    /// called.
    pub fn with_options(options: ClientOptions) -> Client {
        Client {
            options,
            api_key: OnceCell::new(),
            transport: RwLock::new(None),
            context: Context::new(),
        }
    }

    /// Returns the options of this client.
    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Configures the client with an API key.
    ///
    /// The first successful call creates the transport and installs the
    /// integrations from the options.  Later calls have no effect and return
    /// `true`.  A blank key is rejected with an error log and `false`.
    pub fn configure(self: &Arc<Self>, api_key: &str) -> bool {
        match self.try_configure(api_key) {
            Ok(()) => true,
            Err(err) => {
                crashnote_error!("{}", err);
                false
            }
        }
    }

    /// Like [`configure`](Client::configure) but reports the failure.
    pub fn try_configure(self: &Arc<Self>, api_key: &str) -> Result<(), CaptureError> {
        if self.is_configured() {
            crashnote_debug!("[Client] Already configured, ignoring new API key");
            return Ok(());
        }
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(CaptureError::InvalidApiKey);
        }
        if self.api_key.set(api_key.to_string()).is_err() {
            crashnote_debug!("[Client] Configured concurrently, ignoring new API key");
            return Ok(());
        }

        if let Some(factory) = self.options.transport.as_ref() {
            crashnote_debug!("[Client] Creating transport");
            *self.transport.write().unwrap() = Some(factory.create_transport(&self.options, api_key));
        } else {
            crashnote_debug!("[Client] No transport factory, notices will be dropped");
        }

        for integration in &self.options.integrations {
            crashnote_debug!("[Client] Installing integration: {}", integration.name());
            integration.install(self);
        }
        Ok(())
    }

    /// Returns `true` once an API key has been accepted.
    pub fn is_configured(&self) -> bool {
        self.api_key.get().is_some()
    }

    /// The API key the client was configured with.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.get().map(String::as_str)
    }

    /// The session context.
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Merges the given object into the session context.
    ///
    /// Values other than objects are ignored.
    pub fn set_context<V: Into<Value>>(&self, context: V) {
        match context_from_value(context.into()) {
            Some(values) => self.context.merge(values),
            None => crashnote_debug!("[Client] Ignoring context that is not an object"),
        }
    }

    /// Replaces the session context with the given object.
    ///
    /// Anything other than an object clears the context.
    pub fn reset_context<V: Into<Value>>(&self, context: V) {
        self.context
            .replace(context_from_value(context.into()).unwrap_or_default());
    }

    /// Reports an error explicitly.
    ///
    /// `error` may be an object with `name`, `message`, `stack` and
    /// `componentStack` fields or a plain message string.  `additional_data`
    /// is merged over the context of this notice when it is an object, or
    /// recorded under `additionalData` when it is a string.
    ///
    /// Unusable errors (null, `false`, blank strings, empty objects) are
    /// logged and dropped.
    pub fn notify<E, D>(&self, error: E, additional_data: D)
    where
        E: Into<Value>,
        D: Into<Value>,
    {
        match ManualError::new(error.into(), additional_data.into()) {
            Ok(manual) => self.capture(ErrorDescriptor::Manual(manual)),
            Err(err) => crashnote_error!("{}", err),
        }
    }

    /// Reports a Rust error.
    ///
    /// The error's type name becomes the name part of the class, its
    /// `Display` output the message.
    pub fn notify_error<E: Error + ?Sized>(&self, error: &E) {
        let manual = manual_error_from_std_error(error);
        self.capture(ErrorDescriptor::Manual(manual));
    }

    /// Reports an uncaught error from the script engine.
    ///
    /// Null, `false`, zero and the empty string are not errors and are
    /// dropped without a notice.
    pub fn handle_script_error(&self, error: &Value, is_fatal: bool) {
        if is_empty_error(error) {
            crashnote_debug!("Ignoring empty script error {}", error);
            return;
        }
        self.capture(ErrorDescriptor::Script(ScriptError {
            error: error.clone(),
            initial_handler: None,
            is_fatal,
        }));
    }

    /// Reports a native exception event from the platform bridge.
    ///
    /// The event is decoded according to the configured platform.  Events
    /// that can not be decoded are logged and dropped.
    pub fn handle_native_exception(&self, event: &Value) {
        match ErrorDescriptor::from_native_event(self.options.platform, event) {
            Ok(descriptor) => self.capture(descriptor),
            Err(err) => crashnote_error!("{}", err),
        }
    }

    /// Assembles and sends the notice for an error.
    ///
    /// Failures are logged; this never panics and never returns an error.
    pub fn capture(&self, descriptor: ErrorDescriptor) {
        match self.try_build_notice(&descriptor) {
            Ok(notice) => self.send_notice(notice),
            Err(err) => crashnote_error!("Dropping {} error: {}", descriptor.origin(), err),
        }
    }

    /// Assembles the notice for an error without sending it.
    ///
    /// This fails if the client has not been configured yet.
    pub fn try_build_notice(&self, descriptor: &ErrorDescriptor) -> Result<Notice, CaptureError> {
        if !self.is_configured() {
            return Err(CaptureError::NotConfigured);
        }
        Ok(assemble(descriptor, &self.options, self.context.snapshot()))
    }

    /// Builds the notice for a `notify` call without sending it.
    pub fn try_build_manual_notice(
        &self,
        error: Value,
        additional_data: Value,
    ) -> Result<Notice, CaptureError> {
        let manual = ManualError::new(error, additional_data)?;
        self.try_build_notice(&ErrorDescriptor::Manual(manual))
    }

    /// Builds the notice for a native exception event without sending it.
    pub fn try_build_native_notice(&self, event: &Value) -> Result<Notice, CaptureError> {
        let descriptor = ErrorDescriptor::from_native_event(self.options.platform, event)?;
        self.try_build_notice(&descriptor)
    }

    /// Runs `before_send` and passes the notice to the transport.
    pub fn send_notice(&self, notice: Notice) {
        let notice = match self.options.before_send {
            Some(ref callback) => match callback(notice) {
                Some(notice) => notice,
                None => {
                    crashnote_debug!("[Client] Notice dropped by before_send");
                    return;
                }
            },
            None => notice,
        };

        if let Some(ref transport) = *self.transport.read().unwrap() {
            crashnote_debug!("[Client] Sending notice: {}", notice.class());
            transport.send_notice(notice);
        } else {
            crashnote_debug!("[Client] No transport available, cannot send notice");
        }
    }

    /// Drains all pending notices without shutting down.
    pub fn flush(&self, timeout: Option<Duration>) -> bool {
        if let Some(ref transport) = *self.transport.read().unwrap() {
            transport.flush(timeout.unwrap_or(self.options.shutdown_timeout))
        } else {
            true
        }
    }

    /// Drains all pending notices and shuts down the transport behind the
    /// client.  After shutting down the transport is removed.
    ///
    /// This returns `true` if the queue was successfully drained in the
    /// given time or `false` if not (for instance because of a timeout).
    /// If no timeout is provided the client will wait for as long a
    /// `shutdown_timeout` in the client options.
    pub fn close(&self, timeout: Option<Duration>) -> bool {
        let transport_opt = self.transport.write().unwrap().take();
        if let Some(transport) = transport_opt {
            crashnote_debug!("[Client] Shutting down transport");
            transport.shutdown(timeout.unwrap_or(self.options.shutdown_timeout))
        } else {
            true
        }
    }
}
