use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::constants::{DEFAULT_ENDPOINT, DEFAULT_RUNTIME_NAME, NOTIFIER_NAME, VERSION};
use crate::protocol::Notice;
use crate::{Integration, TransportFactory};

/// Type alias for before send handlers.
pub type BeforeCallback<T> = Arc<dyn Fn(T) -> Option<T> + Send + Sync>;

/// The mobile platform the host application runs on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Apple iOS.
    Ios,
    /// Android.
    Android,
}

impl Platform {
    /// The platform this library was compiled for.
    ///
    /// Apple targets map to [`Platform::Ios`], everything else to
    /// [`Platform::Android`].
    pub fn current() -> Platform {
        if cfg!(any(target_os = "ios", target_os = "macos")) {
            Platform::Ios
        } else {
            Platform::Android
        }
    }

    /// The name used in error classes, `iOS` or `Android`.
    pub fn name(self) -> &'static str {
        match self {
            Platform::Ios => "iOS",
            Platform::Android => "Android",
        }
    }
}

impl Default for Platform {
    fn default() -> Platform {
        Platform::current()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Configuration settings for the client.
///
/// The API key is not part of the options; it is handed to
/// [`Client::configure`](crate::Client::configure) separately.
///
/// # Examples
///
/// ```
/// let _options = crashnote_core::ClientOptions {
///     environment: Some("staging".into()),
///     ..Default::default()
/// };
/// ```
#[derive(Clone)]
pub struct ClientOptions {
    /// The label of the script runtime, used in error classes.
    pub runtime_name: Cow<'static, str>,
    /// The version of the script runtime, reported in the user agent.
    pub runtime_version: Option<Cow<'static, str>>,
    /// The platform native exceptions are reported for.
    pub platform: Platform,
    /// The operating system name reported in the user agent.
    pub os_name: Option<Cow<'static, str>>,
    /// The operating system version reported in the user agent.
    pub os_version: Option<Cow<'static, str>>,
    /// The environment to be sent with notices.
    pub environment: Option<Cow<'static, str>>,
    /// Where notices are posted to.
    pub endpoint: Url,
    /// A list of integrations to install on configuration.
    pub integrations: Vec<Arc<dyn Integration>>,
    /// Callback that is executed before a notice is sent.
    pub before_send: Option<BeforeCallback<Notice>>,
    /// The transport to use.
    ///
    /// This is typically either a boxed function taking the client options
    /// and API key and returning a `Transport`, a boxed `Arc<Transport>` or
    /// alternatively the `DefaultTransportFactory`.
    pub transport: Option<Arc<dyn TransportFactory>>,
    /// Overrides the user agent derived from the runtime and OS fields.
    pub user_agent: Option<Cow<'static, str>>,
    /// The timeout on client drop for draining notices on shutdown.
    pub shutdown_timeout: Duration,
}

impl ClientOptions {
    /// Creates new Options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates new Options and immediately configures them.
    pub fn configure<F>(f: F) -> Self
    where
        F: FnOnce(&mut ClientOptions) -> &mut ClientOptions,
    {
        let mut opts = Self::new();
        f(&mut opts);
        opts
    }

    /// Set a callback that is executed before a notice is sent.
    ///
    /// Returning `None` drops the notice.
    pub fn set_before_send<F>(&mut self, before_send: F) -> &mut Self
    where
        F: Fn(Notice) -> Option<Notice> + Send + Sync + 'static,
    {
        self.before_send = Some(Arc::new(before_send));
        self
    }

    /// Set the transport factory.
    pub fn set_transport<F>(&mut self, transport: F) -> &mut Self
    where
        F: TransportFactory + 'static,
    {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Adds a configured integration to the options.
    ///
    /// # Examples
    ///
    /// ```
    /// struct MyIntegration;
    ///
    /// impl crashnote_core::Integration for MyIntegration {}
    ///
    /// let options = crashnote_core::ClientOptions::new().add_integration(MyIntegration);
    /// assert_eq!(options.integrations.len(), 1);
    /// ```
    pub fn add_integration<I: Integration>(mut self, integration: I) -> Self {
        self.integrations.push(Arc::new(integration));
        self
    }

    /// The environment name reported with notices.
    ///
    /// Falls back to `development` in debug builds and `production`
    /// otherwise.
    pub fn environment_name(&self) -> Cow<'static, str> {
        match self.environment {
            Some(ref environment) => environment.clone(),
            None if cfg!(debug_assertions) => "development".into(),
            None => "production".into(),
        }
    }

    /// The user agent sent along with notices.
    ///
    /// Has the form `<notifier> <version>; <runtime version>; <os> <os version>`.
    pub fn user_agent(&self) -> Cow<'static, str> {
        if let Some(ref user_agent) = self.user_agent {
            return user_agent.clone();
        }
        let os_name = self
            .os_name
            .clone()
            .unwrap_or_else(|| self.platform.name().into());
        format!(
            "{} {}; {}; {} {}",
            NOTIFIER_NAME,
            VERSION,
            self.runtime_version.as_deref().unwrap_or(""),
            os_name,
            self.os_version.as_deref().unwrap_or(""),
        )
        .into()
    }
}

impl fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        #[derive(Debug)]
        struct BeforeSend;
        let before_send = self.before_send.as_ref().map(|_| BeforeSend);
        #[derive(Debug)]
        struct TransportFactory;
        let transport = self.transport.as_ref().map(|_| TransportFactory);

        let integrations: Vec<_> = self.integrations.iter().map(|i| i.name()).collect();

        f.debug_struct("ClientOptions")
            .field("runtime_name", &self.runtime_name)
            .field("runtime_version", &self.runtime_version)
            .field("platform", &self.platform)
            .field("os_name", &self.os_name)
            .field("os_version", &self.os_version)
            .field("environment", &self.environment)
            .field("endpoint", &self.endpoint.as_str())
            .field("integrations", &integrations)
            .field("before_send", &before_send)
            .field("transport", &transport)
            .field("user_agent", &self.user_agent)
            .field("shutdown_timeout", &self.shutdown_timeout)
            .finish()
    }
}

impl Default for ClientOptions {
    fn default() -> ClientOptions {
        ClientOptions {
            runtime_name: DEFAULT_RUNTIME_NAME.into(),
            runtime_version: None,
            platform: Platform::current(),
            os_name: None,
            os_version: None,
            environment: None,
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid url"),
            integrations: vec![],
            before_send: None,
            transport: None,
            user_agent: None,
            shutdown_timeout: Duration::from_secs(2),
        }
    }
}
