use std::time::Duration;

use reqwest::blocking::Client as ReqwestClient;
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::StatusCode;

use super::thread::TransportThread;

use crate::protocol::Notice;
use crate::{crashnote_debug, crashnote_error, ClientOptions, Transport};

/// The header carrying the API key.
const API_KEY_HEADER: &str = "X-API-Key";

/// A [`Transport`] that posts notices as JSON via the [`reqwest`] library.
///
/// Requests are made from a background thread so capturing never waits on
/// the network.
///
/// [`reqwest`]: https://crates.io/crates/reqwest
pub struct ReqwestHttpTransport {
    thread: TransportThread,
}

impl ReqwestHttpTransport {
    /// Creates a new Transport.
    pub fn new(options: &ClientOptions, api_key: &str) -> Self {
        Self::new_internal(options, api_key, None)
    }

    /// Creates a new Transport that uses the specified [`ReqwestClient`].
    pub fn with_client(options: &ClientOptions, api_key: &str, client: ReqwestClient) -> Self {
        Self::new_internal(options, api_key, Some(client))
    }

    fn new_internal(options: &ClientOptions, api_key: &str, client: Option<ReqwestClient>) -> Self {
        let url = options.endpoint.to_string();
        let user_agent = options.user_agent().into_owned();
        let api_key = api_key.to_owned();
        let mut client = client;

        let thread = TransportThread::new(move |notice: Notice| {
            // the blocking client runs its own runtime, so it is created on
            // the transport thread
            if client.is_none() {
                match ReqwestClient::builder().build() {
                    Ok(built) => client = Some(built),
                    Err(err) => {
                        crashnote_error!("Failed to create HTTP client: {}", err);
                        return;
                    }
                }
            }
            let Some(ref client) = client else {
                return;
            };

            let request = client
                .post(&url)
                .header(ACCEPT, "text/json, application/json")
                .header(API_KEY_HEADER, &api_key)
                .header(USER_AGENT, &user_agent)
                .json(&notice);

            match request.send() {
                Ok(response) => match response.status() {
                    status if status.is_success() => {
                        crashnote_debug!("Notice delivered: {}", notice.class());
                    }
                    StatusCode::FORBIDDEN | StatusCode::UNAUTHORIZED => {
                        crashnote_error!("Notice rejected, the API key is invalid");
                    }
                    StatusCode::TOO_MANY_REQUESTS => {
                        crashnote_error!("Notice rejected, rate limit reached");
                    }
                    StatusCode::PAYLOAD_TOO_LARGE => {
                        crashnote_error!("Notice rejected, payload too large");
                    }
                    status => {
                        let body = response.text().unwrap_or_default();
                        crashnote_error!("Notice rejected with status {}: {}", status, body);
                    }
                },
                Err(err) => {
                    crashnote_error!("Failed to send notice: {}", err);
                }
            }
        });
        Self { thread }
    }
}

impl Transport for ReqwestHttpTransport {
    fn send_notice(&self, notice: Notice) {
        self.thread.send(notice)
    }

    fn flush(&self, timeout: Duration) -> bool {
        self.thread.flush(timeout)
    }

    fn shutdown(&self, timeout: Duration) -> bool {
        self.flush(timeout)
    }
}
