//! HTTP transport seam.
//!
//! All network I/O performed by the service facade flows through the
//! [`Transport`] trait, so tests can substitute canned responses without
//! any network activity.
#![allow(clippy::future_not_send)]

use reqwest::Client;
use url::Url;

use crate::error::{Error, Result};

/// Capability interface for performing one HTTP GET request.
///
/// Abstracts network access for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[trait_variant::make(Transport: Send)]
pub trait LocalTransport {
    /// Performs a GET request and returns the raw response body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] for connection-level faults and
    /// non-success HTTP statuses.
    async fn get(&self, url: Url) -> Result<Vec<u8>>;
}

/// Production transport backed by [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    /// HTTP client (reqwest, gzip enabled).
    http_client: Client,
}

impl HttpTransport {
    /// Creates a transport with the given User-Agent.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client fails to build.
    pub fn new(user_agent: &str) -> Result<Self> {
        let http_client = Client::builder()
            .user_agent(user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { http_client })
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: Url) -> Result<Vec<u8>> {
        let response = self.http_client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Transport(format!("HTTP {status}")));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
pub(crate) mod mock {
    //! Deterministic transport double recording every invocation.

    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use url::Url;

    use super::Transport;
    use crate::error::{Error, Result};

    /// Transport answering every request with one pre-programmed outcome.
    #[derive(Debug, Clone)]
    pub(crate) struct MockTransport {
        inner: Arc<Inner>,
    }

    #[derive(Debug)]
    struct Inner {
        response: std::result::Result<Vec<u8>, String>,
        calls: AtomicUsize,
    }

    impl MockTransport {
        /// Transport that answers every request with the given body.
        pub(crate) fn success(body: impl Into<Vec<u8>>) -> Self {
            Self {
                inner: Arc::new(Inner {
                    response: Ok(body.into()),
                    calls: AtomicUsize::new(0),
                }),
            }
        }

        /// Transport that fails every request with a transport error.
        pub(crate) fn failure(message: &str) -> Self {
            Self {
                inner: Arc::new(Inner {
                    response: Err(String::from(message)),
                    calls: AtomicUsize::new(0),
                }),
            }
        }

        /// Number of `get` invocations observed so far.
        pub(crate) fn calls(&self) -> usize {
            self.inner.calls.load(Ordering::SeqCst)
        }
    }

    impl Transport for MockTransport {
        async fn get(&self, _url: Url) -> Result<Vec<u8>> {
            self.inner.calls.fetch_add(1, Ordering::SeqCst);
            match &self.inner.response {
                Ok(body) => Ok(body.clone()),
                Err(message) => Err(Error::Transport(message.clone())),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::movie::{LocalMovieApi, MovieService};

    #[tokio::test]
    async fn test_http_transport_returns_body() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string("payload"))
            .mount(&mock_server)
            .await;

        let transport = HttpTransport::new("test/0.0.0").unwrap();
        let url: Url = mock_server.uri().parse().unwrap();

        // Act
        let body = Transport::get(&transport, url).await.unwrap();

        // Assert
        assert_eq!(body, b"payload");
    }

    #[tokio::test]
    async fn test_http_transport_non_success_status_is_transport_error() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(wiremock::ResponseTemplate::new(404).set_body_string("not found"))
            .mount(&mock_server)
            .await;

        let transport = HttpTransport::new("test/0.0.0").unwrap();
        let url: Url = mock_server.uri().parse().unwrap();

        // Act
        let result = Transport::get(&transport, url).await;

        // Assert
        assert!(matches!(result, Err(Error::Transport(_))));
        assert!(result.unwrap_err().to_string().contains("404"));
    }

    #[tokio::test]
    async fn test_http_transport_connection_failure_is_transport_error() {
        // Arrange: nothing listens on this port.
        let transport = HttpTransport::new("test/0.0.0").unwrap();
        let url: Url = "http://127.0.0.1:9/".parse().unwrap();

        // Act
        let result = Transport::get(&transport, url).await;

        // Assert
        assert!(matches!(result, Err(Error::Transport(_))));
    }

    #[tokio::test]
    async fn test_mock_transport_records_invocations() {
        // Arrange
        let transport = mock::MockTransport::success(b"{}".to_vec());
        let service = MovieService::with_transport(transport.clone(), None).unwrap();

        // Act: no API key, so the request must never reach the transport.
        let result = service.keywords(550).await;

        // Assert
        assert!(result.is_err());
        assert_eq!(transport.calls(), 0);
    }
}
