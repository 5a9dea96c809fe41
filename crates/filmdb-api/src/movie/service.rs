//! `MovieService` - movie metadata API service implementation.

use serde::de::DeserializeOwned;
use tracing::instrument;
use url::Url;

use crate::error::{Error, Result};
use crate::transport::{HttpTransport, Transport};

use super::api::MovieApi;
use super::endpoint::Endpoint;
use super::types::{
    AlternativeTitle, AlternativeTitlesResponse, Credits, ExternalId, ExternalIds, Keyword,
    KeywordsResponse, List, Movie, MovieImages, PagedResults,
};

/// Default base URL for the movie metadata API (TMDB v3).
const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3/";

/// Movie metadata API service facade.
///
/// Stateless apart from its immutable configuration: every call performs
/// exactly one request through the injected transport and decodes one JSON
/// payload. Nothing is cached or mutated between calls.
#[derive(Debug, Clone)]
pub struct MovieService<T = HttpTransport> {
    /// Transport performing the actual HTTP requests.
    transport: T,
    /// Base URL for API requests.
    base_url: Url,
    /// API key sent in every request's query string (`None` = unconfigured).
    api_key: Option<String>,
}

/// Builder for `MovieService` over the production HTTP transport.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct MovieServiceBuilder {
    api_key: Option<String>,
    base_url: Option<Url>,
    user_agent: Option<String>,
}

impl MovieServiceBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            api_key: None,
            base_url: None,
            user_agent: None,
        }
    }

    /// Sets the API key.
    ///
    /// A service built without a key fails every call with
    /// [`Error::InvalidApiKey`] before any request is issued.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Overrides the User-Agent (default: crate name and version).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Builds the service.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build or the default
    /// base URL does not parse.
    pub fn build(self) -> Result<MovieService> {
        let user_agent = self.user_agent.unwrap_or_else(|| {
            String::from(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
        });

        let base_url = match self.base_url {
            Some(url) => url,
            None => default_base_url()?,
        };

        let transport = HttpTransport::new(&user_agent)?;

        Ok(MovieService {
            transport,
            base_url,
            api_key: self.api_key,
        })
    }
}

/// Parses the built-in base URL.
fn default_base_url() -> Result<Url> {
    Url::parse(DEFAULT_BASE_URL)
        .map_err(|e| Error::Transport(format!("invalid default base URL: {e}")))
}

impl MovieService {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> MovieServiceBuilder {
        MovieServiceBuilder::new()
    }
}

impl<T: Transport + Sync> MovieService<T> {
    /// Creates a service over a custom transport, using the default base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the default base URL does not parse.
    pub fn with_transport(transport: T, api_key: Option<String>) -> Result<Self> {
        Ok(Self {
            transport,
            base_url: default_base_url()?,
            api_key,
        })
    }

    /// Returns the configured API key, failing before any request is made.
    fn require_api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or(Error::InvalidApiKey)
    }

    /// Performs one GET request for the endpoint and decodes the JSON body.
    #[instrument(skip_all)]
    async fn get_json<M: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<M> {
        let api_key = self.require_api_key()?;

        let url = endpoint
            .to_url(&self.base_url, api_key)
            .map_err(|e| Error::Transport(format!("failed to build request URL: {e}")))?;

        // Log the path only; the query string carries the API key.
        tracing::debug!(path = %url.path(), "movie API request");

        let body = self.transport.get(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

// Implements the `Send` variant; `trait_variant`'s blanket impl covers
// `LocalMovieApi`, and the callback adapters spawn these futures.
impl<T: Transport + Sync> MovieApi for MovieService<T> {
    #[instrument(skip_all)]
    async fn details(&self, movie_id: u64) -> Result<Movie> {
        self.get_json(Endpoint::movie(movie_id)).await
    }

    #[instrument(skip_all)]
    async fn alternative_titles(
        &self,
        movie_id: u64,
        country: Option<&str>,
    ) -> Result<Vec<AlternativeTitle>> {
        let endpoint = Endpoint::movie_sub(movie_id, "alternative_titles")
            .param("country", country.map(String::from));

        let response: AlternativeTitlesResponse = self.get_json(endpoint).await?;
        Ok(response.titles)
    }

    #[instrument(skip_all)]
    async fn credits(&self, movie_id: u64) -> Result<Credits> {
        self.get_json(Endpoint::movie_sub(movie_id, "credits")).await
    }

    #[instrument(skip_all)]
    async fn external_ids(&self, movie_id: u64) -> Result<Vec<ExternalId>> {
        let response: ExternalIds = self
            .get_json(Endpoint::movie_sub(movie_id, "external_ids"))
            .await?;
        Ok(response.into_ids())
    }

    #[instrument(skip_all)]
    async fn images(&self, movie_id: u64, languages: Option<&[String]>) -> Result<MovieImages> {
        let endpoint = Endpoint::movie_sub(movie_id, "images")
            .param("include_image_language", languages.map(|l| l.join(",")));

        self.get_json(endpoint).await
    }

    #[instrument(skip_all)]
    async fn keywords(&self, movie_id: u64) -> Result<Vec<Keyword>> {
        let response: KeywordsResponse =
            self.get_json(Endpoint::movie_sub(movie_id, "keywords")).await?;
        Ok(response.keywords)
    }

    #[instrument(skip_all)]
    async fn lists(&self, movie_id: u64, page: Option<u32>) -> Result<PagedResults<List>> {
        let endpoint = Endpoint::movie_sub(movie_id, "lists")
            .param("page", page.map(|p| p.to_string()));

        self.get_json(endpoint).await
    }
}
