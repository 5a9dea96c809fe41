//! Movie endpoint construction: resource paths and query strings.

use url::Url;

/// One movie endpoint: path relative to the API base plus query parameters.
#[derive(Debug, Clone)]
pub(crate) struct Endpoint {
    /// Path segment (e.g. `movie/550/credits`).
    path: String,
    /// Caller-supplied query parameters, in insertion order.
    query: Vec<(&'static str, String)>,
}

impl Endpoint {
    /// Endpoint for the movie details resource.
    pub(crate) fn movie(movie_id: u64) -> Self {
        Self {
            path: format!("movie/{movie_id}"),
            query: Vec::new(),
        }
    }

    /// Endpoint for a movie sub-resource such as `credits`.
    pub(crate) fn movie_sub(movie_id: u64, sub_resource: &str) -> Self {
        Self {
            path: format!("movie/{movie_id}/{sub_resource}"),
            query: Vec::new(),
        }
    }

    /// Appends a query parameter.
    ///
    /// `None` is omitted from the query string entirely, never sent as empty.
    #[must_use]
    pub(crate) fn param(mut self, key: &'static str, value: Option<String>) -> Self {
        if let Some(value) = value {
            self.query.push((key, value));
        }
        self
    }

    /// Resolves the endpoint against the base URL, attaching the API key as
    /// the first query parameter.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be joined onto the base URL.
    pub(crate) fn to_url(&self, base_url: &Url, api_key: &str) -> Result<Url, url::ParseError> {
        let mut url = base_url.join(&self.path)?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("api_key", api_key);
            for (key, value) in &self.query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }
}
