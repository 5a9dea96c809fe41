//! `MovieApi` trait definition.
#![allow(clippy::future_not_send)]

use crate::error::Result;

use super::types::{
    AlternativeTitle, Credits, ExternalId, Keyword, List, Movie, MovieImages, PagedResults,
};

/// Movie metadata API trait.
///
/// Abstracts API operations for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
///
/// Every operation performs exactly one HTTP GET request, and fails with
/// [`crate::Error::InvalidApiKey`] before any network activity when no API
/// key is configured.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(MovieApi: Send)]
pub trait LocalMovieApi {
    /// Fetches movie details.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing, the HTTP request fails,
    /// or JSON decoding fails.
    async fn details(&self, movie_id: u64) -> Result<Movie>;

    /// Fetches alternative titles, optionally filtered by country
    /// (ISO 3166-1).
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing, the HTTP request fails,
    /// or JSON decoding fails.
    async fn alternative_titles(
        &self,
        movie_id: u64,
        country: Option<&str>,
    ) -> Result<Vec<AlternativeTitle>>;

    /// Fetches cast and crew credits.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing, the HTTP request fails,
    /// or JSON decoding fails.
    async fn credits(&self, movie_id: u64) -> Result<Credits>;

    /// Fetches external identifiers, projected to the providers that are
    /// present.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing, the HTTP request fails,
    /// or JSON decoding fails.
    async fn external_ids(&self, movie_id: u64) -> Result<Vec<ExternalId>>;

    /// Fetches backdrop, logo, and poster images, optionally filtered by
    /// image languages (ISO 639-1; `"null"` selects language-neutral
    /// images).
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing, the HTTP request fails,
    /// or JSON decoding fails.
    async fn images(&self, movie_id: u64, languages: Option<&[String]>) -> Result<MovieImages>;

    /// Fetches keywords.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing, the HTTP request fails,
    /// or JSON decoding fails.
    async fn keywords(&self, movie_id: u64) -> Result<Vec<Keyword>>;

    /// Fetches the user lists containing the movie, one page at a time.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing, the HTTP request fails,
    /// or JSON decoding fails.
    async fn lists(&self, movie_id: u64, page: Option<u32>) -> Result<PagedResults<List>>;
}
