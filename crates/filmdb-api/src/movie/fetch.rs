//! Completion-callback variants of the movie API operations.
//!
//! Thin adapters over the awaitable [`MovieApi`] operations: each `fetch_*`
//! method dispatches its request as a task on the ambient tokio runtime and
//! invokes the completion exactly once, on an unspecified task. Failures of
//! every kind (missing API key, transport, decode) are delivered as `None`;
//! error detail is only available through the awaitable operations.

use super::api::MovieApi;
use super::service::MovieService;
use super::types::{
    AlternativeTitle, Credits, ExternalId, Keyword, List, Movie, MovieImages, PagedResults,
};
use crate::transport::Transport;

impl<T> MovieService<T>
where
    T: Transport + Clone + Send + Sync + 'static,
{
    /// Fetches movie details and passes them to `completion`.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn fetch_details(
        &self,
        movie_id: u64,
        completion: impl FnOnce(Option<Movie>) + Send + 'static,
    ) {
        let service = self.clone();
        drop(tokio::spawn(async move {
            completion(service.details(movie_id).await.ok());
        }));
    }

    /// Fetches alternative titles and passes them to `completion`.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn fetch_alternative_titles(
        &self,
        movie_id: u64,
        country: Option<&str>,
        completion: impl FnOnce(Option<Vec<AlternativeTitle>>) + Send + 'static,
    ) {
        let service = self.clone();
        let country = country.map(String::from);
        drop(tokio::spawn(async move {
            completion(
                service
                    .alternative_titles(movie_id, country.as_deref())
                    .await
                    .ok(),
            );
        }));
    }

    /// Fetches cast and crew credits and passes them to `completion`.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn fetch_credits(
        &self,
        movie_id: u64,
        completion: impl FnOnce(Option<Credits>) + Send + 'static,
    ) {
        let service = self.clone();
        drop(tokio::spawn(async move {
            completion(service.credits(movie_id).await.ok());
        }));
    }

    /// Fetches the present external identifiers and passes them to
    /// `completion`.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn fetch_external_ids(
        &self,
        movie_id: u64,
        completion: impl FnOnce(Option<Vec<ExternalId>>) + Send + 'static,
    ) {
        let service = self.clone();
        drop(tokio::spawn(async move {
            completion(service.external_ids(movie_id).await.ok());
        }));
    }

    /// Fetches backdrop, logo, and poster images and passes them to
    /// `completion`.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn fetch_images(
        &self,
        movie_id: u64,
        languages: Option<&[String]>,
        completion: impl FnOnce(Option<MovieImages>) + Send + 'static,
    ) {
        let service = self.clone();
        let languages = languages.map(<[String]>::to_vec);
        drop(tokio::spawn(async move {
            completion(service.images(movie_id, languages.as_deref()).await.ok());
        }));
    }

    /// Fetches keywords and passes them to `completion`.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn fetch_keywords(
        &self,
        movie_id: u64,
        completion: impl FnOnce(Option<Vec<Keyword>>) + Send + 'static,
    ) {
        let service = self.clone();
        drop(tokio::spawn(async move {
            completion(service.keywords(movie_id).await.ok());
        }));
    }

    /// Fetches one page of the user lists containing the movie and passes it
    /// to `completion`.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn fetch_lists(
        &self,
        movie_id: u64,
        page: Option<u32>,
        completion: impl FnOnce(Option<PagedResults<List>>) + Send + 'static,
    ) {
        let service = self.clone();
        drop(tokio::spawn(async move {
            completion(service.lists(movie_id, page).await.ok());
        }));
    }
}
