//! Movie metadata API client module.
//!
//! Handles HTTP requests to the movie endpoints of the remote metadata
//! service and decodes detail, title, credit, image, keyword, and list data.
//! Every operation is exposed in two calling conventions: awaitable
//! ([`MovieApi`]) and completion-callback (`fetch_*` on [`MovieService`]).

mod api;
mod endpoint;
mod fetch;
mod service;
mod types;

#[allow(clippy::module_name_repetitions)]
pub use api::{LocalMovieApi, MovieApi};
#[allow(clippy::module_name_repetitions)]
pub use service::{MovieService, MovieServiceBuilder};
pub use types::{
    AlternativeTitle, AlternativeTitlesResponse, CastMember, Credits, CrewMember, ExternalId,
    ExternalIds, Genre, Image, Keyword, KeywordsResponse, List, Movie, MovieImages, PagedResults,
};
