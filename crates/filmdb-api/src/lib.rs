//! Movie metadata API client library for filmdb.
//!
//! Provides a typed async client for the movie endpoints of a TMDB v3 style
//! metadata service, with an awaitable and a completion-callback calling
//! convention over one request core.

/// Typed errors and result alias.
pub mod error;
/// Movie metadata API client.
pub mod movie;
/// HTTP transport seam.
pub mod transport;

pub use error::{Error, Result};
