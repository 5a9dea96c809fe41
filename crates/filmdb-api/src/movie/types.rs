//! Movie API response models.

use serde::{Deserialize, Serialize};

// --- Details ---

/// Response from the `movie/{movie_id}` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Movie ID.
    pub id: u64,
    /// Localized title.
    pub title: String,
    /// Original title.
    pub original_title: String,
    /// Original language (ISO 639-1).
    pub original_language: String,
    /// Overview text.
    pub overview: Option<String>,
    /// Tagline.
    pub tagline: Option<String>,
    /// Release date (YYYY-MM-DD or null).
    pub release_date: Option<String>,
    /// Runtime in minutes.
    pub runtime: Option<u32>,
    /// Genres.
    pub genres: Vec<Genre>,
    /// Popularity score.
    pub popularity: f64,
    /// Vote average.
    pub vote_average: f64,
    /// Vote count.
    pub vote_count: u32,
    /// Adult flag.
    pub adult: bool,
    /// Video flag.
    pub video: bool,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
    /// IMDb ID.
    pub imdb_id: Option<String>,
    /// Status (e.g. "Released").
    pub status: Option<String>,
}

/// Genre entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    /// Genre ID.
    pub id: u32,
    /// Genre name.
    pub name: String,
}

// --- Alternative Titles ---

/// Response envelope from the `movie/{movie_id}/alternative_titles` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternativeTitlesResponse {
    /// Movie ID.
    pub id: u64,
    /// Alternative title records.
    pub titles: Vec<AlternativeTitle>,
}

/// A single alternative title record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternativeTitle {
    /// Country the title is used in (ISO 3166-1).
    pub iso_3166_1: String,
    /// The title itself.
    pub title: String,
    /// Title kind (e.g. "working title"), empty or absent for plain titles.
    #[serde(rename = "type", default)]
    pub title_type: Option<String>,
}

// --- Credits ---

/// Response from the `movie/{movie_id}/credits` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credits {
    /// Movie ID.
    pub id: u64,
    /// Cast members, in billing order.
    pub cast: Vec<CastMember>,
    /// Crew members.
    pub crew: Vec<CrewMember>,
}

/// A single cast credit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMember {
    /// Person ID.
    pub id: u64,
    /// Person name.
    pub name: String,
    /// Character played.
    pub character: Option<String>,
    /// Billing order.
    pub order: Option<u32>,
    /// Profile image path.
    pub profile_path: Option<String>,
}

/// A single crew credit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewMember {
    /// Person ID.
    pub id: u64,
    /// Person name.
    pub name: String,
    /// Job (e.g. "Director").
    pub job: String,
    /// Department (e.g. "Directing").
    pub department: String,
    /// Profile image path.
    pub profile_path: Option<String>,
}

// --- External IDs ---

/// Response from the `movie/{movie_id}/external_ids` endpoint.
///
/// A sparse record: every identifier field may be absent or null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalIds {
    /// Movie ID.
    pub id: u64,
    /// IMDb ID (e.g. "tt0137523").
    #[serde(default)]
    pub imdb_id: Option<String>,
    /// Facebook handle.
    #[serde(default)]
    pub facebook_id: Option<String>,
    /// Instagram handle.
    #[serde(default)]
    pub instagram_id: Option<String>,
    /// Twitter handle.
    #[serde(default)]
    pub twitter_id: Option<String>,
}

impl ExternalIds {
    /// Projects the sparse record into the identifiers that are present,
    /// each tagged with its provider.
    ///
    /// Order is fixed: IMDb, Facebook, Instagram, Twitter.
    #[must_use]
    pub fn into_ids(self) -> Vec<ExternalId> {
        let mut ids = Vec::new();
        if let Some(imdb) = self.imdb_id {
            ids.push(ExternalId::Imdb(imdb));
        }
        if let Some(facebook) = self.facebook_id {
            ids.push(ExternalId::Facebook(facebook));
        }
        if let Some(instagram) = self.instagram_id {
            ids.push(ExternalId::Instagram(instagram));
        }
        if let Some(twitter) = self.twitter_id {
            ids.push(ExternalId::Twitter(twitter));
        }
        ids
    }
}

/// A present external identifier, tagged with its provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExternalId {
    /// IMDb identifier.
    Imdb(String),
    /// Facebook handle.
    Facebook(String),
    /// Instagram handle.
    Instagram(String),
    /// Twitter handle.
    Twitter(String),
}

// --- Images ---

/// Response from the `movie/{movie_id}/images` endpoint.
///
/// The three collections are independent and preserve server order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieImages {
    /// Movie ID.
    pub id: u64,
    /// Backdrop images.
    pub backdrops: Vec<Image>,
    /// Logo images.
    pub logos: Vec<Image>,
    /// Poster images.
    pub posters: Vec<Image>,
}

/// A single image record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// Image file path.
    pub file_path: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Aspect ratio.
    pub aspect_ratio: f64,
    /// Image language (ISO 639-1), null for language-neutral images.
    pub iso_639_1: Option<String>,
    /// Vote average.
    pub vote_average: f64,
    /// Vote count.
    pub vote_count: u32,
}

// --- Keywords ---

/// Response envelope from the `movie/{movie_id}/keywords` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordsResponse {
    /// Movie ID.
    pub id: u64,
    /// Keywords attached to the movie.
    pub keywords: Vec<Keyword>,
}

/// A single keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    /// Keyword ID.
    pub id: u64,
    /// Keyword text.
    pub name: String,
}

// --- Lists ---

/// Paged response envelope used by the `movie/{movie_id}/lists` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedResults<T> {
    /// Current page number.
    pub page: u32,
    /// Total number of pages.
    pub total_pages: u32,
    /// Total number of results.
    pub total_results: u32,
    /// Results on this page, in server order.
    pub results: Vec<T>,
}

/// A user list containing the movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    /// List ID.
    pub id: u64,
    /// List name.
    pub name: String,
    /// List description.
    pub description: Option<String>,
    /// Number of users who favorited the list.
    pub favorite_count: u32,
    /// Number of items on the list.
    pub item_count: u32,
    /// List language (ISO 639-1).
    pub iso_639_1: Option<String>,
    /// List kind (e.g. "movie").
    pub list_type: Option<String>,
    /// Poster image path.
    pub poster_path: Option<String>,
}
