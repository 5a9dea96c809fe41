//! filmdb - movie metadata query CLI.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;

use filmdb_api::movie::{ExternalId, LocalMovieApi, MovieService};

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands, one per movie API operation.
#[derive(Subcommand)]
enum Commands {
    /// Get movie details.
    Details(DetailsArgs),
    /// Get alternative titles.
    AlternativeTitles(AlternativeTitlesArgs),
    /// Get cast and crew credits.
    Credits(CreditsArgs),
    /// Get external identifiers (IMDb, Facebook, Instagram, Twitter).
    ExternalIds(ExternalIdsArgs),
    /// Get backdrop, logo, and poster images.
    Images(ImagesArgs),
    /// Get keywords.
    Keywords(KeywordsArgs),
    /// Get the user lists containing the movie.
    Lists(ListsArgs),
}

/// Arguments for the `details` subcommand.
#[derive(clap::Args)]
struct DetailsArgs {
    /// Movie ID.
    #[arg(long, required = true)]
    id: u64,
}

/// Arguments for the `alternative-titles` subcommand.
#[derive(clap::Args)]
struct AlternativeTitlesArgs {
    /// Movie ID.
    #[arg(long, required = true)]
    id: u64,
    /// Country filter (ISO 3166-1, e.g. "DE").
    #[arg(long)]
    country: Option<String>,
}

/// Arguments for the `credits` subcommand.
#[derive(clap::Args)]
struct CreditsArgs {
    /// Movie ID.
    #[arg(long, required = true)]
    id: u64,
}

/// Arguments for the `external-ids` subcommand.
#[derive(clap::Args)]
struct ExternalIdsArgs {
    /// Movie ID.
    #[arg(long, required = true)]
    id: u64,
}

/// Arguments for the `images` subcommand.
#[derive(clap::Args)]
struct ImagesArgs {
    /// Movie ID.
    #[arg(long, required = true)]
    id: u64,
    /// Comma-separated image languages (e.g. "en,null").
    #[arg(long, value_delimiter = ',')]
    languages: Option<Vec<String>>,
}

/// Arguments for the `keywords` subcommand.
#[derive(clap::Args)]
struct KeywordsArgs {
    /// Movie ID.
    #[arg(long, required = true)]
    id: u64,
}

/// Arguments for the `lists` subcommand.
#[derive(clap::Args)]
struct ListsArgs {
    /// Movie ID.
    #[arg(long, required = true)]
    id: u64,
    /// Result page.
    #[arg(long)]
    page: Option<u32>,
}

/// Builds a `MovieService` from the `TMDB_API_KEY` environment variable.
///
/// # Errors
///
/// Returns an error if `TMDB_API_KEY` is not set or the client fails to
/// build.
#[instrument(skip_all)]
fn build_movie_service() -> Result<MovieService> {
    let api_key =
        std::env::var("TMDB_API_KEY").context("TMDB_API_KEY environment variable is required")?;

    MovieService::builder()
        .api_key(api_key)
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()
        .context("failed to build movie API client")
}

/// Runs the `details` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_details(args: &DetailsArgs) -> Result<()> {
    let service = build_movie_service()?;

    let movie = service
        .details(args.id)
        .await
        .context("movie details request failed")?;

    tracing::info!("ID: {}", movie.id);
    tracing::info!("Title: {}", movie.title);
    tracing::info!("Original Title: {}", movie.original_title);
    tracing::info!(
        "Release Date: {}",
        movie.release_date.as_deref().unwrap_or("-")
    );
    tracing::info!(
        "Runtime: {}",
        movie
            .runtime
            .map_or_else(|| String::from("-"), |r| format!("{r} min")),
    );
    tracing::info!("Status: {}", movie.status.as_deref().unwrap_or("-"));
    tracing::info!(
        "Genres: {}",
        movie
            .genres
            .iter()
            .map(|g| g.name.as_str())
            .collect::<Vec<_>>()
            .join(", "),
    );
    if let Some(overview) = &movie.overview {
        tracing::info!("Overview: {overview}");
    }

    Ok(())
}

/// Runs the `alternative-titles` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_alternative_titles(args: &AlternativeTitlesArgs) -> Result<()> {
    let service = build_movie_service()?;

    let titles = service
        .alternative_titles(args.id, args.country.as_deref())
        .await
        .context("alternative titles request failed")?;

    tracing::info!("Country\tType\t\tTitle");
    for title in &titles {
        tracing::info!(
            "{}\t{}\t{}",
            title.iso_3166_1,
            title.title_type.as_deref().filter(|t| !t.is_empty()).unwrap_or("-"),
            title.title,
        );
    }
    tracing::info!("Total: {} titles", titles.len());

    Ok(())
}

/// Runs the `credits` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_credits(args: &CreditsArgs) -> Result<()> {
    let service = build_movie_service()?;

    let credits = service
        .credits(args.id)
        .await
        .context("credits request failed")?;

    tracing::info!("Cast:");
    for member in &credits.cast {
        tracing::info!(
            "  {}\t{}\tas {}",
            member
                .order
                .map_or_else(|| String::from("-"), |o| o.to_string()),
            member.name,
            member.character.as_deref().unwrap_or("-"),
        );
    }
    tracing::info!("Crew:");
    for member in &credits.crew {
        tracing::info!("  {}\t{} ({})", member.name, member.job, member.department);
    }

    Ok(())
}

/// Runs the `external-ids` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_external_ids(args: &ExternalIdsArgs) -> Result<()> {
    let service = build_movie_service()?;

    let ids = service
        .external_ids(args.id)
        .await
        .context("external IDs request failed")?;

    for id in &ids {
        let (provider, value) = match id {
            ExternalId::Imdb(v) => ("IMDb", v),
            ExternalId::Facebook(v) => ("Facebook", v),
            ExternalId::Instagram(v) => ("Instagram", v),
            ExternalId::Twitter(v) => ("Twitter", v),
        };
        tracing::info!("{}\t{}", provider, value);
    }
    tracing::info!("Total: {} identifiers", ids.len());

    Ok(())
}

/// Runs the `images` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_images(args: &ImagesArgs) -> Result<()> {
    let service = build_movie_service()?;

    let images = service
        .images(args.id, args.languages.as_deref())
        .await
        .context("images request failed")?;

    tracing::info!("Backdrops ({}):", images.backdrops.len());
    for image in &images.backdrops {
        tracing::info!("  {} ({}x{})", image.file_path, image.width, image.height);
    }
    tracing::info!("Logos ({}):", images.logos.len());
    for image in &images.logos {
        tracing::info!("  {} ({}x{})", image.file_path, image.width, image.height);
    }
    tracing::info!("Posters ({}):", images.posters.len());
    for image in &images.posters {
        tracing::info!("  {} ({}x{})", image.file_path, image.width, image.height);
    }

    Ok(())
}

/// Runs the `keywords` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_keywords(args: &KeywordsArgs) -> Result<()> {
    let service = build_movie_service()?;

    let keywords = service
        .keywords(args.id)
        .await
        .context("keywords request failed")?;

    for keyword in &keywords {
        tracing::info!("{}\t{}", keyword.id, keyword.name);
    }
    tracing::info!("Total: {} keywords", keywords.len());

    Ok(())
}

/// Runs the `lists` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_lists(args: &ListsArgs) -> Result<()> {
    let service = build_movie_service()?;

    let paged = service
        .lists(args.id, args.page)
        .await
        .context("lists request failed")?;

    tracing::info!(
        "Page {}/{} ({} results total)",
        paged.page,
        paged.total_pages,
        paged.total_results,
    );
    tracing::info!("ID\tItems\tName");
    for list in &paged.results {
        tracing::info!("{}\t{}\t{}", list.id, list.item_count, list.name);
    }

    Ok(())
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Details(args) => run_details(&args).await,
        Commands::AlternativeTitles(args) => run_alternative_titles(&args).await,
        Commands::Credits(args) => run_credits(&args).await,
        Commands::ExternalIds(args) => run_external_ids(&args).await,
        Commands::Images(args) => run_images(&args).await,
        Commands::Keywords(args) => run_keywords(&args).await,
        Commands::Lists(args) => run_lists(&args).await,
    }
}
