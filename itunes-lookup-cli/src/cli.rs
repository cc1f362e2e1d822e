use clap::{Parser, Subcommand};
use itunes_lookup_client::{
    client::{self, AlbumQuery, ArtistQuery, TrackQuery},
    params::LookupConfig,
};
use snafu::prelude::*;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Two-letter store country code.
    #[clap(long, default_value = "us")]
    country: String,

    /// Result language.
    #[clap(long, default_value = "en_us")]
    lang: String,

    /// Maximum number of records to request.
    #[clap(long, default_value_t = 1)]
    limit: u32,

    /// Include explicit results (Yes/No).
    #[clap(long, default_value = "Yes")]
    explicit: String,

    #[clap(short, long)]
    /// Log level
    verbosity: Option<tracing::Level>,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a single album by title.
    Album {
        #[clap(long)]
        artist: String,
        #[clap(long)]
        album: String,
    },
    /// Look up a single artist by name.
    Artist {
        #[clap(long)]
        artist: String,
    },
    /// Look up a single track by title.
    Track {
        #[clap(long)]
        artist: String,
        #[clap(long)]
        track: String,
    },
    /// Search and print the raw response payload.
    Raw {
        term: String,
    },
}

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("{error}"))]
    ClientError { error: String },
    #[snafu(display("{error}"))]
    OutputError { error: String },
}

impl From<itunes_lookup_client::Error> for Error {
    fn from(error: itunes_lookup_client::Error) -> Self {
        Error::ClientError {
            error: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::OutputError {
            error: error.to_string(),
        }
    }
}

pub async fn run() -> Result<(), Error> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.verbosity)
        .with_target(false)
        .compact()
        .init();

    let client = client::new(LookupConfig {
        country: cli.country,
        lang: cli.lang,
        limit: cli.limit,
        explicit: cli.explicit,
    })?;

    match cli.command {
        Commands::Album { artist, album } => {
            let album = client.lookup_album(&AlbumQuery { artist, album }).await?;
            println!("{}", serde_json::to_string_pretty(&album)?);
        }
        Commands::Artist { artist } => {
            let artist = client.lookup_artist(&ArtistQuery { artist }).await?;
            println!("{}", serde_json::to_string_pretty(&artist)?);
        }
        Commands::Track { artist, track } => {
            let track = client.lookup_track(&TrackQuery { artist, track }).await?;
            println!("{}", serde_json::to_string_pretty(&track)?);
        }
        Commands::Raw { term } => {
            let payload = client.lookup_raw(&term).await?;
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
    }

    Ok(())
}
