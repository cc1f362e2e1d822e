use snafu::prelude::*;

pub mod client;
pub mod itunes_models;
pub mod params;
mod response;
mod timer;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Snafu, Debug)]
pub enum Error {
    #[snafu(display("api error: {message}"))]
    Api { message: String },
    #[snafu(display("failed to decode response: {message}"))]
    DeserializeJSON { message: String },
    #[snafu(display("search returned no hits"))]
    NoHits,
    #[snafu(display("search returned {hits} hits, expected exactly one"))]
    TooManyHits { hits: u64 },
    #[snafu(display("search reported a hit but the payload was empty"))]
    EmptyResult,
    #[snafu(display("artist lookup is not yet supported"))]
    ArtistLookup,
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        Self::Api {
            message: value.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::DeserializeJSON {
            message: value.to_string(),
        }
    }
}
