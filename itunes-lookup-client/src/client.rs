use crate::{
    Error, Result,
    itunes_models::{SearchResults, album::Album, artist::Artist, track::Track},
    params::{LookupConfig, SearchParams},
    response::{single_artist, single_hit},
    timer::RequestTimer,
};
use reqwest::{
    Method, Response, StatusCode,
    header::{HeaderMap, HeaderValue},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt::Display;
use tracing::{debug, error};

#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    client: reqwest::Client,
    config: LookupConfig,
}

pub fn new(config: LookupConfig) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(
        "User-Agent",
        HeaderValue::from_static(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/111.0.0.0 Safari/537.36",
        ),
    );

    let http_client = reqwest::Client::builder()
        .default_headers(headers)
        .build()?;

    let base_url = "https://ax.itunes.apple.com/WebObjects/MZStoreServices.woa/wa/".to_string();

    Ok(Client {
        client: http_client,
        base_url,
        config,
    })
}

enum Endpoint {
    Search,
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let endpoint = match self {
            Endpoint::Search => "wsSearch",
        };

        f.write_str(endpoint)
    }
}

/// The kind of record a lookup expects back. Drives the `media`, `entity`
/// and `attribute` fields of the outgoing query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    Album,
    Artist,
    Track,
    Raw,
}

impl LookupKind {
    fn media(self) -> &'static str {
        match self {
            LookupKind::Album | LookupKind::Artist | LookupKind::Track => "music",
            LookupKind::Raw => "all",
        }
    }

    fn entity(self) -> &'static str {
        match self {
            LookupKind::Album => "album",
            LookupKind::Artist => "musicArtist",
            LookupKind::Track | LookupKind::Raw => "musicTrack",
        }
    }

    fn attribute(self) -> &'static str {
        match self {
            LookupKind::Album => "albumTerm",
            LookupKind::Artist => "artistTerm",
            LookupKind::Track => "musicTrackTerm",
            LookupKind::Raw => "all",
        }
    }
}

/// Parameters for an album lookup. `artist` is accepted for parity with
/// the other lookups but only the album title feeds the search term.
#[derive(Debug, Clone)]
pub struct AlbumQuery {
    pub artist: String,
    pub album: String,
}

#[derive(Debug, Clone)]
pub struct ArtistQuery {
    pub artist: String,
}

/// Parameters for a track lookup. Like [`AlbumQuery`], only the track
/// title feeds the search term.
#[derive(Debug, Clone)]
pub struct TrackQuery {
    pub artist: String,
    pub track: String,
}

macro_rules! get {
    ($self:ident, $kind:expr, $term:expr) => {
        match $self.make_get_call($kind, $term).await {
            Ok(response) => decode(response.as_str()),
            Err(error) => Err(error),
        }
    };
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    match serde_json::from_str(body) {
        Ok(item) => Ok(item),
        Err(error) => Err(Error::DeserializeJSON {
            message: error.to_string(),
        }),
    }
}

impl Client {
    /// Looks up a single album by title.
    pub async fn lookup_album(&self, query: &AlbumQuery) -> Result<Album> {
        debug!("album lookup for {} by {}", query.album, query.artist);
        let results: SearchResults<Album> = get!(self, LookupKind::Album, &query.album)?;

        single_hit(results)
    }

    /// Looks up a single artist by name. The request goes out and the
    /// hit-count checks run, but extraction always fails with
    /// [`Error::ArtistLookup`] until the record mapping is settled.
    pub async fn lookup_artist(&self, query: &ArtistQuery) -> Result<Artist> {
        debug!("artist lookup for {}", query.artist);
        let results: SearchResults<Artist> = get!(self, LookupKind::Artist, &query.artist)?;

        single_artist(results)
    }

    /// Looks up a single track by title.
    pub async fn lookup_track(&self, query: &TrackQuery) -> Result<Track> {
        debug!("track lookup for {} by {}", query.track, query.artist);
        let results: SearchResults<Track> = get!(self, LookupKind::Track, &query.track)?;

        single_hit(results)
    }

    /// Runs a search and returns the full parsed payload verbatim, with
    /// no hit-count check.
    pub async fn lookup_raw(&self, term: &str) -> Result<Value> {
        get!(self, LookupKind::Raw, term)
    }

    /// A fresh parameter snapshot for one request; nothing is shared or
    /// mutated between lookups.
    fn params_for(&self, kind: LookupKind, term: &str) -> SearchParams {
        let mut params = SearchParams::from_config(&self.config);
        params.media = kind.media().to_string();
        params.entity = kind.entity().to_string();
        params.attribute = kind.attribute().to_string();
        params.term = term.to_string();

        params
    }

    async fn make_get_call(&self, kind: LookupKind, term: &str) -> Result<String> {
        let params = self.params_for(kind, term);
        let endpoint = format!("{}{}", self.base_url, Endpoint::Search);
        let clock = RequestTimer::start();

        debug!("calling {} endpoint, with params {params:?}", endpoint);
        let response = self
            .client
            .request(Method::GET, endpoint.as_str())
            .query(&params.as_query())
            .send()
            .await?;

        let body = self.handle_response(response).await;
        debug!("{kind:?} request completed in {:?}", clock.elapsed());

        body
    }

    async fn handle_response(&self, response: Response) -> Result<String> {
        if response.status() == StatusCode::OK {
            let res = response.text().await?;
            Ok(res)
        } else {
            error!("request failed: {}", response.status());
            Err(Error::Api {
                message: response.status().to_string(),
            })
        }
    }
}
