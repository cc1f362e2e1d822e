use serde::{Deserialize, Serialize};

/// An iTunes artist record, as returned for `entity=musicArtist` searches.
///
/// The schema is modeled but extraction is not wired up yet; artist lookups
/// fail with [`crate::Error::ArtistLookup`] after the hit-count checks.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub artist_id: i64,
    pub artist_name: String,
    pub wrapper_type: Option<String>,
    pub artist_type: Option<String>,
    pub artist_link_url: Option<String>,
    pub primary_genre_name: Option<String>,
    pub primary_genre_id: Option<i64>,
    pub amg_artist_id: Option<i64>,
}
