use serde::{Deserialize, Serialize};

/// An iTunes track record, as returned for `entity=musicTrack` searches.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub track_id: i64,
    pub track_name: String,
    pub artist_name: String,
    pub wrapper_type: Option<String>,
    pub kind: Option<String>,
    pub artist_id: Option<i64>,
    pub collection_id: Option<i64>,
    pub collection_name: Option<String>,
    pub track_censored_name: Option<String>,
    pub track_view_url: Option<String>,
    pub preview_url: Option<String>,
    pub artwork_url100: Option<String>,
    pub track_price: Option<f64>,
    pub track_explicitness: Option<String>,
    pub disc_number: Option<u32>,
    pub track_number: Option<u32>,
    pub track_time_millis: Option<u64>,
    pub country: Option<String>,
    pub currency: Option<String>,
    pub primary_genre_name: Option<String>,
    pub release_date: Option<String>,
}
