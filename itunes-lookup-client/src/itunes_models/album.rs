use serde::{Deserialize, Serialize};

/// An iTunes collection record, as returned for `entity=album` searches.
///
/// The store omits fields freely depending on the record, so everything
/// beyond the identifying trio is optional.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub collection_id: i64,
    pub artist_name: String,
    pub collection_name: String,
    pub wrapper_type: Option<String>,
    pub collection_type: Option<String>,
    pub artist_id: Option<i64>,
    pub collection_censored_name: Option<String>,
    pub artist_view_url: Option<String>,
    pub collection_view_url: Option<String>,
    pub artwork_url60: Option<String>,
    pub artwork_url100: Option<String>,
    pub collection_price: Option<f64>,
    pub collection_explicitness: Option<String>,
    pub track_count: Option<u32>,
    pub copyright: Option<String>,
    pub country: Option<String>,
    pub currency: Option<String>,
    pub release_date: Option<String>,
    pub primary_genre_name: Option<String>,
}
