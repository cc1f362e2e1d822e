use serde::{Deserialize, Serialize};

pub mod album;
pub mod artist;
pub mod track;

/// Envelope every wsSearch response shares: a hit count plus the records.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults<T> {
    pub result_count: u64,
    pub results: Vec<T>,
}
