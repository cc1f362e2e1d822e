use crate::{Error, Result, itunes_models::SearchResults, itunes_models::artist::Artist};
use tracing::debug;

/// Resolves a search envelope that must contain exactly one record.
///
/// The reported hit count is authoritative: zero and more-than-one are
/// errors, and a count of one with an empty record list means the store
/// sent an unusable payload.
pub(crate) fn single_hit<T>(results: SearchResults<T>) -> Result<T> {
    match results.result_count {
        0 => Err(Error::NoHits),
        1 => {
            debug!("single hit, extracting record");
            results.results.into_iter().next().ok_or(Error::EmptyResult)
        }
        hits => Err(Error::TooManyHits { hits }),
    }
}

/// Artist responses get the same hit-count checks, but the record mapping
/// is not settled yet, so a well-formed single hit still fails.
pub(crate) fn single_artist(results: SearchResults<Artist>) -> Result<Artist> {
    single_hit(results)?;
    Err(Error::ArtistLookup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::itunes_models::{album::Album, track::Track};

    fn album_envelope(result_count: u64, records: usize) -> SearchResults<Album> {
        SearchResults {
            result_count,
            results: (0..records)
                .map(|i| Album {
                    collection_id: i as i64,
                    artist_name: "Metallica".to_string(),
                    collection_name: "Metallica".to_string(),
                    ..Album::default()
                })
                .collect(),
        }
    }

    #[test]
    fn zero_hits_is_an_error() {
        assert!(matches!(
            single_hit(album_envelope(0, 0)),
            Err(Error::NoHits)
        ));

        let tracks: SearchResults<Track> = SearchResults::default();
        assert!(matches!(single_hit(tracks), Err(Error::NoHits)));
    }

    #[test]
    fn more_than_one_hit_is_an_error() {
        assert!(matches!(
            single_hit(album_envelope(3, 3)),
            Err(Error::TooManyHits { hits: 3 })
        ));
    }

    #[test]
    fn exactly_one_hit_extracts_the_record() {
        let album = single_hit(album_envelope(1, 1)).unwrap();
        assert_eq!(album.collection_name, "Metallica");
    }

    #[test]
    fn one_hit_with_empty_results_is_an_error() {
        assert!(matches!(
            single_hit(album_envelope(1, 0)),
            Err(Error::EmptyResult)
        ));
    }

    #[test]
    fn artist_hit_checks_run_before_the_unsupported_error() {
        let empty: SearchResults<Artist> = SearchResults::default();
        assert!(matches!(single_artist(empty), Err(Error::NoHits)));

        let one = SearchResults {
            result_count: 1,
            results: vec![Artist {
                artist_id: 3996865,
                artist_name: "Metallica".to_string(),
                ..Artist::default()
            }],
        };
        assert!(matches!(single_artist(one), Err(Error::ArtistLookup)));
    }
}
