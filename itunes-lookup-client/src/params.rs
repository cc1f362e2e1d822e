use url::form_urlencoded;

/// Defaults shared by every lookup on a client.
///
/// These are the wsSearch fields a caller is likely to want to override
/// without touching the per-lookup `media`/`entity`/`attribute` mapping.
/// Values go on the wire as-is; the store is the validator.
#[derive(Debug, Clone)]
pub struct LookupConfig {
    /// Two-letter store country code.
    pub country: String,
    /// Result language, e.g. `en_us`.
    pub lang: String,
    /// Maximum number of records to request.
    pub limit: u32,
    /// Whether explicit results are included, `Yes` or `No`.
    pub explicit: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            country: "us".to_string(),
            lang: "en_us".to_string(),
            limit: 1,
            explicit: "Yes".to_string(),
        }
    }
}

/// One request's worth of wsSearch query fields.
///
/// Built fresh for every lookup from the client's `LookupConfig`, never
/// shared between requests. Field order matches the wire order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub term: String,
    pub country: String,
    pub media: String,
    pub entity: String,
    pub attribute: String,
    pub limit: String,
    pub lang: String,
    pub version: String,
    pub explicit: String,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            term: String::new(),
            country: "us".to_string(),
            media: "all".to_string(),
            entity: "musicTrack".to_string(),
            attribute: "all".to_string(),
            limit: "1".to_string(),
            lang: "en_us".to_string(),
            version: "2".to_string(),
            explicit: "Yes".to_string(),
        }
    }
}

impl SearchParams {
    pub fn from_config(config: &LookupConfig) -> Self {
        Self {
            country: config.country.clone(),
            lang: config.lang.clone(),
            limit: config.limit.to_string(),
            explicit: config.explicit.clone(),
            ..Self::default()
        }
    }

    /// The nine query pairs in field order.
    pub fn as_query(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("term", self.term.as_str()),
            ("country", self.country.as_str()),
            ("media", self.media.as_str()),
            ("entity", self.entity.as_str()),
            ("attribute", self.attribute.as_str()),
            ("limit", self.limit.as_str()),
            ("lang", self.lang.as_str()),
            ("version", self.version.as_str()),
            ("explicit", self.explicit.as_str()),
        ]
    }

    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, value) in self.as_query() {
            serializer.append_pair(name, value);
        }
        serializer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_serialize_in_field_order() {
        let params = SearchParams::default();
        assert_eq!(
            params.to_query_string(),
            "term=&country=us&media=all&entity=musicTrack&attribute=all\
             &limit=1&lang=en_us&version=2&explicit=Yes"
        );
    }

    #[test]
    fn query_string_round_trips() {
        let params = SearchParams {
            term: "Black Album".to_string(),
            entity: "album".to_string(),
            attribute: "albumTerm".to_string(),
            media: "music".to_string(),
            ..SearchParams::default()
        };

        let encoded = params.to_query_string();
        let decoded: Vec<(String, String)> = form_urlencoded::parse(encoded.as_bytes())
            .into_owned()
            .collect();

        let expected: Vec<(String, String)> = params
            .as_query()
            .into_iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();

        assert_eq!(decoded, expected);
    }

    #[test]
    fn from_config_overrides_shared_fields_only() {
        let config = LookupConfig {
            country: "gb".to_string(),
            lang: "en_gb".to_string(),
            limit: 5,
            explicit: "No".to_string(),
        };

        let params = SearchParams::from_config(&config);

        assert_eq!(params.country, "gb");
        assert_eq!(params.lang, "en_gb");
        assert_eq!(params.limit, "5");
        assert_eq!(params.explicit, "No");
        assert_eq!(params.term, "");
        assert_eq!(params.entity, "musicTrack");
        assert_eq!(params.version, "2");
    }
}
