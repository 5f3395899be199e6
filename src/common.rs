/// What the caller is asking the search-family operations for.
///
/// Replaces the provider's duck-typed parameter object with an explicit
/// variant, so "keyword search", "videos in channel" and "most popular"
/// can never be confused by a missing field.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchIntent {
    Keyword(String),
    Channel(String),
    Popular,
}

impl SearchIntent {
    /// Build an intent from an optional keyword, as supplied by a search box
    /// or URL fragment. An absent *or* empty keyword falls back to the
    /// most-popular listing - the two are deliberately interchangeable.
    pub fn from_keyword(keyword: Option<&str>) -> SearchIntent {
        match keyword {
            Some(k) if !k.is_empty() => SearchIntent::Keyword(k.into()),
            _ => SearchIntent::Popular,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ThumbnailInfo {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Thumbnails {
    pub default: Option<ThumbnailInfo>,
    pub medium: Option<ThumbnailInfo>,
    pub high: Option<ThumbnailInfo>,
}

/// Video metadata as the provider reports it. Passed through normalization
/// untouched.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub published_at: String,
    pub title: String,
    pub description: String,
    pub thumbnails: Thumbnails,
    #[serde(default)]
    pub channel_id: String,
    #[serde(default)]
    pub channel_title: String,
}

/// Normalized video record: the identifier is always a flat string, no
/// matter which endpoint it came from.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct VideoRecord {
    pub id: String,
    pub snippet: Snippet,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_intent_from_keyword() {
        assert_eq!(
            SearchIntent::from_keyword(Some("cats")),
            SearchIntent::Keyword("cats".into())
        );
        // Empty and absent keywords are the same thing: most-popular
        assert_eq!(SearchIntent::from_keyword(Some("")), SearchIntent::Popular);
        assert_eq!(SearchIntent::from_keyword(None), SearchIntent::Popular);
    }
}
