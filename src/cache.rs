//! Contract for the external query-cache layer.
//!
//! The adapter itself never caches. Callers sit a cache in front of it, keyed
//! by operation + arguments, with a per-operation staleness window. This
//! module pins down that key shape and the windows so every caller derives
//! them the same way; the cache implementation lives elsewhere.

use std::time::Duration;

use crate::common::SearchIntent;
use crate::error::ApiError;

/// How long a cached search/popular listing stays fresh.
pub const VIDEOS_STALE: Duration = Duration::from_secs(60);
/// How long cached related-video listings stay fresh.
pub const RELATED_STALE: Duration = Duration::from_secs(5 * 60);
/// How long a cached channel image URL stays fresh.
pub const CHANNEL_STALE: Duration = Duration::from_secs(5 * 60);

/// Cache key: operation name plus argument tuple. Two calls get the same
/// key exactly when they would issue the same provider request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    op: &'static str,
    args: Vec<String>,
}

impl QueryKey {
    /// Key for `search`. Empty and absent keywords share a key, since both
    /// resolve to the most-popular listing.
    pub fn videos(intent: &SearchIntent) -> QueryKey {
        match intent {
            SearchIntent::Keyword(k) => QueryKey {
                op: "videos",
                args: vec![k.clone()],
            },
            SearchIntent::Channel(id) => QueryKey::related(id),
            SearchIntent::Popular => QueryKey {
                op: "videos",
                args: vec![],
            },
        }
    }

    pub fn related(channel_id: &str) -> QueryKey {
        QueryKey {
            op: "related",
            args: vec![channel_id.into()],
        }
    }

    pub fn channel(channel_id: &str) -> QueryKey {
        QueryKey {
            op: "channel",
            args: vec![channel_id.into()],
        }
    }
}

impl std::fmt::Display for QueryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.op)?;
        for a in &self.args {
            write!(f, ":{}", a)?;
        }
        Ok(())
    }
}

/// What a cache layer must provide to sit in front of the adapter:
/// serve a result fresher than `stale` without calling `fetch`, allow at
/// most one in-flight `fetch` per key, and re-fetch once the window expires
/// or the key is invalidated. On cancellation the layer discards the result
/// instead of storing it.
pub trait QueryLayer {
    fn query<T, F>(&self, key: &QueryKey, stale: Duration, fetch: F) -> Result<T, ApiError>
    where
        T: Clone + Send + 'static,
        F: FnOnce() -> Result<T, ApiError>;
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_keys_distinguish_arguments() {
        let a = QueryKey::videos(&SearchIntent::Keyword("a".into()));
        let b = QueryKey::videos(&SearchIntent::Keyword("b".into()));
        assert_ne!(a, b);
        assert_ne!(QueryKey::related("UCx"), QueryKey::channel("UCx"));
    }

    #[test]
    fn test_empty_and_absent_keyword_share_key() {
        let empty = QueryKey::videos(&SearchIntent::from_keyword(Some("")));
        let absent = QueryKey::videos(&SearchIntent::from_keyword(None));
        assert_eq!(empty, absent);
        // ...and neither collides with a real keyword
        assert_ne!(empty, QueryKey::videos(&SearchIntent::Keyword("".into())));
    }

    #[test]
    fn test_display_is_stable() {
        assert_eq!(format!("{}", QueryKey::related("UCx")), "related:UCx");
        assert_eq!(
            format!("{}", QueryKey::videos(&SearchIntent::Popular)),
            "videos"
        );
    }
}
