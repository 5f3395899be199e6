use crate::cancel::CancelToken;
use crate::common::{Snippet, Thumbnails};
use crate::error::ApiError;

/// Search results carry a nested identifier object. `video_id` is absent for
/// non-video hits, which the normalizer treats as a malformed response since
/// every query it issues asks for `type=video`.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RawSearchId {
    pub kind: Option<String>,
    pub video_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RawSearchItem {
    pub id: RawSearchId,
    pub snippet: Snippet,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SearchListResponse {
    pub items: Vec<RawSearchItem>,
}

/// Items from the videos endpoint already carry a flat identifier.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RawVideoItem {
    pub id: String,
    pub snippet: Snippet,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct VideoListResponse {
    pub items: Vec<RawVideoItem>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RawChannelSnippet {
    pub title: Option<String>,
    pub thumbnails: Thumbnails,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RawChannelItem {
    pub snippet: RawChannelSnippet,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ChannelListResponse {
    pub items: Vec<RawChannelItem>,
}

/// Raw access to the three provider endpoints the adapter needs.
///
/// Implementations issue exactly one HTTP GET per call and hand back the
/// parsed body without interpreting it. No retries, no timeouts, no caching -
/// all of that belongs to the caller. Implementations must be safe to share
/// between threads; each call keeps its state on the stack.
pub trait Transport: Send + Sync {
    /// Query the search endpoint. `params` is the full query-parameter set
    /// chosen by the caller (`q`, `channelId`, ordering, page size, ...).
    fn search(
        &self,
        params: &[(&str, &str)],
        cancel: &CancelToken,
    ) -> Result<SearchListResponse, ApiError>;

    /// Query the videos endpoint (chart listings).
    fn videos(
        &self,
        params: &[(&str, &str)],
        cancel: &CancelToken,
    ) -> Result<VideoListResponse, ApiError>;

    /// Query the channels endpoint (channel metadata lookup).
    fn channels(
        &self,
        params: &[(&str, &str)],
        cancel: &CancelToken,
    ) -> Result<ChannelListResponse, ApiError>;
}
