use thiserror::Error;

/// Failures surfaced by the transport and normalizer. No recovery is
/// attempted at this layer - every error propagates to the caller, which
/// decides whether to retry, show a fallback, or give up.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("malformed response from {url}: {reason}")]
    MalformedResponse { url: String, reason: String },

    #[error("no channel found for id {channel_id:?}")]
    ChannelNotFound { channel_id: String },

    #[error("refusing to query related videos with an empty channel id")]
    EmptyChannelId,

    #[error("request cancelled")]
    Cancelled,
}

impl ApiError {
    pub(crate) fn transport<E>(url: &str, source: E) -> ApiError
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ApiError::Transport {
            url: url.into(),
            source: Box::new(source),
        }
    }

    pub(crate) fn malformed(url: &str, reason: &str) -> ApiError {
        ApiError::MalformedResponse {
            url: url.into(),
            reason: reason.into(),
        }
    }
}
