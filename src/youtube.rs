use log::debug;

use crate::cancel::CancelToken;
use crate::common::{SearchIntent, VideoRecord};
use crate::error::ApiError;
use crate::source::base::{SearchListResponse, Transport};

/// Fixed page size for every listing the adapter requests. No further pages
/// are fetched.
const MAX_RESULTS: &str = "25";

/// Normalizer over a [`Transport`]: turns semantic intents into provider
/// calls with the right fixed parameters, and reshapes the raw payloads into
/// [`VideoRecord`]s with flat identifiers.
///
/// Construct one per application and share it by reference; each operation
/// issues exactly one outbound call and keeps all state on the stack, so
/// concurrent callers never interfere.
pub struct Youtube {
    client: Box<dyn Transport>,
}

impl Youtube {
    pub fn new(client: Box<dyn Transport>) -> Youtube {
        Youtube { client }
    }

    /// Run a search-family query. Keyword and channel queries hit the search
    /// endpoint (newest first) and need their nested `id.videoId` flattened;
    /// the most-popular chart comes from the videos endpoint with flat ids
    /// already in place.
    pub fn search(
        &self,
        intent: &SearchIntent,
        cancel: &CancelToken,
    ) -> Result<Vec<VideoRecord>, ApiError> {
        match intent {
            SearchIntent::Keyword(q) => {
                debug!("Searching videos matching {:?}", q);
                let resp = self.client.search(
                    &[
                        ("part", "snippet"),
                        ("maxResults", MAX_RESULTS),
                        ("type", "video"),
                        ("order", "date"),
                        ("q", q),
                    ],
                    cancel,
                )?;
                flatten_search(resp)
            }
            SearchIntent::Channel(id) => {
                debug!("Listing videos in channel {:?}", id);
                let resp = self.client.search(
                    &[
                        ("part", "snippet"),
                        ("maxResults", MAX_RESULTS),
                        ("type", "video"),
                        ("order", "date"),
                        ("channelId", id),
                    ],
                    cancel,
                )?;
                flatten_search(resp)
            }
            SearchIntent::Popular => {
                debug!("Listing most popular videos");
                let resp = self.client.videos(
                    &[
                        ("part", "snippet"),
                        ("maxResults", MAX_RESULTS),
                        ("chart", "mostPopular"),
                    ],
                    cancel,
                )?;
                Ok(resp
                    .items
                    .into_iter()
                    .map(|item| VideoRecord {
                        id: item.id,
                        snippet: item.snippet,
                    })
                    .collect())
            }
        }
    }

    /// Videos from the same channel, newest first. An empty channel id is
    /// rejected before any network call rather than forwarded as an empty
    /// filter the provider would interpret however it likes.
    pub fn related(
        &self,
        channel_id: &str,
        cancel: &CancelToken,
    ) -> Result<Vec<VideoRecord>, ApiError> {
        if channel_id.is_empty() {
            return Err(ApiError::EmptyChannelId);
        }
        self.search(&SearchIntent::Channel(channel_id.into()), cancel)
    }

    /// Default-quality thumbnail URL for a channel.
    pub fn channel_image_url(
        &self,
        channel_id: &str,
        cancel: &CancelToken,
    ) -> Result<String, ApiError> {
        debug!("Looking up channel image for {:?}", channel_id);
        let resp = self
            .client
            .channels(&[("part", "snippet"), ("id", channel_id)], cancel)?;

        let item = resp
            .items
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::ChannelNotFound {
                channel_id: channel_id.into(),
            })?;
        let thumb = item
            .snippet
            .thumbnails
            .default
            .ok_or_else(|| ApiError::malformed("channels", "channel missing default thumbnail"))?;
        Ok(thumb.url)
    }
}

/// Flatten `id.videoId` into the record id. Every query asks for
/// `type=video`, so a hit without a video id means the provider returned
/// something other than what was requested.
fn flatten_search(resp: SearchListResponse) -> Result<Vec<VideoRecord>, ApiError> {
    resp.items
        .into_iter()
        .map(|item| {
            let id = item
                .id
                .video_id
                .ok_or_else(|| ApiError::malformed("search", "search item missing id.videoId"))?;
            Ok(VideoRecord {
                id,
                snippet: item.snippet,
            })
        })
        .collect()
}
