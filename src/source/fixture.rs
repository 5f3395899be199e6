use std::path::PathBuf;

use log::debug;

use crate::cancel::CancelToken;
use crate::error::ApiError;
use crate::source::base::{ChannelListResponse, SearchListResponse, Transport, VideoListResponse};

/// Transport serving canned responses from JSON files on disk, for offline
/// development and tests. Mirrors the real endpoints: a search with a
/// `channelId` parameter reads `related.json`, other searches read
/// `search.json`, the videos endpoint reads `popular.json` and the channels
/// endpoint reads `channel.json`.
#[derive(Debug)]
pub struct FixtureTransport {
    dir: PathBuf,
}

impl FixtureTransport {
    pub fn new(dir: PathBuf) -> FixtureTransport {
        FixtureTransport { dir }
    }

    fn load<T: serde::de::DeserializeOwned>(
        &self,
        name: &str,
        cancel: &CancelToken,
    ) -> Result<T, ApiError> {
        if cancel.is_cancelled() {
            return Err(ApiError::Cancelled);
        }
        let path = self.dir.join(name);
        let shown = path.display().to_string();
        debug!("Loading fixture {}", &shown);
        let body = std::fs::read(&path).map_err(|e| ApiError::transport(&shown, e))?;
        serde_json::from_slice(&body).map_err(|e| ApiError::malformed(&shown, &e.to_string()))
    }
}

impl Transport for FixtureTransport {
    fn search(
        &self,
        params: &[(&str, &str)],
        cancel: &CancelToken,
    ) -> Result<SearchListResponse, ApiError> {
        let related = params.iter().any(|(k, _)| *k == "channelId");
        let name = if related { "related.json" } else { "search.json" };
        self.load(name, cancel)
    }

    fn videos(
        &self,
        _params: &[(&str, &str)],
        cancel: &CancelToken,
    ) -> Result<VideoListResponse, ApiError> {
        self.load("popular.json", cancel)
    }

    fn channels(
        &self,
        _params: &[(&str, &str)],
        cancel: &CancelToken,
    ) -> Result<ChannelListResponse, ApiError> {
        self.load("channel.json", cancel)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_routes_on_channel_id() -> Result<(), ApiError> {
        let t = FixtureTransport::new("testdata".into());
        let cancel = CancelToken::new();

        let plain = t.search(&[("q", "trains")], &cancel)?;
        assert_eq!(plain.items[0].id.video_id.as_deref(), Some("vid-aaa-1"));

        let related = t.search(&[("channelId", "UCrelated")], &cancel)?;
        assert_eq!(related.items[0].id.video_id.as_deref(), Some("rel-vid-1"));
        Ok(())
    }

    #[test]
    fn test_missing_file_is_transport_error() {
        let t = FixtureTransport::new("testdata/does-not-exist".into());
        let err = t.videos(&[], &CancelToken::new()).unwrap_err();
        assert!(matches!(err, ApiError::Transport { .. }));
    }
}
