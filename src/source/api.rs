use std::io::Read;

use log::{debug, trace};

use crate::cancel::CancelToken;
use crate::error::ApiError;
use crate::source::base::{ChannelListResponse, SearchListResponse, Transport, VideoListResponse};

fn api_prefix() -> String {
    #[cfg(test)]
    let prefix: String = mockito::server_url();

    #[cfg(not(test))]
    let prefix: String = std::env::var("VIDQ_API_URL")
        .ok()
        .unwrap_or_else(|| "https://www.googleapis.com/youtube/v3".into());

    prefix
}

/// Transport backed by the real provider API over HTTP.
///
/// Stateless apart from the API key, so a single instance can serve any
/// number of concurrent callers.
#[derive(Debug)]
pub struct ApiTransport {
    api_key: String,
}

impl ApiTransport {
    pub fn new(api_key: String) -> ApiTransport {
        ApiTransport { api_key }
    }

    fn request_data<T: serde::de::DeserializeOwned + std::fmt::Debug>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
        cancel: &CancelToken,
    ) -> Result<T, ApiError> {
        let url = format!("{prefix}/{endpoint}", prefix = api_prefix(), endpoint = endpoint);

        if cancel.is_cancelled() {
            return Err(ApiError::Cancelled);
        }

        debug!("Retrieving URL {}", &url);
        let mut req = attohttpc::get(&url);
        for (k, v) in params {
            req = req.param(*k, *v);
        }
        // Key goes last so caller-chosen parameters keep their order
        req = req.param("key", &self.api_key);

        let resp = req.send().map_err(|e| ApiError::transport(&url, e))?;
        let (status, _headers, mut reader) = resp.split();
        if !status.is_success() {
            return Err(ApiError::Status {
                url,
                status: status.as_u16(),
            });
        }

        // Body is read in chunks so a cancelled token can abandon the
        // transfer without waiting for the full payload
        let mut body: Vec<u8> = Vec::new();
        let mut chunk = [0u8; 8192];
        loop {
            if cancel.is_cancelled() {
                return Err(ApiError::Cancelled);
            }
            let n = reader
                .read(&mut chunk)
                .map_err(|e| ApiError::transport(&url, e))?;
            if n == 0 {
                break;
            }
            body.extend_from_slice(&chunk[..n]);
        }
        trace!("Raw response: {}", String::from_utf8_lossy(&body));

        let data: T = serde_json::from_slice(&body)
            .map_err(|e| ApiError::malformed(&url, &e.to_string()))?;
        trace!("Raw deserialisation: {:?}", &data);
        Ok(data)
    }
}

impl Transport for ApiTransport {
    fn search(
        &self,
        params: &[(&str, &str)],
        cancel: &CancelToken,
    ) -> Result<SearchListResponse, ApiError> {
        self.request_data("search", params, cancel)
    }

    fn videos(
        &self,
        params: &[(&str, &str)],
        cancel: &CancelToken,
    ) -> Result<VideoListResponse, ApiError> {
        self.request_data("videos", params, cancel)
    }

    fn channels(
        &self,
        params: &[(&str, &str)],
        cancel: &CancelToken,
    ) -> Result<ChannelListResponse, ApiError> {
        self.request_data("channels", params, cancel)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_search_request_shape() -> Result<(), ApiError> {
        let _m = mockito::mock("GET", "/search?part=snippet&maxResults=25&type=video&order=date&q=trains&key=TESTKEY")
            .with_body_from_file("testdata/search.json")
            .create();

        let t = ApiTransport::new("TESTKEY".into());
        let resp = t.search(
            &[
                ("part", "snippet"),
                ("maxResults", "25"),
                ("type", "video"),
                ("order", "date"),
                ("q", "trains"),
            ],
            &CancelToken::new(),
        )?;
        assert_eq!(resp.items.len(), 2);
        assert_eq!(resp.items[0].id.video_id.as_deref(), Some("vid-aaa-1"));
        Ok(())
    }

    #[test]
    fn test_error_status_propagates() {
        let _m = mockito::mock("GET", "/videos?chart=mostPopular&key=TESTKEY")
            .with_status(403)
            .with_body("{\"error\": \"quota\"}")
            .create();

        let t = ApiTransport::new("TESTKEY".into());
        let err = t
            .videos(&[("chart", "mostPopular")], &CancelToken::new())
            .unwrap_err();
        match err {
            ApiError::Status { status, .. } => assert_eq!(status, 403),
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[test]
    fn test_garbage_body_is_malformed() {
        let _m = mockito::mock("GET", "/channels?id=garbagechan&key=TESTKEY")
            .with_body("garbagenonsense")
            .create();

        let t = ApiTransport::new("TESTKEY".into());
        let err = t
            .channels(&[("id", "garbagechan")], &CancelToken::new())
            .unwrap_err();
        assert!(matches!(err, ApiError::MalformedResponse { .. }));
    }

    #[test]
    fn test_cancelled_before_send() {
        // No mock registered: a cancelled token must short-circuit before
        // any network activity happens
        let t = ApiTransport::new("TESTKEY".into());
        let cancel = CancelToken::new();
        cancel.cancel();
        let err = t.videos(&[("chart", "mostPopular")], &cancel).unwrap_err();
        assert!(matches!(err, ApiError::Cancelled));
    }
}
