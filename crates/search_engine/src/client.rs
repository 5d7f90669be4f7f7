use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;
use search_logging::search_debug;
use serde::de::DeserializeOwned;

use crate::types::{Envelope, HotKey};
use crate::{ArticlePage, FailureKind, FetchError};

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "https://www.wanandroid.com".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 2 * 1024 * 1024,
        }
    }
}

/// The two remote operations the search screen consumes.
#[async_trait::async_trait]
pub trait SearchApi: Send + Sync {
    async fn hot_keywords(&self) -> Result<Vec<String>, FetchError>;

    async fn search_articles(&self, page: u32, keyword: &str) -> Result<ArticlePage, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestSearchApi {
    settings: ClientSettings,
    client: reqwest::Client,
}

impl ReqwestSearchApi {
    pub fn new(settings: ClientSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn endpoint(&self, path: &str) -> Result<reqwest::Url, FetchError> {
        let joined = format!("{}/{}", self.settings.base_url.trim_end_matches('/'), path);
        reqwest::Url::parse(&joined)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, FetchError> {
        let response = request.send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(too_large(max_bytes, content_len));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(too_large(max_bytes, next_len));
            }
            bytes.extend_from_slice(&chunk);
        }

        let envelope: Envelope<T> = serde_json::from_slice(&bytes)
            .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))?;
        if envelope.error_code != 0 {
            return Err(FetchError::new(
                FailureKind::Api {
                    code: envelope.error_code,
                },
                envelope.error_msg,
            ));
        }
        envelope
            .data
            .ok_or_else(|| FetchError::new(FailureKind::Decode, "response has no data"))
    }
}

#[async_trait::async_trait]
impl SearchApi for ReqwestSearchApi {
    async fn hot_keywords(&self) -> Result<Vec<String>, FetchError> {
        let url = self.endpoint("hotkey/json")?;
        search_debug!("GET {}", url);
        let keys: Vec<HotKey> = self.fetch_json(self.client.get(url)).await?;
        Ok(keys.into_iter().map(|key| key.name).collect())
    }

    async fn search_articles(&self, page: u32, keyword: &str) -> Result<ArticlePage, FetchError> {
        let url = self.endpoint(&format!("article/query/{page}/json"))?;
        search_debug!("POST {} keyword_len={}", url, keyword.len());
        let body = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("k", keyword)
            .finish();
        let request = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body);
        self.fetch_json(request).await
    }
}

fn too_large(max_bytes: u64, actual: u64) -> FetchError {
    FetchError::new(
        FailureKind::TooLarge {
            max_bytes,
            actual: Some(actual),
        },
        "response too large",
    )
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
