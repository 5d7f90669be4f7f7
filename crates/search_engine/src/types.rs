use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type Generation = u64;

/// Article record as returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Article {
    pub id: u64,
    /// May carry `<em class='highlight'>` markup around matched terms.
    pub title: String,
    pub link: String,
    pub author: String,
    pub share_user: String,
    pub nice_date: String,
    pub chapter_name: String,
    pub super_chapter_name: String,
}

impl Article {
    /// Author name, falling back to the sharing user for shared links.
    pub fn display_author(&self) -> &str {
        if self.author.is_empty() {
            &self.share_user
        } else {
            &self.author
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArticlePage {
    pub cur_page: u32,
    pub page_count: u32,
    pub over: bool,
    pub datas: Vec<Article>,
}

/// Common wrapper around every API payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Envelope<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub error_code: i64,
    #[serde(default)]
    pub error_msg: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HotKey {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    HotKeywordsLoaded(Result<Vec<String>, FetchError>),
    PageLoaded {
        generation: Generation,
        page: u32,
        result: Result<Vec<Article>, FetchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Decode,
    Api { code: i64 },
    Cancelled,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Decode => write!(f, "malformed response"),
            FailureKind::Api { code } => write!(f, "api error code {code}"),
            FailureKind::Cancelled => write!(f, "cancelled"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
