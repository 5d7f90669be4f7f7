//! Search engine: remote API client and background request execution.
mod client;
mod engine;
mod markup;
mod types;

pub use client::{ClientSettings, ReqwestSearchApi, SearchApi};
pub use engine::EngineHandle;
pub use markup::plain_text;
pub use types::{Article, ArticlePage, EngineEvent, FailureKind, FetchError, Generation};
