use crate::{Article, Notice, TrailingIndicator, ViewState};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub view_state: ViewState,
    pub input: String,
    pub hot_keywords: Vec<String>,
    pub hot_keyword_focus: usize,
    pub keyword: String,
    pub results: Vec<Article>,
    pub selected: usize,
    pub trailing: TrailingIndicator,
    pub error_message: Option<String>,
    pub notice: Option<Notice>,
    pub page: u32,
}
