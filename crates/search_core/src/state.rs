use crate::controller::SearchController;
use crate::view::ResultView;
use crate::view_model::AppViewModel;

/// Counter that identifies one keyword submission.
pub type Generation = u64;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Article {
    pub id: u64,
    pub title: String,
    pub link: String,
    pub author: String,
    pub chapter: String,
    pub published: String,
}

/// Which of the mutually exclusive screen states is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    ShowingHotKeywords,
    Searching,
    ShowingResults,
    ShowingError,
}

/// Row shown after the last result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingIndicator {
    #[default]
    MoreAvailable,
    Loading,
    NoMore,
    LoadError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    EmptyKeyword,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::EmptyKeyword => "Please enter a keyword to search.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    input: String,
    view: ResultView,
    controller: SearchController,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            view_state: self.view.state(),
            input: self.input.clone(),
            hot_keywords: self.view.hot_keywords().to_vec(),
            hot_keyword_focus: self.view.hot_keyword_focus(),
            keyword: self.view.current_keyword().to_string(),
            results: self.view.results().to_vec(),
            selected: self.view.selected(),
            trailing: self.view.trailing(),
            error_message: self.view.error_message().map(ToOwned::to_owned),
            notice: self.view.notice(),
            page: self.controller.session().page,
        }
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn session(&self) -> &crate::SearchSession {
        self.controller.session()
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn input(&self) -> &str {
        &self.input
    }

    pub(crate) fn set_input(&mut self, input: String) {
        self.input = input;
    }

    pub(crate) fn parts_mut(&mut self) -> (&mut ResultView, &mut SearchController) {
        (&mut self.view, &mut self.controller)
    }
}
