//! Presentation state of the search screen.
//!
//! `ResultView` owns everything the host renders. It never talks to the
//! network: the controller routes outcomes into it, and the two user events
//! that need the controller (`submit_search`, scrolling past the end) hand
//! their result back to `update`.

use crate::{Article, Notice, TrailingIndicator, ViewState};

/// Message shown when the first page fails or comes back empty.
pub const SEARCH_ERROR_TEMPLATE: &str = "No articles found for \"{keyword}\".";

pub fn format_search_error(keyword: &str) -> String {
    SEARCH_ERROR_TEMPLATE.replace("{keyword}", keyword)
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultView {
    state: ViewState,
    hot_keywords: Vec<String>,
    hot_keyword_focus: usize,
    current_keyword: String,
    results: Vec<Article>,
    selected: usize,
    trailing: TrailingIndicator,
    error_message: Option<String>,
    notice: Option<Notice>,
}

impl ResultView {
    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn hot_keywords(&self) -> &[String] {
        &self.hot_keywords
    }

    pub fn hot_keyword_focus(&self) -> usize {
        self.hot_keyword_focus
    }

    pub fn current_keyword(&self) -> &str {
        &self.current_keyword
    }

    pub fn results(&self) -> &[Article] {
        &self.results
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn trailing(&self) -> TrailingIndicator {
        self.trailing
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    /// Results already on screen take priority over a late keyword list.
    fn may_reveal_hot_keywords(&self) -> bool {
        self.state != ViewState::ShowingResults
    }

    pub fn show_hot_keywords(&mut self, keywords: Vec<String>) {
        self.hot_keywords = keywords;
        self.hot_keyword_focus = 0;
        if self.may_reveal_hot_keywords() {
            self.state = ViewState::ShowingHotKeywords;
        }
    }

    /// Validates raw input. Returns the trimmed keyword to hand to the
    /// controller, or `None` after raising the empty-keyword notice.
    pub fn submit_search(&mut self, raw: &str) -> Option<String> {
        let keyword = raw.trim();
        if keyword.is_empty() {
            self.notice = Some(Notice::EmptyKeyword);
            return None;
        }
        self.current_keyword = keyword.to_string();
        self.show_searching();
        Some(self.current_keyword.clone())
    }

    pub fn show_searching(&mut self) {
        self.state = ViewState::Searching;
    }

    pub fn show_results(&mut self, articles: Vec<Article>) {
        if articles.is_empty() {
            self.show_error();
            return;
        }
        self.results = articles;
        self.selected = 0;
        self.trailing = TrailingIndicator::MoreAvailable;
        self.error_message = None;
        self.state = ViewState::ShowingResults;
    }

    pub fn show_error(&mut self) {
        self.error_message = Some(format_search_error(&self.current_keyword));
        self.state = ViewState::ShowingError;
    }

    pub fn append_results(&mut self, articles: Vec<Article>) {
        self.results.extend(articles);
        self.trailing = TrailingIndicator::MoreAvailable;
    }

    pub fn show_loading_more(&mut self) {
        self.trailing = TrailingIndicator::Loading;
    }

    pub fn show_no_more(&mut self) {
        self.trailing = TrailingIndicator::NoMore;
    }

    pub fn show_load_error(&mut self) {
        self.trailing = TrailingIndicator::LoadError;
    }

    /// Keyword for the external listener. Does not start a search.
    pub fn tap_hot_keyword(&self, index: usize) -> Option<String> {
        self.hot_keywords.get(index).cloned()
    }

    pub fn focus_next_hot_keyword(&mut self) -> bool {
        if self.hot_keywords.is_empty() {
            return false;
        }
        self.hot_keyword_focus = (self.hot_keyword_focus + 1) % self.hot_keywords.len();
        true
    }

    pub fn focus_previous_hot_keyword(&mut self) -> bool {
        if self.hot_keywords.is_empty() {
            return false;
        }
        let len = self.hot_keywords.len();
        self.hot_keyword_focus = (self.hot_keyword_focus + len - 1) % len;
        true
    }

    /// Moves the cursor down. Returns `true` when the cursor is already on the
    /// last row, i.e. the user scrolled to the bottom of the list.
    pub fn select_next(&mut self) -> bool {
        if self.state != ViewState::ShowingResults || self.results.is_empty() {
            return false;
        }
        if self.selected + 1 < self.results.len() {
            self.selected += 1;
            false
        } else {
            true
        }
    }

    pub fn select_previous(&mut self) -> bool {
        if self.state != ViewState::ShowingResults || self.selected == 0 {
            return false;
        }
        self.selected -= 1;
        true
    }

    pub fn dismiss_notice(&mut self) -> bool {
        self.notice.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: u64) -> Article {
        Article {
            id,
            title: format!("article {id}"),
            ..Article::default()
        }
    }

    #[test]
    fn error_message_interpolates_keyword() {
        assert_eq!(format_search_error("rust"), "No articles found for \"rust\".");
    }

    #[test]
    fn hot_keywords_do_not_replace_visible_results() {
        let mut view = ResultView::default();
        view.submit_search("rust");
        view.show_results(vec![article(1)]);

        view.show_hot_keywords(vec!["tokio".to_string()]);

        assert_eq!(view.state(), ViewState::ShowingResults);
        assert_eq!(view.hot_keywords(), ["tokio".to_string()]);
    }

    #[test]
    fn select_next_reports_bottom_only_on_last_row() {
        let mut view = ResultView::default();
        view.submit_search("rust");
        view.show_results(vec![article(1), article(2)]);

        assert!(!view.select_next());
        assert_eq!(view.selected(), 1);
        assert!(view.select_next());
        assert_eq!(view.selected(), 1);
    }

    #[test]
    fn hot_keyword_focus_wraps() {
        let mut view = ResultView::default();
        view.show_hot_keywords(vec!["a".to_string(), "b".to_string()]);
        assert!(view.focus_previous_hot_keyword());
        assert_eq!(view.hot_keyword_focus(), 1);
        assert!(view.focus_next_hot_keyword());
        assert_eq!(view.hot_keyword_focus(), 0);
    }
}
