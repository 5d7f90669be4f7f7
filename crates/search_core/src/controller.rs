use crate::view::ResultView;
use crate::{Article, Effect, Generation, ViewState};

/// Keyword and paging position of the current search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchSession {
    pub keyword: String,
    /// Last page that was successfully shown.
    pub page: u32,
    /// Bumped on every submission; completions from older generations are stale.
    pub generation: Generation,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchController {
    session: SearchSession,
    pending_page: Option<u32>,
}

impl SearchController {
    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    pub fn pending_page(&self) -> Option<u32> {
        self.pending_page
    }

    pub fn fetch_hot_keywords(&self) -> Effect {
        Effect::FetchHotKeywords
    }

    /// Empty or failed keyword responses leave the view untouched.
    pub fn hot_keywords_loaded(
        &self,
        view: &mut ResultView,
        result: Result<Vec<String>, String>,
    ) -> bool {
        match result {
            Ok(keywords) if !keywords.is_empty() => {
                view.show_hot_keywords(keywords);
                true
            }
            _ => false,
        }
    }

    pub fn search(&mut self, view: &mut ResultView, keyword: String) -> Effect {
        self.session.generation += 1;
        self.session.page = 0;
        self.session.keyword = keyword.clone();
        self.pending_page = Some(0);
        view.show_searching();
        Effect::SearchPage {
            generation: self.session.generation,
            page: 0,
            keyword,
        }
    }

    /// Requests `page + 1`. Ignored unless results are showing and nothing is
    /// outstanding for the current generation.
    pub fn search_next_page(&mut self, view: &mut ResultView) -> Option<Effect> {
        if view.state() != ViewState::ShowingResults || self.pending_page.is_some() {
            return None;
        }
        let page = self.session.page + 1;
        self.pending_page = Some(page);
        view.show_loading_more();
        Some(Effect::SearchPage {
            generation: self.session.generation,
            page,
            keyword: self.session.keyword.clone(),
        })
    }

    /// Routes a page completion to the view. Returns `false` when the
    /// completion is stale and was dropped.
    pub fn page_loaded(
        &mut self,
        view: &mut ResultView,
        generation: Generation,
        page: u32,
        result: Result<Vec<Article>, String>,
    ) -> bool {
        if generation != self.session.generation || self.pending_page != Some(page) {
            return false;
        }
        self.pending_page = None;

        if page == 0 {
            match result {
                Ok(articles) => view.show_results(articles),
                Err(_) => view.show_error(),
            }
            return true;
        }

        match result {
            Ok(articles) if articles.is_empty() => view.show_no_more(),
            Ok(articles) => {
                self.session.page = page;
                view.append_results(articles);
            }
            Err(_) => view.show_load_error(),
        }
        true
    }

    /// Teardown: anything still in flight becomes stale.
    pub fn close(&mut self) -> Effect {
        self.session.generation += 1;
        self.pending_page = None;
        Effect::CancelAll
    }
}
