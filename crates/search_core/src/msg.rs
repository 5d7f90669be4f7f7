use crate::{Article, Generation};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The screen was shown for the first time.
    Started,
    /// User edited the keyword input.
    InputChanged(String),
    /// User submitted the current keyword input.
    SearchSubmitted,
    /// Move the hot keyword focus forward.
    HotKeywordFocusNext,
    /// Move the hot keyword focus backward.
    HotKeywordFocusPrevious,
    /// User tapped the hot keyword at this index.
    HotKeywordTapped(usize),
    /// Move the results cursor down; past the last row this requests the next page.
    SelectNext,
    /// Move the results cursor up.
    SelectPrevious,
    /// Remote completion for the hot keyword list.
    HotKeywordsLoaded(Result<Vec<String>, String>),
    /// Remote completion for one page of results.
    PageLoaded {
        generation: Generation,
        page: u32,
        result: Result<Vec<Article>, String>,
    },
    /// User dismissed the transient notice.
    NoticeDismissed,
    /// The screen is being torn down.
    Closed,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Host input with no meaning on this screen. Unlike other input it does
    /// not clear a pending notice.
    NoOp,
}
