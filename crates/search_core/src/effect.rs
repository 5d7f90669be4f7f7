use crate::Generation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the remote service for the trending keyword list.
    FetchHotKeywords,
    /// Ask the remote service for one page of results.
    SearchPage {
        generation: Generation,
        page: u32,
        keyword: String,
    },
    /// A hot keyword was tapped; the hosting screen decides what to do with it.
    HotKeywordSelected(String),
    /// Release every outstanding request (screen teardown).
    CancelAll,
}
