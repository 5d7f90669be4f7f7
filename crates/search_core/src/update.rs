use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    if !matches!(msg, Msg::Tick | Msg::NoOp) {
        let (view, _) = state.parts_mut();
        if view.dismiss_notice() {
            state.mark_dirty();
        }
    }

    let effects = match msg {
        Msg::Started => {
            let (_, controller) = state.parts_mut();
            vec![controller.fetch_hot_keywords()]
        }
        Msg::InputChanged(text) => {
            if text != state.input() {
                state.set_input(text);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::SearchSubmitted => {
            let raw = state.input().to_string();
            let (view, controller) = state.parts_mut();
            let effects = match view.submit_search(&raw) {
                Some(keyword) => vec![controller.search(view, keyword)],
                None => Vec::new(),
            };
            state.mark_dirty();
            effects
        }
        Msg::HotKeywordFocusNext => {
            let (view, _) = state.parts_mut();
            if view.focus_next_hot_keyword() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::HotKeywordFocusPrevious => {
            let (view, _) = state.parts_mut();
            if view.focus_previous_hot_keyword() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::HotKeywordTapped(index) => {
            let (view, _) = state.parts_mut();
            view.tap_hot_keyword(index)
                .map(Effect::HotKeywordSelected)
                .into_iter()
                .collect()
        }
        Msg::SelectNext => {
            let (view, controller) = state.parts_mut();
            let before = view.selected();
            let at_bottom = view.select_next();
            let moved = view.selected() != before;
            let effects: Vec<Effect> = if at_bottom {
                controller.search_next_page(view).into_iter().collect()
            } else {
                Vec::new()
            };
            if moved || !effects.is_empty() {
                state.mark_dirty();
            }
            effects
        }
        Msg::SelectPrevious => {
            let (view, _) = state.parts_mut();
            if view.select_previous() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::HotKeywordsLoaded(result) => {
            let (view, controller) = state.parts_mut();
            if controller.hot_keywords_loaded(view, result) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::PageLoaded {
            generation,
            page,
            result,
        } => {
            let (view, controller) = state.parts_mut();
            if controller.page_loaded(view, generation, page, result) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::NoticeDismissed => Vec::new(),
        Msg::Closed => {
            let (_, controller) = state.parts_mut();
            vec![controller.close()]
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
