use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use search_core::{AppViewModel, Msg, ViewState};

#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    Dispatch(Msg),
    Quit,
    Ignore,
}

pub fn map_key(key: KeyEvent, view: &AppViewModel) -> KeyAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let tags_visible = view.view_state == ViewState::ShowingHotKeywords;

    match key.code {
        KeyCode::Char('c') if ctrl => KeyAction::Quit,
        KeyCode::Char('t') if ctrl && tags_visible => {
            KeyAction::Dispatch(Msg::HotKeywordTapped(view.hot_keyword_focus))
        }
        KeyCode::Char(_) if ctrl => KeyAction::Ignore,
        KeyCode::Char(ch) => {
            let mut text = view.input.clone();
            text.push(ch);
            KeyAction::Dispatch(Msg::InputChanged(text))
        }
        KeyCode::Backspace => {
            let mut text = view.input.clone();
            if text.pop().is_none() {
                return KeyAction::Ignore;
            }
            KeyAction::Dispatch(Msg::InputChanged(text))
        }
        KeyCode::Enter => KeyAction::Dispatch(Msg::SearchSubmitted),
        KeyCode::Tab if tags_visible => KeyAction::Dispatch(Msg::HotKeywordFocusNext),
        KeyCode::BackTab if tags_visible => KeyAction::Dispatch(Msg::HotKeywordFocusPrevious),
        KeyCode::Down => KeyAction::Dispatch(Msg::SelectNext),
        KeyCode::Up => KeyAction::Dispatch(Msg::SelectPrevious),
        KeyCode::Esc => KeyAction::Dispatch(Msg::NoticeDismissed),
        _ => KeyAction::Ignore,
    }
}
