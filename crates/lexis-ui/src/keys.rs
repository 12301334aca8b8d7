use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use lexis_types::Font;

/// Everything a key press can ask the view to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Submit,
    Input(char),
    Backspace,
    ClearTerm,
    ToggleTheme,
    CycleFont,
    SetFont(Font),
    PlayPronunciation,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    NextEntry,
    PreviousEntry,
    DismissNotice,
    Quit,
}

/// Map a crossterm key event to an Action, `None` for unbound keys
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('t') => Some(Action::ToggleTheme),
            KeyCode::Char('f') => Some(Action::CycleFont),
            KeyCode::Char('p') => Some(Action::PlayPronunciation),
            KeyCode::Char('u') => Some(Action::ClearTerm),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Esc => Some(Action::DismissNotice),
        KeyCode::Backspace => Some(Action::Backspace),

        KeyCode::Up => Some(Action::ScrollUp),
        KeyCode::Down => Some(Action::ScrollDown),
        KeyCode::PageUp => Some(Action::PageUp),
        KeyCode::PageDown => Some(Action::PageDown),
        KeyCode::Tab => Some(Action::NextEntry),
        KeyCode::BackTab => Some(Action::PreviousEntry),

        KeyCode::F(1) => Some(Action::SetFont(Font::Serif)),
        KeyCode::F(2) => Some(Action::SetFont(Font::Sans)),
        KeyCode::F(3) => Some(Action::SetFont(Font::Mono)),

        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => Some(Action::Input(c)),
        _ => None,
    }
}

/// Keybinding summary for the footer
pub const HELP: &str = "[Enter] search  [^P] play  [^T] theme  [^F]/[F1-F3] font  [Tab] next entry  [↑↓] scroll  [^C] quit";
