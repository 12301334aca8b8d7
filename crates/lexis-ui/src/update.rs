//! Pure transitions: actions and backend events in, view changes and the
//! next effect out. Nothing here touches the terminal or the channels.

use lexis_core::view::LookupView;
use lexis_types::AppEvent;
use throbber_widgets_tui::ThrobberState;

use crate::keys::Action;

/// What the loop should do after an update
#[derive(Debug)]
pub enum Step {
    Continue,
    Send(AppEvent),
    Quit,
}

/// Presentation state that is not part of the lookup view
pub struct UiState {
    pub scroll: u16,
    pub scroll_step: u16,
    /// Rows of the results area at the last draw
    pub viewport_height: u16,
    /// Scroll the active entry into view on the next draw
    pub jump_to_active: bool,
    pub throbber: ThrobberState,
}

impl UiState {
    pub fn new(scroll_step: u16) -> Self {
        Self {
            scroll: 0,
            scroll_step: scroll_step.max(1),
            viewport_height: 0,
            jump_to_active: false,
            throbber: ThrobberState::default(),
        }
    }

    fn page(&self) -> u16 {
        self.viewport_height.saturating_sub(1).max(1)
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(3)
    }
}

pub fn update(view: &mut LookupView, ui: &mut UiState, action: Action) -> Step {
    // A notice blocks everything until it is acknowledged
    if view.notice().is_some() {
        return match action {
            Action::DismissNotice | Action::Submit => {
                view.dismiss_notice();
                Step::Continue
            }
            Action::Quit => Step::Quit,
            _ => Step::Continue,
        };
    }

    match action {
        Action::Submit => match view.submit() {
            Some(request) => {
                ui.scroll = 0;
                Step::Send(AppEvent::Lookup {
                    seq: request.seq,
                    term: request.term,
                })
            }
            None => Step::Continue,
        },
        Action::PlayPronunciation => match view.play_pronunciation() {
            Some(request) => Step::Send(AppEvent::PlayAudio {
                seq: request.seq,
                url: request.url,
            }),
            None => Step::Continue,
        },
        Action::Input(c) => {
            view.push_char(c);
            Step::Continue
        }
        Action::Backspace => {
            view.backspace();
            Step::Continue
        }
        Action::ClearTerm => {
            view.clear_term();
            Step::Continue
        }
        Action::ToggleTheme => {
            view.toggle_theme();
            Step::Continue
        }
        Action::CycleFont => {
            view.cycle_font();
            Step::Continue
        }
        Action::SetFont(font) => {
            view.set_font(font);
            Step::Continue
        }
        Action::ScrollUp => {
            ui.scroll = ui.scroll.saturating_sub(ui.scroll_step);
            Step::Continue
        }
        Action::ScrollDown => {
            ui.scroll = ui.scroll.saturating_add(ui.scroll_step);
            Step::Continue
        }
        Action::PageUp => {
            ui.scroll = ui.scroll.saturating_sub(ui.page());
            Step::Continue
        }
        Action::PageDown => {
            ui.scroll = ui.scroll.saturating_add(ui.page());
            Step::Continue
        }
        Action::NextEntry => {
            view.next_entry();
            ui.jump_to_active = true;
            Step::Continue
        }
        Action::PreviousEntry => {
            view.previous_entry();
            ui.jump_to_active = true;
            Step::Continue
        }
        Action::DismissNotice => Step::Continue,
        Action::Quit => Step::Quit,
    }
}

/// Apply an event coming back from the backend
pub fn apply_backend(view: &mut LookupView, ui: &mut UiState, event: AppEvent) {
    match event {
        AppEvent::LookupFinished { seq, outcome } => {
            if view.finish_lookup(seq, outcome) {
                ui.scroll = 0;
            }
        }
        AppEvent::PlaybackFinished { seq, outcome } => {
            tracing::debug!("[UI] Playback #{} finished: {:?}", seq, outcome);
            view.finish_playback(seq, outcome);
        }
        AppEvent::BackendReady => {
            tracing::debug!("[UI] Backend ready");
        }
        AppEvent::Lookup { .. } | AppEvent::PlayAudio { .. } | AppEvent::Shutdown => {}
    }
}
