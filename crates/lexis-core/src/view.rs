//! The lookup view: every piece of state the interface shows, and the
//! transitions that change it.
//!
//! The view never performs IO besides the theme preference write. Lookups
//! and playbacks come back out as requests tagged with a sequence number;
//! whoever runs them reports the outcome through `finish_lookup` and
//! `finish_playback`. Only the outcome of the most recent request of each
//! kind is applied, older ones are dropped.

use lexis_types::{DictionaryEntry, Font, LookupOutcome, PlaybackOutcome};

use crate::audio::normalize_audio_url;
use crate::preferences::{PreferenceStore, ThemePreference};

/// A lookup the caller should run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub seq: u64,
    pub term: String,
}

/// A playback the caller should run, `url` already normalized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackRequest {
    pub seq: u64,
    pub url: String,
}

/// Blocking message the user has to dismiss
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    PlaybackFailed,
    PlaybackUnsupported,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::PlaybackFailed => "Unable to play audio. Please try again.",
            Notice::PlaybackUnsupported => "Audio playback is not supported on this system.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus<'a> {
    Idle,
    Loading,
    Error(&'a str),
    Loaded,
}

/// Startup values taken from config
#[derive(Debug, Clone)]
pub struct ViewSettings {
    pub default_term: String,
    pub title: String,
    pub font: Font,
    pub audio_origin: String,
}

impl From<&lexis_config::Config> for ViewSettings {
    fn from(config: &lexis_config::Config) -> Self {
        Self {
            default_term: config.ui.default_term.clone(),
            title: config.ui.title.clone(),
            font: config.ui.font,
            audio_origin: config.network.audio_origin.clone(),
        }
    }
}

pub struct LookupView {
    term: String,
    entries: Vec<DictionaryEntry>,
    loading: bool,
    error: Option<&'static str>,
    dark_mode: bool,
    font: Font,
    audio_playing: bool,
    notice: Option<Notice>,
    active_entry: usize,
    lookup_seq: u64,
    playback_seq: u64,
    title: String,
    audio_origin: String,
    store: Box<dyn PreferenceStore>,
}

impl LookupView {
    pub fn new(settings: ViewSettings, store: Box<dyn PreferenceStore>) -> Self {
        Self {
            term: settings.default_term,
            entries: Vec::new(),
            loading: false,
            error: None,
            dark_mode: ThemePreference::DEFAULT_DARK,
            font: settings.font,
            audio_playing: false,
            notice: None,
            active_entry: 0,
            lookup_seq: 0,
            playback_seq: 0,
            title: settings.title,
            audio_origin: settings.audio_origin,
            store,
        }
    }

    /// Load the persisted theme and start the lookup for the default term
    pub fn initialize(&mut self) -> Option<LookupRequest> {
        self.dark_mode = ThemePreference::load(&*self.store);
        tracing::info!(
            "[VIEW] Initialized ({} theme), looking up '{}'",
            if self.dark_mode { "dark" } else { "light" },
            self.term
        );

        let term = self.term.clone();
        self.submit_search(&term)
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn push_char(&mut self, c: char) {
        self.term.push(c);
    }

    pub fn backspace(&mut self) {
        self.term.pop();
    }

    pub fn clear_term(&mut self) {
        self.term.clear();
    }

    /// Search for whatever is currently typed
    pub fn submit(&mut self) -> Option<LookupRequest> {
        let term = self.term.clone();
        self.submit_search(&term)
    }

    /// Start a lookup for `term`. Blank terms change nothing.
    pub fn submit_search(&mut self, term: &str) -> Option<LookupRequest> {
        if term.trim().is_empty() {
            tracing::debug!("[VIEW] Ignoring blank search");
            return None;
        }

        self.loading = true;
        self.error = None;
        self.lookup_seq += 1;

        Some(LookupRequest {
            seq: self.lookup_seq,
            term: term.to_string(),
        })
    }

    /// Apply a lookup outcome. Returns false when `seq` is stale.
    pub fn finish_lookup(&mut self, seq: u64, outcome: LookupOutcome) -> bool {
        if seq != self.lookup_seq {
            tracing::debug!(
                "[VIEW] Dropping stale lookup #{} (latest #{})",
                seq,
                self.lookup_seq
            );
            return false;
        }

        self.error = outcome.message();
        self.entries = match outcome {
            LookupOutcome::Found(entries) => entries,
            _ => Vec::new(),
        };
        self.active_entry = 0;
        self.loading = false;
        true
    }

    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error
    }

    pub fn status(&self) -> RequestStatus<'_> {
        if self.loading {
            RequestStatus::Loading
        } else if let Some(message) = self.error {
            RequestStatus::Error(message)
        } else if self.lookup_seq == 0 {
            RequestStatus::Idle
        } else {
            RequestStatus::Loaded
        }
    }

    /// Entries are only displayed when nothing else takes precedence
    pub fn shows_results(&self) -> bool {
        !self.loading && self.error.is_none() && !self.entries.is_empty()
    }

    pub fn active_entry(&self) -> usize {
        self.active_entry
    }

    pub fn next_entry(&mut self) {
        if !self.entries.is_empty() {
            self.active_entry = (self.active_entry + 1) % self.entries.len();
        }
    }

    pub fn previous_entry(&mut self) {
        if !self.entries.is_empty() {
            self.active_entry = self
                .active_entry
                .checked_sub(1)
                .unwrap_or(self.entries.len() - 1);
        }
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Flip the theme and persist it immediately
    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
        if let Err(e) = ThemePreference::store(&mut *self.store, self.dark_mode) {
            tracing::error!("[VIEW] Failed to persist theme: {}", e);
        }
    }

    pub fn font(&self) -> Font {
        self.font
    }

    pub fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    pub fn cycle_font(&mut self) {
        self.font = self.font.next();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn audio_playing(&self) -> bool {
        self.audio_playing
    }

    /// Audio reference of the active entry, if it has one
    pub fn available_audio(&self) -> Option<&str> {
        if !self.shows_results() {
            return None;
        }
        self.entries.get(self.active_entry)?.first_audio()
    }

    /// The play affordance is enabled
    pub fn can_play(&self) -> bool {
        !self.audio_playing && self.available_audio().is_some()
    }

    /// Play the active entry's first clip, unless the affordance is disabled
    pub fn play_pronunciation(&mut self) -> Option<PlaybackRequest> {
        if !self.can_play() {
            return None;
        }
        let reference = self.available_audio()?.to_string();
        Some(self.play_reference(&reference))
    }

    /// Start playback of an arbitrary reference
    pub fn play_reference(&mut self, reference: &str) -> PlaybackRequest {
        let url = normalize_audio_url(reference, &self.audio_origin);
        tracing::debug!("[VIEW] Playing {}", url);

        self.audio_playing = true;
        self.playback_seq += 1;

        PlaybackRequest {
            seq: self.playback_seq,
            url,
        }
    }

    /// Apply a playback outcome. Returns false when `seq` is stale.
    pub fn finish_playback(&mut self, seq: u64, outcome: PlaybackOutcome) -> bool {
        if seq != self.playback_seq {
            return false;
        }

        self.audio_playing = false;
        self.notice = match outcome {
            PlaybackOutcome::Completed => None,
            PlaybackOutcome::Failed => Some(Notice::PlaybackFailed),
            PlaybackOutcome::Unsupported => Some(Notice::PlaybackUnsupported),
        };
        true
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
