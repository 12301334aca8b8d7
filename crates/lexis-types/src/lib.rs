pub mod events;
pub mod types;

pub use events::{AppEvent, LookupOutcome, PlaybackOutcome};
pub use types::{Definition, DictionaryEntry, Font, Meaning, Phonetic};
