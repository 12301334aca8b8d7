//! Pronunciation playback for dictionary entries.
//!
//! Clips are downloaded with `reqwest` and handed to a blocking thread that
//! decodes and plays them through `rodio`. Output is only compiled in with
//! the `playback` feature; without it every play reports the output as
//! unsupported, which the view turns into its "not supported" notice.
//!
//! Playbacks are serialized: starting a clip stops the one before it.

mod fetch;
mod output;
mod player;

pub use fetch::fetch_clip;
pub use player::RodioPlayer;

/// Whether this build can produce sound at all
pub const PLAYBACK_COMPILED: bool = cfg!(feature = "playback");
