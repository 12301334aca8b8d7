pub mod audio;
pub mod dictionary;
pub mod preferences;
pub mod state;
pub mod view;
