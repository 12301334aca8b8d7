mod client;

pub use client::FreeDictionaryClient;
