use serde::{Deserialize, Deserializer, Serialize};

/// Base of the external wiki page linked at the foot of every entry
pub const WIKI_BASE_URL: &str = "https://en.wiktionary.org/wiki/";

/// The service sometimes sends `null` where it means "nothing"
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One dictionary result for a searched word
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DictionaryEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub word: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phonetic: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phonetics: Vec<Phonetic>,
    pub origin: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub meanings: Vec<Meaning>,
}

impl DictionaryEntry {
    /// First phonetic variant carrying a usable audio reference
    pub fn first_audio(&self) -> Option<&str> {
        self.phonetics.iter().find_map(Phonetic::audio)
    }

    pub fn has_audio(&self) -> bool {
        self.first_audio().is_some()
    }

    /// Etymology note, hidden when blank
    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref().filter(|origin| !origin.is_empty())
    }

    /// The word is inserted verbatim, the way the page builds its link.
    pub fn source_url(&self) -> String {
        format!("{WIKI_BASE_URL}{}", self.word)
    }
}

/// One pronunciation rendering of a word
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Phonetic {
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    pub audio: Option<String>,
}

impl Phonetic {
    /// The service sends `"audio": ""` for variants without a clip.
    pub fn audio(&self) -> Option<&str> {
        self.audio.as_deref().filter(|audio| !audio.is_empty())
    }
}

/// Definitions grouped under one part of speech
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Meaning {
    #[serde(deserialize_with = "null_as_default")]
    pub part_of_speech: String,
    #[serde(deserialize_with = "null_as_default")]
    pub definitions: Vec<Definition>,
}

impl Meaning {
    /// All synonyms across this meaning's definitions, in order, duplicates kept
    pub fn synonyms(&self) -> Vec<&str> {
        self.definitions
            .iter()
            .flat_map(|d| d.synonyms.iter().map(String::as_str))
            .collect()
    }

    pub fn has_synonyms(&self) -> bool {
        self.definitions.iter().any(|d| !d.synonyms.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Definition {
    #[serde(deserialize_with = "null_as_default")]
    pub definition: String,
    pub example: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub synonyms: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub antonyms: Vec<String>,
}

impl Definition {
    pub fn example(&self) -> Option<&str> {
        self.example.as_deref().filter(|example| !example.is_empty())
    }
}

/// Display choice for the word heading, never persisted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Font {
    #[default]
    Serif,
    Sans,
    Mono,
}

impl Font {
    pub const ALL: [Font; 3] = [Font::Serif, Font::Sans, Font::Mono];

    pub fn label(self) -> &'static str {
        match self {
            Font::Serif => "Serif",
            Font::Sans => "Sans",
            Font::Mono => "Mono",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Font::Serif => Font::Sans,
            Font::Sans => Font::Mono,
            Font::Mono => Font::Serif,
        }
    }
}
