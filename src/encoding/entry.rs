//! Single vocabulary entry encoding/decoding

use thiserror::Error;

use super::SEPARATOR;

/// A word and its meaning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub word: String,
    pub meaning: String,
}

impl Entry {
    pub fn new(word: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            meaning: meaning.into(),
        }
    }

    /// Decode a stored line.
    ///
    /// Only the first separator splits; any later one belongs to the meaning.
    pub fn decode(line: &str) -> Result<Self, DecodeError> {
        let (word, meaning) = line
            .split_once(SEPARATOR)
            .ok_or(DecodeError::MissingSeparator)?;

        let word = word.trim();
        let meaning = meaning.trim();
        if word.is_empty() {
            return Err(DecodeError::EmptyWord);
        }
        if meaning.is_empty() {
            return Err(DecodeError::EmptyMeaning);
        }

        Ok(Self::new(word, meaning))
    }
}

/// Format a word/meaning pair as a stored line, without the trailing newline.
/// Listing and search output use the same layout.
pub fn format_entry(word: &str, meaning: &str) -> String {
    format!("{} {} {}", word, SEPARATOR, meaning)
}

/// Errors that can occur while decoding a stored line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("no '{}' separator", SEPARATOR)]
    MissingSeparator,
    #[error("empty word")]
    EmptyWord,
    #[error("empty meaning")]
    EmptyMeaning,
}
