use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs::{self, File};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use crate::encoding::{Entry, format_entry};

/// Errors raised while reading or writing the vocabulary file
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result of a save request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Nothing changed since the last load or save
    Unchanged,
    /// The file was rewritten with this many entries
    Written(usize),
}

/// In-memory vocabulary backed by a text file
pub struct Vocabulary {
    path: PathBuf,
    entries: BTreeMap<String, String>,
    modified: bool,
}

impl Vocabulary {
    /// Create an empty vocabulary that loads from and saves to `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: BTreeMap::new(),
            modified: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load entries from the backing file.
    ///
    /// A missing file leaves the vocabulary empty. Malformed lines are
    /// skipped and bytes that are not UTF-8 are replaced, so one bad line
    /// never hides the lines after it. On an I/O error, entries read before
    /// the failure are kept.
    pub async fn load(&mut self) -> Result<usize, StoreError> {
        let file = match File::open(&self.path).await {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No vocabulary file at {}", self.path.display());
                return Ok(0);
            }
            Err(e) => return Err(self.read_error(e)),
        };

        let mut lines = BufReader::new(file).split(b'\n');
        let mut loaded = 0;
        let mut line_no = 0;
        self.modified = false;

        loop {
            let bytes = match lines.next_segment().await {
                Ok(Some(bytes)) => bytes,
                Ok(None) => break,
                Err(e) => return Err(self.read_error(e)),
            };
            line_no += 1;
            let line = String::from_utf8_lossy(&bytes);

            match Entry::decode(&line) {
                Ok(entry) => {
                    self.entries.insert(entry.word, entry.meaning);
                    loaded += 1;
                }
                Err(e) => debug!("Skipping line {} of {}: {}", line_no, self.path.display(), e),
            }
        }

        info!("Loaded {} entries from {}", loaded, self.path.display());
        Ok(loaded)
    }

    /// Rewrite the backing file if anything changed since the last load or save
    pub async fn save(&mut self) -> Result<SaveOutcome, StoreError> {
        if !self.modified {
            debug!("Vocabulary unchanged, skipping save");
            return Ok(SaveOutcome::Unchanged);
        }

        let mut buf = String::new();
        for (word, meaning) in &self.entries {
            buf.push_str(&format_entry(word, meaning));
            buf.push('\n');
        }

        fs::write(&self.path, buf)
            .await
            .map_err(|source| StoreError::Write {
                path: self.path.clone(),
                source,
            })?;

        self.modified = false;
        info!("Saved {} entries to {}", self.entries.len(), self.path.display());
        Ok(SaveOutcome::Written(self.entries.len()))
    }

    /// Get the meaning of a word
    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }

    /// Insert or overwrite a word, returning the previous meaning
    pub fn insert(&mut self, word: String, meaning: String) -> Option<String> {
        self.modified = true;
        self.entries.insert(word, meaning)
    }

    /// Remove a word, returning its meaning if it was present
    pub fn remove(&mut self, word: &str) -> Option<String> {
        let removed = self.entries.remove(word);
        if removed.is_some() {
            self.modified = true;
        }
        removed
    }

    /// Entries in sorted word order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(w, m)| (w.as_str(), m.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    fn read_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Read {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let mut vocab = Vocabulary::new(dir.path().join("vocabulary.txt"));

        assert_eq!(vocab.load().await.unwrap(), 0);
        assert!(vocab.is_empty());
        assert!(!vocab.is_modified());
    }

    #[tokio::test]
    async fn test_load_skips_malformed_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vocabulary.txt");
        std::fs::write(
            &path,
            "cat : a small domesticated feline\njustaword\n\n : no word\nno meaning :\ndog:loyal\n",
        )
        .unwrap();

        let mut vocab = Vocabulary::new(&path);
        assert_eq!(vocab.load().await.unwrap(), 2);
        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab.get("cat"), Some("a small domesticated feline"));
        assert_eq!(vocab.get("dog"), Some("loyal"));
        assert_eq!(vocab.get("justaword"), None);
        assert!(!vocab.is_modified());
    }

    #[tokio::test]
    async fn test_load_continues_past_invalid_utf8() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vocabulary.txt");
        let mut bytes = b"cat : feline\n".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe, b'\n']);
        bytes.extend_from_slice(b"caf\xe9 : coffee\r\n");
        bytes.extend_from_slice(b"dog : canine\n");
        std::fs::write(&path, bytes).unwrap();

        let mut vocab = Vocabulary::new(&path);
        assert_eq!(vocab.load().await.unwrap(), 3);

        assert_eq!(vocab.get("cat"), Some("feline"));
        assert_eq!(vocab.get("caf\u{FFFD}"), Some("coffee"));
        assert_eq!(vocab.get("dog"), Some("canine"));
        assert!(!vocab.is_modified());
    }

    #[tokio::test]
    async fn test_save_after_invalid_utf8_keeps_later_entries() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vocabulary.txt");
        std::fs::write(&path, b"apple : fruit\ncaf\xe9 : coffee\nzebra : striped horse\n").unwrap();

        let mut vocab = Vocabulary::new(&path);
        vocab.load().await.unwrap();
        vocab.insert("kiwi".to_string(), "green fruit".to_string());
        vocab.save().await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("zebra : striped horse\n"));
        assert!(content.contains("kiwi : green fruit\n"));
        assert!(content.contains("apple : fruit\n"));
    }

    #[tokio::test]
    async fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vocabulary.txt");

        let mut vocab = Vocabulary::new(&path);
        vocab.insert("zebra".to_string(), "striped horse".to_string());
        vocab.insert("apple".to_string(), "a fruit".to_string());
        vocab.insert("mango".to_string(), "also a fruit: tropical".to_string());

        assert_eq!(vocab.save().await.unwrap(), SaveOutcome::Written(3));
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "apple : a fruit\nmango : also a fruit: tropical\nzebra : striped horse\n"
        );

        let mut reloaded = Vocabulary::new(&path);
        reloaded.load().await.unwrap();
        let pairs: Vec<_> = reloaded.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("apple", "a fruit"),
                ("mango", "also a fruit: tropical"),
                ("zebra", "striped horse"),
            ]
        );
    }

    #[tokio::test]
    async fn test_save_is_noop_when_unmodified() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vocabulary.txt");

        let mut vocab = Vocabulary::new(&path);
        assert_eq!(vocab.save().await.unwrap(), SaveOutcome::Unchanged);
        assert!(!path.exists());

        vocab.insert("cat".to_string(), "feline".to_string());
        assert_eq!(vocab.save().await.unwrap(), SaveOutcome::Written(1));
        assert!(!vocab.is_modified());

        // A second save must not touch the file
        std::fs::remove_file(&path).unwrap();
        assert_eq!(vocab.save().await.unwrap(), SaveOutcome::Unchanged);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_save_error_keeps_state() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("vocabulary.txt");

        let mut vocab = Vocabulary::new(&path);
        vocab.insert("cat".to_string(), "feline".to_string());

        let err = vocab.save().await.unwrap_err();
        assert!(matches!(err, StoreError::Write { .. }));
        assert!(vocab.is_modified());
        assert_eq!(vocab.get("cat"), Some("feline"));
    }

    #[tokio::test]
    async fn test_remove_then_save_omits_word() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vocabulary.txt");
        std::fs::write(&path, "cat : a small domesticated feline\ndog : canine\n").unwrap();

        let mut vocab = Vocabulary::new(&path);
        vocab.load().await.unwrap();
        assert_eq!(vocab.remove("cat").as_deref(), Some("a small domesticated feline"));
        assert_eq!(vocab.get("cat"), None);
        vocab.save().await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "dog : canine\n");
    }

    #[test]
    fn test_modified_flag() {
        let mut vocab = Vocabulary::new("unused.txt");
        assert!(!vocab.is_modified());

        assert_eq!(vocab.remove("ghost"), None);
        assert!(!vocab.is_modified());

        assert_eq!(vocab.insert("cat".to_string(), "feline".to_string()), None);
        assert!(vocab.is_modified());
        assert_eq!(
            vocab.insert("cat".to_string(), "pet".to_string()).as_deref(),
            Some("feline")
        );
        assert_eq!(vocab.get("cat"), Some("pet"));
    }
}
