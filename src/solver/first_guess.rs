//! Persistent first-turn scoring cache
//!
//! Before any feedback has narrowed the pool, scoring is deterministic for
//! a fixed (guess pool, candidate pool, guess-space mode) triple, and it is
//! the most expensive pass of a session: every guess against every
//! candidate. This store keeps the full sorted table on disk so later runs
//! with identical inputs skip the pass entirely.
//!
//! The lookup key hashes both word lists and names the mode, so any change
//! to the inputs lands on a new key and stale entries are simply orphaned;
//! there is no expiry logic. Reads and writes are best-effort: every fault
//! is a cache miss or a no-op, reported at debug level only.

use crate::core::Word;
use crate::solver::engine::GuessSpace;
use log::debug;
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::hash::Hasher;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Bumped whenever the key recipe or entry layout changes. Old entries
/// stay behind under keys nothing will ever ask for again.
const CACHE_FORMAT_VERSION: u32 = 1;

/// Default store location, relative to the working directory.
pub const DEFAULT_CACHE_FILE: &str = ".first_guess_entropy_cache.json";

#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry {
    format_version: u32,
    scored: Vec<(String, f64)>,
}

#[derive(Debug, thiserror::Error)]
enum CacheFault {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// On-disk key-value store mapping pool fingerprints to full sorted
/// (word, bits) tables.
#[derive(Debug, Clone)]
pub struct FirstGuessCache {
    path: PathBuf,
}

impl FirstGuessCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lookup key for a scoring pass over `pool` with `candidates` still at
    /// full strength.
    #[must_use]
    pub fn cache_key(pool: &[Word], candidates: &[Word], space: GuessSpace) -> String {
        format!(
            "v{CACHE_FORMAT_VERSION}|guess_space={}|pool={}|candidates={}",
            space.as_str(),
            hash_word_list(pool),
            hash_word_list(candidates),
        )
    }

    /// Read path. A missing file, unreadable file, malformed document,
    /// absent key, version mismatch, or invalid word text all mean "no
    /// cache available" and return `None`.
    #[must_use]
    pub fn load(&self, key: &str) -> Option<Vec<(Word, f64)>> {
        let entry = match self.read_store() {
            Ok(mut store) => store.remove(key)?,
            Err(fault) => {
                debug!("first-guess cache read failed: {fault}");
                return None;
            }
        };

        if entry.format_version != CACHE_FORMAT_VERSION {
            return None;
        }

        let mut scored = Vec::with_capacity(entry.scored.len());
        for (text, bits) in entry.scored {
            scored.push((Word::new(text).ok()?, bits));
        }

        if scored.is_empty() { None } else { Some(scored) }
    }

    /// Write path: merge this entry into whatever currently parses, then
    /// replace the store atomically, so unrelated keys survive and a crash
    /// mid-write never leaves a torn file behind.
    pub fn store(&self, key: &str, scored: &[(Word, f64)]) {
        if let Err(fault) = self.try_store(key, scored) {
            debug!("first-guess cache write failed: {fault}");
        }
    }

    fn read_store(&self) -> Result<HashMap<String, CacheEntry>, CacheFault> {
        let text = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&text)?)
    }

    fn try_store(&self, key: &str, scored: &[(Word, f64)]) -> Result<(), CacheFault> {
        let mut store = self.read_store().unwrap_or_default();
        store.insert(
            key.to_string(),
            CacheEntry {
                format_version: CACHE_FORMAT_VERSION,
                scored: scored
                    .iter()
                    .map(|(word, bits)| (word.text().to_string(), *bits))
                    .collect(),
            },
        );

        let payload = serde_json::to_string(&store)?;

        let mut tmp_path = self.path.as_os_str().to_owned();
        tmp_path.push(".tmp");
        let tmp_path = PathBuf::from(tmp_path);

        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(payload.as_bytes())?;
        file.sync_all()?;
        drop(file);

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

/// Stable fingerprint of a word list: the seed-free FxHash of its
/// newline-joined text, rendered as fixed-width hex.
fn hash_word_list(words: &[Word]) -> String {
    let mut hasher = FxHasher::default();
    for word in words {
        hasher.write(word.text().as_bytes());
        hasher.write_u8(b'\n');
    }
    format!("{:016x}", hasher.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    fn temp_cache(tag: &str) -> FirstGuessCache {
        let path = std::env::temp_dir().join(format!(
            "wordle_advisor_{tag}_{}.json",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        FirstGuessCache::new(path)
    }

    fn scored(entries: &[(&str, f64)]) -> Vec<(Word, f64)> {
        entries
            .iter()
            .map(|(text, bits)| (Word::new(text).unwrap(), *bits))
            .collect()
    }

    #[test]
    fn key_changes_with_every_input() {
        let pool = words(&["crane", "slate"]);
        let candidates = words(&["crane"]);

        let base = FirstGuessCache::cache_key(&pool, &candidates, GuessSpace::Allowed);
        let other_mode = FirstGuessCache::cache_key(&pool, &candidates, GuessSpace::Candidates);
        let other_pool =
            FirstGuessCache::cache_key(&words(&["crane"]), &candidates, GuessSpace::Allowed);
        let other_candidates =
            FirstGuessCache::cache_key(&pool, &words(&["slate"]), GuessSpace::Allowed);

        assert_ne!(base, other_mode);
        assert_ne!(base, other_pool);
        assert_ne!(base, other_candidates);
    }

    #[test]
    fn key_is_stable_for_identical_inputs() {
        let pool = words(&["crane", "slate"]);
        let candidates = words(&["crane"]);

        assert_eq!(
            FirstGuessCache::cache_key(&pool, &candidates, GuessSpace::Allowed),
            FirstGuessCache::cache_key(&pool, &candidates, GuessSpace::Allowed),
        );
    }

    #[test]
    fn missing_file_is_a_miss() {
        let cache = temp_cache("missing");
        assert!(cache.load("v1|whatever").is_none());
    }

    #[test]
    fn corrupt_file_is_a_miss() {
        let cache = temp_cache("corrupt");
        fs::write(cache.path(), "not json {{{").unwrap();
        assert!(cache.load("v1|whatever").is_none());
        let _ = fs::remove_file(cache.path());
    }

    #[test]
    fn wrong_schema_is_a_miss() {
        let cache = temp_cache("schema");
        fs::write(cache.path(), r#"{"some-key": {"scored": "nope"}}"#).unwrap();
        assert!(cache.load("some-key").is_none());
        let _ = fs::remove_file(cache.path());
    }

    #[test]
    fn store_then_load_round_trips_exactly() {
        let cache = temp_cache("roundtrip");
        let table = scored(&[("soare", 5.885_96), ("roate", 5.882_779), ("raise", 5.877_91)]);

        cache.store("key-a", &table);
        let loaded = cache.load("key-a").unwrap();

        assert_eq!(loaded.len(), table.len());
        for ((word, bits), (expected_word, expected_bits)) in loaded.iter().zip(&table) {
            assert_eq!(word, expected_word);
            assert!((bits - expected_bits).abs() < f64::EPSILON);
        }
        let _ = fs::remove_file(cache.path());
    }

    #[test]
    fn store_merges_instead_of_overwriting() {
        let cache = temp_cache("merge");
        cache.store("key-a", &scored(&[("crane", 1.0)]));
        cache.store("key-b", &scored(&[("slate", 2.0)]));

        assert!(cache.load("key-a").is_some());
        assert!(cache.load("key-b").is_some());
        let _ = fs::remove_file(cache.path());
    }

    #[test]
    fn store_survives_a_corrupt_existing_file() {
        let cache = temp_cache("recover");
        fs::write(cache.path(), "garbage").unwrap();

        cache.store("key-a", &scored(&[("crane", 1.0)]));
        assert!(cache.load("key-a").is_some());
        let _ = fs::remove_file(cache.path());
    }

    #[test]
    fn unwritable_path_is_swallowed() {
        let cache = FirstGuessCache::new("/definitely/not/a/real/dir/cache.json");
        // Must not panic or error out
        cache.store("key-a", &scored(&[("crane", 1.0)]));
        assert!(cache.load("key-a").is_none());
    }
}
