//! Memo cache for per-root voicing lists

use crate::pitch::PitchClass;
use crate::voicing::ChordVoicing;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

type CacheKey = (PitchClass, bool);

/// Voicing lists keyed by (root pitch class, prefer flat).
///
/// At most 24 entries, so there is no eviction. Values are deterministic, so
/// when two threads fill the same key the last write wins and both results
/// are equal. A poisoned lock is recovered rather than propagated since no
/// entry is ever left half-written.
#[derive(Debug, Default)]
pub struct VoicingCache {
    entries: RwLock<HashMap<CacheKey, Arc<Vec<ChordVoicing>>>>,
}

impl VoicingCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, root: PitchClass, prefer_flat: bool) -> Option<Arc<Vec<ChordVoicing>>> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(&(root, prefer_flat)).cloned()
    }

    /// Store `voicings` and hand back the shared copy.
    pub fn insert(
        &self,
        root: PitchClass,
        prefer_flat: bool,
        voicings: Vec<ChordVoicing>,
    ) -> Arc<Vec<ChordVoicing>> {
        let voicings = Arc::new(voicings);
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert((root, prefer_flat), Arc::clone(&voicings));
        voicings
    }

    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
