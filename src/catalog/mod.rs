//! # Voicing Catalog
//!
//! Query layer over the shape library: every playable voicing for a root,
//! filtered by chord type or category, looked up by id, or grouped for
//! display.
//!
//! ## Ordering
//! Voicing lists are sorted by chord-type priority (triads, then sevenths,
//! then extended chords), then by ascending position number.
//!
//! ## Caching
//! Each (root pitch class, spelling) list is computed once and kept in the
//! catalog's [`VoicingCache`]. `"C#"` and `"Db"` share an entry for the same
//! spelling preference, since the list depends only on the pitch class.
//!
//! ## Example
//! ```rust
//! use fretboard::{ChordType, VoicingCatalog};
//!
//! let catalog = VoicingCatalog::builtin()?;
//! let c = catalog.get_voicings_for_root("C", false)?;
//! assert_eq!(c[0].chord_type, ChordType::Major);
//!
//! let types = catalog.get_available_chord_types("C")?;
//! assert_eq!(types[0], ChordType::Major);
//! assert_eq!(types[1], ChordType::Minor);
//! # Ok::<(), fretboard::FretboardError>(())
//! ```

mod cache;

pub use cache::VoicingCache;

use crate::chord_type::{ChordCategory, ChordType};
use crate::error::FretboardError;
use crate::pitch::{parse_root_note, PitchClass};
use crate::shapes::ShapeLibrary;
use crate::transpose::generate_voicings_for_root;
use crate::voicing::ChordVoicing;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tracing::debug;

/// Shape library plus memoized per-root results.
#[derive(Debug)]
pub struct VoicingCatalog {
    library: Arc<ShapeLibrary>,
    cache: VoicingCache,
}

impl VoicingCatalog {
    pub fn new(library: Arc<ShapeLibrary>, cache: VoicingCache) -> Self {
        Self { library, cache }
    }

    /// Catalog over the embedded shape library with an empty cache.
    pub fn builtin() -> Result<Self, FretboardError> {
        Ok(Self::new(Arc::new(ShapeLibrary::builtin()?), VoicingCache::new()))
    }

    pub fn library(&self) -> &ShapeLibrary {
        &self.library
    }

    pub fn cache(&self) -> &VoicingCache {
        &self.cache
    }

    /// All playable voicings for `root`, sorted by chord-type priority and
    /// position.
    ///
    /// `root` may be a dual spelling such as `"C#/Db"`.
    pub fn get_voicings_for_root(
        &self,
        root: &str,
        prefer_flat: bool,
    ) -> Result<Arc<Vec<ChordVoicing>>, FretboardError> {
        let pitch_class = PitchClass::from_name(parse_root_note(root, prefer_flat))?;

        if let Some(hit) = self.cache.get(pitch_class, prefer_flat) {
            debug!(root = %pitch_class, prefer_flat, "voicing cache hit");
            return Ok(hit);
        }

        debug!(root = %pitch_class, prefer_flat, "voicing cache miss");
        let mut voicings = generate_voicings_for_root(self.library.shapes(), root, prefer_flat)?;
        voicings.sort_by_key(|v| (v.chord_type.priority(), v.position_number));
        Ok(self.cache.insert(pitch_class, prefer_flat, voicings))
    }

    pub fn get_voicings_by_type(
        &self,
        root: &str,
        chord_type: ChordType,
        prefer_flat: bool,
    ) -> Result<Vec<ChordVoicing>, FretboardError> {
        Ok(self
            .get_voicings_for_root(root, prefer_flat)?
            .iter()
            .filter(|v| v.chord_type == chord_type)
            .cloned()
            .collect())
    }

    pub fn get_voicings_by_category(
        &self,
        root: &str,
        category: ChordCategory,
        prefer_flat: bool,
    ) -> Result<Vec<ChordVoicing>, FretboardError> {
        Ok(self
            .get_voicings_for_root(root, prefer_flat)?
            .iter()
            .filter(|v| v.category == category)
            .cloned()
            .collect())
    }

    /// Search every root (sharp spelling) for a voicing with this id.
    pub fn get_voicing_by_id(&self, id: &str) -> Result<Option<ChordVoicing>, FretboardError> {
        for root in PitchClass::all() {
            let voicings = self.get_voicings_for_root(root.name(false), false)?;
            if let Some(voicing) = voicings.iter().find(|v| v.id == id) {
                return Ok(Some(voicing.clone()));
            }
        }
        Ok(None)
    }

    /// Distinct chord types playable at `root`, in priority order.
    pub fn get_available_chord_types(&self, root: &str) -> Result<Vec<ChordType>, FretboardError> {
        let types: BTreeSet<ChordType> = self
            .get_voicings_for_root(root, false)?
            .iter()
            .map(|v| v.chord_type)
            .collect();
        Ok(types.into_iter().collect())
    }

    pub fn clear_cache(&self) {
        debug!("clearing voicing cache");
        self.cache.clear();
    }
}

/// Bucket voicings by chord type, keys in priority order. Each bucket keeps
/// the input order.
pub fn group_voicings_by_type(voicings: &[ChordVoicing]) -> BTreeMap<ChordType, Vec<&ChordVoicing>> {
    let mut groups: BTreeMap<ChordType, Vec<&ChordVoicing>> = BTreeMap::new();
    for voicing in voicings {
        groups.entry(voicing.chord_type).or_default().push(voicing);
    }
    groups
}

/// Bucket voicings by category: triads, sevenths, extended.
pub fn group_voicings_by_category(
    voicings: &[ChordVoicing],
) -> BTreeMap<ChordCategory, Vec<&ChordVoicing>> {
    let mut groups: BTreeMap<ChordCategory, Vec<&ChordVoicing>> = BTreeMap::new();
    for voicing in voicings {
        groups.entry(voicing.category).or_default().push(voicing);
    }
    groups
}
