//! Chord voicing record
//!
//! [`ChordVoicing`] is the output of transposition and the contract consumed
//! by diagram rendering, audio playback and favorites persistence. Instances
//! are never modified after the transposer returns them.

use crate::chord_type::{CagedShape, ChordCategory, ChordType};
use crate::pitch::STRING_COUNT;
use crate::roman::to_roman_numeral;
use crate::shapes::Barre;
use serde::{Deserialize, Serialize};

/// One concrete, playable arrangement of a chord.
///
/// # Fields
/// - `strings`: per string, `None` = muted, `Some(0)` = open, `Some(n)` = fret n
/// - `starting_fret`: lowest fretted position, or 1 when only open/muted strings sound
/// - `notes` / `intervals`: one entry per sounding string, low to high
/// - `bass_note`: note of the lowest sounding string
/// - `is_inversion`: bass pitch class differs from the root pitch class
/// - `id`: stable key built from root, chord type, CAGED shape and position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordVoicing {
    pub id: String,
    pub root: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub root_alternate: Option<String>,
    pub chord_type: ChordType,
    pub category: ChordCategory,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub subcategory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub caged_shape: Option<CagedShape>,
    pub position_number: u8,
    pub position_label: String,
    pub starting_fret: u8,
    pub strings: [Option<u8>; STRING_COUNT],
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub fingers: Option<[Option<u8>; STRING_COUNT]>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub barres: Option<Vec<Barre>>,
    pub root_string_indices: Vec<usize>,
    pub bass_note: String,
    pub is_inversion: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub inversion_number: Option<u8>,
    pub notes: Vec<String>,
    pub intervals: Vec<String>,
    pub difficulty: u8,
    pub common_usage: bool,
}

impl ChordVoicing {
    /// Chord name such as `"C#m7"`.
    pub fn display_name(&self) -> String {
        format!("{}{}", self.root, self.chord_type.info().short_name)
    }

    /// Indices of strings that sound, low to high.
    pub fn sounding_strings(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.strings
            .iter()
            .enumerate()
            .filter_map(|(i, fret)| fret.map(|f| (i, f)))
    }

    /// Tab-style fingering, e.g. `"x02220"`. Frets above 9 are bracketed.
    pub fn tab(&self) -> String {
        self.strings
            .iter()
            .map(|fret| match fret {
                None => "x".to_string(),
                Some(f) if *f > 9 => format!("({})", f),
                Some(f) => f.to_string(),
            })
            .collect()
    }

    /// Roman numeral shown beside the diagram for `starting_fret`.
    pub fn starting_fret_numeral(&self) -> String {
        to_roman_numeral(self.starting_fret as u32)
    }
}
