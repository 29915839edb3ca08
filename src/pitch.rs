//! # Pitch Space
//!
//! Pitch-class arithmetic and note spelling for a six-string guitar in
//! standard tuning.
//!
//! ## Conventions
//! - Pitch classes are integers 0-11 with **A = 0**. All arithmetic is mod 12.
//! - String index 0 is the low E string, index 5 the high E string.
//! - Every pitch class has a sharp spelling and a flat spelling. They coincide
//!   for the seven naturals; the other five classes have two names.
//!
//! ## Example
//! ```rust
//! use fretboard::pitch::{note_at_position, parse_root_note, semitone_distance};
//!
//! assert_eq!(parse_root_note("A#/Bb", true), "Bb");
//! assert_eq!(semitone_distance("A", "B").unwrap(), 2);
//! assert_eq!(semitone_distance("B", "A").unwrap(), 10);
//! assert_eq!(note_at_position(1, 3, false), "C");
//! ```

use crate::error::FretboardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of strings on the instrument.
pub const STRING_COUNT: usize = 6;

/// Open-string note names, low to high.
pub const STANDARD_TUNING: [&str; STRING_COUNT] = ["E", "A", "D", "G", "B", "E"];

/// Open-string MIDI note numbers: E2, A2, D3, G3, B3, E4.
pub const STANDARD_TUNING_MIDI: [u8; STRING_COUNT] = [40, 45, 50, 55, 59, 64];

/// Highest fret on the neck.
pub const MAX_FRET: u8 = 24;

/// Open-string pitch classes (A = 0), low to high.
const OPEN_STRING_PITCH_CLASSES: [u8; STRING_COUNT] = [7, 0, 5, 10, 2, 7];

/// Sharp-preferring spellings indexed by pitch class (A = 0).
pub const NOTES_SHARP: [&str; 12] = [
    "A", "A#", "B", "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#",
];

/// Flat-preferring spellings indexed by pitch class (A = 0).
pub const NOTES_FLAT: [&str; 12] = [
    "A", "Bb", "B", "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab",
];

/// The twelve selectable roots. Ambiguous classes carry both spellings.
pub const ROOT_NOTES: [&str; 12] = [
    "A", "A#/Bb", "B", "C", "C#/Db", "D", "D#/Eb", "E", "F", "F#/Gb", "G", "G#/Ab",
];

/// A note's identity modulo octave.
///
/// Serialized as its number. Deserializing anything above 11 fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8")]
pub struct PitchClass(u8);

impl TryFrom<u8> for PitchClass {
    type Error = FretboardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value < 12 {
            Ok(Self(value))
        } else {
            Err(FretboardError::InvalidPitchClass(value))
        }
    }
}

impl PitchClass {
    /// Build a pitch class from any integer, reducing mod 12.
    pub fn new(value: i32) -> Self {
        Self(value.rem_euclid(12) as u8)
    }

    /// Look up a note spelling such as `"C#"` or `"Db"`.
    pub fn from_name(name: &str) -> Result<Self, FretboardError> {
        let value = match name.trim() {
            "A" => 0,
            "A#" | "Bb" => 1,
            "B" => 2,
            "C" => 3,
            "C#" | "Db" => 4,
            "D" => 5,
            "D#" | "Eb" => 6,
            "E" => 7,
            "F" => 8,
            "F#" | "Gb" => 9,
            "G" => 10,
            "G#" | "Ab" => 11,
            _ => return Err(FretboardError::UnknownNoteName(name.to_string())),
        };
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Spell this pitch class with the requested accidental preference.
    pub fn name(self, prefer_flat: bool) -> &'static str {
        if prefer_flat {
            NOTES_FLAT[self.0 as usize]
        } else {
            NOTES_SHARP[self.0 as usize]
        }
    }

    pub fn transpose(self, semitones: i32) -> Self {
        Self::new(self.0 as i32 + semitones)
    }

    /// Upward distance to `other`, always in `0..=11`.
    pub fn distance_to(self, other: PitchClass) -> u8 {
        (other.0 as i32 - self.0 as i32).rem_euclid(12) as u8
    }

    /// True for the five classes that have both a sharp and a flat name.
    pub fn is_accidental(self) -> bool {
        NOTES_SHARP[self.0 as usize] != NOTES_FLAT[self.0 as usize]
    }

    /// All twelve pitch classes in ascending order from A.
    pub fn all() -> impl Iterator<Item = PitchClass> {
        (0..12).map(PitchClass)
    }
}

impl FromStr for PitchClass {
    type Err = FretboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name(false))
    }
}

/// Pick one spelling out of a dual-spelling root such as `"A#/Bb"`.
///
/// Input without a `/` is returned trimmed and otherwise untouched; it is
/// validated later when it reaches pitch arithmetic.
pub fn parse_root_note(raw_root: &str, prefer_flat: bool) -> &str {
    match raw_root.split_once('/') {
        Some((sharp, flat)) => {
            if prefer_flat {
                flat.trim()
            } else {
                sharp.trim()
            }
        }
        None => raw_root.trim(),
    }
}

/// Semitones from `from_note` up to `to_note` (toward higher frets).
///
/// Never negative: `semitone_distance("B", "A")` is 10, not -2.
pub fn semitone_distance(from_note: &str, to_note: &str) -> Result<u8, FretboardError> {
    let from = PitchClass::from_name(from_note)?;
    let to = PitchClass::from_name(to_note)?;
    Ok(from.distance_to(to))
}

/// Pitch class sounding at a string and fret.
///
/// # Panics
/// Panics if `string_index` is not below [`STRING_COUNT`].
pub fn pitch_class_at_position(string_index: usize, fret: u8) -> PitchClass {
    PitchClass::new(OPEN_STRING_PITCH_CLASSES[string_index] as i32 + fret as i32)
}

/// Note name sounding at a string and fret, spelled per preference.
///
/// # Panics
/// Panics if `string_index` is not below [`STRING_COUNT`].
pub fn note_at_position(string_index: usize, fret: u8, prefer_flat: bool) -> &'static str {
    pitch_class_at_position(string_index, fret).name(prefer_flat)
}

/// Sharp-preferring spelling of any recognized note name.
pub fn canonical_note_name(note: &str) -> Result<&'static str, FretboardError> {
    Ok(PitchClass::from_name(note)?.name(false))
}

/// `(sharp, Some(flat))` for accidentals, `(natural, None)` otherwise.
pub fn enharmonic_pair(note: &str) -> Result<(&'static str, Option<&'static str>), FretboardError> {
    let pc = PitchClass::from_name(note)?;
    if pc.is_accidental() {
        Ok((pc.name(false), Some(pc.name(true))))
    } else {
        Ok((pc.name(false), None))
    }
}

/// MIDI note number at a string and fret (low E open = 40).
///
/// # Panics
/// Panics if `string_index` is not below [`STRING_COUNT`].
pub fn midi_note(string_index: usize, fret: u8) -> u8 {
    STANDARD_TUNING_MIDI[string_index] + fret
}

/// Equal-tempered frequency with A4 (MIDI 69) = 440 Hz.
pub fn midi_to_frequency(midi: u8) -> f64 {
    440.0 * 2f64.powf((midi as f64 - 69.0) / 12.0)
}

/// Scientific pitch name such as `"C4"` for MIDI 60.
pub fn midi_to_note_name(midi: u8, prefer_flat: bool) -> String {
    // MIDI numbering starts at C; shift so that A = 0.
    let pc = PitchClass::new(midi as i32 % 12 + 3);
    let octave = midi as i32 / 12 - 1;
    format!("{}{}", pc.name(prefer_flat), octave)
}
