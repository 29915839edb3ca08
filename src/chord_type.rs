//! Chord qualities, categories, and CAGED shape names.
//!
//! [`ChordType`] orders by a fixed priority table: triads first (major,
//! minor, augmented, diminished, sus2, sus4), then sevenths, then 9th, 11th
//! and 13th chords. The same order drives catalog sorting and grouped
//! display, so `Ord` is implemented on top of [`ChordType::priority`].

use crate::error::FretboardError;
use crate::pitch::{parse_root_note, PitchClass};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Broad family a chord type belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChordCategory {
    Triad,
    Seventh,
    Extended,
}

impl ChordCategory {
    pub const ALL: [ChordCategory; 3] = [
        ChordCategory::Triad,
        ChordCategory::Seventh,
        ChordCategory::Extended,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChordCategory::Triad => "triad",
            ChordCategory::Seventh => "seventh",
            ChordCategory::Extended => "extended",
        }
    }
}

impl FromStr for ChordCategory {
    type Err = FretboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FretboardError::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for ChordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the five CAGED position templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CagedShape {
    C,
    A,
    G,
    E,
    D,
}

impl CagedShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            CagedShape::C => "C",
            CagedShape::A => "A",
            CagedShape::G => "G",
            CagedShape::E => "E",
            CagedShape::D => "D",
        }
    }
}

/// Chord quality. Serialized as its symbol (`"maj"`, `"m7b5"`, `"7#5"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChordType {
    #[serde(rename = "maj")]
    Major,
    #[serde(rename = "min")]
    Minor,
    #[serde(rename = "aug")]
    Augmented,
    #[serde(rename = "dim")]
    Diminished,
    #[serde(rename = "sus2")]
    Sus2,
    #[serde(rename = "sus4")]
    Sus4,
    #[serde(rename = "maj7")]
    Major7,
    #[serde(rename = "7")]
    Dominant7,
    #[serde(rename = "m7")]
    Minor7,
    #[serde(rename = "m7b5")]
    HalfDiminished,
    #[serde(rename = "dim7")]
    Diminished7,
    #[serde(rename = "7#5")]
    Augmented7,
    #[serde(rename = "maj9")]
    Major9,
    #[serde(rename = "9")]
    Dominant9,
    #[serde(rename = "m9")]
    Minor9,
    #[serde(rename = "maj11")]
    Major11,
    #[serde(rename = "11")]
    Dominant11,
    #[serde(rename = "m11")]
    Minor11,
    #[serde(rename = "maj13")]
    Major13,
    #[serde(rename = "13")]
    Dominant13,
    #[serde(rename = "m13")]
    Minor13,
}

/// Display information for a chord type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChordTypeInfo {
    pub name: &'static str,
    /// Suffix appended to the root in chord names ("" for major, "m" for minor).
    pub short_name: &'static str,
    pub category: ChordCategory,
    /// Canonical interval labels, used to disambiguate interval naming.
    pub intervals: &'static [&'static str],
}

impl ChordType {
    /// Every chord type in priority order.
    pub const ALL: [ChordType; 21] = [
        ChordType::Major,
        ChordType::Minor,
        ChordType::Augmented,
        ChordType::Diminished,
        ChordType::Sus2,
        ChordType::Sus4,
        ChordType::Major7,
        ChordType::Dominant7,
        ChordType::Minor7,
        ChordType::HalfDiminished,
        ChordType::Diminished7,
        ChordType::Augmented7,
        ChordType::Major9,
        ChordType::Dominant9,
        ChordType::Minor9,
        ChordType::Major11,
        ChordType::Dominant11,
        ChordType::Minor11,
        ChordType::Major13,
        ChordType::Dominant13,
        ChordType::Minor13,
    ];

    /// Symbol used in ids, YAML and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChordType::Major => "maj",
            ChordType::Minor => "min",
            ChordType::Augmented => "aug",
            ChordType::Diminished => "dim",
            ChordType::Sus2 => "sus2",
            ChordType::Sus4 => "sus4",
            ChordType::Major7 => "maj7",
            ChordType::Dominant7 => "7",
            ChordType::Minor7 => "m7",
            ChordType::HalfDiminished => "m7b5",
            ChordType::Diminished7 => "dim7",
            ChordType::Augmented7 => "7#5",
            ChordType::Major9 => "maj9",
            ChordType::Dominant9 => "9",
            ChordType::Minor9 => "m9",
            ChordType::Major11 => "maj11",
            ChordType::Dominant11 => "11",
            ChordType::Minor11 => "m11",
            ChordType::Major13 => "maj13",
            ChordType::Dominant13 => "13",
            ChordType::Minor13 => "m13",
        }
    }

    /// Sort key. Gaps between groups leave room for new types.
    pub fn priority(&self) -> u8 {
        match self {
            ChordType::Major => 1,
            ChordType::Minor => 2,
            ChordType::Augmented => 3,
            ChordType::Diminished => 4,
            ChordType::Sus2 => 5,
            ChordType::Sus4 => 6,
            ChordType::Major7 => 10,
            ChordType::Dominant7 => 11,
            ChordType::Minor7 => 12,
            ChordType::HalfDiminished => 13,
            ChordType::Diminished7 => 14,
            ChordType::Augmented7 => 15,
            ChordType::Major9 => 20,
            ChordType::Dominant9 => 21,
            ChordType::Minor9 => 22,
            ChordType::Major11 => 30,
            ChordType::Dominant11 => 31,
            ChordType::Minor11 => 32,
            ChordType::Major13 => 40,
            ChordType::Dominant13 => 41,
            ChordType::Minor13 => 42,
        }
    }

    pub fn info(&self) -> ChordTypeInfo {
        use ChordCategory::*;

        match self {
            ChordType::Major => entry("Major", "", Triad, &["1", "3", "5"]),
            ChordType::Minor => entry("Minor", "m", Triad, &["1", "b3", "5"]),
            ChordType::Augmented => entry("Augmented", "aug", Triad, &["1", "3", "#5"]),
            ChordType::Diminished => entry("Diminished", "dim", Triad, &["1", "b3", "b5"]),
            ChordType::Sus2 => entry("Suspended 2", "sus2", Triad, &["1", "2", "5"]),
            ChordType::Sus4 => entry("Suspended 4", "sus4", Triad, &["1", "4", "5"]),
            ChordType::Major7 => entry("Major 7th", "maj7", Seventh, &["1", "3", "5", "7"]),
            ChordType::Dominant7 => entry("Dominant 7th", "7", Seventh, &["1", "3", "5", "b7"]),
            ChordType::Minor7 => entry("Minor 7th", "m7", Seventh, &["1", "b3", "5", "b7"]),
            ChordType::HalfDiminished => entry("Half-Diminished", "m7b5", Seventh, &["1", "b3", "b5", "b7"]),
            ChordType::Diminished7 => entry("Diminished 7th", "dim7", Seventh, &["1", "b3", "b5", "bb7"]),
            ChordType::Augmented7 => entry("Augmented 7th", "7#5", Seventh, &["1", "3", "#5", "b7"]),
            ChordType::Major9 => entry("Major 9th", "maj9", Extended, &["1", "3", "5", "7", "9"]),
            ChordType::Dominant9 => entry("Dominant 9th", "9", Extended, &["1", "3", "5", "b7", "9"]),
            ChordType::Minor9 => entry("Minor 9th", "m9", Extended, &["1", "b3", "5", "b7", "9"]),
            ChordType::Major11 => entry("Major 11th", "maj11", Extended, &["1", "3", "5", "7", "9", "11"]),
            ChordType::Dominant11 => entry("Dominant 11th", "11", Extended, &["1", "3", "5", "b7", "9", "11"]),
            ChordType::Minor11 => entry("Minor 11th", "m11", Extended, &["1", "b3", "5", "b7", "9", "11"]),
            ChordType::Major13 => entry("Major 13th", "maj13", Extended, &["1", "3", "5", "7", "9", "13"]),
            ChordType::Dominant13 => entry("Dominant 13th", "13", Extended, &["1", "3", "5", "b7", "9", "13"]),
            ChordType::Minor13 => entry("Minor 13th", "m13", Extended, &["1", "b3", "5", "b7", "9", "13"]),
        }
    }

    pub fn category(&self) -> ChordCategory {
        self.info().category
    }
}

fn entry(
    name: &'static str,
    short_name: &'static str,
    category: ChordCategory,
    intervals: &'static [&'static str],
) -> ChordTypeInfo {
    ChordTypeInfo {
        name,
        short_name,
        category,
        intervals,
    }
}

impl PartialOrd for ChordType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ChordType {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority().cmp(&other.priority())
    }
}

impl FromStr for ChordType {
    type Err = FretboardError;

    /// Accepts the symbol (`"m7b5"`) or the display name (`"Half-Diminished"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == trimmed || t.info().name.eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| FretboardError::UnknownChordType(s.to_string()))
    }
}

impl fmt::Display for ChordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render a chord name such as `"C#m7"` or `"Bb"`.
///
/// The root may be given in either spelling or as a dual spelling such as
/// `"C#/Db"`; it is respelled per `prefer_flat`.
pub fn format_chord_name(
    root: &str,
    chord_type: ChordType,
    prefer_flat: bool,
) -> Result<String, FretboardError> {
    let pc = PitchClass::from_name(parse_root_note(root, prefer_flat))?;
    Ok(format!("{}{}", pc.name(prefer_flat), chord_type.info().short_name))
}
