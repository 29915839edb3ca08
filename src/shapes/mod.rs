//! # Master Shape Library
//!
//! Hand-authored chord shapes, each written for one reference root and
//! transposed to every other root by [`crate::transpose`].
//!
//! The built-in catalog is `master_shapes.yaml`, embedded at compile time and
//! parsed once. Alternative catalogs can be loaded from a file with the same
//! schema. A [`ShapeLibrary`] has no mutating methods; callers share it
//! behind an `Arc`.
//!
//! ## YAML Schema
//! ```yaml
//! - chord-type: maj          # ChordType symbol
//!   category: triad
//!   caged-shape: A           # optional
//!   subcategory: open        # optional
//!   position-number: 4
//!   master-root: A
//!   relative-frets: [~, 0, 2, 2, 2, 0]   # ~ = muted, 0 = open
//!   fingers: [~, 0, 1, 2, 3, 0]          # optional
//!   barres:                               # optional
//!     - { fret: 1, from-string: 0, to-string: 5, finger: 1 }
//!   root-string-indices: [1, 3]
//!   uses-open-strings: true
//!   transposable: true
//!   difficulty: 1
//!   common-usage: true
//! ```
//!
//! ## Validation
//! Loading rejects unknown master roots, difficulty outside 1-5, position 0,
//! frets past the 24th, string indices outside 0-5, reversed barres, and two shapes sharing the
//! same (chord type, CAGED shape, position) triple, since that triple is what
//! voicing ids are built from.

use crate::chord_type::{CagedShape, ChordCategory, ChordType};
use crate::error::FretboardError;
use crate::pitch::{parse_root_note, PitchClass, MAX_FRET, STRING_COUNT};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::info;

const BUILTIN_SHAPES: &str = include_str!("master_shapes.yaml");

/// One finger pressing several strings at the same fret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Barre {
    pub fret: u8,
    /// Lowest string covered (0 = low E).
    #[serde(alias = "from-string")]
    pub from_string: u8,
    /// Highest string covered (5 = high E).
    #[serde(alias = "to-string")]
    pub to_string: u8,
    pub finger: u8,
}

/// A voicing template authored for `master_root`.
///
/// `relative_frets` holds `None` for a muted string, `Some(0)` for an open
/// string, and the fret number otherwise, all as played at `master_root`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MasterChordShape {
    pub chord_type: ChordType,
    pub category: ChordCategory,
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub caged_shape: Option<CagedShape>,
    pub position_number: u8,
    pub master_root: String,
    pub relative_frets: [Option<i8>; STRING_COUNT],
    #[serde(default)]
    pub fingers: Option<[Option<u8>; STRING_COUNT]>,
    #[serde(default)]
    pub barres: Option<Vec<Barre>>,
    pub root_string_indices: Vec<usize>,
    pub uses_open_strings: bool,
    pub transposable: bool,
    pub difficulty: u8,
    pub common_usage: bool,
}

impl MasterChordShape {
    /// Short label used in error messages, e.g. `"maj/E/1"`.
    pub fn label(&self) -> String {
        format!(
            "{}/{}/{}",
            self.chord_type.as_str(),
            self.caged_shape.map_or("-", |c| c.as_str()),
            self.position_number
        )
    }

    /// Check the data-model invariants of a single shape.
    pub fn validate(&self) -> Result<(), FretboardError> {
        let fail = |message: String| FretboardError::ShapeError {
            shape: self.label(),
            message,
        };

        PitchClass::from_name(parse_root_note(&self.master_root, false))
            .map_err(|_| fail(format!("unknown master root '{}'", self.master_root)))?;

        if !(1..=5).contains(&self.difficulty) {
            return Err(fail(format!(
                "difficulty must be between 1 and 5, got {}",
                self.difficulty
            )));
        }

        if self.position_number == 0 {
            return Err(fail("position number must be at least 1".to_string()));
        }

        if self.category != self.chord_type.category() {
            return Err(fail(format!(
                "category '{}' does not match chord type '{}'",
                self.category, self.chord_type
            )));
        }

        if self.relative_frets.iter().all(Option::is_none) {
            return Err(fail("every string is muted".to_string()));
        }

        if let Some(fret) = self
            .relative_frets
            .iter()
            .flatten()
            .find(|&&f| f > MAX_FRET as i8)
        {
            return Err(fail(format!("fret {} is past the {}th fret", fret, MAX_FRET)));
        }

        if let Some(&idx) = self.root_string_indices.iter().find(|&&i| i >= STRING_COUNT) {
            return Err(fail(format!("root string index {} out of range", idx)));
        }

        for barre in self.barres.iter().flatten() {
            if barre.fret > MAX_FRET {
                return Err(fail(format!(
                    "barre at fret {} is past the {}th fret",
                    barre.fret, MAX_FRET
                )));
            }
            if barre.to_string as usize >= STRING_COUNT || barre.from_string > barre.to_string {
                return Err(fail(format!(
                    "barre covers invalid strings {}..{}",
                    barre.from_string, barre.to_string
                )));
            }
        }

        Ok(())
    }
}

/// Immutable, validated collection of master shapes.
#[derive(Debug, Clone)]
pub struct ShapeLibrary {
    shapes: Vec<MasterChordShape>,
}

impl ShapeLibrary {
    /// Parse the catalog embedded in the crate.
    pub fn builtin() -> Result<Self, FretboardError> {
        Self::from_yaml_str(BUILTIN_SHAPES)
    }

    /// Parse and validate a YAML list of shapes.
    pub fn from_yaml_str(content: &str) -> Result<Self, FretboardError> {
        let shapes: Vec<MasterChordShape> = serde_yaml::from_str(content)
            .map_err(|e| FretboardError::LibraryError(e.to_string()))?;
        Self::new(shapes)
    }

    pub fn from_path(path: &Path) -> Result<Self, FretboardError> {
        let content = fs::read_to_string(path).map_err(|source| FretboardError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Validate an in-memory list of shapes.
    pub fn new(shapes: Vec<MasterChordShape>) -> Result<Self, FretboardError> {
        let mut seen = HashSet::new();
        for shape in &shapes {
            shape.validate()?;
            if !seen.insert((shape.chord_type, shape.caged_shape, shape.position_number)) {
                return Err(FretboardError::ShapeError {
                    shape: shape.label(),
                    message: "duplicate chord type, CAGED shape and position".to_string(),
                });
            }
        }

        info!(count = shapes.len(), "loaded master shape library");
        Ok(Self { shapes })
    }

    pub fn shapes(&self) -> &[MasterChordShape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
