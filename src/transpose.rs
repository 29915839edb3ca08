//! # Transposer
//!
//! Maps one master shape plus a target root to a concrete [`ChordVoicing`],
//! or to nothing when the result cannot be played.
//!
//! ## Algorithm
//! 1. `shift` = upward semitone distance from the shape's master root to the target
//! 2. Muted strings stay muted. Open strings of an open-string shape are
//!    re-fretted at `shift` (an open string cannot itself move). Every other
//!    fret becomes `fret + shift`.
//! 3. The result is dropped when nothing sounds, a fret is negative, or the
//!    fretted span exceeds [`MAX_FRET_SPAN`].
//! 4. Notes, interval labels, bass note, inversion and root strings are then
//!    derived from the new frets.
//!
//! Infeasibility is an ordinary outcome (`Ok(None)`). Only unknown note
//! names are errors.
//!
//! ## Example
//! ```rust
//! use fretboard::{transpose_shape, ShapeLibrary};
//!
//! let library = ShapeLibrary::builtin()?;
//! let open_a = library
//!     .shapes()
//!     .iter()
//!     .find(|s| s.master_root == "A" && s.relative_frets == [None, Some(0), Some(2), Some(2), Some(2), Some(0)])
//!     .unwrap();
//!
//! let b = transpose_shape(open_a, "B", false)?.unwrap();
//! assert_eq!(b.strings, [None, Some(2), Some(4), Some(4), Some(4), Some(2)]);
//! assert_eq!(b.starting_fret, 2);
//! assert_eq!(b.bass_note, "B");
//! # Ok::<(), fretboard::FretboardError>(())
//! ```

use crate::chord_type::{CagedShape, ChordType};
use crate::error::FretboardError;
use crate::pitch::{parse_root_note, pitch_class_at_position, semitone_distance, PitchClass, STRING_COUNT};
use crate::shapes::{Barre, MasterChordShape};
use crate::voicing::ChordVoicing;
use tracing::trace;

/// Widest playable distance between the lowest and highest fretted note.
pub const MAX_FRET_SPAN: u8 = 4;

/// Position label such as "1st Position" or "4th Position".
pub fn position_label(position_number: u8) -> String {
    let suffix = match position_number {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    };
    format!("{}{} Position", position_number, suffix)
}

/// Candidate labels for an interval, in tiebreak order.
fn interval_candidates(semitones: u8) -> &'static [&'static str] {
    match semitones {
        0 => &["1", "R"],
        1 => &["b2", "b9"],
        2 => &["2", "9"],
        3 => &["b3", "#9"],
        4 => &["3"],
        5 => &["4", "11"],
        6 => &["b5", "#11"],
        7 => &["5"],
        8 => &["b6", "#5"],
        9 => &["6", "13"],
        10 => &["b7"],
        11 => &["7"],
        _ => unreachable!(),
    }
}

/// Label an interval of `semitones` (0-11) above the root.
///
/// Picks the candidate that appears in `chord_intervals`, falling back to the
/// first candidate: a 2-semitone interval is "9" in a maj9 chord but "2" in
/// a sus2 or a plain major chord.
pub fn interval_name(semitones: u8, chord_intervals: &[&str]) -> &'static str {
    let candidates = interval_candidates(semitones % 12);
    candidates
        .iter()
        .copied()
        .find(|c| chord_intervals.contains(c))
        .unwrap_or(candidates[0])
}

/// Inversion number from the bass note's distance above the root.
///
/// Triad-oriented: third in the bass is 1st inversion, fifth is 2nd, seventh
/// is 3rd. Anything else (a 9th or 11th in the bass) is unclassified.
pub fn inversion_number(bass_interval: u8) -> Option<u8> {
    match bass_interval {
        3 | 4 => Some(1),
        7 => Some(2),
        10 | 11 => Some(3),
        _ => None,
    }
}

/// Stable id such as `"cs-m7-a-3"`.
///
/// The root is always written in its sharp spelling so that both spelling
/// preferences produce the same id.
pub fn voicing_id(
    root: PitchClass,
    chord_type: ChordType,
    caged_shape: Option<CagedShape>,
    position_number: u8,
) -> String {
    let root = root.name(false).to_lowercase().replace('#', "s");
    let shape = caged_shape.map_or_else(|| "pos".to_string(), |c| c.as_str().to_lowercase());
    format!("{}-{}-{}-{}", root, chord_type.as_str(), shape, position_number)
}

/// Apply `shift` to every string, or `None` if the result is unplayable.
fn shift_frets(shape: &MasterChordShape, shift: u8) -> Option<[Option<u8>; STRING_COUNT]> {
    let mut strings = [None; STRING_COUNT];

    for (i, relative) in shape.relative_frets.iter().enumerate() {
        let fret = match *relative {
            None => continue,
            Some(0) if shape.uses_open_strings => shift as i16,
            Some(fret) => fret as i16 + shift as i16,
        };
        if fret < 0 {
            trace!(shape = %shape.label(), string = i, fret, "negative fret");
            return None;
        }
        strings[i] = Some(fret as u8);
    }

    if strings.iter().all(Option::is_none) {
        trace!(shape = %shape.label(), "no sounding strings");
        return None;
    }

    let fretted = strings.iter().flatten().copied().filter(|&f| f > 0);
    if let (Some(low), Some(high)) = (fretted.clone().min(), fretted.max()) {
        if high - low > MAX_FRET_SPAN {
            trace!(shape = %shape.label(), shift, low, high, "span too wide");
            return None;
        }
    }

    Some(strings)
}

/// Transpose `shape` to `target_root`.
///
/// `target_root` may be a single spelling (`"Db"`) or a dual spelling
/// (`"C#/Db"`), in which case `prefer_flat` picks the half used.
///
/// Returns `Ok(None)` when the shape cannot be played at that root.
///
/// # Errors
/// [`FretboardError::UnknownNoteName`] if the target or master root is not a
/// recognized spelling.
pub fn transpose_shape(
    shape: &MasterChordShape,
    target_root: &str,
    prefer_flat: bool,
) -> Result<Option<ChordVoicing>, FretboardError> {
    let source = parse_root_note(&shape.master_root, false);
    let target = parse_root_note(target_root, prefer_flat);
    let shift = semitone_distance(source, target)?;
    let root = PitchClass::from_name(target)?;

    let Some(strings) = shift_frets(shape, shift) else {
        return Ok(None);
    };

    let starting_fret = strings
        .iter()
        .flatten()
        .copied()
        .filter(|&f| f > 0)
        .min()
        .unwrap_or(1);

    let mut shifted_barres = Vec::new();
    for barre in shape.barres.iter().flatten() {
        let Some(fret) = barre.fret.checked_add(shift) else {
            trace!(shape = %shape.label(), fret = barre.fret, shift, "barre off the neck");
            return Ok(None);
        };
        shifted_barres.push(Barre { fret, ..*barre });
    }
    let barres = (!shifted_barres.is_empty()).then_some(shifted_barres);

    let chord_intervals = shape.chord_type.info().intervals;
    let sounding: Vec<PitchClass> = strings
        .iter()
        .enumerate()
        .filter_map(|(i, fret)| fret.map(|f| pitch_class_at_position(i, f)))
        .collect();

    let notes: Vec<String> = sounding
        .iter()
        .map(|pc| pc.name(prefer_flat).to_string())
        .collect();
    let intervals: Vec<String> = sounding
        .iter()
        .map(|&pc| interval_name(root.distance_to(pc), chord_intervals).to_string())
        .collect();

    // shift_frets guarantees at least one sounding string
    let bass = sounding[0];
    let is_inversion = bass != root;
    let inversion = if is_inversion {
        inversion_number(root.distance_to(bass))
    } else {
        None
    };

    let root_string_indices: Vec<usize> = shape
        .root_string_indices
        .iter()
        .copied()
        .filter(|&i| match strings.get(i).copied().flatten() {
            Some(fret) => pitch_class_at_position(i, fret) == root,
            None => false,
        })
        .collect();

    let display_root = root.name(prefer_flat);
    let alternate_root = root.name(!prefer_flat);

    Ok(Some(ChordVoicing {
        id: voicing_id(root, shape.chord_type, shape.caged_shape, shape.position_number),
        root: display_root.to_string(),
        root_alternate: (display_root != alternate_root).then(|| alternate_root.to_string()),
        chord_type: shape.chord_type,
        category: shape.category,
        subcategory: shape.subcategory.clone(),
        caged_shape: shape.caged_shape,
        position_number: shape.position_number,
        position_label: position_label(shape.position_number),
        starting_fret,
        strings,
        fingers: shape.fingers,
        barres,
        root_string_indices,
        bass_note: bass.name(prefer_flat).to_string(),
        is_inversion,
        inversion_number: inversion,
        notes,
        intervals,
        difficulty: shape.difficulty,
        common_usage: shape.common_usage,
    }))
}

/// Transpose every shape to `target_root`, dropping the unplayable ones.
///
/// Output keeps the input order.
pub fn generate_voicings_for_root(
    shapes: &[MasterChordShape],
    target_root: &str,
    prefer_flat: bool,
) -> Result<Vec<ChordVoicing>, FretboardError> {
    let mut voicings = Vec::with_capacity(shapes.len());
    for shape in shapes {
        if let Some(voicing) = transpose_shape(shape, target_root, prefer_flat)? {
            voicings.push(voicing);
        }
    }
    Ok(voicings)
}
