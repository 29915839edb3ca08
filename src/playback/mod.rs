//! # Playback Module
//!
//! Turn a [`ChordVoicing`](crate::ChordVoicing) into a strum plan for an audio
//! collaborator. No sound is produced here; the plan says which pitches to
//! trigger and when.
//!
//! ## Sub-modules
//! - `types` - StrumSettings, StrumNote, StrumPlan
//! - `engine` - Strum plan generation
//!
//! ## Timing
//! Sounding strings are struck low to high. The n-th sounding string (from 0)
//! starts `n * strum_speed_ms` after the first, and the plan lasts
//! `note_count * strum_speed_ms + 100` ms so the last string can ring.
//!
//! ## Example
//! ```rust
//! use fretboard::playback::{strum_voicing, StrumSettings};
//! use fretboard::VoicingCatalog;
//!
//! let catalog = VoicingCatalog::builtin()?;
//! let open_a = catalog.get_voicing_by_id("a-maj-a-4")?.unwrap();
//!
//! let plan = strum_voicing(&open_a, &StrumSettings::default());
//! assert_eq!(plan.notes.len(), 5);
//! assert_eq!(plan.notes[0].note_name, "A2");
//! assert_eq!(plan.notes[0].midi_note, 45);
//! assert_eq!(plan.notes[4].delay_ms, 160);
//! assert_eq!(plan.total_duration_ms, 300);
//! # Ok::<(), fretboard::FretboardError>(())
//! ```

mod engine;
mod types;


pub use engine::strum_voicing;
pub use types::{
    StrumNote, StrumPlan, StrumSettings, DEFAULT_STRUM_SPEED_MS, DEFAULT_VOLUME, MAX_STRUM_SPEED_MS,
    MIN_STRUM_SPEED_MS,
};
