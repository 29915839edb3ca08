//! Strum plan generation

use super::types::{StrumNote, StrumPlan, StrumSettings, RELEASE_TAIL_MS};
use crate::pitch::{midi_note, midi_to_frequency, midi_to_note_name};
use crate::voicing::ChordVoicing;
use tracing::debug;

/// Build the strum plan for `voicing`.
///
/// Muted settings produce an empty plan with zero duration.
pub fn strum_voicing(voicing: &ChordVoicing, settings: &StrumSettings) -> StrumPlan {
    if settings.muted {
        return StrumPlan {
            voicing_id: voicing.id.clone(),
            volume: settings.volume,
            notes: Vec::new(),
            total_duration_ms: 0,
        };
    }

    let notes: Vec<StrumNote> = voicing
        .sounding_strings()
        .enumerate()
        .map(|(order, (string_index, fret))| {
            let midi = midi_note(string_index, fret);
            StrumNote {
                string_index,
                fret,
                midi_note: midi,
                note_name: midi_to_note_name(midi, false),
                frequency: midi_to_frequency(midi),
                delay_ms: order as u32 * settings.strum_speed_ms,
            }
        })
        .collect();

    let total_duration_ms = notes.len() as u32 * settings.strum_speed_ms + RELEASE_TAIL_MS;
    debug!(voicing = %voicing.id, notes = notes.len(), total_duration_ms, "built strum plan");

    StrumPlan {
        voicing_id: voicing.id.clone(),
        volume: settings.volume,
        notes,
        total_duration_ms,
    }
}
