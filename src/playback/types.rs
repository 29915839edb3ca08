//! Playback type definitions

use serde::{Deserialize, Serialize};

/// Gap between strings when nothing else is configured.
pub const DEFAULT_STRUM_SPEED_MS: u32 = 40;
pub const MIN_STRUM_SPEED_MS: u32 = 10;
pub const MAX_STRUM_SPEED_MS: u32 = 100;
pub const DEFAULT_VOLUME: f64 = 0.7;

/// Ring time after the last string is struck.
pub const RELEASE_TAIL_MS: u32 = 100;

/// How a chord should be strummed.
///
/// Constructors clamp `strum_speed_ms` to 10-100 and `volume` to 0.0-1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrumSettings {
    pub strum_speed_ms: u32,
    pub volume: f64,
    pub muted: bool,
}

impl Default for StrumSettings {
    fn default() -> Self {
        Self {
            strum_speed_ms: DEFAULT_STRUM_SPEED_MS,
            volume: DEFAULT_VOLUME,
            muted: false,
        }
    }
}

impl StrumSettings {
    pub fn new(strum_speed_ms: u32, volume: f64, muted: bool) -> Self {
        Self::default()
            .with_strum_speed(strum_speed_ms)
            .with_volume(volume)
            .with_muted(muted)
    }

    pub fn with_strum_speed(mut self, strum_speed_ms: u32) -> Self {
        self.strum_speed_ms = strum_speed_ms.clamp(MIN_STRUM_SPEED_MS, MAX_STRUM_SPEED_MS);
        self
    }

    /// NaN falls back to the default volume.
    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = if volume.is_nan() {
            DEFAULT_VOLUME
        } else {
            volume.clamp(0.0, 1.0)
        };
        self
    }

    pub fn with_muted(mut self, muted: bool) -> Self {
        self.muted = muted;
        self
    }
}

/// One string of a strum.
///
/// # Fields
/// - `string_index`: 0 = low E through 5 = high E
/// - `midi_note`: concert pitch (open low E = 40)
/// - `note_name`: scientific pitch name with octave, sharp spelling (e.g. `"C#4"`)
/// - `frequency`: Hz, A4 = 440
/// - `delay_ms`: offset from the first string of the strum
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrumNote {
    pub string_index: usize,
    pub fret: u8,
    pub midi_note: u8,
    pub note_name: String,
    pub frequency: f64,
    pub delay_ms: u32,
}

/// Everything an audio engine needs to strum one voicing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrumPlan {
    pub voicing_id: String,
    pub volume: f64,
    pub notes: Vec<StrumNote>,
    pub total_duration_ms: u32,
}

impl StrumPlan {
    pub fn is_silent(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn midi_notes(&self) -> Vec<u8> {
        self.notes.iter().map(|n| n.midi_note).collect()
    }
}
