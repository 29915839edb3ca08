pub mod catalog;
pub mod chord_type;
pub mod config;
pub mod error;
pub mod pitch;
pub mod playback;
pub mod roman;
pub mod shapes;
pub mod transpose;
pub mod voicing;

pub use catalog::{group_voicings_by_category, group_voicings_by_type, VoicingCache, VoicingCatalog};
pub use chord_type::{format_chord_name, CagedShape, ChordCategory, ChordType, ChordTypeInfo};
pub use config::Config;
pub use error::*;
pub use pitch::{
    canonical_note_name, enharmonic_pair, note_at_position, parse_root_note, semitone_distance,
    PitchClass,
};
pub use shapes::{Barre, MasterChordShape, ShapeLibrary};
pub use transpose::{generate_voicings_for_root, transpose_shape};
pub use voicing::ChordVoicing;
