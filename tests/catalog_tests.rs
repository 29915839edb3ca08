//! Integration tests for the voicing catalog
//!
//! Exercises the public API end to end: library loading, transposition to
//! every root, catalog queries and configuration files.

use fretboard::pitch::ROOT_NOTES;
use fretboard::playback::strum_voicing;
use fretboard::transpose::MAX_FRET_SPAN;
use fretboard::{
    semitone_distance, transpose_shape, ChordCategory, ChordType, Config, FretboardError,
    PitchClass, ShapeLibrary, VoicingCache, VoicingCatalog,
};
use std::collections::HashSet;
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

const NOTE_NAMES: [&str; 17] = [
    "A", "A#", "Bb", "B", "C", "C#", "Db", "D", "D#", "Eb", "E", "F", "F#", "Gb", "G", "G#", "Ab",
];

const TWO_SHAPES: &str = r#"
- chord-type: maj
  category: triad
  caged-shape: E
  position-number: 1
  master-root: F
  relative-frets: [1, 3, 3, 2, 1, 1]
  barres:
    - { fret: 1, from-string: 0, to-string: 5, finger: 1 }
  root-string-indices: [0, 2, 5]
  uses-open-strings: false
  transposable: true
  difficulty: 3
  common-usage: true
- chord-type: m7
  category: seventh
  caged-shape: A
  position-number: 1
  master-root: A
  relative-frets: [~, 0, 2, 0, 1, 0]
  root-string-indices: [1, 3]
  uses-open-strings: true
  transposable: true
  difficulty: 1
  common-usage: true
"#;

fn catalog() -> VoicingCatalog {
    VoicingCatalog::builtin().unwrap()
}

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_semitone_distance_properties() {
    for from in NOTE_NAMES {
        assert_eq!(semitone_distance(from, from).unwrap(), 0);
        for to in NOTE_NAMES {
            let d = semitone_distance(from, to).unwrap();
            assert!(d < 12);
            let back = semitone_distance(to, from).unwrap();
            assert_eq!((d + back) % 12, 0, "{} -> {}", from, to);
        }
    }
}

#[test]
fn test_every_voicing_is_playable() {
    let catalog = catalog();
    for root in ROOT_NOTES {
        for prefer_flat in [false, true] {
            for v in catalog.get_voicings_for_root(root, prefer_flat).unwrap().iter() {
                assert!(v.strings.iter().any(Option::is_some), "{} is silent", v.id);

                let fretted: Vec<u8> = v.strings.iter().flatten().copied().filter(|&f| f > 0).collect();
                if let (Some(low), Some(high)) = (fretted.iter().min(), fretted.iter().max()) {
                    assert!(high - low <= MAX_FRET_SPAN, "{} spans too far", v.id);
                    assert_eq!(v.starting_fret, *low);
                } else {
                    assert_eq!(v.starting_fret, 1);
                }
            }
        }
    }
}

#[test]
fn test_voicings_spell_their_root() {
    let catalog = catalog();
    for root in ROOT_NOTES {
        let pc = PitchClass::from_name(fretboard::parse_root_note(root, false)).unwrap();
        for v in catalog.get_voicings_for_root(root, false).unwrap().iter() {
            assert_eq!(PitchClass::from_name(&v.root).unwrap(), pc);
            for &i in &v.root_string_indices {
                let fret = v.strings[i].expect("root string must sound");
                assert_eq!(fretboard::pitch::pitch_class_at_position(i, fret), pc);
            }
            assert_eq!(v.is_inversion, PitchClass::from_name(&v.bass_note).unwrap() != pc);
            if !v.is_inversion {
                assert_eq!(v.inversion_number, None);
            }
        }
    }
}

#[test]
fn test_enharmonic_equivalence() {
    let catalog = catalog();
    for root in ROOT_NOTES {
        let sharp = catalog.get_voicings_for_root(root, false).unwrap();
        let flat = catalog.get_voicings_for_root(root, true).unwrap();
        assert_eq!(sharp.len(), flat.len());

        for (s, f) in sharp.iter().zip(flat.iter()) {
            assert_eq!(s.id, f.id);
            assert_eq!(s.strings, f.strings);
            assert_eq!(s.barres, f.barres);
            assert_eq!(s.starting_fret, f.starting_fret);
            assert_eq!(s.intervals, f.intervals);
            assert_eq!(s.is_inversion, f.is_inversion);
            let same_pitches = s
                .notes
                .iter()
                .zip(&f.notes)
                .all(|(a, b)| PitchClass::from_name(a).unwrap() == PitchClass::from_name(b).unwrap());
            assert!(same_pitches, "{}", s.id);
        }
    }
}

#[test]
fn test_ids_unique_within_and_across_roots() {
    let catalog = catalog();
    let mut seen = HashSet::new();
    for root in ROOT_NOTES {
        for v in catalog.get_voicings_for_root(root, false).unwrap().iter() {
            assert!(seen.insert(v.id.clone()), "duplicate id {}", v.id);
        }
    }
}

#[test]
fn test_ordering_for_c() {
    let c = catalog().get_voicings_for_root("C", false).unwrap();

    let mut last = (0, 0);
    for v in c.iter() {
        let key = (v.chord_type.priority(), v.position_number);
        assert!(key >= last, "{} out of order", v.id);
        last = key;
    }

    let types: Vec<ChordType> = c.iter().map(|v| v.chord_type).collect();
    let first_minor = types.iter().position(|&t| t == ChordType::Minor).unwrap();
    let first_aug = types.iter().position(|&t| t == ChordType::Augmented).unwrap();
    assert!(types[..first_minor].iter().all(|&t| t == ChordType::Major));
    assert!(types[first_minor..first_aug].iter().all(|&t| t == ChordType::Minor));
}

#[test]
fn test_open_a_moves_to_b() {
    let v = catalog().get_voicing_by_id("b-maj-a-4").unwrap().unwrap();
    assert_eq!(v.strings, [None, Some(2), Some(4), Some(4), Some(4), Some(2)]);
    assert_eq!(v.starting_fret, 2);
    assert_eq!(v.bass_note, "B");
    assert!(!v.is_inversion);
    assert_eq!(v.display_name(), "B");
    assert_eq!(v.tab(), "x24442");
    assert_eq!(v.starting_fret_numeral(), "II");
}

#[test]
fn test_shift_zero_only_shapes() {
    let catalog = catalog();
    // The open m9 shape relies on open strings against the 5th fret
    assert!(catalog.get_voicing_by_id("a-m9-a-1").unwrap().is_some());
    let b_m9 = catalog.get_voicings_by_type("B", ChordType::Minor9, false).unwrap();
    assert!(b_m9.iter().all(|v| v.id != "b-m9-a-1"));
}

#[test]
fn test_cache_idempotence() {
    let catalog = catalog();
    let first = catalog.get_voicings_for_root("Eb", true).unwrap();
    let second = catalog.get_voicings_for_root("Eb", true).unwrap();
    assert_eq!(first, second);

    catalog.clear_cache();
    assert!(catalog.cache().is_empty());
    let third = catalog.get_voicings_for_root("Eb", true).unwrap();
    assert_eq!(first, third);
    assert_eq!(catalog.cache().len(), 1);
}

#[test]
fn test_chord_names_for_every_selectable_root() {
    let catalog = catalog();
    for root in ROOT_NOTES {
        for chord_type in catalog.get_available_chord_types(root).unwrap() {
            let name = fretboard::format_chord_name(root, chord_type, true).unwrap();
            assert!(name.starts_with(fretboard::parse_root_note(root, true)), "{}", name);
        }
    }
    assert_eq!(fretboard::format_chord_name("G#/Ab", ChordType::Minor, true).unwrap(), "Abm");
}

#[test]
fn test_shared_catalog_across_threads() {
    let catalog = Arc::new(catalog());
    let handles: Vec<_> = ROOT_NOTES
        .iter()
        .map(|&root| {
            let catalog = Arc::clone(&catalog);
            std::thread::spawn(move || catalog.get_voicings_for_root(root, false).unwrap().len())
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap() > 0);
    }
}

#[test]
fn test_filters_match_full_list() {
    let catalog = catalog();
    let all = catalog.get_voicings_for_root("G", false).unwrap();
    let mut total = 0;
    for category in ChordCategory::ALL {
        total += catalog.get_voicings_by_category("G", category, false).unwrap().len();
    }
    assert_eq!(total, all.len());

    let by_type: usize = catalog
        .get_available_chord_types("G")
        .unwrap()
        .into_iter()
        .map(|t| catalog.get_voicings_by_type("G", t, false).unwrap().len())
        .sum();
    assert_eq!(by_type, all.len());
}

#[test]
fn test_unknown_root() {
    let err = catalog().get_voicings_for_root("Fb", false).unwrap_err();
    assert!(matches!(err, FretboardError::UnknownNoteName(_)));
}

#[test]
fn test_library_from_file() {
    let file = write_temp(TWO_SHAPES);
    let library = ShapeLibrary::from_path(file.path()).unwrap();
    assert_eq!(library.len(), 2);

    let catalog = VoicingCatalog::new(Arc::new(library), VoicingCache::new());
    let g = catalog.get_voicings_for_root("G", false).unwrap();
    assert_eq!(g.len(), 2);
    assert_eq!(g[0].id, "g-maj-e-1");
    assert_eq!(g[0].strings, [Some(3), Some(5), Some(5), Some(4), Some(3), Some(3)]);
    assert_eq!(g[1].id, "g-m7-a-1");
    assert_eq!(g[1].strings, [None, Some(10), Some(12), Some(10), Some(11), Some(10)]);
}

#[test]
fn test_invalid_library_file() {
    let file = write_temp("- chord-type: nope\n");
    assert!(matches!(
        ShapeLibrary::from_path(file.path()).unwrap_err(),
        FretboardError::LibraryError(_)
    ));
}

#[test]
fn test_config_file_with_relative_library() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("shapes.yaml"), TWO_SHAPES).unwrap();
    let config_path = dir.path().join("fretboard.yaml");
    std::fs::write(&config_path, "prefer-flat: true\nstrum-speed: 20\nshape-library: shapes.yaml\n").unwrap();

    let config = Config::load(&config_path).unwrap();
    assert!(config.prefer_flat);
    assert_eq!(config.shape_library, Some(dir.path().join("shapes.yaml")));

    let library = config.shape_library().unwrap();
    let catalog = VoicingCatalog::new(Arc::new(library), VoicingCache::new());
    let bb = catalog.get_voicings_for_root("A#/Bb", config.prefer_flat).unwrap();
    assert_eq!(bb[0].root, "Bb");

    let plan = strum_voicing(&bb[0], &config.strum);
    assert_eq!(plan.notes.len(), 6);
    assert_eq!(plan.notes[5].delay_ms, 100);
    assert_eq!(plan.total_duration_ms, 6 * 20 + 100);
}

#[test]
fn test_transpose_through_public_api() {
    let library = ShapeLibrary::from_yaml_str(TWO_SHAPES).unwrap();
    let f_barre = &library.shapes()[0];
    // Shifts always go up the neck, so F to E lands at the 12th fret
    let e = transpose_shape(f_barre, "E", false).unwrap().unwrap();
    assert_eq!(e.strings, [Some(12), Some(14), Some(14), Some(13), Some(12), Some(12)]);
    assert_eq!(e.starting_fret, 12);
    assert_eq!(e.barres.unwrap()[0].fret, 12);
    let f = transpose_shape(f_barre, "F", false).unwrap().unwrap();
    assert_eq!(f.barres.unwrap()[0].fret, 1);
}

#[test]
fn test_voicing_json_contract() {
    let v = catalog().get_voicing_by_id("c-maj-c-3").unwrap().unwrap();
    let json = serde_json::to_value(&v).unwrap();
    assert_eq!(json["id"], "c-maj-c-3");
    assert_eq!(json["chordType"], "maj");
    assert_eq!(json["category"], "triad");
    assert_eq!(json["cagedShape"], "C");
    assert_eq!(json["strings"][0], serde_json::Value::Null);
    assert_eq!(json["positionLabel"], "3rd Position");
    assert_eq!(json["isInversion"], false);
    assert!(json.get("inversionNumber").is_none());
    assert!(json.get("rootAlternate").is_none());

    let back: fretboard::ChordVoicing = serde_json::from_value(json).unwrap();
    assert_eq!(back, v);
}
