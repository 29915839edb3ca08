use clap::{Parser, Subcommand};
use fretboard::playback::{strum_voicing, StrumPlan};
use fretboard::{
    format_chord_name, group_voicings_by_type, ChordCategory, ChordType, ChordVoicing, Config,
    ShapeLibrary, VoicingCache, VoicingCatalog,
};
use std::error::Error;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "fretboard", about = "Guitar chord voicings for every root")]
#[command(version)]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Master shape library to use instead of the built-in one
    #[arg(long, global = true)]
    shapes: Option<PathBuf>,

    /// Log cache and library activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List playable voicings for a root
    Voicings {
        /// Root note, e.g. C, F#, Bb or C#/Db
        root: String,
        /// Spell accidentals as flats
        #[arg(long)]
        flat: bool,
        /// Only this chord type (maj, m7, 7#5, ...)
        #[arg(long = "type")]
        chord_type: Option<ChordType>,
        /// Only this category (triad, seventh, extended)
        #[arg(long)]
        category: Option<ChordCategory>,
        #[arg(long)]
        json: bool,
    },
    /// List chord types available at a root
    Types {
        root: String,
    },
    /// Show one voicing by id, e.g. c-maj-c-3
    Show {
        id: String,
        #[arg(long)]
        json: bool,
    },
    /// Print the strum plan for a voicing
    Strum {
        id: String,
        /// Milliseconds between strings (10-100)
        #[arg(long)]
        speed: Option<u32>,
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "fretboard=debug" } else { "fretboard=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let library = match &cli.shapes {
        Some(path) => ShapeLibrary::from_path(path)?,
        None => config.shape_library()?,
    };
    let catalog = VoicingCatalog::new(Arc::new(library), VoicingCache::new());

    match cli.command {
        Command::Voicings {
            root,
            flat,
            chord_type,
            category,
            json,
        } => {
            let prefer_flat = flat || config.prefer_flat;
            let voicings: Vec<ChordVoicing> = match (chord_type, category) {
                (Some(t), _) => catalog
                    .get_voicings_by_type(&root, t, prefer_flat)?
                    .into_iter()
                    .filter(|v| category.map_or(true, |c| v.category == c))
                    .collect(),
                (None, Some(c)) => catalog.get_voicings_by_category(&root, c, prefer_flat)?,
                (None, None) => catalog.get_voicings_for_root(&root, prefer_flat)?.to_vec(),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&voicings)?);
            } else {
                print_grouped(&voicings);
            }
        }
        Command::Types { root } => {
            for chord_type in catalog.get_available_chord_types(&root)? {
                let info = chord_type.info();
                println!(
                    "{:<6} {:<8} {}",
                    chord_type.as_str(),
                    format_chord_name(&root, chord_type, config.prefer_flat)?,
                    info.name
                );
            }
        }
        Command::Show { id, json } => {
            let voicing = find_voicing(&catalog, &id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&voicing)?);
            } else {
                print_detail(&voicing);
            }
        }
        Command::Strum { id, speed, json } => {
            let voicing = find_voicing(&catalog, &id)?;
            let settings = match speed {
                Some(ms) => config.strum.with_strum_speed(ms),
                None => config.strum,
            };
            let plan = strum_voicing(&voicing, &settings);
            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                print_strum(&voicing, &plan, settings.strum_speed_ms);
            }
        }
    }

    Ok(())
}

fn find_voicing(catalog: &VoicingCatalog, id: &str) -> Result<ChordVoicing, Box<dyn Error>> {
    catalog
        .get_voicing_by_id(id)?
        .ok_or_else(|| format!("No voicing with id '{}'", id).into())
}

fn print_grouped(voicings: &[ChordVoicing]) {
    if voicings.is_empty() {
        println!("No playable voicings.");
        return;
    }

    for (chord_type, group) in group_voicings_by_type(voicings) {
        println!("{} ({})", group[0].display_name(), chord_type.info().name);
        for v in group {
            println!(
                "  {:<14} {:<18} fret {:<5} {:<24} {}",
                v.position_label,
                v.tab(),
                v.starting_fret_numeral(),
                v.notes.join(" "),
                v.id
            );
        }
    }
}

fn print_detail(v: &ChordVoicing) {
    println!("{} ({})", v.display_name(), v.id);
    if let Some(alt) = &v.root_alternate {
        println!("  also spelled  {}{}", alt, v.chord_type.info().short_name);
    }
    println!("  position      {}", v.position_label);
    if let Some(shape) = v.caged_shape {
        println!("  CAGED shape   {}", shape.as_str());
    }
    println!("  frets         {}", v.tab());
    println!("  starting fret {} ({})", v.starting_fret, v.starting_fret_numeral());
    println!("  notes         {}", v.notes.join(" "));
    println!("  intervals     {}", v.intervals.join(" "));
    if v.is_inversion {
        match v.inversion_number {
            Some(n) => println!("  bass          {} (inversion {})", v.bass_note, n),
            None => println!("  bass          {} (inversion)", v.bass_note),
        }
    } else {
        println!("  bass          {}", v.bass_note);
    }
    for barre in v.barres.iter().flatten() {
        println!(
            "  barre         fret {}, strings {}-{}, finger {}",
            barre.fret,
            barre.from_string + 1,
            barre.to_string + 1,
            barre.finger
        );
    }
    println!("  difficulty    {}/5", v.difficulty);
}

fn print_strum(v: &ChordVoicing, plan: &StrumPlan, speed_ms: u32) {
    if plan.is_silent() {
        println!("{} is muted.", v.display_name());
        return;
    }

    println!(
        "{} {}: {} ms per string, {} ms total",
        v.display_name(),
        v.tab(),
        speed_ms,
        plan.total_duration_ms
    );
    for note in &plan.notes {
        println!(
            "  +{:>4} ms  string {}  fret {:>2}  {:<4} {:>8.2} Hz",
            note.delay_ms,
            note.string_index + 1,
            note.fret,
            note.note_name,
            note.frequency
        );
    }
}
