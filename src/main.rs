use std::env;
use std::process;

use log::LevelFilter;
use serde::Serialize;
use simple_logger::SimpleLogger;

use chordcraft::playback::{schedule_progression, GAME_TEMPO};
use chordcraft::{find_song, get_chord_notes, Catalog, ProgressionGenerator, Style};

const USAGE: &[&str] = &[
    "Usage: chordcraft levels [--levels FILE]",
    "       chordcraft generate <LEVEL_ID> [--style STYLE] [--seed N] [--tempo BPM] [--levels FILE]",
    "       chordcraft notes <ROMAN> <STYLE> [KEY...]",
    "       chordcraft song <ID>",
];

fn usage() -> ! {
    for line in USAGE {
        eprintln!("{}", line);
    }
    process::exit(1);
}

fn fail(context: &str, e: impl std::fmt::Display) -> ! {
    eprintln!("{}: {}", context, e);
    process::exit(1);
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => fail("Error serializing output", e),
    }
}

/// Pull `--name VALUE` out of `args`, leaving positional arguments behind.
fn take_flag(args: &mut Vec<String>, name: &str) -> Option<String> {
    let pos = args.iter().position(|a| a == name)?;
    if pos + 1 >= args.len() {
        eprintln!("Missing value for {}", name);
        usage();
    }
    let value = args.remove(pos + 1);
    args.remove(pos);
    Some(value)
}

fn parse_or_exit<T: std::str::FromStr>(value: &str, what: &str) -> T
where
    T::Err: std::fmt::Display,
{
    match value.parse() {
        Ok(v) => v,
        Err(e) => fail(&format!("Invalid {} '{}'", what, value), e),
    }
}

fn load_catalog(args: &mut Vec<String>) -> Catalog {
    match take_flag(args, "--levels") {
        Some(path) => match Catalog::from_path(&path) {
            Ok(catalog) => catalog,
            Err(e) => fail("Error loading levels", e),
        },
        None => Catalog::builtin(),
    }
}

fn cmd_levels(mut args: Vec<String>) {
    let catalog = load_catalog(&mut args);
    print_json(&catalog.levels());
}

fn cmd_generate(mut args: Vec<String>) {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let catalog = load_catalog(&mut args);
    let style = take_flag(&mut args, "--style").map(|s| parse_or_exit::<Style>(&s, "style"));
    let seed = take_flag(&mut args, "--seed").map(|s| parse_or_exit::<u64>(&s, "seed"));
    let tempo = take_flag(&mut args, "--tempo")
        .map(|s| parse_or_exit::<u16>(&s, "tempo"))
        .unwrap_or(GAME_TEMPO);

    let level_id: u32 = match args.first() {
        Some(id) => parse_or_exit(id, "level id"),
        None => usage(),
    };

    // Without --style the level's own style is used.
    let style = match style {
        Some(style) => style,
        None => match catalog.level(level_id) {
            Some(level) => level.style,
            None => fail("Error", format!("no level {} in catalog", level_id)),
        },
    };

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let generator = ProgressionGenerator::new(&catalog);
    let progression = match generator.generate(level_id, style, &mut rng) {
        Ok(p) => p,
        Err(e) => fail("Generation error", e),
    };
    let playback = match schedule_progression(&progression, tempo) {
        Ok(p) => p,
        Err(e) => fail("Playback error", e),
    };

    print_json(&serde_json::json!({
        "progression": progression,
        "playback": playback,
    }));
}

fn cmd_notes(args: Vec<String>) {
    if args.len() < 2 {
        usage();
    }
    let style: Style = parse_or_exit(&args[1], "style");
    // Key labels contain spaces; accept them unquoted.
    let key = if args.len() > 2 {
        Some(args[2..].join(" "))
    } else {
        None
    };

    let notes = get_chord_notes(&args[0], style, key.as_deref());
    if notes.is_empty() {
        eprintln!("No notes for '{}'", args[0]);
        process::exit(1);
    }
    let names: Vec<String> = notes.iter().map(|n| n.to_string()).collect();
    println!("{}", names.join(" "));
}

fn cmd_song(args: Vec<String>) {
    let Some(id) = args.first() else { usage() };
    let Some(song) = find_song(id) else {
        fail("Error", format!("unknown song '{}'", id));
    };
    let chords = match song.chords() {
        Ok(chords) => chords,
        Err(e) => fail("Error resolving song", e),
    };
    print_json(&serde_json::json!({
        "song": song,
        "chords": chords,
    }));
}

fn main() {
    if let Err(e) = SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()
    {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let mut args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        usage();
    }
    let command = args.remove(0);

    match command.as_str() {
        "levels" => cmd_levels(args),
        "generate" => cmd_generate(args),
        "notes" => cmd_notes(args),
        "song" => cmd_song(args),
        _ => {
            eprintln!("Unknown command '{}'", command);
            usage();
        }
    }
}
