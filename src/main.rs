use chordbox::{database, ChordBox, ChordSpec, ChordStyle, Layout, RecordingSurface};
use std::io::{self, Read};

const USAGE: &str = "\
chordbox - Render guitar and ukulele chord diagrams as SVG

Usage: chordbox [OPTIONS] NAME POSITIONS [FINGERS]
       chordbox [OPTIONS] --lookup NOTE [KIND]
       chordbox --key KEY
       chordbox --markup < page.html

Options:
  -s, --size N        Scale factor (default: 1, or 3 with --lookup)
  -l, --layout 1|2    1 = fingers in dots + string names, 2 = fingers below (default)
      --strings A,B,..  String names shown with layout 1
  -t, --transparent   No background fill
      --style JSON    Style object, e.g. '{\"color\": \"#333\"}'
      --json          Print recorded draw operations as JSON instead of SVG
  -v, --verbose       Log to stderr
  -h, --help          Show this help message

Example:
  chordbox A X02220 --123- --size 7
  chordbox --lookup F# minor";

/// Logs everything at debug level and above to stderr
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= log::Level::Debug
    }

    fn log(&self, record: &log::Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

#[derive(Debug, Default)]
struct Args {
    positional: Vec<String>,
    size: Option<f64>,
    layout: Layout,
    string_names: Option<Vec<String>>,
    style: ChordStyle,
    transparent: bool,
    lookup: bool,
    key: Option<String>,
    markup: bool,
    json: bool,
    verbose: bool,
    help: bool,
}

fn parse_args(raw: &[String]) -> Result<Args, String> {
    let mut args = Args::default();
    let mut iter = raw.iter();

    while let Some(arg) = iter.next() {
        let mut value = || {
            iter.next()
                .cloned()
                .ok_or_else(|| format!("Missing value for {}", arg))
        };
        match arg.as_str() {
            "-h" | "--help" => args.help = true,
            "-v" | "--verbose" => args.verbose = true,
            "-t" | "--transparent" => args.transparent = true,
            "--json" => args.json = true,
            "--lookup" => args.lookup = true,
            "--markup" => args.markup = true,
            "--key" => args.key = Some(value()?),
            "-s" | "--size" => {
                let v = value()?;
                let size = v
                    .parse::<f64>()
                    .map_err(|_| format!("Invalid size '{}'", v))?;
                args.size = Some(size);
            }
            "-l" | "--layout" => {
                let v = value()?;
                args.layout = v
                    .parse::<u8>()
                    .ok()
                    .and_then(Layout::from_number)
                    .ok_or_else(|| format!("Invalid layout '{}', expected 1 or 2", v))?;
            }
            "--strings" => {
                let v = value()?;
                args.string_names = Some(v.split(',').map(|s| s.trim().to_string()).collect());
            }
            "--style" => {
                let v = value()?;
                args.style = serde_json::from_str(&v).map_err(|e| format!("Invalid style: {}", e))?;
            }
            // Finger strings like "--123-" look like flags; only known flags are options
            _ => args.positional.push(arg.clone()),
        }
    }

    if args.transparent {
        args.style.background = None;
    }
    Ok(args)
}

fn chord_spec(args: &Args) -> Result<ChordSpec, String> {
    let (name, positions, fingers, default_size) = if args.lookup {
        let note = args
            .positional
            .first()
            .ok_or("Missing NOTE for --lookup")?;
        let kind = args
            .positional
            .get(1)
            .map(String::as_str)
            .unwrap_or(database::DEFAULT_KIND);
        let entry = database::lookup(database::DEFAULT_TUNING, kind, note)?;
        (
            database::default_name(note, kind),
            entry.positions,
            entry.fingers,
            database::DEFAULT_DIAGRAM_SIZE,
        )
    } else {
        match args.positional.as_slice() {
            [name, positions] => (name.clone(), positions.clone(), String::new(), 1.0),
            [name, positions, fingers] => (name.clone(), positions.clone(), fingers.clone(), 1.0),
            _ => return Err("Expected NAME POSITIONS [FINGERS]".to_string()),
        }
    };

    let spec = ChordSpec::new(&name, &positions, &fingers)
        .size(args.size.unwrap_or(default_size))
        .layout(args.layout);
    Ok(match &args.string_names {
        Some(names) => spec.string_names(names.iter().cloned()),
        None => spec,
    })
}

fn run(args: &Args) -> Result<String, String> {
    if let Some(key) = &args.key {
        let names: Vec<String> = database::key_chords(key)?
            .iter()
            .map(|c| database::default_name(&c.note, &c.kind))
            .collect();
        return Ok(names.join(" "));
    }

    if args.markup {
        let mut html = String::new();
        io::stdin()
            .read_to_string(&mut html)
            .map_err(|e| format!("Failed to read from stdin: {}", e))?;
        return Ok(chordbox::replace_chord_elements(&html, &args.style));
    }

    let chord = ChordBox::new(&chord_spec(args)?);
    if let Some(e) = chord.error() {
        log::warn!("{}", e);
    }

    if args.json {
        let mut surface = RecordingSurface::new();
        chord.draw(&mut surface, &args.style);
        surface.to_json()
    } else {
        Ok(chordbox::render_chord_svg(&chord, &args.style)
            .trim_end()
            .to_string())
    }
}

fn main() {
    let raw: Vec<String> = std::env::args().skip(1).collect();

    let args = match parse_args(&raw) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if args.help || raw.is_empty() {
        println!("{}", USAGE);
        return;
    }

    if args.verbose && log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Debug);
    }

    match run(&args) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
