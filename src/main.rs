use chordchart::{catalog, ChartError, Config};
use std::env;
use std::fs;
use std::process;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: chordchart render <chart.cho>
       chordchart json <chart.cho>
       chordchart transpose <chart.cho> <semitones|key>
       chordchart dupes <title> <catalog.json|catalog.yaml> [--config <config.yaml>]";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();

    match run(&args) {
        Ok(output) => print!("{}", output),
        Err(ChartError::Usage(message)) => {
            if !message.is_empty() {
                eprintln!("{}", message);
            }
            eprintln!("{}", USAGE);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run(args: &[String]) -> Result<String, ChartError> {
    let Some(command) = args.first() else {
        return Err(ChartError::Usage(String::new()));
    };

    match command.as_str() {
        "render" => {
            let doc = chordchart::parse(&read_chart(args.get(1))?);
            Ok(chordchart::render_text(&doc))
        }
        "json" => {
            let doc = chordchart::parse(&read_chart(args.get(1))?);
            Ok(format!("{}\n", serde_json::to_string_pretty(&doc)?))
        }
        "transpose" => {
            let doc = chordchart::parse(&read_chart(args.get(1))?);
            let target = args
                .get(2)
                .ok_or_else(|| ChartError::Usage("Missing <semitones|key>".to_string()))?;
            let transposed = match target.parse::<i32>() {
                Ok(semitones) => chordchart::transpose_document(&doc, semitones),
                Err(_) => chordchart::transpose_to_key(&doc, target).ok_or_else(|| {
                    ChartError::Usage(format!(
                        "Cannot transpose to '{}': chart needs a {{key: ...}} directive and the target must be a key like G or Bb",
                        target
                    ))
                })?,
            };
            Ok(format!("{}\n", chordchart::to_chordpro(&transposed)))
        }
        "dupes" => run_dupes(&args[1..]),
        other => Err(ChartError::Usage(format!("Unknown command '{}'", other))),
    }
}

fn run_dupes(args: &[String]) -> Result<String, ChartError> {
    let (title, catalog_path) = match (args.first(), args.get(1)) {
        (Some(title), Some(path)) => (title, path),
        _ => return Err(ChartError::Usage("Missing <title> or <catalog>".to_string())),
    };

    let config = match args.get(2).map(String::as_str) {
        Some("--config") => {
            let path = args
                .get(3)
                .ok_or_else(|| ChartError::Usage("Missing path after --config".to_string()))?;
            Config::load(path)?
        }
        Some(other) => return Err(ChartError::Usage(format!("Unexpected argument '{}'", other))),
        None => Config::default(),
    };

    let corpus = catalog::load(catalog_path)?;
    let matches = chordchart::find_duplicates_with_config(title, &corpus, &config.duplicates);

    let mut out = String::new();
    for m in &matches {
        out.push_str(&format!("{:.3}  {}", m.score, m.title));
        if let Some(artist) = &m.artist {
            out.push_str(&format!(" - {}", artist));
        }
        out.push_str(&format!(" ({})\n", m.slug));
    }
    if matches.is_empty() {
        eprintln!("No likely duplicates of '{}'", title);
    }
    Ok(out)
}

fn read_chart(path: Option<&String>) -> Result<String, ChartError> {
    let path = path.ok_or_else(|| ChartError::Usage("Missing <chart> path".to_string()))?;
    fs::read_to_string(path).map_err(|e| ChartError::Io {
        path: path.into(),
        source: e,
    })
}
