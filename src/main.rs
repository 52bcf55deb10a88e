// src/main.rs
use std::env;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::process;
use std::time::Instant;

use afinn_sentiment::{Options, Registry, Resolved};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const PROGRAM_NAME: &str = "afinn-sentiment";
const DEFAULT_LOG_FILTER: &str = "warn";

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn usage(program: &str) -> ! {
    let registry = Registry::builtin();
    eprintln!("--- AFINN sentiment (one JSON result per input line) ---");
    eprintln!("Usage: {} <filename> [options-json]", program);
    eprintln!("  options-json: {{\"lang\": \"en\", \"category\": \"finance\", \"overrides\": {{\"meh\": -1}}, \"strict\": false}}");
    for lang in registry.languages() {
        eprintln!("  {}: categories {:?}", lang, registry.categories(lang));
    }
    process::exit(1);
}

/// Totals over every analyzed line.
#[derive(Debug, Default, PartialEq, Eq)]
struct Summary {
    lines: usize,
    total_score: i64,
}

/// Analyzes each line of `content` and writes one JSON result per line to `out`.
fn write_results<W: Write>(resolved: &Resolved<'_>, content: &str, out: &mut W) -> io::Result<Summary> {
    let mut summary = Summary::default();
    for line in content.lines() {
        let result = resolved.analyze(line);
        summary.lines += 1;
        summary.total_score = summary.total_score.saturating_add(result.score);
        serde_json::to_writer(&mut *out, &result)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(summary)
}

fn main() {
    init_logging();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or(PROGRAM_NAME, String::as_str);
    let Some(filename) = args.get(1) else {
        usage(program);
    };

    let options = match args.get(2).map(|json| Options::from_json(json)) {
        None => Options::default(),
        Some(Ok(options)) => options,
        Some(Err(e)) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    // Resolve once; every line shares the merged lexicon.
    let resolved = match Registry::builtin().resolve(&options) {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let content = match fs::read_to_string(filename) {
        Ok(c) => c,
        Err(e) => {
            warn!(filename = filename.as_str(), error = %e, "unreadable input");
            eprintln!("Error reading file '{}': {}", filename, e);
            process::exit(1);
        }
    };

    let start_time = Instant::now();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let summary = match write_results(&resolved, &content, &mut out) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("Error writing results: {}", e);
            process::exit(1);
        }
    };
    let duration = start_time.elapsed();

    info!(lines = summary.lines, total_score = summary.total_score, ?duration, "analysis complete");
    eprintln!(
        "Analyzed {} line(s), total score {} (took {:?})",
        summary.lines, summary.total_score, duration
    );
}
