//! Reads captured page markup from stdin and prints its detection record as JSON.

use std::error::Error;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use rs_darkpatterns::{Classifier, PatternRegistry};
use serde_json::json;

#[derive(Parser)]
#[command(name = "classify_stdin", about = "Classify one product page read from stdin")]
struct Cli {
    /// Site domain written into the record
    domain: String,
    /// Pattern configuration JSON (defaults to the bundled patterns)
    #[arg(short, long)]
    patterns: Option<PathBuf>,
    /// Also print the evidence behind every flag
    #[arg(short, long)]
    explain: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let registry = match &cli.patterns {
        Some(path) => PatternRegistry::from_json_file(path)?,
        None => PatternRegistry::builtin()?,
    };
    let classifier = Classifier::new(registry);

    let mut bytes = Vec::new();
    io::stdin().read_to_end(&mut bytes)?;
    let markup = rs_darkpatterns::encoding::decode_markup(&bytes);

    let record = classifier.classify(&cli.domain, &markup)?;
    let output = if cli.explain {
        let evidence: serde_json::Map<String, serde_json::Value> = classifier
            .explain(&markup)?
            .into_iter()
            .filter_map(|finding| {
                finding
                    .evidence
                    .map(|reason| (finding.category.name().to_string(), json!(reason)))
            })
            .collect();
        json!({ "record": record, "evidence": evidence })
    } else {
        serde_json::to_value(&record)?
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
