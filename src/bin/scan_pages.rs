//! Batch driver: classifies every captured product page in a listing and
//! appends one row per page to the results CSV.
//!
//! The listing is a delimited file with a `domain` and a `product_url`
//! column. Pages that cannot be fetched or parsed are logged and skipped.

use std::error::Error;
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use rs_darkpatterns::record::{parse_rows, write_row};
use rs_darkpatterns::source::domain_of;
use rs_darkpatterns::{Classifier, DetectionRecord, DirectorySource, PageSource, PatternRegistry};
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "scan_pages", about = "Classify captured product pages listed in a CSV file")]
struct Cli {
    /// Listing with `domain` and `product_url` columns
    #[arg(short, long, default_value = "prodpages.csv")]
    listing: PathBuf,
    /// Separator used by the listing
    #[arg(long, default_value_t = ';')]
    sep: char,
    /// Directory holding the captured pages
    #[arg(short, long, default_value = "captures")]
    captures: PathBuf,
    /// Results file; rows are appended after a fresh header
    #[arg(short, long, default_value = "dark_pattern_prod_results.csv")]
    output: PathBuf,
    /// Pattern configuration JSON (defaults to the bundled patterns)
    #[arg(short, long)]
    patterns: Option<PathBuf>,
}

/// One listed product page.
struct ListingEntry {
    domain: String,
    url: String,
}

fn read_listing(text: &str, sep: char) -> Result<Vec<ListingEntry>, Box<dyn Error>> {
    let mut rows = parse_rows(text.trim_start_matches('\u{feff}'), sep).into_iter();
    let header = rows.next().ok_or("listing is empty")?;
    let column = |name: &str| {
        header
            .iter()
            .position(|cell| cell.trim().eq_ignore_ascii_case(name))
            .ok_or_else(|| format!("listing has no `{name}` column"))
    };
    let domain_col = column("domain")?;
    let url_col = column("product_url")?;

    let entries = rows
        .filter_map(|cells| {
            let url = cells.get(url_col).map_or("", |cell| cell.trim());
            if url.is_empty() {
                return None;
            }
            let domain = match cells.get(domain_col).map_or("", |cell| cell.trim()) {
                "" => domain_of(url).unwrap_or_default(),
                listed => listed.to_string(),
            };
            Some(ListingEntry {
                domain,
                url: url.to_string(),
            })
        })
        .collect();
    Ok(entries)
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let registry = match &cli.patterns {
        Some(path) => PatternRegistry::from_json_file(path)?,
        None => PatternRegistry::builtin()?,
    };
    let classifier = Classifier::new(registry);
    let source = DirectorySource::new(&cli.captures);

    let listing = read_listing(&fs::read_to_string(&cli.listing)?, cli.sep)?;
    info!(pages = listing.len(), listing = %cli.listing.display(), "scanning listing");

    fs::write(&cli.output, "")?;
    let mut out = BufWriter::new(OpenOptions::new().append(true).open(&cli.output)?);
    write_row(&mut out, &DetectionRecord::csv_header(), ',')?;

    let mut written = 0usize;
    for entry in &listing {
        let markup = match source.fetch(&entry.url) {
            Ok(markup) => markup,
            Err(err) => {
                warn!(url = %entry.url, "skipping page: {err}");
                continue;
            }
        };
        let record = match classifier.classify(&entry.domain, &markup) {
            Ok(record) => record,
            Err(err) => {
                error!(url = %entry.url, "classification failed: {err}");
                continue;
            }
        };
        write_row(&mut out, &record.csv_row(), ',')?;
        out.flush()?;
        written += 1;
        info!("{} → patterns={}", record.domain(), record.total_patterns());
    }

    info!(written, skipped = listing.len() - written, output = %cli.output.display(), "scan finished");
    Ok(())
}
