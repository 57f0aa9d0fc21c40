//! paygraph CLI
//!
//! Streams a JSON-lines payment feed through the rolling-median engine.
//!
//! ## Usage
//!
//! ```bash
//! # Read a feed and write one median per valid record
//! paygraph --input venmo_input/venmo-trans.txt --output venmo_output/output.txt
//!
//! # Verbose record-level diagnostics
//! RUST_LOG=debug paygraph -i input.txt -o output.txt
//! ```

use clap::Parser;
use log::{error, info};
use paygraph::{process_stream, StreamResult, StreamSummary};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "paygraph")]
#[command(about = "Rolling median degree of a payment graph over a 60-second window")]
#[command(version)]
struct Cli {
    /// Input feed, one JSON payment record per line
    #[arg(short, long)]
    input: PathBuf,

    /// Output file, one median per valid record
    #[arg(short, long)]
    output: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let start = Instant::now();

    match run(&cli) {
        Ok(summary) => {
            info!(
                "processed {} record(s), skipped {} malformed, in {:.2?}",
                summary.processed,
                summary.skipped,
                start.elapsed()
            );
        }
        Err(e) => {
            error!("stream failed: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> StreamResult<StreamSummary> {
    let reader = BufReader::new(File::open(&cli.input)?);
    let mut writer = BufWriter::new(File::create(&cli.output)?);

    let summary = process_stream(reader, &mut writer)?;
    writer.flush()?;
    Ok(summary)
}
