use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use m3u_sieve::channels;

/// Prunes an M3U playlist down to a fixed lineup of live channels
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Playlist to filter
    input: PathBuf,

    /// Where the filtered playlist is written
    output: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    channels::filter_playlist(&args.input, &args.output).await
}
