use std::{path::PathBuf, time::Duration};

use anyhow::Result;
use clap::Parser;
use m3u_sieve::{h264, probe, probe::Ffprobe};
use tracing::warn;

/// Prunes an M3U playlist down to streams confirmed to be H.264 encoded
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Playlist to filter
    input: PathBuf,

    /// Where the filtered playlist is written
    output: PathBuf,

    /// Seconds to wait for a single codec probe before giving up
    #[arg(short, long, default_value_t = 10)]
    timeout: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    if !probe::is_available().await {
        warn!("ffprobe is not installed or available in PATH; every codec probe will fail");
    }

    let probe = Ffprobe::new(Duration::from_secs(args.timeout));
    h264::filter_playlist(&args.input, &args.output, &probe).await
}
