//! Keeps only playlist entries whose stream is confirmed to be H.264.

use std::path::Path;

use anyhow::{Context, Result};
use tokio::{
    fs::File,
    io::{AsyncBufReadExt, AsyncWriteExt, BufReader, BufWriter},
};
use tracing::info;

use crate::{
    playlist::{self, EXTINF_PREFIX, EXTM3U_HEADER, PlaylistEntry},
    probe::CodecProbe,
};

/// Suffix marking a stream URL as advertising H.264.
const CODEC_SUFFIX: &str = "-h264";

/// Codec identifier the probe must report before an entry is kept.
const TARGET_CODEC: &str = "h264";

/// Whether the stream URL advertises H.264 through its suffix marker.
#[must_use]
pub fn has_codec_suffix(url: &str) -> bool {
    url.to_ascii_lowercase().ends_with(CODEC_SUFFIX)
}

/// Filters the playlist at `input` into `output`, keeping only entries whose
/// URL carries the `-h264` suffix marker and whose probed codec really is
/// H.264.
///
/// Streams advertising the suffix are probed exactly once, sequentially, in
/// playlist order. Probe failures count as "unknown codec": the entry is
/// dropped and the scan continues.
///
/// # Errors
/// Errors when the input cannot be read or the output cannot be written.
pub async fn filter_playlist(input: &Path, output: &Path, probe: &impl CodecProbe) -> Result<()> {
    let infile = File::open(input)
        .await
        .with_context(|| format!("Opening playlist {}", input.display()))?;
    let outfile = File::create(output)
        .await
        .with_context(|| format!("Creating playlist {}", output.display()))?;

    let mut lines = BufReader::new(infile).lines();
    let mut writer = BufWriter::new(outfile);
    writer.write_all(EXTM3U_HEADER.as_bytes()).await?;
    writer.write_all(b"\n").await?;

    let mut pending_info: Option<String> = None;
    while let Some(line) = lines.next_line().await.context("Reading playlist")? {
        let line = line.trim();
        if line.starts_with(EXTINF_PREFIX) {
            // A newer metadata line replaces an unconsumed one.
            pending_info = Some(line.to_string());
        } else if playlist::is_stream_url(line) {
            if let Some(info) = pending_info.take() {
                let entry = PlaylistEntry {
                    info,
                    url: line.to_string(),
                };
                if has_codec_suffix(&entry.url) && is_confirmed_h264(&entry.url, probe).await {
                    writer.write_all(entry.info.as_bytes()).await?;
                    writer.write_all(b"\n").await?;
                    writer.write_all(entry.url.as_bytes()).await?;
                    writer.write_all(b"\n").await?;
                }
            }
        } else {
            pending_info = None;
        }
    }

    writer.flush().await.context("Flushing playlist")?;
    Ok(())
}

async fn is_confirmed_h264(url: &str, probe: &impl CodecProbe) -> bool {
    match probe.video_codec(url).await {
        Some(codec) if codec.eq_ignore_ascii_case(TARGET_CODEC) => {
            info!("Confirmed H.264 encoded URL: {url}");
            true
        }
        Some(codec) => {
            info!("URL does not use H.264 encoding: {url} (reported {codec})");
            false
        }
        None => {
            info!("URL does not use H.264 encoding: {url}");
            false
        }
    }
}
