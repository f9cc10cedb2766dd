use std::{io::ErrorKind, process::Stdio, time::Duration};

use tracing::{debug, instrument, warn};

use crate::playlist;

/// Arguments selecting the codec name of the first video stream, with quiet
/// logging, no section wrappers and no key prefix on the output.
const FFPROBE_ARGS: [&str; 8] = [
    "-v",
    "quiet",
    "-select_streams",
    "v:0",
    "-show_entries",
    "stream=codec_name",
    "-of",
    "default=noprint_wrappers=1:nokey=1",
];

/// Asks an external inspector for the codec of a stream's first video track.
///
/// Implementations answer `None` for anything that prevented a confident
/// answer (unreachable stream, bad URL, timeout). Callers treat `None` as
/// "unknown codec" and keep scanning.
pub trait CodecProbe {
    async fn video_codec(&self, url: &str) -> Option<String>;
}

/// Probes streams by shelling out to `ffprobe`.
#[derive(Debug, Clone)]
pub struct Ffprobe {
    timeout: Duration,
}

impl Ffprobe {
    #[must_use]
    pub const fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl CodecProbe for Ffprobe {
    #[instrument(skip(self))]
    async fn video_codec(&self, url: &str) -> Option<String> {
        if !playlist::is_stream_url(url) {
            warn!("invalid URL format: {url}");
            return None;
        }

        let output = tokio::process::Command::new("ffprobe")
            .args(FFPROBE_ARGS)
            .arg(url)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output();

        let output = match tokio::time::timeout(self.timeout, output).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) if e.kind() == ErrorKind::NotFound => {
                warn!("`ffprobe` is not installed or available in PATH!");
                return None;
            }
            Ok(Err(e)) => {
                warn!("error checking video codec for {url}: {e}");
                return None;
            }
            Err(_) => {
                warn!("timeout expired while checking video codec for {url}");
                return None;
            }
        };

        if !output.status.success() {
            warn!("error checking video codec for {url}: {}", output.status);
            return None;
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let codec = stdout.lines().map(str::trim).find(|line| !line.is_empty())?;
        Some(codec.to_string())
    }
}

/// Checks if ffprobe is installed / available in PATH
pub async fn is_available() -> bool {
    debug!("Checking for ffprobe installation");
    tokio::process::Command::new("ffprobe")
        .arg("-version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .is_ok_and(|status| status.success())
}
