//! Keeps only playlist entries for a fixed lineup of live channels.

use std::{path::Path, sync::LazyLock};

use anyhow::{Context, Result};
use regex::Regex;

use crate::playlist::EXTM3U_HEADER;

/// Metadata marker carried by the live-channel entries considered here.
const LIVE_EXTINF_PREFIX: &str = "#EXTINF:-1";

/// Channels that survive the filter, matched against `tvg-name`.
const TARGET_CHANNELS: [&str; 5] = ["CCTV1", "CCTV4", "CCTV6", "CCTV7", "CCTV8"];

static TVG_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"tvg-name="([^"]+)""#).unwrap());

/// Extracts the `tvg-name` attribute value from a metadata line.
#[must_use]
pub fn tvg_name(line: &str) -> Option<&str> {
    TVG_NAME_REGEX
        .captures(line)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}

/// Filters the playlist at `input` into `output`, keeping only entries whose
/// `tvg-name` is in the fixed channel lineup.
///
/// Kept lines are stripped of trailing newlines and joined with `\n`; the
/// output carries no trailing newline. A qualifying metadata line on the
/// file's last line is emitted without a URL line.
///
/// # Errors
/// Errors when the input cannot be read or the output cannot be written.
pub async fn filter_playlist(input: &Path, output: &Path) -> Result<()> {
    let content = tokio::fs::read_to_string(input)
        .await
        .with_context(|| format!("Reading playlist {}", input.display()))?;
    let lines: Vec<&str> = content.lines().collect();

    let mut filtered = vec![EXTM3U_HEADER];
    for (i, &line) in lines.iter().enumerate() {
        if !line.starts_with(LIVE_EXTINF_PREFIX) {
            continue;
        }
        let Some(name) = tvg_name(line) else { continue };
        if !TARGET_CHANNELS.contains(&name) {
            continue;
        }

        filtered.push(line);
        if let Some(&next) = lines.get(i + 1) {
            filtered.push(next);
        }
    }

    tokio::fs::write(output, filtered.join("\n"))
        .await
        .with_context(|| format!("Writing playlist {}", output.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn run_filter(input: &str) -> String {
        let dir = tempfile::tempdir().unwrap();
        let in_path = dir.path().join("in.m3u");
        let out_path = dir.path().join("out.m3u");
        tokio::fs::write(&in_path, input).await.unwrap();
        filter_playlist(&in_path, &out_path).await.unwrap();
        tokio::fs::read_to_string(&out_path).await.unwrap()
    }

    #[test]
    fn extracts_the_tvg_name_attribute() {
        assert_eq!(
            tvg_name(r#"#EXTINF:-1 tvg-id="cctv1" tvg-name="CCTV1" group-title="央视",CCTV1"#),
            Some("CCTV1")
        );
        assert_eq!(tvg_name("#EXTINF:-1,CCTV1"), None);
    }

    #[tokio::test]
    async fn keeps_only_channels_in_the_lineup() {
        let input = concat!(
            "#EXTM3U\n",
            "#EXTINF:-1 tvg-name=\"CCTV1\",CCTV1\n",
            "http://a/stream\n",
            "#EXTINF:-1 tvg-name=\"CCTV99\",CCTV99\n",
            "http://b/stream\n",
        );
        assert_eq!(
            run_filter(input).await,
            "#EXTM3U\n#EXTINF:-1 tvg-name=\"CCTV1\",CCTV1\nhttp://a/stream"
        );
    }

    #[tokio::test]
    async fn empty_playlist_yields_header_only() {
        assert_eq!(run_filter("").await, "#EXTM3U");
    }

    #[tokio::test]
    async fn requires_the_live_entry_marker() {
        let input = "#EXTINF:0 tvg-name=\"CCTV1\",CCTV1\nhttp://a/stream\n";
        assert_eq!(run_filter(input).await, "#EXTM3U");
    }

    #[tokio::test]
    async fn metadata_without_a_tvg_name_is_dropped() {
        let input = "#EXTINF:-1,CCTV1\nhttp://a/stream\n";
        assert_eq!(run_filter(input).await, "#EXTM3U");
    }

    #[tokio::test]
    async fn emits_orphaned_metadata_on_the_last_line() {
        let input = "#EXTM3U\n#EXTINF:-1 tvg-name=\"CCTV4\",CCTV4";
        assert_eq!(
            run_filter(input).await,
            "#EXTM3U\n#EXTINF:-1 tvg-name=\"CCTV4\",CCTV4"
        );
    }

    #[tokio::test]
    async fn output_has_no_trailing_newline() {
        let input = "#EXTINF:-1 tvg-name=\"CCTV6\",CCTV6\nhttp://c/stream\n";
        let out = run_filter(input).await;
        assert_eq!(out, "#EXTM3U\n#EXTINF:-1 tvg-name=\"CCTV6\",CCTV6\nhttp://c/stream");
        assert!(!out.ends_with('\n'));
    }
}
