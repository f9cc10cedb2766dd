//! Line-level model of the playlists being filtered.

/// First line of every playlist written out.
pub const EXTM3U_HEADER: &str = "#EXTM3U";

/// Marker for a metadata line describing the stream on the line below it.
pub const EXTINF_PREFIX: &str = "#EXTINF:";

/// A metadata line paired with the stream URL on the line below it.
///
/// Entries only exist transiently while scanning; a metadata line that is
/// never followed by a URL line never becomes one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistEntry {
    pub info: String,
    pub url: String,
}

/// Whether a line is a stream location rather than a directive.
///
/// Accepts `http://` / `https://` URLs plus the bracketed literal-address
/// form (`[2001:db8::1]/...`) that IPTV lists use for raw IPv6 hosts.
#[must_use]
pub fn is_stream_url(line: &str) -> bool {
    line.starts_with("http://") || line.starts_with("https://") || line.starts_with('[')
}
