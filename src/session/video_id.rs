use url::Url;

/// Pull the video id out of a human-supplied stream URL.
///
/// Checked in order: `youtu.be/<id>` short links, a `v=<id>` query parameter,
/// then a `/live/<id>` path segment.
pub fn extract_video_id(url: &str) -> Option<String> {
    let url = Url::parse(url.trim()).ok()?;

    if url.host_str().is_some_and(|h| h.contains("youtu.be")) {
        if let Some(id) = url.path_segments().and_then(|mut segs| segs.find(|s| !s.is_empty())) {
            return Some(id.to_string());
        }
    }

    if let Some((_, v)) = url
        .query_pairs()
        .find(|(k, v)| k == "v" && !v.trim().is_empty())
    {
        return Some(v.into_owned());
    }

    let segments: Vec<&str> = url.path_segments().map(|s| s.collect()).unwrap_or_default();
    segments
        .windows(2)
        .find(|w| w[0] == "live" && !w[1].trim().is_empty())
        .map(|w| w[1].to_string())
}
