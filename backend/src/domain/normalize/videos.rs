//! Video normalisation.

use std::collections::HashSet;

use crate::domain::content::Video;
use crate::domain::normalize::truncate_chars;
use crate::domain::ports::RawVideo;

const DESCRIPTION_LIMIT: usize = 200;

/// Convert raw search hits into canonical videos, deduplicating by
/// provider video id. Hits without an id are dropped.
pub fn videos(raw: Vec<RawVideo>, category: &str) -> Vec<Video> {
    let mut seen = HashSet::new();
    raw.into_iter()
        .filter_map(|entry| video(entry, category))
        .filter(|video| seen.insert(video.id.clone()))
        .collect()
}

fn video(raw: RawVideo, category: &str) -> Option<Video> {
    let id = raw.id.filter(|id| !id.trim().is_empty())?;
    Some(Video {
        url: format!("https://www.youtube.com/watch?v={id}"),
        id,
        title: raw
            .title
            .filter(|title| !title.trim().is_empty())
            .unwrap_or_else(|| "Untitled".to_owned()),
        description: truncate_chars(&raw.description.unwrap_or_default(), DESCRIPTION_LIMIT),
        thumbnail: raw.thumbnail_url.unwrap_or_default(),
        channel: raw
            .channel
            .filter(|channel| !channel.trim().is_empty())
            .unwrap_or_else(|| "Unknown".to_owned()),
        category: category.to_owned(),
        published_at: raw.published_at.unwrap_or_default(),
        is_static: false,
    })
}
