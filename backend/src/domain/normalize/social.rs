//! Social post normalisation.

use chrono::DateTime;

use crate::domain::content::Post;
use crate::domain::normalize::truncate_chars;
use crate::domain::ports::RawPost;

/// Convert raw submissions into canonical posts, deduplicating by
/// provider id. `body_limit` caps the description length; single-feed
/// listings use 200 and the denser trending view uses 150.
pub fn posts(raw: Vec<RawPost>, fallback_subreddit: &str, body_limit: usize) -> Vec<Post> {
    let mut seen = std::collections::HashSet::new();
    raw.into_iter()
        .filter_map(|entry| post(entry, fallback_subreddit, body_limit))
        .filter(|post| seen.insert(post.id.clone()))
        .collect()
}

fn post(raw: RawPost, fallback_subreddit: &str, body_limit: usize) -> Option<Post> {
    let id = raw.id.filter(|id| !id.trim().is_empty())?;
    let url = raw
        .permalink
        .map(|permalink| format!("https://reddit.com{permalink}"))
        .unwrap_or_default();
    Some(Post {
        id,
        title: raw
            .title
            .filter(|title| !title.trim().is_empty())
            .unwrap_or_else(|| "Untitled".to_owned()),
        description: truncate_chars(&raw.body.unwrap_or_default(), body_limit),
        url,
        subreddit: raw
            .subreddit
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| fallback_subreddit.to_owned()),
        author: raw
            .author
            .filter(|author| !author.trim().is_empty())
            .unwrap_or_else(|| "[deleted]".to_owned()),
        score: raw.score.unwrap_or(0),
        comments: raw.comments.map_or(0, |count| count.max(0) as u64),
        created_at: created_at(raw.created_utc),
        is_static: false,
    })
}

fn created_at(created_utc: Option<f64>) -> String {
    created_utc
        .and_then(|seconds| DateTime::from_timestamp(seconds as i64, 0))
        .map(|instant| instant.to_rfc3339())
        .unwrap_or_default()
}
