//! News article normalisation.

use std::collections::HashSet;

use crate::domain::content::Article;
use crate::domain::ports::RawArticle;

/// Convert raw articles into canonical ones, deduplicating by URL.
///
/// The URL is the article's natural identity; entries without one are
/// dropped rather than given an invented id. Other missing fields fall
/// back to documented defaults.
pub fn articles(raw: Vec<RawArticle>, category: &str) -> Vec<Article> {
    let mut seen = HashSet::new();
    raw.into_iter()
        .filter_map(|entry| article(entry, category))
        .filter(|article| seen.insert(article.id.clone()))
        .collect()
}

fn article(raw: RawArticle, category: &str) -> Option<Article> {
    let url = raw.url.filter(|url| !url.trim().is_empty())?;
    Some(Article {
        id: url.clone(),
        title: raw
            .title
            .filter(|title| !title.trim().is_empty())
            .unwrap_or_else(|| "Untitled".to_owned()),
        description: raw.description.unwrap_or_default(),
        url,
        source: raw
            .source
            .filter(|source| !source.trim().is_empty())
            .unwrap_or_else(|| "Unknown".to_owned()),
        category: category.to_owned(),
        published_at: raw.published_at.unwrap_or_default(),
        image_url: raw.image_url.unwrap_or_default(),
        is_static: false,
    })
}
