//! Movie normalisation.

use std::collections::HashSet;

use crate::domain::content::MovieSummary;
use crate::domain::ports::RawMovie;

const POSTER_BASE: &str = "https://image.tmdb.org/t/p/w500";

/// Convert raw discovery results into canonical summaries, deduplicating
/// by catalogue id. The caller supplies the genre and language labels the
/// results were discovered under.
pub fn movies(raw: Vec<RawMovie>, genre: &str, language: &str) -> Vec<MovieSummary> {
    let mut seen = HashSet::new();
    raw.into_iter()
        .filter_map(|entry| movie(entry, genre, language))
        .filter(|movie| seen.insert(movie.id.clone()))
        .collect()
}

fn movie(raw: RawMovie, genre: &str, language: &str) -> Option<MovieSummary> {
    let id = raw.id?;
    Some(MovieSummary {
        id: id.to_string(),
        title: raw
            .title
            .filter(|title| !title.trim().is_empty())
            .unwrap_or_else(|| "Untitled".to_owned()),
        description: raw.overview.unwrap_or_default(),
        genre: genre.to_owned(),
        rating: raw.vote_average.unwrap_or(0.0),
        year: year(raw.release_date.as_deref()),
        language: language.to_owned(),
        poster_url: raw
            .poster_path
            .map(|path| format!("{POSTER_BASE}{path}"))
            .unwrap_or_default(),
        is_static: false,
    })
}

fn year(release_date: Option<&str>) -> String {
    release_date
        .and_then(|date| date.get(..4))
        .unwrap_or("")
        .to_owned()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn raw(id: i64) -> RawMovie {
        RawMovie {
            id: Some(id),
            ..RawMovie::default()
        }
    }

    #[rstest]
    fn release_year_comes_from_the_date_prefix() {
        let mut entry = raw(603);
        entry.release_date = Some("1999-03-31".to_owned());
        let out = movies(vec![entry], "Action", "English");
        assert_eq!(out[0].year, "1999");
        assert_eq!(out[0].genre, "Action");
        assert_eq!(out[0].language, "English");
    }

    #[rstest]
    fn poster_path_is_expanded_to_a_full_url() {
        let mut entry = raw(603);
        entry.poster_path = Some("/abc.jpg".to_owned());
        let out = movies(vec![entry], "Action", "English");
        assert_eq!(out[0].poster_url, "https://image.tmdb.org/t/p/w500/abc.jpg");
    }

    #[rstest]
    fn entries_without_an_id_are_dropped_and_duplicates_collapse() {
        let out = movies(
            vec![RawMovie::default(), raw(1), raw(1), raw(2)],
            "Action",
            "English",
        );
        assert_eq!(out.len(), 2);
    }
}
