//! Normalisers: raw provider records in, canonical items out.
//!
//! Every function here is total. A missing or malformed field becomes a
//! documented default and never an error; records with no usable natural
//! id are dropped rather than invented.

pub mod jobs;
pub mod market;
pub mod movies;
pub mod news;
pub mod recipes;
pub mod social;
pub mod videos;
pub mod weather;

/// Truncate to at most `max` characters, appending an ellipsis when the
/// text was cut. Operates on character boundaries.
pub(crate) fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_owned();
    }
    let cut: String = text.chars().take(max).collect();
    format!("{cut}...")
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::truncate_chars;

    #[rstest]
    #[case("short", 10, "short")]
    #[case("exactly-ten", 11, "exactly-ten")]
    #[case("abcdefghij", 4, "abcd...")]
    fn truncates_on_character_boundaries(
        #[case] input: &str,
        #[case] max: usize,
        #[case] expected: &str,
    ) {
        assert_eq!(truncate_chars(input, max), expected);
    }

    #[rstest]
    fn multibyte_text_is_not_split_mid_character() {
        let out = truncate_chars("héllo wörld", 6);
        assert_eq!(out, "héllo ...");
    }
}
