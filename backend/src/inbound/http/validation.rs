//! Request validation helpers shared across handlers.

use serde_json::json;

use crate::domain::Error;

/// Require a non-blank `q` query parameter, trimming surrounding whitespace.
pub(crate) fn require_query(raw: Option<&str>) -> Result<String, Error> {
    let trimmed = raw.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(
            Error::invalid_request("query parameter 'q' is required").with_details(json!({
                "field": "q",
                "code": "missing_query",
            })),
        );
    }
    Ok(trimmed.to_owned())
}

/// Trim an optional parameter, collapsing blanks to `None`.
pub(crate) fn non_blank(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("   "))]
    fn require_query_rejects_blank(#[case] raw: Option<&str>) {
        let err = require_query(raw).expect_err("blank query");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
    }

    #[rstest]
    fn require_query_trims() {
        assert_eq!(require_query(Some("  rust  ")).expect("query"), "rust");
    }

    #[rstest]
    #[case(Some("  worldnews "), Some("worldnews"))]
    #[case(Some("  "), None)]
    #[case(None, None)]
    fn non_blank_collapses(#[case] raw: Option<&str>, #[case] expected: Option<&str>) {
        assert_eq!(non_blank(raw).as_deref(), expected);
    }
}
