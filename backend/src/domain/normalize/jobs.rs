//! Job listing normalisation.

use std::collections::HashSet;

use crate::domain::content::JobListing;
use crate::domain::normalize::truncate_chars;
use crate::domain::ports::RawJob;

const DESCRIPTION_LIMIT: usize = 200;

/// Convert raw adverts into canonical listings, deduplicating by advert
/// id. The caller supplies the category label the search ran under.
pub fn listings(raw: Vec<RawJob>, category: &str) -> Vec<JobListing> {
    let mut seen = HashSet::new();
    raw.into_iter()
        .filter_map(|entry| listing(entry, category))
        .filter(|listing| seen.insert(listing.id.clone()))
        .collect()
}

fn listing(raw: RawJob, category: &str) -> Option<JobListing> {
    let id = raw.id.filter(|id| !id.trim().is_empty())?;
    Some(JobListing {
        id,
        title: raw
            .title
            .filter(|title| !title.trim().is_empty())
            .unwrap_or_else(|| "Untitled".to_owned()),
        company: raw
            .company
            .filter(|company| !company.trim().is_empty())
            .unwrap_or_else(|| "Unknown".to_owned()),
        location: raw
            .location
            .filter(|location| !location.trim().is_empty())
            .unwrap_or_else(|| "Remote".to_owned()),
        contract_type: "Full-time".to_owned(),
        salary: salary(raw.salary_min, raw.salary_max),
        description: truncate_chars(&raw.description.unwrap_or_default(), DESCRIPTION_LIMIT),
        url: raw.url.unwrap_or_default(),
        category: category.to_owned(),
        posted_at: raw.created.unwrap_or_default(),
        is_static: false,
    })
}

/// "$min - $max" when both bounds are known, otherwise "Competitive".
fn salary(min: Option<f64>, max: Option<f64>) -> String {
    match (min, max) {
        (Some(min), Some(max)) => format!("${} - ${}", min.round() as i64, max.round() as i64),
        _ => "Competitive".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn raw(id: &str) -> RawJob {
        RawJob {
            id: Some(id.to_owned()),
            ..RawJob::default()
        }
    }

    #[rstest]
    #[case(Some(50_000.0), Some(70_000.0), "$50000 - $70000")]
    #[case(Some(50_000.0), None, "Competitive")]
    #[case(None, None, "Competitive")]
    fn salary_renders_a_range_or_competitive(
        #[case] min: Option<f64>,
        #[case] max: Option<f64>,
        #[case] expected: &str,
    ) {
        assert_eq!(salary(min, max), expected);
    }

    #[rstest]
    fn missing_fields_take_defaults() {
        let out = listings(vec![raw("123")], "technology");
        assert_eq!(out[0].company, "Unknown");
        assert_eq!(out[0].location, "Remote");
        assert_eq!(out[0].salary, "Competitive");
        assert_eq!(out[0].category, "technology");
    }

    #[rstest]
    fn duplicate_ids_collapse() {
        let out = listings(vec![raw("1"), raw("1"), raw("2")], "technology");
        assert_eq!(out.len(), 2);
    }
}
