use crate::types::{AsnRecord, CandidateRecord};
use once_cell::sync::Lazy;
use regex::Regex;

/// Whole-word institution keywords, matched case-insensitively
static INSTITUTION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(University|Institute|College|Universitet|School)\b")
        .expect("institution pattern is a valid regex")
});

/// Outcome of the filter stage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOutput {
    pub candidates: Vec<CandidateRecord>,
    /// Rows dropped because their description was missing or empty
    pub missing_description: usize,
}

pub fn is_institution(description: &str) -> bool {
    INSTITUTION_PATTERN.is_match(description)
}

/// Drops rows without a description and keeps those naming an institution.
/// Input order is preserved.
pub fn filter_candidates(records: &[AsnRecord]) -> FilterOutput {
    let mut output = FilterOutput::default();

    for record in records {
        let description = match record.description.as_deref() {
            Some(d) if !d.is_empty() => d,
            _ => {
                output.missing_description += 1;
                continue;
            }
        };

        if is_institution(description) {
            output.candidates.push(CandidateRecord {
                asn: record.asn,
                handle: record.handle.clone(),
                description: description.to_string(),
            });
        }
    }

    output
}
