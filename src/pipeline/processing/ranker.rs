use crate::types::{MatchedRecord, RankedRecord};
use std::collections::HashSet;

/// Outcome of the ranking stage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankOutput {
    pub ranked: Vec<RankedRecord>,
    /// Matched rows without a university name
    pub unmatched: usize,
    /// Rows dropped because a lower ASN already claimed the same university
    pub duplicates: usize,
}

/// Sorts matched rows by ascending ASN, keeps the lowest ASN per university
/// and numbers the survivors from 1.
///
/// The sort is stable, so rows sharing an ASN keep their input order for the
/// duplicate check.
pub fn rank_matches(matched: &[MatchedRecord]) -> RankOutput {
    let mut with_match: Vec<(&MatchedRecord, &str)> = matched
        .iter()
        .filter_map(|m| m.university_match.as_deref().map(|name| (m, name)))
        .collect();
    let unmatched = matched.len() - with_match.len();

    with_match.sort_by_key(|(m, _)| m.candidate.asn);

    let mut seen: HashSet<&str> = HashSet::new();
    let mut ranked = Vec::new();
    let mut duplicates = 0;

    for (record, name) in with_match {
        if !seen.insert(name) {
            duplicates += 1;
            continue;
        }
        ranked.push(RankedRecord {
            rank: ranked.len() + 1,
            description: record.candidate.description.clone(),
            asn: record.candidate.asn,
            handle: record.candidate.handle.clone(),
            university_match: name.to_string(),
        });
    }

    RankOutput {
        ranked,
        unmatched,
        duplicates,
    }
}
