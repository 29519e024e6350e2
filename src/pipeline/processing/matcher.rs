use crate::types::{CandidateRecord, MatchedRecord, UniversityReference};

/// University names lower-cased once, kept in reference-list order.
///
/// Lookups scan the list front to back and stop at the first name contained
/// in the description, so a generic name listed before a more specific one
/// wins. Empty names never match.
pub struct UniversityIndex<'a> {
    entries: Vec<(&'a str, String)>,
}

impl<'a> UniversityIndex<'a> {
    pub fn new(universities: &'a [UniversityReference]) -> Self {
        let entries = universities
            .iter()
            .filter(|u| !u.university_name.is_empty())
            .map(|u| (u.university_name.as_str(), u.university_name.to_lowercase()))
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First university name, in reference order, found in `description`
    pub fn first_match(&self, description: &str) -> Option<&'a str> {
        let description = description.to_lowercase();
        self.entries
            .iter()
            .find(|(_, lowered)| description.contains(lowered.as_str()))
            .map(|(name, _)| *name)
    }
}

/// Pairs each candidate with its first matching university name, if any
pub fn match_candidates(
    candidates: &[CandidateRecord],
    universities: &[UniversityReference],
) -> Vec<MatchedRecord> {
    let index = UniversityIndex::new(universities);

    candidates
        .iter()
        .map(|candidate| MatchedRecord {
            university_match: index.first_match(&candidate.description).map(str::to_string),
            candidate: candidate.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn university(name: &str) -> UniversityReference {
        UniversityReference {
            country_code: "US".to_string(),
            university_name: name.to_string(),
            website: String::new(),
        }
    }

    fn candidate(asn: u32, description: &str) -> CandidateRecord {
        CandidateRecord {
            asn,
            handle: format!("AS{asn}"),
            description: description.to_string(),
        }
    }

    fn filler(count: usize) -> Vec<UniversityReference> {
        (0..count).map(|i| university(&format!("Filler College {i:03}"))).collect()
    }

    #[test]
    fn test_match_is_case_insensitive_substring() {
        let universities = vec![university("Stanford University")];
        let index = UniversityIndex::new(&universities);

        assert_eq!(index.first_match("STANFORD UNIVERSITY NETWORK"), Some("Stanford University"));
        assert_eq!(index.first_match("Leland stanford university"), Some("Stanford University"));
        assert_eq!(index.first_match("Stanford Health"), None);
    }

    #[test]
    fn test_specific_name_listed_first_wins() {
        // "Stanford University" at index 5, "Stanford" at index 200
        let mut universities = filler(5);
        universities.push(university("Stanford University"));
        universities.extend(filler(194));
        universities.push(university("Stanford"));
        assert_eq!(universities[5].university_name, "Stanford University");
        assert_eq!(universities[200].university_name, "Stanford");

        let matched = match_candidates(&[candidate(577, "Stanford University")], &universities);
        assert_eq!(matched[0].university_match.as_deref(), Some("Stanford University"));
    }

    #[test]
    fn test_earliest_reference_wins_over_longer_name() {
        let universities = vec![university("Stanford"), university("Stanford University")];
        let matched = match_candidates(&[candidate(577, "Stanford University")], &universities);
        assert_eq!(matched[0].university_match.as_deref(), Some("Stanford"));
    }

    #[test]
    fn test_earliest_reference_wins_over_alphabetical_order() {
        let universities = vec![university("Zurich University"), university("Applied Zurich University")];
        let matched =
            match_candidates(&[candidate(559, "Applied Zurich University of Sciences")], &universities);
        assert_eq!(matched[0].university_match.as_deref(), Some("Zurich University"));
    }

    #[test]
    fn test_no_match_yields_none() {
        let universities = vec![university("Yale University")];
        let matched = match_candidates(&[candidate(1, "Some Technical Institute")], &universities);
        assert_eq!(matched[0].university_match, None);
    }

    #[test]
    fn test_empty_reference_list_matches_nothing() {
        let matched = match_candidates(
            &[candidate(1, "Stanford University"), candidate(2, "Yale University")],
            &[],
        );
        assert_eq!(matched.len(), 2);
        assert!(matched.iter().all(|m| m.university_match.is_none()));
    }

    #[test]
    fn test_empty_names_are_skipped() {
        let universities = vec![university(""), university("Yale University")];
        let index = UniversityIndex::new(&universities);
        assert_eq!(index.len(), 1);
        assert_eq!(index.first_match("Yale University"), Some("Yale University"));
    }

    #[test]
    fn test_unicode_lowercasing() {
        let universities = vec![university("Universität Wien")];
        let matched = match_candidates(&[candidate(1853, "UNIVERSITÄT WIEN Institute")], &universities);
        assert_eq!(matched[0].university_match.as_deref(), Some("Universität Wien"));
    }
}
