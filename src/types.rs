use crate::constants::RADAR_ASN_BASE_URL;
use serde::Deserialize;

/// One row of the ASN registration table.
///
/// Extra columns in the source are ignored. An empty or absent
/// `description` cell deserializes to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AsnRecord {
    pub asn: u32,
    #[serde(default)]
    pub handle: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// One entry of the world university list, in source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniversityReference {
    pub country_code: String,
    pub university_name: String,
    pub website: String,
}

/// An ASN record whose description names an institution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRecord {
    pub asn: u32,
    pub handle: String,
    pub description: String,
}

/// A candidate paired with the first university name found in its description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedRecord {
    pub candidate: CandidateRecord,
    pub university_match: Option<String>,
}

/// Final report row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedRecord {
    pub rank: usize,
    pub description: String,
    pub asn: u32,
    pub handle: String,
    pub university_match: String,
}

impl RankedRecord {
    /// Cloudflare Radar page for this record's ASN
    pub fn radar_url(&self) -> String {
        format!("{}{}", RADAR_ASN_BASE_URL, self.asn)
    }
}
