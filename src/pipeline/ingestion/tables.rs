use crate::constants::UNIVERSITY_COLUMNS;
use crate::error::{RankingError, Result};
use crate::types::{AsnRecord, UniversityReference};

const ASN_COLUMNS: [&str; 3] = ["asn", "handle", "description"];

fn parse_error(location: &str, reason: impl Into<String>) -> RankingError {
    RankingError::Parse {
        location: location.to_string(),
        reason: reason.into(),
    }
}

fn strip_bom(content: &str) -> &str {
    content.strip_prefix('\u{feff}').unwrap_or(content)
}

/// Parses the ASN registration table. A header row naming at least `asn`,
/// `handle` and `description` is required; other columns are ignored.
/// Rows that stop short of the `description` column parse with no
/// description and are dropped later by the filter.
pub fn parse_asn_table(location: &str, content: &str) -> Result<Vec<AsnRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(strip_bom(content).as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| parse_error(location, e.to_string()))?
        .clone();
    for column in ASN_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(parse_error(location, format!("missing column '{}'", column)));
        }
    }

    reader
        .deserialize::<AsnRecord>()
        .map(|row| row.map_err(|e| parse_error(location, e.to_string())))
        .collect()
}

/// Parses the positional university list into references, keeping source order.
pub fn parse_university_table(
    location: &str,
    content: &str,
    has_header: bool,
) -> Result<Vec<UniversityReference>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(has_header)
        .flexible(true)
        .from_reader(strip_bom(content).as_bytes());

    let mut universities = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row.map_err(|e| parse_error(location, e.to_string()))?;
        let university_name = row.get(1).ok_or_else(|| {
            parse_error(
                location,
                format!("row {} has no '{}' column", index + 1, UNIVERSITY_COLUMNS[1]),
            )
        })?;

        universities.push(UniversityReference {
            country_code: row.get(0).unwrap_or_default().to_string(),
            university_name: university_name.to_string(),
            website: row.get(2).unwrap_or_default().to_string(),
        });
    }
    Ok(universities)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_asn_table_ignores_extra_columns() {
        let content = "asn,handle,description,country\n\
                       577,STANFORD,Stanford University,US\n\
                       3,MIT-GATEWAYS,Massachusetts Institute of Technology,US\n";
        let rows = parse_asn_table("as.csv", content).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].asn, 577);
        assert_eq!(rows[0].handle, "STANFORD");
        assert_eq!(rows[1].description.as_deref(), Some("Massachusetts Institute of Technology"));
    }

    #[test]
    fn test_parse_asn_table_empty_description_is_missing() {
        let content = "asn,handle,description\n64512,PRIVATE,\n";
        let rows = parse_asn_table("as.csv", content).unwrap();
        assert_eq!(rows[0].description, None);
    }

    #[test]
    fn test_parse_asn_table_short_row_has_no_description() {
        let content = "asn,handle,description\n10,A,Alpha University\n64512,PRIVATE\n";
        let rows = parse_asn_table("as.csv", content).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].asn, 64512);
        assert_eq!(rows[1].handle, "PRIVATE");
        assert_eq!(rows[1].description, None);
    }

    #[test]
    fn test_parse_asn_table_short_row_without_asn_is_error() {
        let err = parse_asn_table("as.csv", "handle,description,asn\nX,Some College\n").unwrap_err();
        assert!(matches!(err, RankingError::Parse { .. }));
    }

    #[test]
    fn test_parse_asn_table_quoted_commas() {
        let content = "asn,handle,description\n42,UCB,\"University of California, Berkeley\"\n";
        let rows = parse_asn_table("as.csv", content).unwrap();
        assert_eq!(rows[0].description.as_deref(), Some("University of California, Berkeley"));
    }

    #[test]
    fn test_parse_asn_table_missing_column() {
        let err = parse_asn_table("as.csv", "asn,handle\n1,X\n").unwrap_err();
        assert_eq!(err.stage(), "parse");
        assert!(err.to_string().contains("description"));
    }

    #[test]
    fn test_parse_asn_table_non_numeric_asn() {
        let err = parse_asn_table("as.csv", "asn,handle,description\nAS1,X,Y\n").unwrap_err();
        assert!(matches!(err, RankingError::Parse { .. }));
    }

    #[test]
    fn test_parse_university_table_headerless() {
        let content = "AD,University of Andorra,http://www.uda.ad/\n\
                       US,Stanford University,http://www.stanford.edu/\n";
        let rows = parse_university_table("unis.csv", content, false).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].country_code, "AD");
        assert_eq!(rows[0].university_name, "University of Andorra");
        assert_eq!(rows[1].website, "http://www.stanford.edu/");
    }

    #[test]
    fn test_parse_university_table_skips_header_when_asked() {
        let content = "country,name,web\nUS,Stanford University,http://www.stanford.edu/\n";
        let rows = parse_university_table("unis.csv", content, true).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].university_name, "Stanford University");
    }

    #[test]
    fn test_parse_university_table_header_flag_drops_first_university() {
        let content = "AD,University of Andorra,http://www.uda.ad/\n\
                       US,Stanford University,http://www.stanford.edu/\n";

        let kept = parse_university_table("unis.csv", content, false).unwrap();
        let dropped = parse_university_table("unis.csv", content, true).unwrap();

        assert_eq!(kept.len(), 2);
        assert_eq!(dropped.len(), 1);
        assert!(dropped.iter().all(|u| u.university_name != "University of Andorra"));
    }

    #[test]
    fn test_parse_university_table_missing_website_defaults_empty() {
        let rows = parse_university_table("unis.csv", "SE,Uppsala Universitet\n", false).unwrap();
        assert_eq!(rows[0].website, "");
    }

    #[test]
    fn test_parse_university_table_single_column_row_is_error() {
        let err = parse_university_table("unis.csv", "US,MIT,http://mit.edu\nUS\n", false).unwrap_err();
        assert!(err.to_string().contains("row 2"));
    }
}
