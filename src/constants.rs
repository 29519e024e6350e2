/// Default data source and output locations. All of them can be overridden
/// through `ranking.toml` or the command line.

// Data sources
pub const ASN_SOURCE_URL: &str = "https://raw.githubusercontent.com/ipverse/asn-info/master/as.csv";
pub const UNIVERSITIES_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/endSly/world-universities-csv/master/world-universities.csv";

// Report
pub const OUTPUT_FILE: &str = "index.html";
pub const REPOSITORY_URL: &str = "https://github.com/sebersta/University-ASN-Ranking";
pub const REPORT_TITLE: &str = "University ASN Ranking";
pub const RADAR_ASN_BASE_URL: &str = "https://radar.cloudflare.com/as";

// Config file picked up from the working directory when no --config is given
pub const DEFAULT_CONFIG_FILE: &str = "ranking.toml";

// HTTP
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 60;
pub const DEFAULT_USER_AGENT: &str = concat!("university-asn-ranking/", env!("CARGO_PKG_VERSION"));

/// Column names assigned to the headerless university list, in positional order
pub const UNIVERSITY_COLUMNS: [&str; 3] = ["country_code", "university_name", "website"];

/// Returns true when a source location should be fetched over HTTP rather
/// than read from the local filesystem.
pub fn is_remote_location(location: &str) -> bool {
    let lower = location.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
