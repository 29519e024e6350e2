// Pipeline ingestion: fetching both source tables and parsing them into typed rows

pub mod tables;

use crate::config::Config;
use crate::error::Result;
use crate::infra::http_client::SourceFetcher;
use crate::types::{AsnRecord, UniversityReference};
use tracing::{info, instrument};

pub use tables::{parse_asn_table, parse_university_table};

/// Both input tables, parsed and in source order
#[derive(Debug, Clone, Default)]
pub struct LoadedTables {
    pub asn_records: Vec<AsnRecord>,
    pub universities: Vec<UniversityReference>,
}

/// Fetches and parses both sources concurrently. The first failure aborts the load.
#[instrument(skip_all)]
pub async fn load_tables(config: &Config) -> Result<LoadedTables> {
    let fetcher = SourceFetcher::new(&config.http)?;
    let sources = &config.sources;

    let load_asn = async {
        let body = fetcher.fetch(&sources.asn_url).await?;
        parse_asn_table(&sources.asn_url, &body)
    };
    let load_universities = async {
        let body = fetcher.fetch(&sources.universities_url).await?;
        parse_university_table(
            &sources.universities_url,
            &body,
            sources.universities_has_header,
        )
    };

    let (asn_records, universities) = tokio::try_join!(load_asn, load_universities)?;

    info!(
        asn_rows = asn_records.len(),
        university_rows = universities.len(),
        "Loaded source tables"
    );
    Ok(LoadedTables {
        asn_records,
        universities,
    })
}
