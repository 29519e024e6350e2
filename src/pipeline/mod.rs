// Ranking pipeline: ingestion, processing, and report rendering

pub mod ingestion;
pub mod processing;
pub mod render;

use crate::config::Config;
use crate::error::Result;
use crate::types::{AsnRecord, RankedRecord, UniversityReference};
use ingestion::LoadedTables;
use processing::{filter_candidates, match_candidates, rank_matches};
use render::{render_report, write_report, ReportLinks};
use tracing::{info, info_span, instrument};

/// Row counts for each exclusion the processing stages make
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankingOutcome {
    pub ranked: Vec<RankedRecord>,
    pub missing_description: usize,
    pub candidates: usize,
    pub unmatched: usize,
    pub duplicates: usize,
}

/// Result of a complete pipeline run
#[derive(Debug)]
pub struct PipelineResult {
    pub asn_rows: usize,
    pub university_rows: usize,
    pub missing_description: usize,
    pub candidates: usize,
    pub unmatched: usize,
    pub duplicates: usize,
    pub ranked: usize,
    pub output_file: String,
}

pub struct Pipeline;

impl Pipeline {
    /// Filter, match and rank already-loaded tables
    pub fn rank(asn_records: &[AsnRecord], universities: &[UniversityReference]) -> RankingOutcome {
        let filtered = {
            let _span = info_span!("filter").entered();
            let output = filter_candidates(asn_records);
            info!(
                candidates = output.candidates.len(),
                missing_description = output.missing_description,
                "Selected institution candidates"
            );
            output
        };

        let matched = {
            let _span = info_span!("match").entered();
            let matched = match_candidates(&filtered.candidates, universities);
            let hits = matched.iter().filter(|m| m.university_match.is_some()).count();
            info!(matched = hits, references = universities.len(), "Matched candidates to universities");
            matched
        };

        let ranked = {
            let _span = info_span!("rank").entered();
            let output = rank_matches(&matched);
            info!(
                ranked = output.ranked.len(),
                duplicates = output.duplicates,
                "Ranked universities by ASN"
            );
            output
        };

        RankingOutcome {
            candidates: filtered.candidates.len(),
            missing_description: filtered.missing_description,
            unmatched: ranked.unmatched,
            duplicates: ranked.duplicates,
            ranked: ranked.ranked,
        }
    }

    /// Render the ranking and write it to the configured output file
    pub fn publish(outcome: &RankingOutcome, config: &Config) -> Result<()> {
        let links = ReportLinks {
            repository_url: &config.output.repository_url,
            asn_source: &config.sources.asn_url,
            universities_source: &config.sources.universities_url,
        };
        let html = render_report(&outcome.ranked, links)?;
        write_report(&config.output.path, &html)
    }

    /// Run the complete pipeline: load both sources, rank, and write the report
    #[instrument(skip(config), fields(output = %config.output.path.display()))]
    pub async fn run(config: &Config) -> Result<PipelineResult> {
        let LoadedTables {
            asn_records,
            universities,
        } = ingestion::load_tables(config).await?;

        let outcome = Self::rank(&asn_records, &universities);
        Self::publish(&outcome, config)?;

        Ok(PipelineResult {
            asn_rows: asn_records.len(),
            university_rows: universities.len(),
            missing_description: outcome.missing_description,
            candidates: outcome.candidates,
            unmatched: outcome.unmatched,
            duplicates: outcome.duplicates,
            ranked: outcome.ranked.len(),
            output_file: config.output.path.display().to_string(),
        })
    }
}
