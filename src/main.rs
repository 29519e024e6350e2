use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use university_asn_ranking::config::{Config, ConfigOverrides};
use university_asn_ranking::error::Result;
use university_asn_ranking::logging;
use university_asn_ranking::pipeline::{Pipeline, PipelineResult};

#[derive(Parser)]
#[command(name = "university_asn_ranking")]
#[command(about = "Rank world universities by their autonomous system number")]
#[command(version)]
struct Cli {
    /// Config file (defaults to ./ranking.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// ASN table location (URL or file path)
    #[arg(long)]
    asn_url: Option<String>,

    /// University list location (URL or file path)
    #[arg(long)]
    universities_url: Option<String>,

    /// Where to write the HTML report
    #[arg(long)]
    output: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            asn_url: self.asn_url.clone(),
            universities_url: self.universities_url.clone(),
            output: self.output.clone(),
        }
    }

    fn resolve_config(&self) -> Result<Config> {
        let config = Config::load(self.config.as_deref())?;
        Ok(config.apply_overrides(self.overrides()))
    }
}

fn print_summary(result: &PipelineResult) {
    println!("\n📊 University ASN ranking:");
    println!("   ASN rows: {}", result.asn_rows);
    println!("   University references: {}", result.university_rows);
    println!("   Missing descriptions: {}", result.missing_description);
    println!("   Institution candidates: {}", result.candidates);
    println!("   Unmatched: {}", result.unmatched);
    println!("   Duplicates: {}", result.duplicates);
    println!("   Ranked: {}", result.ranked);
    println!("   Output file: {}", result.output_file);
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let _log_guard = logging::init_logging();

    let cli = Cli::parse();

    let outcome = match cli.resolve_config() {
        Ok(config) => Pipeline::run(&config).await,
        Err(e) => Err(e),
    };

    match outcome {
        Ok(result) => {
            info!(ranked = result.ranked, output = %result.output_file, "Pipeline finished");
            print_summary(&result);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(stage = e.stage(), "Pipeline failed: {}", e);
            eprintln!("❌ {} stage failed: {}", e.stage(), e);
            ExitCode::FAILURE
        }
    }
}
