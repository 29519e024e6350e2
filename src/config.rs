use crate::constants;
use crate::error::{RankingError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sources: SourcesConfig,
    pub http: HttpConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    pub asn_url: String,
    pub universities_url: String,
    /// Treat the first university row as a header and skip it. The upstream
    /// list has no header, so the default keeps its first university; set
    /// this to drop that row as a header would.
    pub universities_has_header: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub timeout_seconds: u64,
    pub user_agent: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: PathBuf,
    pub repository_url: String,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            asn_url: constants::ASN_SOURCE_URL.to_string(),
            universities_url: constants::UNIVERSITIES_SOURCE_URL.to_string(),
            universities_has_header: false,
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: constants::DEFAULT_TIMEOUT_SECONDS,
            user_agent: constants::DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(constants::OUTPUT_FILE),
            repository_url: constants::REPOSITORY_URL.to_string(),
        }
    }
}

/// Command-line values layered on top of the loaded configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub asn_url: Option<String>,
    pub universities_url: Option<String>,
    pub output: Option<PathBuf>,
}

impl Config {
    /// Replaces every field that has an override; the rest keep their file or default value.
    pub fn apply_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(asn_url) = overrides.asn_url {
            self.sources.asn_url = asn_url;
        }
        if let Some(universities_url) = overrides.universities_url {
            self.sources.universities_url = universities_url;
        }
        if let Some(output) = overrides.output {
            self.output.path = output;
        }
        self
    }

    /// Loads configuration from `path`, or from `ranking.toml` in the working
    /// directory when no path is given and that file exists. Falls back to
    /// built-in defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(constants::DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    debug!("No {} found, using built-in defaults", constants::DEFAULT_CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let config_content = fs::read_to_string(path).map_err(|e| {
            RankingError::Config(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;

        let config = Self::from_toml(&config_content)?;
        info!(config = %path.display(), "Loaded configuration");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.sources.asn_url.trim().is_empty() {
            return Err(RankingError::Config("sources.asn_url must not be empty".into()));
        }
        if self.sources.universities_url.trim().is_empty() {
            return Err(RankingError::Config("sources.universities_url must not be empty".into()));
        }
        if self.output.path.as_os_str().is_empty() {
            return Err(RankingError::Config("output.path must not be empty".into()));
        }
        Ok(())
    }
}
