use crate::config::toml_config::TomlConfig;
use crate::config::AppConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "coursehive")]
#[command(about = "Browse, search and filter the free course catalog")]
pub struct CliConfig {
    /// Course listing endpoint (overrides the config file)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Case-insensitive text matched against title and provider
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Exact category to show ("all" for every category)
    #[arg(long, default_value = "")]
    pub category: String,

    /// 1-indexed page to show
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Courses per page (overrides the config file)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Request timeout in seconds (overrides the config file)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Only print the selectable categories
    #[arg(long)]
    pub categories: bool,

    /// Print the page as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Keep the catalog open and read commands from stdin
    #[arg(short, long)]
    pub interactive: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl CliConfig {
    /// Defaults, then the config file, then flags.
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = AppConfig::default();

        if let Some(path) = &self.config {
            tracing::debug!("Loading configuration from: {}", path);
            let file = TomlConfig::from_file(path)?;
            file.validate()?;
            config = config.merge_file(&file);
        }

        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(page_size) = self.page_size {
            config.page_size = page_size;
        }
        if let Some(timeout) = self.timeout {
            config.request_timeout_secs = Some(timeout);
        }

        config.validate()?;
        Ok(config)
    }
}
