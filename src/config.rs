use std::env;
use std::path::PathBuf;

/// Log output format for the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    Pretty,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    pub fn from_env() -> Self {
        match env::var("LOG_FORMAT")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "json" | "structured" => Self::Json,
            _ => Self::Pretty,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Optional JSON catalog document. The built-in sample catalog is used
    /// when unset.
    pub catalog_path: Option<PathBuf>,
    /// Optional preferences file. Preferences stay in memory when unset.
    pub preferences_path: Option<PathBuf>,
    /// Page size applied when a query does not ask for one.
    pub default_page_size: usize,
    /// Upper bound on any requested page size.
    pub max_page_size: usize,
    /// Number of tools shown as featured on the dashboard.
    pub featured_limit: usize,
    /// Number of related tools on a tool detail view.
    pub related_limit: usize,
    /// Sample tools listed per category in the dashboard breakdown.
    pub breakdown_sample_size: usize,
    pub log_format: LogFormat,
    /// Write the Prometheus text exposition to stderr after each run.
    pub metrics_dump: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            preferences_path: None,
            default_page_size: 20,
            max_page_size: 100,
            featured_limit: 6,
            related_limit: 3,
            breakdown_sample_size: 3,
            log_format: LogFormat::Pretty,
            metrics_dump: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        let config = Self {
            catalog_path: env::var("CATALOG_PATH").ok().map(PathBuf::from),
            preferences_path: env::var("PREFERENCES_PATH").ok().map(PathBuf::from),
            default_page_size: env::var("DEFAULT_PAGE_SIZE")
                .unwrap_or_else(|_| "20".to_string())
                .parse()?,
            max_page_size: env::var("MAX_PAGE_SIZE")
                .unwrap_or_else(|_| "100".to_string())
                .parse()?,
            featured_limit: env::var("FEATURED_LIMIT")
                .unwrap_or_else(|_| "6".to_string())
                .parse()?,
            related_limit: env::var("RELATED_LIMIT")
                .unwrap_or_else(|_| "3".to_string())
                .parse()?,
            breakdown_sample_size: env::var("BREAKDOWN_SAMPLE_SIZE")
                .unwrap_or_else(|_| "3".to_string())
                .parse()?,
            log_format: LogFormat::from_env(),
            metrics_dump: env::var("METRICS_DUMP")
                .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.default_page_size == 0 || self.max_page_size == 0 {
            anyhow::bail!("page sizes must be at least 1");
        }
        if self.default_page_size > self.max_page_size {
            anyhow::bail!(
                "DEFAULT_PAGE_SIZE ({}) exceeds MAX_PAGE_SIZE ({})",
                self.default_page_size,
                self.max_page_size
            );
        }
        Ok(())
    }

    /// Page size to use for a request, capped at `max_page_size`.
    pub fn page_size(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.default_page_size)
            .min(self.max_page_size)
    }
}
