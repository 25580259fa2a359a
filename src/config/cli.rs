use crate::config::toml_config::TomlConfig;
use crate::config::{env_base_url, ClientConfig};
use crate::domain::model::{FsDiv, Query, ReportCode};
use crate::utils::error::Result;
use chrono::{Datelike, Local};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "ebitda-dash")]
#[command(about = "Look up a company's EBITDA from the disclosure data service")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Service base URL (default: $EBITDA_API_URL or http://localhost:8000)")]
    pub api_url: Option<String>,

    #[arg(long, global = true, help = "Request timeout in seconds")]
    pub timeout: Option<u64>,

    #[arg(long, global = true, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, short, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Single-period EBITDA table
    Lookup(LookupArgs),
    /// Multi-year EBITDA series
    Series(SeriesArgs),
    /// Probe the service health endpoint
    Health,
}

#[derive(Debug, Clone, Args)]
pub struct QueryArgs {
    /// Company name or 6-digit stock code
    pub company: String,

    #[arg(long, default_value = "11011", help = "11011 annual, 11012 semiannual, 11013 Q1, 11014 Q3")]
    pub report_code: ReportCode,

    #[arg(long, default_value = "CFS", help = "CFS consolidated, OFS separate")]
    pub fs_div: FsDiv,
}

#[derive(Debug, Clone, Args)]
pub struct LookupArgs {
    #[command(flatten)]
    pub query: QueryArgs,

    #[arg(long, help = "Business year (default: current year)")]
    pub year: Option<i32>,

    #[arg(long, help = "Print the raw response as JSON")]
    pub json: bool,
}

#[derive(Debug, Clone, Args)]
pub struct SeriesArgs {
    #[command(flatten)]
    pub query: QueryArgs,

    #[arg(long, help = "Number of recent years, 1-10 (default from config, 5)")]
    pub years: Option<usize>,

    #[arg(long, help = "Write the series to a CSV file")]
    pub csv: Option<PathBuf>,
}

impl LookupArgs {
    pub fn to_query(&self) -> Query {
        let year = self.year.unwrap_or_else(|| Local::now().year());
        Query::new(
            self.query.company.clone(),
            year,
            self.query.report_code,
            self.query.fs_div,
        )
    }
}

impl CliConfig {
    /// Defaults, then the TOML file, then `$EBITDA_API_URL`, then flags.
    pub fn resolve(&self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.apply_to(ClientConfig::default()),
            None => ClientConfig::default(),
        };

        if let Some(url) = self.api_url.clone().or_else(env_base_url) {
            config.base_url = url;
        }
        if let Some(timeout) = self.timeout {
            config.timeout_seconds = timeout;
        }
        if let Command::Series(SeriesArgs {
            years: Some(years), ..
        }) = &self.command
        {
            config.series_years = *years;
        }

        Ok(config)
    }
}
