//! Command line surface
//!
//! Options mirror [`ReportConfig`]. A flag given on the command line wins
//! over the YAML config file, which wins over the defaults.

use std::path::PathBuf;

use clap::Parser;
use tagcov_core::ReportConfig;

use crate::error::Result;

#[derive(Parser, Debug, Clone)]
#[command(name = "tagcov")]
#[command(
    version,
    about = "Group compiled artifacts by the date and author documented in their sources",
    long_about = None
)]
pub struct Cli {
    /// Workspace manifest (YAML)
    #[arg(short, long)]
    pub manifest: PathBuf,

    /// Id of the project to report on
    #[arg(short, long)]
    pub project: String,

    /// Report options file (YAML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Documentation tag holding the date
    #[arg(long = "date-tag")]
    pub date_tag: Option<String>,

    /// Date pattern, repeatable; replaces the configured list
    #[arg(long = "date-pattern")]
    pub date_patterns: Vec<String>,

    /// Documentation tag holding the author
    #[arg(long = "author-tag")]
    pub author_tag: Option<String>,

    /// Author delimiter, repeatable; replaces the configured list
    #[arg(long = "author-delimiter")]
    pub author_delimiters: Vec<String>,

    /// Leave out sources dated before this day
    #[arg(long)]
    pub baseline_date: Option<String>,

    /// Report the dependency projects even when the packaging is not pom
    #[arg(long)]
    pub aggregate_projects: bool,

    /// Include glob, repeatable; replaces the configured list
    #[arg(long = "include")]
    pub includes: Vec<String>,

    /// Exclude glob, repeatable; replaces the configured list
    #[arg(long = "exclude")]
    pub excludes: Vec<String>,

    #[arg(long)]
    pub source_encoding: Option<String>,

    /// Top-level group name
    #[arg(long)]
    pub title: Option<String>,

    /// Worker threads
    #[arg(short, long = "jobs")]
    pub jobs: Option<usize>,

    /// Write the JSON report here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Effective report options: defaults ← `--config` file ← flags
    pub fn report_config(&self) -> Result<ReportConfig> {
        let mut config = match &self.config {
            Some(path) => ReportConfig::from_yaml(path)?,
            None => ReportConfig::default(),
        };

        if let Some(tag) = &self.date_tag {
            config.date_tag_name = tag.clone();
        }
        if !self.date_patterns.is_empty() {
            config.date_patterns = self.date_patterns.clone();
        }
        if let Some(tag) = &self.author_tag {
            config.author_tag_name = tag.clone();
        }
        if !self.author_delimiters.is_empty() {
            config.author_delimiters = self.author_delimiters.clone();
        }
        if self.baseline_date.is_some() {
            config.baseline_date = self.baseline_date.clone();
        }
        if self.aggregate_projects {
            config.aggregate_projects = true;
        }
        if !self.includes.is_empty() {
            config.includes = self.includes.clone();
        }
        if !self.excludes.is_empty() {
            config.excludes = self.excludes.clone();
        }
        if let Some(encoding) = &self.source_encoding {
            config.source_encoding = encoding.clone();
        }
        if self.title.is_some() {
            config.title = self.title.clone();
        }
        if self.jobs.is_some() {
            config.parallel_workers = self.jobs;
        }

        config.validate()?;
        Ok(config)
    }
}
