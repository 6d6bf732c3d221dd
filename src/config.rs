//! Runtime configuration for the vanity key search.

use clap::{ArgGroup, Parser};

use crate::matcher::{Pattern, PatternError, PatternType};

/// Stellar Vanity Address Generator
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("mode").required(true)))]
pub struct Config {
    /// Find a public key starting with TERM (a leading 'G' is implied)
    #[arg(short = 'p', long, value_name = "TERM", group = "mode")]
    pub prefix: Option<String>,

    /// Find a public key ending with TERM
    #[arg(short = 's', long, value_name = "TERM", group = "mode")]
    pub suffix: Option<String>,

    /// Find a public key containing TERM anywhere
    #[arg(short = 'm', long, value_name = "TERM", group = "mode")]
    pub contains: Option<String>,

    /// Number of worker threads (default: number of CPU cores)
    #[arg(short = 'j', long)]
    pub jobs: Option<usize>,

    /// Progress report interval in seconds
    #[arg(short = 'r', long, default_value = "5")]
    pub report_interval: u64,
}

impl Config {
    /// Returns the number of workers, defaulting to the CPU count, never
    /// less than one.
    pub fn worker_count(&self) -> usize {
        self.jobs.unwrap_or_else(num_cpus::get).max(1)
    }

    /// Returns the selected match mode and raw term.
    fn mode(&self) -> (PatternType, &str) {
        if let Some(ref term) = self.prefix {
            (PatternType::Prefix, term)
        } else if let Some(ref term) = self.suffix {
            (PatternType::Suffix, term)
        } else if let Some(ref term) = self.contains {
            (PatternType::Contains, term)
        } else {
            unreachable!("clap enforces exactly one match mode")
        }
    }

    /// Compiles the search pattern.
    ///
    /// All term validation happens here, before any worker is started.
    pub fn compile_pattern(&self) -> Result<Pattern, ConfigError> {
        let (pattern_type, term) = self.mode();
        Ok(Pattern::compile(term, pattern_type)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid search term: {0}")]
    InvalidTerm(#[from] PatternError),
}
