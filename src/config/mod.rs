pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "contactos-etl")]
#[command(about = "Cleans a contact list export and splits it into send-ready CSV batches")]
pub struct CliConfig {
    /// Input file with the raw contact rows ("Last, First" name and email)
    pub input_file: String,

    /// Number of contacts per output batch file
    #[arg(long, default_value = "500")]
    pub batch_size: usize,

    /// Directory the batch files are written to
    #[arg(long, default_value = "lotes")]
    pub output_path: String,

    /// Leading non-data rows to skip (title banner and column header)
    #[arg(long, default_value = "2")]
    pub skip_rows: usize,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input_file
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn batch_size(&self) -> usize {
        self.batch_size
    }

    fn skip_rows(&self) -> usize {
        self.skip_rows
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("input_file", &self.input_file)?;
        validation::validate_path("input_file", &self.input_file)?;
        validation::validate_file_extension("input_file", &self.input_file, &["csv", "tsv", "txt"])?;
        validation::validate_non_empty_string("output_path", &self.output_path)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_positive_number("batch_size", self.batch_size, 1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CliConfig {
        CliConfig {
            input_file: "contactos.csv".to_string(),
            batch_size: 500,
            output_path: "lotes".to_string(),
            skip_rows: 2,
            verbose: false,
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_zero_batch_size_is_rejected() {
        let mut cfg = config();
        cfg.batch_size = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_accepted_input_extensions() {
        for name in ["contactos.csv", "contactos.tsv", "contactos.txt"] {
            let mut cfg = config();
            cfg.input_file = name.to_string();
            assert!(cfg.validate().is_ok(), "{} should be accepted", name);
        }
    }

    #[test]
    fn test_unsupported_input_extension_is_rejected() {
        let mut cfg = config();
        cfg.input_file = "contactos.xlsx".to_string();
        assert!(cfg.validate().is_err());
    }
}
