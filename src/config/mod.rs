pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "map-departure")]
#[command(about = "Inserts computed departure distances into map system files")]
pub struct CliConfig {
    /// Map file to augment, relative to the working directory.
    #[arg(long, default_value = "map systems.txt")]
    pub input: String,

    /// Prefix prepended to the input name to form the output file name.
    #[arg(long, default_value = "out")]
    pub output_prefix: String,

    /// Directory the input is read from and the output written to.
    #[arg(long, default_value = ".")]
    pub dir: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn input_file(&self) -> &str {
        &self.input
    }

    fn output_prefix(&self) -> &str {
        &self.output_prefix
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        validate_path("dir", &self.dir)?;
        // An empty prefix would make the output overwrite the input.
        validate_non_empty_string("output_prefix", &self.output_prefix)?;
        Ok(())
    }
}
