use crate::core::engine::{OutputFormat, Query};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_required_field, Validate,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "person-directory")]
#[command(about = "Query a small read-only directory of persons")]
pub struct CliConfig {
    #[arg(long, allow_negative_numbers = true, help = "Look up a single person by id")]
    pub id: Option<i32>,

    #[arg(long, help = "Treat a missing id as an error")]
    pub required: bool,

    #[arg(long, help = "Skip persons with this last name when listing")]
    pub exclude_last_name: Option<String>,

    #[arg(long, help = "TOML file with [[persons]] entries replacing the built-in records")]
    pub seed_file: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl CliConfig {
    pub fn query(&self) -> Query {
        match self.id {
            Some(id) => Query::ById {
                id,
                required: self.required,
            },
            None => Query::All {
                exclude_last_name: self.exclude_last_name().map(str::to_string),
            },
        }
    }
}

impl ConfigProvider for CliConfig {
    fn seed_file(&self) -> Option<&str> {
        self.seed_file.as_deref()
    }

    fn exclude_last_name(&self) -> Option<&str> {
        self.exclude_last_name.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.seed_file {
            validate_path("seed_file", path)?;
        }
        if let Some(name) = &self.exclude_last_name {
            validate_non_empty_string("exclude_last_name", name)?;
        }
        if self.required {
            validate_required_field("id", &self.id)?;
        }
        Ok(())
    }
}
