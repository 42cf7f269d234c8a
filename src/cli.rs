use clap::{ArgAction, Parser};
use kfmt::{ByteUnitSystem, FieldRewriter};

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Quantities to convert, e.g. 178255984, 12075408Ki, 1.5e9
    pub values: Vec<String>,

    /// Comma-separated JSON fields to convert when reading a document from stdin
    #[arg(name = "json-fields", long = "json-fields", value_delimiter = ',')]
    pub json_fields: Vec<String>,

    /// Print exact byte counts instead of binary units
    #[arg(name = "raw", long = "raw")]
    pub raw: bool,

    /// Log more (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl TryInto<Config> for Args {
    type Error = anyhow::Error;

    fn try_into(self) -> Result<Config, Self::Error> {
        let unit_system = if self.raw {
            ByteUnitSystem::Raw
        } else {
            ByteUnitSystem::Binary
        };

        let fields: Vec<&str> = self
            .json_fields
            .iter()
            .map(|f| f.trim())
            .filter(|f| !f.is_empty())
            .collect();

        let rewriter = if fields.is_empty() {
            None
        } else {
            Some(FieldRewriter::new(fields)?.with_unit_system(unit_system))
        };

        Ok(Config {
            values: self.values,
            unit_system,
            rewriter,
        })
    }
}
