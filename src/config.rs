use std::ffi::OsString;

use anyhow::anyhow;
use clap::Parser;
use kfmt::{ByteUnitSystem, FieldRewriter};

use crate::cli::Args;

pub struct Config {
    /// Positional quantities; when present stdin is ignored.
    pub values: Vec<String>,
    pub unit_system: ByteUnitSystem,
    /// None when no `--json-fields` were given.
    pub rewriter: Option<FieldRewriter>,
}

impl Config {
    #[allow(dead_code)]
    pub fn parse<I, T>(itr: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Args::try_parse_from(itr) {
            Ok(args) => Ok(args.try_into()?),
            Err(err) => Err(anyhow!("error parsing arguments into Config: {}", err)),
        }
    }
}
