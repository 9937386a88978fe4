use crate::domain::model::ReadStrategy;
use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "flip-nums", version)]
#[command(about = "Writes the integers of a file in reverse order, one per line")]
pub struct CliConfig {
    // empty paths are accepted here and fail when opened
    /// File to read integers from
    #[arg(value_parser = OsStringValueParser::new().map(PathBuf::from))]
    pub input: PathBuf,

    /// File to write the reversed integers to (created or truncated)
    #[arg(value_parser = OsStringValueParser::new().map(PathBuf::from))]
    pub output: PathBuf,

    #[arg(long, value_enum, default_value_t = ReadStrategy::Presize)]
    pub strategy: ReadStrategy,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
