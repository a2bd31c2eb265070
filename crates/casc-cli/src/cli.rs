use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "casc",
    about = "casc — cascading structural diff for key-value snapshot caches",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare two snapshot files and report the remaining diffs
    Diff(DiffArgs),
    /// Run a multi-key pattern against a snapshot file
    Query(QueryArgs),
}

#[derive(Args)]
pub struct DiffArgs {
    /// Old-version snapshot (JSON object)
    pub old: PathBuf,
    /// New-version snapshot (JSON object)
    pub new: PathBuf,
    /// TOML rules file describing the filter pipeline
    #[arg(long)]
    pub rules: Option<PathBuf>,
}

#[derive(Args)]
pub struct QueryArgs {
    /// Snapshot file to query (JSON object)
    pub file: PathBuf,
    /// Dotted pattern: `*` for any key, `{a,b}` for alternatives
    pub pattern: String,
    /// Only yield mapping-typed hits
    #[arg(long)]
    pub only_maps: bool,
}
