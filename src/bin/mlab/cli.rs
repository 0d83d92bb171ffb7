use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "mlab",
    about = "Read, validate and summarize VASP MLAB training data",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    /// Emit debug logging to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check that an MLAB file is well-formed and internally consistent
    #[command(visible_alias = "v")]
    Validate(ValidateArgs),

    /// Summarize the sections of an MLAB file
    #[command(visible_alias = "i")]
    Inspect(InspectArgs),
}

impl Command {
    pub fn io(&self) -> &IoOptions {
        match self {
            Self::Validate(args) => &args.io,
            Self::Inspect(args) => &args.io,
        }
    }
}

/// I/O options shared by all commands.
#[derive(Args)]
pub struct IoOptions {
    /// Input MLAB file (stdin if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub io: IoOptions,

    /// Exit with a failure status when a consistency problem is found
    #[arg(long)]
    pub deny: bool,
}

#[derive(Args)]
pub struct InspectArgs {
    #[command(flatten)]
    pub io: IoOptions,

    /// Refuse to summarize files that fail validation
    #[arg(long)]
    pub strict: bool,

    /// Write the summary as JSON to stdout instead of tables
    #[arg(long)]
    pub json: bool,
}

pub fn parse() -> Cli {
    Cli::parse()
}
