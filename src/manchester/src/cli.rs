use clap::{Parser, Subcommand};

use crate::cmd::*;

mod args;
pub use args::*;

pub mod helpers;

mod io;
pub use io::*;

mod processor;
pub use processor::*;

pub const HYPHEN: &str = "-";

/// The CLI interface for the Manchester application.
#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
pub struct Cli {
    /// The selected command.
    #[clap(subcommand)]
    pub command: ManchesterCommand,

    #[clap(flatten)]
    pub verbosity: Verbosity,
}

/// The top-level commands supported by Manchester.
#[derive(Debug, Subcommand)]
pub enum ManchesterCommand {
    Encode(encode::Encode),
    Decode(decode::Decode),
    Validate(validate::Validate),
}

impl Command for ManchesterCommand {
    fn handle(self) -> eyre::Result<()> {
        match self {
            Self::Encode(encode) => encode.handle(),
            Self::Decode(decode) => decode.handle(),
            Self::Validate(validate) => validate.handle(),
        }
    }
}
