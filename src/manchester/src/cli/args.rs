use clap::{ArgAction, Args, ValueEnum};
use manchester_codec::{Manchester, Polarity, Width};

pub const MANCHESTER_POLARITY: &str = "MANCHESTER_POLARITY";
pub const MANCHESTER_WIDTH: &str = "MANCHESTER_WIDTH";

/// Configures the verbosity of the builtin logger.
#[derive(Clone, Copy, Debug, Args)]
pub struct Verbosity {
    /// Configures the log verbosity of Manchester.
    ///
    /// `-v` is Debug, `-vv` is Trace.
    #[clap(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Verbosity {
    /// Configures the global logger based on the settings.
    pub fn setup(self) -> eyre::Result<()> {
        let level = self.log_level();
        simple_logger::init_with_level(level)
            .map_err(|e| eyre::eyre!("failed to set up logging: {e}"))
    }

    fn log_level(self) -> log::Level {
        match self.verbose {
            0 => log::Level::Info,
            1 => log::Level::Debug,
            _ => log::Level::Trace,
        }
    }
}

/// The symbol polarity to code with.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PolarityArg {
    /// `1` is sent as `10`, `0` as `01`.
    Normal,
    /// `1` is sent as `01`, `0` as `10`.
    Inverted,
}

impl From<PolarityArg> for Polarity {
    fn from(value: PolarityArg) -> Self {
        match value {
            PolarityArg::Normal => Self::Normal,
            PolarityArg::Inverted => Self::Inverted,
        }
    }
}

/// Codec options shared by all commands.
#[derive(Clone, Copy, Debug, Args)]
pub struct CodecArgs {
    /// The polarity of the Manchester symbols.
    ///
    /// Both ends of a link must agree on this. Data coded with the
    /// wrong polarity still passes validation, but decodes into the
    /// complement of the original payload.
    #[clap(short, long, value_enum, default_value_t = PolarityArg::Normal, env = MANCHESTER_POLARITY)]
    pub polarity: PolarityArg,

    /// The width of decoded chunks in bits; one of 8, 16, 32 or 64.
    ///
    /// The produced byte stream does not depend on this, it only
    /// controls the granularity of processing and the alignment
    /// required from inputs. 64 is not available for encoding.
    #[clap(short, long, default_value = "8", value_parser = parse_width, env = MANCHESTER_WIDTH)]
    pub width: Width,
}

impl CodecArgs {
    /// Gets the codec described by the arguments.
    pub fn codec(self) -> Manchester {
        Manchester::new(self.polarity.into())
    }
}

fn parse_width(value: &str) -> Result<Width, String> {
    let bits: u32 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a bit count"))?;
    Width::try_from(bits).map_err(|e| e.to_string())
}
