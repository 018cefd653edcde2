use std::path::PathBuf;

use clap::Args;
use glob::glob;

use crate::cli::HYPHEN;

/// Where the data to code comes from.
#[derive(Clone, Debug)]
pub enum InputSource {
    /// Read all of stdin.
    Stdin,
    /// Read a single file.
    File(PathBuf),
    /// Read every file matched by a glob pattern.
    Files(Vec<PathBuf>),
}

/// Where the coded data goes.
#[derive(Clone, Debug)]
pub enum OutputSource {
    /// Write to stdout.
    Stdout,
    /// Write to a single file.
    File(PathBuf),
    /// Create one file per input in the directory.
    ///
    /// Output files are named after their input, with the extension
    /// replaced by the given suffix.
    Dir(PathBuf, &'static str),
}

/// Command options for coding one or many inputs into matching outputs.
#[derive(Debug, Args)]
pub struct InputsOutputs {
    /// The input to process.
    ///
    /// "-" reads from stdin. Anything else is a file path, where UNIX
    /// glob patterns may be used to select many files at once.
    ///
    /// When more than one file is matched, the output option must
    /// name a directory for the results.
    pub input: String,

    /// Where to write the results.
    ///
    /// Defaults to "-" for stdout. Otherwise, this is a single file
    /// for a single input, or a directory which receives one file
    /// per input.
    #[clap(short, default_value = HYPHEN)]
    pub output: PathBuf,
}

impl InputsOutputs {
    /// Resolves the arguments into input and output sources.
    ///
    /// `suffix` is the extension given to files created in an output
    /// directory.
    pub fn evaluate(self, suffix: &'static str) -> eyre::Result<(InputSource, OutputSource)> {
        let input = self.input_source()?;
        let output = self.output_source(suffix, &input)?;

        log::debug!("Resolved {input:?} to {output:?}");
        Ok((input, output))
    }

    fn input_source(&self) -> eyre::Result<InputSource> {
        if self.input == HYPHEN {
            return Ok(InputSource::Stdin);
        }

        // Plain paths are valid glob patterns matching only themselves.
        let mut paths: Vec<PathBuf> = glob(&self.input)?.collect::<Result<_, _>>()?;
        match paths.len() {
            0 => Err(eyre::eyre!("failed to find files matching '{}'", self.input)),
            1 => Ok(InputSource::File(paths.remove(0))),
            _ => Ok(InputSource::Files(paths)),
        }
    }

    fn output_source(
        self,
        suffix: &'static str,
        input: &InputSource,
    ) -> eyre::Result<OutputSource> {
        if self.output.as_os_str() == HYPHEN {
            if let InputSource::Files(paths) = input {
                eyre::bail!(
                    "{} inputs matched '{}'; specify an output directory with -o",
                    paths.len(),
                    self.input
                );
            }

            return Ok(OutputSource::Stdout);
        }

        Ok(match input {
            InputSource::Files(..) => OutputSource::Dir(self.output, suffix),
            _ if self.output.is_dir() => OutputSource::Dir(self.output, suffix),
            InputSource::Stdin | InputSource::File(..) => OutputSource::File(self.output),
        })
    }
}
