use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use eyre::Context;

use super::OutputSource;
use crate::utils;

/// Determines the file to write the result for the input at `inpath`
/// to, or [`None`] for stdout.
pub fn output_path(inpath: Option<PathBuf>, out: OutputSource) -> eyre::Result<Option<PathBuf>> {
    match (out, inpath) {
        (OutputSource::Stdout, _) => Ok(None),
        (OutputSource::File(path), _) => Ok(Some(path)),
        (OutputSource::Dir(mut out, suffix), Some(path)) => {
            // Name the output after the input file.
            let name = path
                .with_extension(suffix)
                .file_name()
                .map(ToOwned::to_owned)
                .ok_or_else(|| eyre::eyre!("input path '{}' has no file name", path.display()))?;
            out.push(name);

            Ok(Some(out))
        }

        (OutputSource::Dir(..), None) => Err(eyre::eyre!(
            "output path for stdin input is directory; specify a file path instead"
        )),
    }
}

/// Helper for writing raw coded bytes to an output source.
pub fn write_bytes(inpath: Option<PathBuf>, data: Vec<u8>, out: OutputSource) -> eyre::Result<()> {
    match output_path(inpath, out)? {
        Some(path) => {
            log::debug!("Writing {} bytes to '{}'", data.len(), path.display());
            fs::write(&path, data)
                .with_context(|| format!("failed to write '{}'", path.display()))
        }

        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&data)?;
            stdout.flush().map_err(Into::into)
        }
    }
}

/// Helper for mapping any serializable `T` value to an output source.
pub fn write_as_json<T: serde::Serialize>(
    inpath: Option<PathBuf>,
    value: T,
    out: OutputSource,
) -> eyre::Result<()> {
    let path = output_path(inpath, out)?;
    utils::serialize_to_output_source(path, &value)
}
