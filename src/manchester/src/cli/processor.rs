use std::{
    fs,
    path::{Path, PathBuf},
};

use eyre::Context;
use rayon::prelude::*;

use super::{InputSource, OutputSource};
use crate::utils;

fn read_file(path: &Path) -> eyre::Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("failed to read '{}'", path.display()))
}

/// Processes inputs with rayon parallelism for batch operations.
///
/// `map` receives the path and the full contents of every input and
/// produces the value that `write` then emits to the output source.
pub fn process_par<T, M, W>(
    input: InputSource,
    output: OutputSource,
    map: M,
    write: W,
) -> eyre::Result<()>
where
    T: Send,
    M: Fn(Option<&Path>, Vec<u8>) -> eyre::Result<T> + Sync,
    W: Fn(Option<PathBuf>, T, OutputSource) -> eyre::Result<()> + Sync,
{
    match (input, output) {
        (InputSource::Stdin, out) => {
            let value = map(None, utils::read_stdin()?)?;
            write(None, value, out)
        }

        (InputSource::File(path), out) => {
            let value = map(Some(&path), read_file(&path)?)?;
            write(Some(path), value, out)
        }

        (InputSource::Files(paths), OutputSource::Dir(dir, suffix)) => {
            fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create '{}'", dir.display()))?;

            paths.into_par_iter().try_for_each(|path| {
                let value = map(Some(&path), read_file(&path)?)
                    .with_context(|| format!("failed to process '{}'", path.display()))?;
                write(Some(path), value, OutputSource::Dir(dir.clone(), suffix))
            })
        }

        (InputSource::Files(..), _) => {
            eyre::bail!("many inputs can only be written into an output directory")
        }
    }
}
