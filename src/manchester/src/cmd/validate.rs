use std::{
    path::PathBuf,
    sync::atomic::{AtomicUsize, Ordering},
};

use clap::Args;
use manchester_codec::{Polarity, Width};
use serde::Serialize;

use super::Command;
use crate::{
    cli::{CodecArgs, InputsOutputs, helpers, process_par},
    utils,
};

/// Checks Manchester-coded files for invalid symbols.
///
/// A JSON report is written for every input. The command fails when
/// at least one input is invalid.
#[derive(Debug, Args)]
pub struct Validate {
    #[clap(flatten)]
    codec: CodecArgs,

    #[clap(flatten)]
    args: InputsOutputs,
}

/// The validation outcome of a single input.
#[derive(Debug, Serialize)]
struct Report {
    path: Option<PathBuf>,
    len: usize,
    width: Width,
    polarity: Polarity,
    valid: bool,
    first_invalid: Option<usize>,
}

impl Command for Validate {
    fn handle(self) -> eyre::Result<()> {
        let CodecArgs { width, .. } = self.codec;
        let codec = self.codec.codec();
        let invalid = AtomicUsize::new(0);

        let (inputs, outputs) = self.args.evaluate("report.json")?;
        process_par(
            inputs,
            outputs,
            |path, data| {
                let first_invalid = utils::first_invalid_par(codec, width, &data)?;
                if first_invalid.is_some() {
                    invalid.fetch_add(1, Ordering::Relaxed);
                }

                Ok(Report {
                    path: path.map(ToOwned::to_owned),
                    len: data.len(),
                    width,
                    polarity: codec.polarity(),
                    valid: first_invalid.is_none(),
                    first_invalid,
                })
            },
            helpers::write_as_json,
        )?;

        match invalid.into_inner() {
            0 => Ok(()),
            1 => eyre::bail!("1 input contains invalid Manchester data"),
            n => eyre::bail!("{n} inputs contain invalid Manchester data"),
        }
    }
}
