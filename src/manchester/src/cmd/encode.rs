use clap::Args;

use super::Command;
use crate::{
    cli::{CodecArgs, InputsOutputs, helpers, process_par},
    utils,
};

/// Encodes binary files into their Manchester representation.
///
/// Every output file is exactly twice as large as its input.
#[derive(Debug, Args)]
pub struct Encode {
    #[clap(flatten)]
    codec: CodecArgs,

    #[clap(flatten)]
    args: InputsOutputs,
}

impl Command for Encode {
    fn handle(self) -> eyre::Result<()> {
        let CodecArgs { width, .. } = self.codec;
        if !width.can_encode() {
            eyre::bail!("{width} chunks can only be decoded; pick a width of 8, 16 or 32");
        }

        let codec = self.codec.codec();
        let (inputs, outputs) = self.args.evaluate("man")?;

        process_par(
            inputs,
            outputs,
            |_, data| utils::encode_par(codec, width, &data).map_err(Into::into),
            helpers::write_bytes,
        )
    }
}
