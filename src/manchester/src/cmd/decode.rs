use std::path::Path;

use clap::Args;

use super::Command;
use crate::{
    cli::{CodecArgs, InputsOutputs, helpers, process_par},
    utils,
};

/// Decodes Manchester-coded files back into their payload.
///
/// Inputs are validated first and rejected when they contain
/// invalid symbols.
#[derive(Debug, Args)]
pub struct Decode {
    #[clap(flatten)]
    codec: CodecArgs,

    #[clap(flatten)]
    args: InputsOutputs,

    /// Decodes invalid inputs on a best-effort basis instead of
    /// rejecting them.
    ///
    /// Every invalid symbol pair decodes to a deterministic but
    /// meaningless bit.
    #[clap(short, long, default_value_t = false)]
    lossy: bool,
}

fn describe(path: Option<&Path>) -> String {
    match path {
        Some(path) => format!("'{}'", path.display()),
        None => "stdin".to_owned(),
    }
}

impl Command for Decode {
    fn handle(self) -> eyre::Result<()> {
        let CodecArgs { width, .. } = self.codec;
        let codec = self.codec.codec();
        let lossy = self.lossy;

        let (inputs, outputs) = self.args.evaluate("bin")?;
        process_par(
            inputs,
            outputs,
            |path, data| {
                if let Some(pos) = utils::first_invalid_par(codec, width, &data)? {
                    if !lossy {
                        eyre::bail!(
                            "{} holds an invalid {width} chunk at byte offset {pos}",
                            describe(path)
                        );
                    }

                    log::warn!(
                        "Decoding {} with invalid data starting at byte offset {pos}",
                        describe(path)
                    );
                }

                utils::decode_par(codec, width, &data).map_err(Into::into)
            },
            helpers::write_bytes,
        )
    }
}
