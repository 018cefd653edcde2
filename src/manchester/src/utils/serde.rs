use std::{
    fs,
    io::{self, BufWriter, IsTerminal, Write},
    path::PathBuf,
};

use eyre::Context;
use serde::Serialize;

/// Serializes the given value to the respective output source.
///
/// This will produce valid JSON. If the output is a file or piped to
/// another application, one minified document per line is emitted so
/// that reports of many inputs can be concatenated.
///
/// Output to stdout always gets pretty-printed on a terminal.
pub fn serialize_to_output_source<T: Serialize>(
    out: Option<PathBuf>,
    value: &T,
) -> eyre::Result<()> {
    if let Some(out) = out {
        let file = fs::File::create(&out)
            .with_context(|| format!("failed to create '{}'", out.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, value)?;
        writeln!(writer)?;
        writer.flush()?;
    } else {
        let mut stdout = io::stdout().lock();

        if stdout.is_terminal() {
            serde_json::to_writer_pretty(&mut stdout, value)?;
        } else {
            serde_json::to_writer(&mut stdout, value)?;
        }
        writeln!(stdout)?;
    }

    Ok(())
}
