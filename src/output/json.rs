//! JSON persistence of the quote collection

use crate::output::OutputResult;
use crate::quote::Quote;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const INDENT: &[u8] = b"    ";

/// Writes quotes to `writer` as a JSON array
///
/// Output is indented by four spaces and keeps non-ASCII characters as
/// literal UTF-8 rather than `\u` escapes. Record and tag order is preserved.
pub fn write_quotes_json<W: Write>(quotes: &[Quote], writer: W) -> OutputResult<()> {
    let mut serializer =
        serde_json::Serializer::with_formatter(writer, PrettyFormatter::with_indent(INDENT));
    quotes.serialize(&mut serializer)?;
    Ok(())
}

/// Writes quotes to `output_path`, replacing any existing file
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote the file
/// * `Err(OutputError)` - Failed to create, serialize into or flush the file
pub fn save_quotes(quotes: &[Quote], output_path: &Path) -> OutputResult<()> {
    let mut writer = BufWriter::new(File::create(output_path)?);
    write_quotes_json(quotes, &mut writer)?;
    writer.flush()?;

    Ok(())
}

/// Saves quotes and logs the outcome; never fails
///
/// Returns true if the file was written.
pub fn persist(quotes: &[Quote], output_path: &Path) -> bool {
    match save_quotes(quotes, output_path) {
        Ok(()) => {
            tracing::info!("------------------------------------------------------");
            tracing::info!(
                "Quotes saved to file: {} ({} records)",
                output_path.display(),
                quotes.len()
            );
            true
        }
        Err(e) => {
            tracing::error!("Failed to write {}: {}", output_path.display(), e);
            false
        }
    }
}
