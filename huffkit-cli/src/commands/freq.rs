//! Freq command implementation.

use crate::utils::{format_frequencies, to_json, write_output};
use huffkit::{CodecConfig, count};

pub fn cmd_freq(
    text: &str,
    json: bool,
    config: &CodecConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    config.check_input(text)?;
    let entries = count(text);

    let rendered = if json {
        to_json(&entries, false)?
    } else {
        format_frequencies(&entries)
    };

    write_output(None, &rendered)?;
    Ok(())
}
