//! Tree command implementation.

use crate::TreeFormat;
use crate::utils::{format_outline, write_output};
use huffkit::{CodecConfig, Dot, HuffmanError, build, count, serialize};
use std::path::Path;

pub fn cmd_tree(
    text: &str,
    format: TreeFormat,
    output: Option<&Path>,
    config: &CodecConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let rendered = render_tree(text, format, config)?;
    write_output(output, &rendered)?;
    Ok(())
}

fn render_tree(text: &str, format: TreeFormat, config: &CodecConfig) -> huffkit::Result<String> {
    config.check_input(text)?;
    let root = build(&count(text))?;

    Ok(match format {
        TreeFormat::Text => format_outline(&root),
        TreeFormat::Json => {
            let mut json = serialize(&root).to_json_pretty()?;
            json.push('\n');
            json
        }
        TreeFormat::Dot => Dot::new(&root).to_string(),
    })
}
