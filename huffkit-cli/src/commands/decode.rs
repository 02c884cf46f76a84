//! Decode command implementation.

use crate::utils::{read_source, to_json, write_output};
use huffkit::{CodecConfig, DecodeReport, DecodeRequest, SerializedTree, decode_text_with};
use std::path::Path;

pub fn cmd_decode(
    bits: Option<&str>,
    tree: Option<&Path>,
    request: Option<&Path>,
    json: bool,
    config: &CodecConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let request = load_request(bits, tree, request)?;
    let report = decode_request(&request, config)?;

    let rendered = if json {
        to_json(&report, false)?
    } else {
        format!("{}\n", report.decoded)
    };

    write_output(None, &rendered)?;
    Ok(())
}

/// Build the decode request from `--bits`/`--tree` or a `--request` file.
fn load_request(
    bits: Option<&str>,
    tree: Option<&Path>,
    request: Option<&Path>,
) -> Result<DecodeRequest, Box<dyn std::error::Error>> {
    match (bits, tree, request) {
        (_, _, Some(path)) => Ok(serde_json::from_str(&read_source(path)?)?),
        (Some(bits), Some(path), None) => Ok(DecodeRequest {
            encoded: bits.trim().to_string(),
            tree: SerializedTree::from_json(&read_source(path)?)?,
        }),
        _ => Err("pass --bits with --tree, or --request".into()),
    }
}

/// Decode a request under `config`.
pub fn decode_request(
    request: &DecodeRequest,
    config: &CodecConfig,
) -> huffkit::Result<DecodeReport> {
    decode_text_with(&request.encoded, &request.tree, config)
}
