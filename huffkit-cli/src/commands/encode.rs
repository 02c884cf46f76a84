//! Encode command implementation.

use crate::utils::{format_report, read_source, sanitize_label, to_json, write_output};
use huffkit::{CodecConfig, Dot, EncodeReport, deserialize_with, encode_text_with};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Options for the encode command.
pub struct EncodeOptions<'a> {
    pub texts: &'a [String],
    pub fields: &'a [(String, String)],
    pub input: Option<&'a Path>,
    pub json: bool,
    pub pretty: bool,
    pub output: Option<&'a Path>,
    pub dot_dir: Option<&'a Path>,
    pub config: &'a CodecConfig,
}

/// Encode result for one labelled field.
#[derive(Debug, Serialize)]
pub struct FieldReport {
    pub field: String,
    #[serde(flatten)]
    pub report: EncodeReport,
}

pub fn cmd_encode(options: &EncodeOptions) -> Result<(), Box<dyn std::error::Error>> {
    let fields = collect_fields(options)?;
    let reports = encode_fields(&fields, options.config)?;

    if let Some(dir) = options.dot_dir {
        write_diagrams(dir, &reports, options.config);
    }

    let rendered = if options.json {
        to_json(&reports, options.pretty)?
    } else {
        reports
            .iter()
            .map(|r| format_report(&r.field, &r.report))
            .collect::<Vec<_>>()
            .join("\n")
    };

    write_output(options.output, &rendered)?;
    Ok(())
}

/// Gather `(label, text)` pairs from positional texts, `--field`, and `--input`.
fn collect_fields(
    options: &EncodeOptions,
) -> Result<Vec<(String, String)>, Box<dyn std::error::Error>> {
    let mut fields: Vec<(String, String)> = Vec::new();

    for (i, text) in options.texts.iter().enumerate() {
        fields.push((format!("text{}", i + 1), text.clone()));
    }
    fields.extend(options.fields.iter().cloned());

    if let Some(path) = options.input {
        let text = read_source(path)?;
        let label = if path == Path::new("-") {
            "stdin".to_string()
        } else {
            path.display().to_string()
        };
        fields.push((label, text));
    }

    if fields.is_empty() {
        return Err("nothing to encode: pass TEXT, --field NAME=TEXT, or --input FILE".into());
    }
    Ok(fields)
}

/// Encode each field with its own tree.
pub fn encode_fields(
    fields: &[(String, String)],
    config: &CodecConfig,
) -> Result<Vec<FieldReport>, Box<dyn std::error::Error>> {
    fields
        .iter()
        .map(|(field, text)| -> Result<FieldReport, Box<dyn std::error::Error>> {
            let report = encode_text_with(text, config)
                .map_err(|e| format!("field {:?}: {}", field, e))?;
            debug!(field = %field, bits = report.stats.encoded_bits, "encoded field");
            Ok(FieldReport {
                field: field.clone(),
                report,
            })
        })
        .collect()
}

/// Write one DOT file per field. Failures are logged and do not affect the
/// encode result.
fn write_diagrams(dir: &Path, reports: &[FieldReport], config: &CodecConfig) {
    if let Err(e) = fs::create_dir_all(dir) {
        warn!(dir = %dir.display(), error = %e, "cannot create diagram directory");
        return;
    }

    for field in reports {
        let root = match deserialize_with(&field.report.tree, config) {
            Ok(root) => root,
            Err(e) => {
                warn!(field = %field.field, error = %e, "cannot rebuild tree for diagram");
                continue;
            }
        };

        let label = sanitize_label(&field.field);
        let path = dir.join(format!("{}_huffman_tree.dot", label));
        let dot = Dot::new(&root).with_name(&label).to_string();

        match fs::write(&path, dot) {
            Ok(()) => info!(path = %path.display(), "wrote tree diagram"),
            Err(e) => warn!(path = %path.display(), error = %e, "cannot write tree diagram"),
        }
    }
}
