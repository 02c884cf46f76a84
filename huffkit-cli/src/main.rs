//! huffkit CLI
//!
//! Encode text into Huffman bit strings with a portable tree, and decode them
//! back from the bit string and tree alone.

mod commands;
mod utils;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use commands::{EncodeOptions, cmd_decode, cmd_encode, cmd_freq, cmd_tree};
use huffkit::CodecConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "huffkit")]
#[command(author, version, about = "Huffman encoder/decoder with portable code trees")]
#[command(long_about = "
huffkit encodes text into a string of '0'/'1' bits using a Huffman code built
from the text itself, and emits the code tree as JSON so the bits can be
decoded later by a separate call.

Examples:
  huffkit encode abracadabra
  huffkit encode --field name=Juan --field email=juan@example.com --json
  huffkit encode --input notes.txt --json --output report.json
  huffkit encode abracadabra --dot diagrams/
  huffkit decode --bits 01101110100010101101110 --tree tree.json
  huffkit decode --request request.json
  huffkit freq mississippi
  huffkit tree abracadabra --format dot | dot -Tpng -o tree.png
  huffkit completions bash > huffkit.bash
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log filter (e.g. `debug`, `huffkit=trace`); falls back to RUST_LOG, then `warn`
    #[arg(long, global = true)]
    log: Option<String>,

    /// Maximum input length in characters
    #[arg(long, global = true, default_value_t = 1 << 20)]
    max_input: usize,

    /// Maximum depth accepted for serialized trees
    #[arg(long, global = true, default_value_t = 512)]
    max_depth: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode text and print the codes, bit string, and tree
    #[command(alias = "e")]
    Encode {
        /// Texts to encode, each with its own tree
        texts: Vec<String>,

        /// Labelled field to encode (NAME=TEXT), may be repeated
        #[arg(short, long = "field", value_parser = parse_field)]
        fields: Vec<(String, String)>,

        /// Read the text to encode from a file (`-` for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,

        /// Indent JSON output
        #[arg(short, long)]
        pretty: bool,

        /// Write output to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also write a Graphviz DOT diagram per field into this directory
        #[arg(long)]
        dot: Option<PathBuf>,
    },

    /// Decode a bit string with a serialized tree
    #[command(alias = "d")]
    Decode {
        /// Encoded bit string
        #[arg(short, long, requires = "tree", conflicts_with = "request")]
        bits: Option<String>,

        /// JSON file holding the serialized tree (`-` for stdin)
        #[arg(short, long, requires = "bits")]
        tree: Option<PathBuf>,

        /// JSON file holding {"encoded": ..., "tree": ...} (`-` for stdin)
        #[arg(short, long)]
        request: Option<PathBuf>,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Show symbol frequencies of a text
    #[command(alias = "f")]
    Freq {
        /// Text to analyse
        text: String,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Print the Huffman tree of a text
    #[command(alias = "t")]
    Tree {
        /// Text to build the tree from
        text: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: TreeFormat,

        /// Write output to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Tree output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
enum TreeFormat {
    /// Indented outline
    #[default]
    Text,
    /// Serialized tree as JSON
    Json,
    /// Graphviz DOT source
    Dot,
}

fn parse_field(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((name, text)) if !name.is_empty() => Ok((name.to_string(), text.to_string())),
        _ => Err(format!("expected NAME=TEXT, got {arg:?}")),
    }
}

fn init_logging(filter: Option<&str>) {
    let filter = match filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log.as_deref());

    let config = CodecConfig::new(Some(cli.max_input), cli.max_depth);

    let result = match cli.command {
        Commands::Encode {
            texts,
            fields,
            input,
            json,
            pretty,
            output,
            dot,
        } => cmd_encode(&EncodeOptions {
            texts: &texts,
            fields: &fields,
            input: input.as_deref(),
            json,
            pretty,
            output: output.as_deref(),
            dot_dir: dot.as_deref(),
            config: &config,
        }),
        Commands::Decode {
            bits,
            tree,
            request,
            json,
        } => cmd_decode(
            bits.as_deref(),
            tree.as_deref(),
            request.as_deref(),
            json,
            &config,
        ),
        Commands::Freq { text, json } => cmd_freq(&text, json, &config),
        Commands::Tree {
            text,
            format,
            output,
        } => cmd_tree(&text, format, output.as_deref(), &config),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "huffkit", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
