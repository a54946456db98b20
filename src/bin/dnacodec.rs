//! dnacodec Command Line Interface
//!
//! Usage:
//!   dnacodec encode "Hello"               # text -> strands
//!   dnacodec decode "TAAT"                # strand -> text
//!   echo GATTACA | dnacodec decode        # read from stdin
//!   dnacodec --format json decode --strict "ttgc"
//!   dnacodec --config strict.json decode --no-strict "x-ttgc"

use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use dnacodec::{escape_control, transcode, CodecError, Config, Mode, OutputFormat, Transcoded};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "DNACODEC_LOG";

#[derive(Parser, Debug)]
#[command(
    name = "dnacodec",
    version,
    about = "Convert text to and from a four-symbol DNA alphabet"
)]
struct Cli {
    /// Output format: human, json, json-pretty
    #[arg(short = 'f', long = "format", value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Configuration file (JSON)
    #[arg(long = "config", global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    verbosity: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode text into positive and negative strands
    Encode {
        /// Text to encode (reads stdin when omitted)
        text: Option<String>,
    },

    /// Decode a DNA sequence back into text
    Decode {
        /// Sequence to decode (reads stdin when omitted)
        sequence: Option<String>,

        /// Reject empty input and characters other than A C G T
        #[arg(long = "strict", action = ArgAction::SetTrue, conflicts_with = "no_strict")]
        strict: bool,

        /// Filter noise even if the config file enables strict mode
        #[arg(long = "no-strict", action = ArgAction::SetTrue)]
        no_strict: bool,
    },
}

/// Install the stderr log subscriber.
fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Use the positional argument, or all of stdin without its final newline.
fn read_input(arg: Option<String>) -> Result<String, CodecError> {
    if let Some(value) = arg {
        return Ok(value);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    let trimmed_len = buffer.trim_end_matches(&['\r', '\n'][..]).len();
    buffer.truncate(trimmed_len);
    Ok(buffer)
}

/// Merge the config file with command-line overrides.
fn resolve_config(cli: &Cli) -> Result<Config, CodecError> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let strict = match cli.command {
        Command::Decode { strict: true, .. } => Some(true),
        Command::Decode { no_strict: true, .. } => Some(false),
        _ => None,
    };
    config.with_overrides(cli.format, strict);

    Ok(config)
}

/// Print labelled stages, one per line. Decoded text is escaped.
fn print_human(result: &Transcoded) {
    match result {
        Transcoded::Encode(r) => {
            println!("Binary:          {}", r.binary);
            println!("Positive strand: {}", r.dna_positive);
            println!("Negative strand: {}", r.dna_negative);
            println!("Negative binary: {}", r.binary_negative);
            println!("Negative text:   {}", escape_control(&r.negative_text));
        }
        Transcoded::Decode(r) => {
            println!("Sequence:          {}", r.cleaned_sequence);
            println!("Binary:            {}", r.binary);
            println!("Text:              {}", escape_control(&r.text));
            println!("Complement:        {}", r.complement);
            println!("Complement binary: {}", r.complement_binary);
            println!("Complement text:   {}", escape_control(&r.complement_text));
        }
    }
}

/// Print the result in the configured format.
fn print_result(result: &Transcoded, format: OutputFormat) -> Result<(), CodecError> {
    match format {
        OutputFormat::Human => print_human(result),
        OutputFormat::Json => println!("{}", serde_json::to_string(result)?),
        OutputFormat::JsonPretty => println!("{}", serde_json::to_string_pretty(result)?),
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CodecError> {
    let config = resolve_config(&cli)?;
    let policy = config.decode_policy();

    let (mode, payload) = match cli.command {
        Command::Encode { text } => (Mode::Encode, read_input(text)?),
        Command::Decode { sequence, .. } => (Mode::Decode, read_input(sequence)?),
    };
    debug!(%mode, len = payload.len(), ?policy, "transcoding");

    let result = transcode(mode, &payload, &policy)?;
    print_result(&result, config.format)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
