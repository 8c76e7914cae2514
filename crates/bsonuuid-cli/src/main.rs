/// `bsonuuid` — decode, encode, and inspect UUIDs stored as BSON binary
/// values.
///
/// # Command overview
///
/// ```text
/// bsonuuid <COMMAND> [OPTIONS]
///
/// Commands:
///   decode     Decode a 16-byte payload into a UUID
///   encode     Encode a UUID as a 16-byte payload
///   inspect    Show a payload under both UUID byte orders
///   help       Print help information
///
/// Global options:
///   -v, --verbose    Enable debug logging on stderr
///   -h, --help       Print help
///   -V, --version    Print version
/// ```
///
/// Payloads are given as hex (`-`, `:` and whitespace are ignored) or read
/// raw from a file with `--file`. Subtypes accept `legacy`, `standard`, a
/// decimal byte, or a `0x`-prefixed hex byte.
///
/// # Exit codes
///
/// | Code | Meaning                                        |
/// |------|------------------------------------------------|
/// | 0    | Success                                        |
/// | 1    | Error (bad hex, wrong length, unknown subtype) |
///
/// Errors and log output go to stderr so stdout can be piped cleanly.
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cmd_decode;
mod cmd_encode;
mod cmd_inspect;
mod input;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// Decode and encode BSON binary UUIDs (subtypes 0x03 and 0x04).
#[derive(Parser)]
#[command(name = "bsonuuid", version, about = "BSON binary UUID tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging on stderr. `RUST_LOG` takes precedence.
    #[arg(short, long, global = true)]
    verbose: bool,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Decode a 16-byte payload into a UUID.
    Decode(DecodeArgs),
    /// Encode a UUID as a 16-byte payload.
    Encode(EncodeArgs),
    /// Show a payload under both UUID byte orders.
    Inspect(InspectArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Where a payload comes from: a hex argument or a raw file.
#[derive(clap::Args)]
#[group(required = true, multiple = false)]
pub struct PayloadArgs {
    /// Payload as hex, e.g. `123e4567e89b12d3a456426614174000`.
    pub hex: Option<String>,

    /// Read the raw payload bytes from this file instead.
    #[arg(long)]
    pub file: Option<PathBuf>,
}

/// Arguments for `bsonuuid decode`.
///
/// ```text
/// ┌───────────┬───────────────────────────────────────────────────────┐
/// │ Flag      │ Effect                                                │
/// ├───────────┼───────────────────────────────────────────────────────┤
/// │ --subtype │ Subtype byte of the payload (default: standard, 0x04) │
/// │ --strict  │ Reject subtypes other than 0x03 and 0x04              │
/// │ --json    │ Print a JSON report instead of the bare UUID          │
/// └───────────┴───────────────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct DecodeArgs {
    #[command(flatten)]
    pub payload: PayloadArgs,

    /// Binary subtype of the payload.
    #[arg(short, long, default_value = "standard", value_parser = input::parse_subtype)]
    pub subtype: u8,

    /// Reject subtypes that do not hold a UUID.
    #[arg(long)]
    pub strict: bool,

    /// Print a JSON report.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `bsonuuid encode`.
#[derive(clap::Args)]
pub struct EncodeArgs {
    /// UUID in any form `uuid` accepts (hyphenated, simple, braced, urn).
    pub uuid: String,

    /// Binary subtype to encode for.
    #[arg(short, long, default_value = "standard", value_parser = input::parse_subtype)]
    pub subtype: u8,
}

/// Arguments for `bsonuuid inspect`.
#[derive(clap::Args)]
pub struct InspectArgs {
    #[command(flatten)]
    pub payload: PayloadArgs,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Decode(args) => cmd_decode::run(&args),
        Commands::Encode(args) => cmd_encode::run(&args),
        Commands::Inspect(args) => cmd_inspect::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "bsonuuid=debug,bsonuuid_codec=debug"
    } else {
        "bsonuuid=warn,bsonuuid_codec=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
