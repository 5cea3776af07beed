//! cli component of the huffpack project.
//!
//! four subcommands cover the whole surface:
//!
//! > `$exename enc <input file> <output file>`
//!
//! compresses the input file and writes the bitstream to the output path.
//!
//! > `$exename dec <input file> <output file>`
//!
//! decompresses a previously produced bitstream back into the original bytes.
//!
//! > `$exename test <input file> <output path>`
//!
//! compresses the file, immediately decompresses the result, and compares it
//! against the original. on a mismatch, the compressed and decompressed
//! artifacts are written next to the output path for inspection.
//!
//! > `$exename codes <input file> [--json <path>]`
//!
//! prints the frequency and code table the compressor would use for the
//! input, one symbol per line; `--json` additionally writes the table as a
//! machine-readable report.
use clap::{Args, Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub mod codes;
pub mod decode;
pub mod encode;

/// Error types for CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("roundtrip mismatch: {0}")]
    RoundTrip(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;

/// CLI arguments for the huffpack application
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Supported commands for huffpack
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode (compress) a file
    #[command(alias = "enc")]
    Encode(EncodeArgs),

    /// Decode (decompress) a file
    #[command(alias = "dec")]
    Decode(DecodeArgs),

    /// Test the compression/decompression roundtrip on a file
    Test(TestArgs),

    /// Print the Huffman code table for a file
    Codes(CodesArgs),
}

/// Arguments specific to the encode command
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Path to the input file
    pub input_path: PathBuf,

    /// Path for the compressed output file
    pub output_path: PathBuf,
}

/// Arguments specific to the decode command
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Path to the compressed input file
    pub input_path: PathBuf,

    /// Path for the decompressed output file
    pub output_path: PathBuf,
}

/// Arguments specific to the test command
#[derive(Args, Debug)]
pub struct TestArgs {
    /// Path to the original file
    pub input_path: PathBuf,

    /// Base path for mismatch artifacts, should the roundtrip fail
    pub output_path: PathBuf,
}

/// Arguments specific to the codes command
#[derive(Args, Debug)]
pub struct CodesArgs {
    /// Path to the input file
    pub input_path: PathBuf,

    /// Also write the code table as a JSON report to this path
    #[arg(long)]
    pub json: Option<PathBuf>,
}
