use crate::cli::{Cli, Command};
use clap::Parser;
use std::process;

mod cli;
mod compressor;
mod huffman;

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Command::Encode(args) => cli::encode::encode(&args),
        Command::Decode(args) => cli::decode::decode(&args),
        Command::Test(args) => cli::test::test(&args),
        Command::Codes(args) => cli::codes::codes(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
