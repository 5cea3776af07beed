use crate::cli::{CliError, DecodeArgs, Result};
use crate::huffman::HuffmanCoding;
use std::fs;

pub fn decode(args: &DecodeArgs) -> Result<()> {
    let input_data = fs::read(&args.input_path)?;
    let decompressed_data = HuffmanCoding
        .huffman_decode(&input_data)
        .map_err(|e| CliError::Decode(e.to_string()))?;
    fs::write(&args.output_path, &decompressed_data)?;

    eprintln!(
        "decompressed {} ({} bytes) -> {} ({} bytes)",
        args.input_path.display(),
        input_data.len(),
        args.output_path.display(),
        decompressed_data.len(),
    );
    Ok(())
}
