use crate::cli::{EncodeArgs, Result};
use crate::compressor::Compressor;
use crate::huffman::HuffmanCoding;
use std::fs;

pub fn encode(args: &EncodeArgs) -> Result<()> {
    let input_data = fs::read(&args.input_path)?;
    let compressed_data = HuffmanCoding.compress_bytes(&input_data);
    fs::write(&args.output_path, &compressed_data)?;

    eprintln!(
        "compressed {} ({} bytes) -> {} ({} bytes)",
        args.input_path.display(),
        input_data.len(),
        args.output_path.display(),
        compressed_data.len(),
    );
    Ok(())
}
