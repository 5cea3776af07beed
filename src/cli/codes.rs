use crate::cli::{CodesArgs, Result};
use crate::huffman::codebook::EncodeBook;
use crate::huffman::frequency::FrequencyTable;
use crate::huffman::tree::build_tree;
use serde::Serialize;
use std::fs;

/// One row of the code table: a symbol, how often it occurred, and the code
/// it was assigned.
#[derive(Serialize, Debug, Clone)]
pub struct CodeEntry {
    pub symbol: u8,
    pub display: String,
    pub frequency: u64,
    pub code: String,
    pub code_len: usize,
}

/// Machine-readable report for the `codes --json` output.
#[derive(Serialize, Debug, Clone)]
pub struct CodeTableReport {
    pub input: String,
    pub input_len: usize,
    pub distinct_symbols: usize,
    pub payload_bits: u64,
    pub entries: Vec<CodeEntry>,
}

pub fn codes(args: &CodesArgs) -> Result<()> {
    let input_data = fs::read(&args.input_path)?;

    let report = build_report(&args.input_path.display().to_string(), &input_data);
    for entry in &report.entries {
        println!("{} {}", entry.display, entry.code);
    }
    eprintln!(
        "{} distinct symbols over {} bytes, {} payload bits",
        report.distinct_symbols, report.input_len, report.payload_bits,
    );

    if let Some(json_path) = &args.json {
        let json = serde_json::to_string_pretty(&report)?;
        fs::write(json_path, json)?;
    }

    Ok(())
}

fn build_report(input: &str, data: &[u8]) -> CodeTableReport {
    let frequencies = FrequencyTable::from_bytes(data);

    let mut entries = Vec::new();
    let mut payload_bits = 0u64;

    if let Ok(tree) = build_tree(&frequencies) {
        let book = EncodeBook::from_tree(&tree);

        entries = book
            .iter()
            .map(|(symbol, code)| {
                let frequency = frequencies.count(symbol);
                let code: String = code.iter().map(|&bit| if bit { '1' } else { '0' }).collect();
                CodeEntry {
                    symbol,
                    display: printable(symbol),
                    frequency,
                    code_len: code.len(),
                    code,
                }
            })
            .collect();
        entries.sort_by_key(|e| e.symbol);

        payload_bits = entries.iter().map(|e| e.frequency * e.code_len as u64).sum();
    }

    CodeTableReport {
        input: input.to_string(),
        input_len: data.len(),
        distinct_symbols: frequencies.distinct(),
        payload_bits,
        entries,
    }
}

fn printable(symbol: u8) -> String {
    if symbol.is_ascii_graphic() {
        (symbol as char).to_string()
    } else {
        format!("{:#04x}", symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_matches_the_known_vector() {
        let report = build_report("known vector", b"This is a test!");
        assert_eq!(report.input_len, 15);
        assert_eq!(report.distinct_symbols, 9);
        assert_eq!(report.entries.len(), 9);
        assert!(report.payload_bits < 8 * 15);

        let total: u64 = report.entries.iter().map(|e| e.frequency).sum();
        assert_eq!(total, 15);
    }

    #[test]
    fn empty_input_gives_an_empty_report() {
        let report = build_report("empty", &[]);
        assert_eq!(report.distinct_symbols, 0);
        assert!(report.entries.is_empty());
        assert_eq!(report.payload_bits, 0);
    }

    #[test]
    fn report_serializes_to_json() {
        let report = build_report("json", b"abab");
        let json = serde_json::to_string_pretty(&report).unwrap();
        assert!(json.contains("\"distinct_symbols\": 2"));
    }
}
