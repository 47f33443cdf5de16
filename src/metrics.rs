use crate::error::Error;
use crate::frequency::FrequencyTable;
use crate::huffman::CodeTable;
use crate::probability::ProbabilityTable;
use crate::symbol::Symbol;
use crate::Result;

pub const DEFAULT_BITS_PER_SYMBOL: usize = 8;

fn codeword_length(code: &CodeTable, symbol: Symbol) -> Result<usize> {
    code.get(&symbol)
        .map(|codeword| codeword.len())
        .ok_or(Error::SymbolNotPresentInTable(symbol, "code"))
}

/// Expected codeword length in bits, weighted by symbol probability.
/// Every symbol of `probabilities` needs a codeword.
pub fn average_bits_per_symbol(
    code: &CodeTable,
    probabilities: &ProbabilityTable,
) -> Result<f64> {
    probabilities
        .iter()
        .map(|(symbol, p)| codeword_length(code, symbol).map(|length| p * length as f64))
        .sum()
}

pub fn total_bits_fixed_width(total_symbol_count: usize, bits_per_symbol: usize) -> usize {
    total_symbol_count * bits_per_symbol
}

pub fn total_bits_huffman(frequencies: &FrequencyTable, code: &CodeTable) -> Result<usize> {
    frequencies
        .iter()
        .map(|(symbol, count)| codeword_length(code, symbol).map(|length| count * length))
        .sum()
}

/// Size of the Huffman encoding relative to the fixed-width one, in percent.
/// Lower values mean better compression.
pub fn compression_percentage(fixed_width_bits: usize, huffman_bits: usize) -> Result<f64> {
    if fixed_width_bits == 0 {
        return Err(Error::DivisionByZero("compression percentage"));
    }
    Ok(huffman_bits as f64 / fixed_width_bits as f64 * 100.0)
}
