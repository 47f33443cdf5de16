use std::io::Write;

use crate::frequency::FrequencyTable;
use crate::huffman::{self, CodeTable, Codeword};
use crate::metrics;
use crate::probability::{self, ProbabilityTable};
use crate::symbol::Symbol;
use crate::Result;

const SOURCE_CODING_TOLERANCE: f64 = 1e-6;
const TABLE_SEPARATOR_WIDTH: usize = 65;
const SUMMARY_TABLE_TITLE: &str = "Table to showcase some of the results";

/// Everything derived from one frequency table.
pub struct Report {
    pub frequencies: FrequencyTable,
    pub probabilities: ProbabilityTable,
    pub code: CodeTable,
    pub total_symbol_count: usize,
    pub bits_per_symbol: usize,
    pub entropy: f64,
    pub average_bits_per_symbol: f64,
    pub total_bits_fixed_width: usize,
    pub total_bits_huffman: usize,
    pub compression_percentage: f64,
}

impl Report {
    pub fn analyze(frequencies: FrequencyTable, bits_per_symbol: usize) -> Result<Report> {
        let total_symbol_count = probability::total_count(&frequencies);
        let probabilities = probability::probabilities(&frequencies, total_symbol_count)?;
        let entropy = probability::entropy(&probabilities);
        let code = huffman::generate_code(&frequencies)?;

        let average_bits_per_symbol = metrics::average_bits_per_symbol(&code, &probabilities)?;
        if average_bits_per_symbol < entropy - SOURCE_CODING_TOLERANCE {
            log::warn!(
                "Average code length {} is below the entropy {}",
                average_bits_per_symbol,
                entropy
            );
        }
        let total_bits_fixed_width =
            metrics::total_bits_fixed_width(total_symbol_count, bits_per_symbol);
        let total_bits_huffman = metrics::total_bits_huffman(&frequencies, &code)?;
        let compression_percentage =
            metrics::compression_percentage(total_bits_fixed_width, total_bits_huffman)?;
        log::info!(
            "{} symbols, {} distinct: entropy {:.5}, average length {:.5}",
            total_symbol_count,
            frequencies.len(),
            entropy,
            average_bits_per_symbol
        );

        Ok(Report {
            frequencies,
            probabilities,
            code,
            total_symbol_count,
            bits_per_symbol,
            entropy,
            average_bits_per_symbol,
            total_bits_fixed_width,
            total_bits_huffman,
            compression_percentage,
        })
    }
}

pub struct ReportRenderer<'a, T: Write> {
    writer: &'a mut T,
    summary_symbols: &'a [Symbol],
}

impl<'a, T: Write> ReportRenderer<'a, T> {
    pub fn new(writer: &'a mut T, summary_symbols: &'a [Symbol]) -> Self {
        Self {
            writer,
            summary_symbols,
        }
    }

    pub fn render(&mut self, report: &Report) -> Result<()> {
        self.write_probability_table(report)?;
        self.write_metrics(report)?;
        self.write_code_table(report)?;
        self.write_summary_table(report)?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_separator(&mut self) -> std::io::Result<()> {
        writeln!(self.writer, "{}", "-".repeat(TABLE_SEPARATOR_WIDTH))
    }

    fn write_probability_table(&mut self, report: &Report) -> std::io::Result<()> {
        self.write_separator()?;
        writeln!(
            self.writer,
            "{:<10} {:<12} {:<20}",
            "Symbol", "Frequency", "Probability Of Char"
        )?;
        for (symbol, frequency) in report.frequencies.sorted_by_descending_frequency() {
            let probability = report.probabilities.get(&symbol).unwrap_or_default();
            writeln!(
                self.writer,
                "{:<10} {:<12} {:.5}",
                symbol, frequency, probability
            )?;
        }
        self.write_separator()
    }

    fn write_metrics(&mut self, report: &Report) -> std::io::Result<()> {
        writeln!(
            self.writer,
            "Total number of symbols: {}",
            report.total_symbol_count
        )?;
        writeln!(self.writer, "Entropy: {:.5} bits/symbol", report.entropy)?;
        writeln!(
            self.writer,
            "Average number of bits/symbol using the Huffman code: {:.5}",
            report.average_bits_per_symbol
        )?;
        writeln!(
            self.writer,
            "Total bits using {}-bit fixed width encoding: {}",
            report.bits_per_symbol, report.total_bits_fixed_width
        )?;
        writeln!(
            self.writer,
            "Total bits using the Huffman code: {}",
            report.total_bits_huffman
        )?;
        writeln!(
            self.writer,
            "Percentage of compression: {:.3}%",
            report.compression_percentage
        )
    }

    fn write_code_table_header(&mut self) -> std::io::Result<()> {
        writeln!(
            self.writer,
            " {:<10} {:<15} {:<17} {:<15}",
            "Symbol", "Probability", "Codewords", "Length of codeword"
        )
    }

    fn write_code_table_row(
        &mut self,
        report: &Report,
        symbol: Symbol,
        codeword: &Codeword,
    ) -> std::io::Result<()> {
        let probability = report.probabilities.get(&symbol).unwrap_or_default();
        self.write_separator()?;
        writeln!(
            self.writer,
            " {:<10} {:<15.5} {:<17} {:<15}",
            symbol,
            probability,
            codeword,
            codeword.len()
        )
    }

    // Rows follow symbol order, spaces first.
    fn write_code_table(&mut self, report: &Report) -> std::io::Result<()> {
        self.write_separator()?;
        self.write_code_table_header()?;
        for (symbol, codeword) in report.code.iter() {
            self.write_code_table_row(report, symbol, codeword)?;
        }
        self.write_separator()
    }

    fn write_summary_table(&mut self, report: &Report) -> std::io::Result<()> {
        if self.summary_symbols.is_empty() {
            return Ok(());
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", SUMMARY_TABLE_TITLE)?;
        self.write_separator()?;
        self.write_code_table_header()?;
        for (symbol, codeword) in report.code.iter() {
            if self.summary_symbols.contains(&symbol) {
                self.write_code_table_row(report, symbol, codeword)?;
            }
        }
        self.write_separator()
    }
}

#[cfg(test)]
mod test {
    use super::{Report, ReportRenderer, SUMMARY_TABLE_TITLE};
    use crate::frequency::FrequencyTable;
    use crate::metrics::DEFAULT_BITS_PER_SYMBOL;
    use crate::symbol::Symbol;

    fn create_report(pairs: &[(char, usize)]) -> Report {
        let frequencies =
            FrequencyTable::from_counts(pairs.iter().map(|&(c, f)| (Symbol::from(c), f))).unwrap();
        Report::analyze(frequencies, DEFAULT_BITS_PER_SYMBOL).unwrap()
    }

    fn render(report: &Report, summary_symbols: &[Symbol]) -> String {
        let mut output: Vec<u8> = Vec::new();
        ReportRenderer::new(&mut output, summary_symbols)
            .render(report)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_analyze_single_symbol() {
        let report = create_report(&[('x', 5)]);
        assert_eq!(report.entropy, 0.0);
        assert!(
            !report.entropy.is_sign_negative(),
            "Entropy of a single symbol must be positive zero"
        );
        assert_eq!(report.code.get(&Symbol::from('x')).unwrap().as_str(), "0");
        assert_eq!(report.total_bits_huffman, 5);
        assert_eq!(report.total_bits_fixed_width, 40);
    }

    #[test]
    fn test_analyze_two_symbols() {
        let report = create_report(&[('a', 3), ('b', 1)]);
        assert!((report.entropy - 0.8113).abs() < 1e-4);
        assert_eq!(report.total_bits_huffman, 4);
        assert_eq!(report.total_bits_fixed_width, 32);
        assert!((report.compression_percentage - 12.5).abs() < 1e-9);
        for (_, codeword) in report.code.iter() {
            assert_eq!(codeword.len(), 1);
        }
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let pairs = [('a', 7), ('b', 7), ('c', 3), ('d', 3), ('e', 1), (' ', 9)];
        let first = create_report(&pairs);
        let second = create_report(&pairs);
        assert_eq!(first.entropy, second.entropy);
        assert_eq!(first.average_bits_per_symbol, second.average_bits_per_symbol);
        assert_eq!(first.code, second.code);
    }

    #[test]
    fn test_render_contains_all_sections() {
        let report = create_report(&[('a', 5), ('b', 3), ('c', 1), (' ', 1)]);
        let output = render(&report, &[Symbol::from('a'), Symbol::Space]);
        assert!(output.contains("Probability Of Char"));
        assert!(output.contains("Entropy: "));
        assert!(output.contains("Total bits using 8-bit fixed width encoding: 80"));
        assert!(output.contains("Length of codeword"));
        assert!(output.contains(SUMMARY_TABLE_TITLE));
        assert!(output.contains("(space)"));
    }

    #[test]
    fn test_render_single_symbol_entropy() {
        let report = create_report(&[('x', 5)]);
        let output = render(&report, &[]);
        assert!(
            output.lines().any(|line| line == "Entropy: 0.00000 bits/symbol"),
            "Entropy line missing or signed in:\n{}",
            output
        );
    }

    #[test]
    fn test_render_code_table_in_symbol_order() {
        let report = create_report(&[('c', 1), ('a', 5), ('d', 1), ('b', 3)]);
        let output = render(&report, &[]);
        let rows: Vec<&str> = output
            .lines()
            .filter(|line| line.starts_with(' ') && !line.contains("Symbol"))
            .collect();
        assert_eq!(rows.len(), 4);
        for (row, expected) in rows.iter().zip(["a", "b", "c", "d"]) {
            assert!(
                row.trim_start().starts_with(expected),
                "Row '{}' out of order",
                row
            );
        }
        assert!(rows[0].contains("0.50000"));
        assert!(rows[2].contains("100"));
        assert!(rows[2].trim_end().ends_with('3'));
    }

    #[test]
    fn test_render_summary_only_lists_requested_symbols() {
        let report = create_report(&[('a', 5), ('b', 3)]);
        let output = render(&report, &[Symbol::from('a')]);
        let summary = output.split(SUMMARY_TABLE_TITLE).nth(1).unwrap();
        assert!(summary.contains(" a "));
        assert!(!summary.contains(" b "));
    }
}
