use std::io;

use huffman_text_stats::{FrequencyTable, Report, ReportRenderer, Result, Symbol};

fn main() -> Result<()> {
    // symbol-frequency pairs
    let syms_and_freqs = [('a', 5), ('b', 3), ('c', 1), ('d', 1), (' ', 4)];

    let frequencies =
        FrequencyTable::from_counts(syms_and_freqs.map(|(c, f)| (Symbol::from(c), f)))?;
    let report = Report::analyze(frequencies, 8)?;
    println!("prefix free: {}", report.code.is_prefix_free());

    let summary_symbols = [Symbol::from('a'), Symbol::Space];
    let mut stdout = io::stdout().lock();
    ReportRenderer::new(&mut stdout, &summary_symbols).render(&report)
}
