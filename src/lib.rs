use std::io::Write;
use std::path::PathBuf;

use threadpool::ThreadPool;

pub use cli::CLIParser;
pub use error::Error;
pub use frequency::FrequencyTable;
pub use huffman::{CodeTable, Codeword, HuffmanTree};
pub use probability::ProbabilityTable;
pub use report::{Report, ReportRenderer};
pub use symbol::Symbol;

mod cli;
mod error;
pub mod frequency;
pub mod huffman;
mod logger;
pub mod metrics;
pub mod probability;
pub mod reader;
pub mod report;
pub mod symbol;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    input_file: PathBuf,
    bits_per_symbol: usize,
    number_of_threads: usize,
    summary_symbols: Vec<Symbol>,
}

/// Reads the document named in `arguments` and derives its Huffman code and
/// statistics.
pub fn analyze_text_file(arguments: &Arguments) -> Result<Report> {
    let text = reader::read_document(&arguments.input_file)?;
    let threadpool = ThreadPool::new(arguments.number_of_threads.max(1));
    let frequencies =
        FrequencyTable::count_parallel(&text, &threadpool, arguments.number_of_threads)?;
    log::info!("Counted {} distinct symbols", frequencies.len());
    Report::analyze(frequencies, arguments.bits_per_symbol)
}

pub fn render_report<T: Write>(
    arguments: &Arguments,
    report: &Report,
    writer: &mut T,
) -> Result<()> {
    ReportRenderer::new(writer, &arguments.summary_symbols).render(report)
}
