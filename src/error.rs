use std::fmt::Display;

use crate::symbol::Symbol;

#[derive(Debug)]
pub enum Error {
    EmptyInput,
    DivisionByZero(&'static str),
    MalformedTree(String),
    SymbolNotPresentInTable(Symbol, &'static str),
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToReadInputFile(String, std::io::Error),
    UnableToWriteReport(std::io::Error),
    CountingWorkerFailed,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => {
                write!(f, "Input does not contain a single countable symbol")
            }
            Self::DivisionByZero(quantity) => {
                write!(f, "Unable to compute {}: divisor is zero", quantity)
            }
            Self::MalformedTree(reason) => {
                write!(f, "Huffman tree is malformed: {}", reason)
            }
            Self::SymbolNotPresentInTable(symbol, table) => {
                write!(f, "Symbol '{}' not present in {} table", symbol, table)
            }
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToReadInputFile(path, error) => {
                write!(f, "Unable to read input file '{}': {}", path, error)
            }
            Self::UnableToWriteReport(error) => {
                write!(f, "Unable to write report: {}", error)
            }
            Self::CountingWorkerFailed => {
                write!(f, "A frequency counting worker terminated without result")
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::UnableToWriteReport(value)
    }
}
