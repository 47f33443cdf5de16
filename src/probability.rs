use std::collections::BTreeMap;

use crate::error::Error;
use crate::frequency::FrequencyTable;
use crate::symbol::Symbol;
use crate::Result;

/// Relative frequency per symbol, summing up to one.
#[derive(Clone, Debug, PartialEq)]
pub struct ProbabilityTable {
    probabilities: BTreeMap<Symbol, f64>,
}

impl ProbabilityTable {
    pub fn get(&self, symbol: &Symbol) -> Option<f64> {
        self.probabilities.get(symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, f64)> + '_ {
        self.probabilities
            .iter()
            .map(|(&symbol, &probability)| (symbol, probability))
    }
}

pub fn total_count(table: &FrequencyTable) -> usize {
    table.iter().map(|(_, count)| count).sum()
}

pub fn probabilities(table: &FrequencyTable, total: usize) -> Result<ProbabilityTable> {
    if total == 0 {
        return Err(Error::DivisionByZero("symbol probabilities"));
    }
    let total = total as f64;
    let probabilities = table
        .iter()
        .map(|(symbol, count)| (symbol, count as f64 / total))
        .collect();
    Ok(ProbabilityTable { probabilities })
}

/// Shannon entropy in bits per symbol.
pub fn entropy(table: &ProbabilityTable) -> f64 {
    table
        .iter()
        .map(|(_, p)| p)
        .filter(|&p| p > 0.0)
        .map(|p| p * (1.0 / p).log2())
        .fold(0.0, |entropy, information| entropy + information)
}
