use std::collections::{btree_map, BTreeMap};
use std::sync::mpsc;

use threadpool::ThreadPool;

use crate::error::Error;
use crate::symbol::Symbol;
use crate::Result;

// Below this many characters per job the dispatch overhead dominates.
const MIN_CHARACTERS_PER_JOB: usize = 4096;

#[derive(Default)]
struct SymbolCounter {
    counts: BTreeMap<Symbol, usize>,
}

impl SymbolCounter {
    fn increment_character(&mut self, character: char) {
        if let Some(symbol) = Symbol::classify(character) {
            *self.counts.entry(symbol).or_default() += 1;
        }
    }

    fn merge(&mut self, other: SymbolCounter) {
        for (symbol, count) in other.counts {
            *self.counts.entry(symbol).or_default() += count;
        }
    }
}

impl FromIterator<char> for SymbolCounter {
    fn from_iter<T: IntoIterator<Item = char>>(characters: T) -> Self {
        let mut counter = SymbolCounter::default();
        characters
            .into_iter()
            .for_each(|c| counter.increment_character(c));
        counter
    }
}

/// Occurrence count per symbol. Every stored count is at least one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<Symbol, usize>,
}

impl FrequencyTable {
    pub fn count<I: IntoIterator<Item = char>>(characters: I) -> Result<Self> {
        Self::from_counter(SymbolCounter::from_iter(characters))
    }

    /// Counts `text` on `threadpool`, splitting it into at most `jobs` chunks.
    /// Partial counts are merged by addition, so the result equals [`Self::count`].
    pub fn count_parallel(text: &str, threadpool: &ThreadPool, jobs: usize) -> Result<Self> {
        let characters: Vec<char> = text.chars().collect();
        let jobs = jobs.min(characters.len() / MIN_CHARACTERS_PER_JOB);
        if jobs <= 1 {
            return Self::count(characters);
        }
        let chunk_size = characters.len().div_ceil(jobs);
        log::debug!(
            "Counting {} characters in {} chunks of {}",
            characters.len(),
            jobs,
            chunk_size
        );

        let (sender, receiver) = mpsc::channel();
        let mut dispatched = 0;
        for chunk in characters.chunks(chunk_size) {
            let chunk = chunk.to_vec();
            let sender = sender.clone();
            threadpool.execute(move || {
                let _ = sender.send(SymbolCounter::from_iter(chunk));
            });
            dispatched += 1;
        }
        drop(sender);

        let mut total = SymbolCounter::default();
        for _ in 0..dispatched {
            let partial = receiver.recv().map_err(|_| Error::CountingWorkerFailed)?;
            total.merge(partial);
        }
        Self::from_counter(total)
    }

    /// Builds a table from literal pairs. Zero counts and newlines are dropped,
    /// repeated symbols are added up.
    pub fn from_counts<I: IntoIterator<Item = (Symbol, usize)>>(pairs: I) -> Result<Self> {
        let mut counter = SymbolCounter::default();
        let countable_pairs = pairs
            .into_iter()
            .filter(|(symbol, count)| *count > 0 && symbol.is_countable());
        for (symbol, count) in countable_pairs {
            *counter.counts.entry(symbol).or_default() += count;
        }
        Self::from_counter(counter)
    }

    fn from_counter(counter: SymbolCounter) -> Result<Self> {
        if counter.counts.is_empty() {
            return Err(Error::EmptyInput);
        }
        Ok(Self {
            counts: counter.counts,
        })
    }

    pub fn get(&self, symbol: &Symbol) -> Option<usize> {
        self.counts.get(symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, usize)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }

    pub fn symbols(&self) -> btree_map::Keys<'_, Symbol, usize> {
        self.counts.keys()
    }

    /// Presentation order: most frequent first, ties by symbol.
    pub fn sorted_by_descending_frequency(&self) -> Vec<(Symbol, usize)> {
        let mut entries: Vec<(Symbol, usize)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        entries
    }
}
