use std::collections::BTreeMap;
use std::fmt;

use super::tree::{HuffmanTree, NodeKind};
use crate::error::Error;
use crate::symbol::Symbol;
use crate::Result;

/// Non-empty string of code bits, most significant (closest to the root) first.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Codeword {
    bits: String,
}

impl Codeword {
    fn root() -> Self {
        Self {
            bits: String::new(),
        }
    }

    fn descend(&self, bit: char) -> Self {
        let mut bits = String::with_capacity(self.bits.len() + 1);
        bits.push_str(&self.bits);
        bits.push(bit);
        Self { bits }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.bits
    }

    pub fn is_prefix_of(&self, other: &Codeword) -> bool {
        other.bits.starts_with(&self.bits)
    }
}

impl fmt::Display for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.bits)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeTable {
    codewords: BTreeMap<Symbol, Codeword>,
}

impl CodeTable {
    pub fn get(&self, symbol: &Symbol) -> Option<&Codeword> {
        self.codewords.get(symbol)
    }

    pub fn len(&self) -> usize {
        self.codewords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codewords.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &Codeword)> + '_ {
        self.codewords.iter().map(|(&symbol, codeword)| (symbol, codeword))
    }

    pub fn is_prefix_free(&self) -> bool {
        self.codewords.iter().all(|(a, first)| {
            self.codewords
                .iter()
                .all(|(b, second)| a == b || !first.is_prefix_of(second))
        })
    }
}

impl TryFrom<&HuffmanTree> for CodeTable {
    type Error = Error;

    /// Walks the tree depth first, appending `0` for every left and `1` for
    /// every right descent. A tree made of a single leaf yields the code `0`.
    fn try_from(tree: &HuffmanTree) -> Result<Self> {
        if tree.is_single_leaf() {
            return Self::single_symbol_code(tree);
        }

        let mut codewords = BTreeMap::new();
        let mut visited = vec![false; tree.nodes.len()];
        let mut node_index_stack = vec![(tree.root_index, Codeword::root())];
        while let Some((index, codeword)) = node_index_stack.pop() {
            let node = tree.nodes.get(index).ok_or_else(|| {
                Error::MalformedTree(format!("child index {} outside of tree", index))
            })?;
            if std::mem::replace(&mut visited[index], true) {
                return Err(Error::MalformedTree(format!(
                    "node {} is reachable more than once",
                    index
                )));
            }
            match node.kind {
                NodeKind::Inner { left, right } => {
                    node_index_stack.push((right, codeword.descend('1')));
                    node_index_stack.push((left, codeword.descend('0')));
                }
                NodeKind::Leaf { symbol } => {
                    if codeword.is_empty() {
                        return Err(Error::MalformedTree(format!(
                            "symbol {} received an empty codeword",
                            symbol
                        )));
                    }
                    codewords.insert(symbol, codeword);
                }
            }
        }

        if codewords.len() != tree.leaf_count() {
            return Err(Error::MalformedTree(format!(
                "{} codewords extracted for {} symbols",
                codewords.len(),
                tree.leaf_count()
            )));
        }
        Ok(Self { codewords })
    }
}

impl CodeTable {
    fn single_symbol_code(tree: &HuffmanTree) -> Result<Self> {
        match tree.nodes[tree.root_index].kind {
            NodeKind::Leaf { symbol } => Ok(Self {
                codewords: BTreeMap::from([(symbol, Codeword::root().descend('0'))]),
            }),
            NodeKind::Inner { .. } => Err(Error::MalformedTree(
                "single symbol tree has an inner root".to_owned(),
            )),
        }
    }
}
