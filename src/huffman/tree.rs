use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd, Reverse};
use std::collections::BinaryHeap;

use crate::error::Error;
use crate::frequency::FrequencyTable;
use crate::symbol::Symbol;
use crate::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum NodeKind {
    Leaf { symbol: Symbol },
    Inner { left: usize, right: usize },
}

#[derive(Clone, Copy, Debug)]
pub(super) struct Node {
    pub(super) weight: usize,
    pub(super) index: usize,
    pub(super) kind: NodeKind,
}

/// Binary prefix tree stored as an arena. Children always have a lower index
/// than their parent, the root is the last node.
pub struct HuffmanTree {
    pub(super) nodes: Vec<Node>,
    pub(super) root_index: usize,
    pub(super) leaf_count: usize,
}

// Ties on weight are broken by arena index: leaves are created in symbol
// order, merged nodes in creation order.
impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then(self.index.cmp(&other.index))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.index == other.index
    }
}

impl Eq for Node {}

impl HuffmanTree {
    pub fn new(frequencies: &FrequencyTable) -> Result<HuffmanTree> {
        let mut nodes: Vec<Node> = Vec::with_capacity(2 * frequencies.len());
        let mut heap = BinaryHeap::with_capacity(frequencies.len());

        for (symbol, weight) in frequencies.iter() {
            let node = Node {
                weight,
                index: nodes.len(),
                kind: NodeKind::Leaf { symbol },
            };
            heap.push(Reverse(node));
            nodes.push(node);
        }
        let leaf_count = nodes.len();

        while heap.len() > 1 {
            let (Some(Reverse(low)), Some(Reverse(high))) = (heap.pop(), heap.pop()) else {
                return Err(Error::MalformedTree(
                    "priority queue ran empty while merging".to_owned(),
                ));
            };
            let node = Node {
                weight: low.weight + high.weight,
                index: nodes.len(),
                kind: NodeKind::Inner {
                    left: low.index,
                    right: high.index,
                },
            };
            log::trace!(
                "Merging node {} (weight {}) and node {} (weight {}) into node {}",
                low.index,
                low.weight,
                high.index,
                high.weight,
                node.index
            );
            heap.push(Reverse(node));
            nodes.push(node);
        }

        let root_index = heap
            .pop()
            .map(|Reverse(root)| root.index)
            .ok_or_else(|| Error::MalformedTree("no node left to become the root".to_owned()))?;
        log::debug!("Built tree of {} nodes over {} symbols", nodes.len(), leaf_count);

        Ok(HuffmanTree {
            nodes,
            root_index,
            leaf_count,
        })
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    pub fn is_single_leaf(&self) -> bool {
        matches!(self.nodes[self.root_index].kind, NodeKind::Leaf { .. })
    }
}
