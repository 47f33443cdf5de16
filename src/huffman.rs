pub mod code;
pub mod tree;

pub use code::{CodeTable, Codeword};
pub use tree::HuffmanTree;

use crate::frequency::FrequencyTable;
use crate::Result;

/// Builds the tree for `frequencies` and extracts one codeword per symbol.
/// The tree itself is dropped afterwards.
pub fn generate_code(frequencies: &FrequencyTable) -> Result<CodeTable> {
    let tree = HuffmanTree::new(frequencies)?;
    CodeTable::try_from(&tree)
}
