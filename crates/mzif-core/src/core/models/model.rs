use super::block::SparseBlock;
use super::builder::BLOCKS_PER_MODEL;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One scored observation of a structure: its energy, its RMSD score and
/// [`BLOCKS_PER_MODEL`] square blocks of equal side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub energy: f64,
    pub rmsd: f64,
    pub blocks: [SparseBlock; BLOCKS_PER_MODEL],
}

impl Model {
    pub fn new(energy: f64, rmsd: f64, blocks: [SparseBlock; BLOCKS_PER_MODEL]) -> Self {
        Self {
            energy,
            rmsd,
            blocks,
        }
    }

    /// Side length of the first block.
    pub fn side(&self) -> usize {
        self.blocks[0].side()
    }

    /// True when every block is internally consistent and all share one side.
    pub fn has_uniform_blocks(&self) -> bool {
        let side = self.side();
        self.blocks
            .iter()
            .all(|b| b.side() == side && b.is_well_formed())
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{energy: {}, rmsd: {}, blocks: [", self.energy, self.rmsd)?;
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{0}x{0} nnz={1}", block.side(), block.nnz())?;
            if !block.is_well_formed() {
                f.write_str(" (corrupt)")?;
            }
        }
        f.write_str("]}")
    }
}
