//! Fixed-length, wraparound memory tape

use crate::interpreter::errors::PnplError;

/// Cell storage for the machine.
///
/// Cells are bytes with wrapping arithmetic; indices wrap modulo the tape
/// length in both directions, so no access can fall outside the tape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    cells: Vec<u8>,
}

impl Tape {
    /// Create a zeroed tape of `size` cells
    pub fn new(size: usize) -> Result<Self, PnplError> {
        if size == 0 {
            return Err(PnplError::InvalidMemorySize { size });
        }
        Ok(Tape {
            cells: vec![0; size],
        })
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a tape has at least one cell
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Reduce any index into `[0, len)`
    pub fn wrap_index(&self, index: usize) -> usize {
        index % self.cells.len()
    }

    /// Index one cell to the right of `index`, wrapping at the end
    pub fn right_of(&self, index: usize) -> usize {
        (self.wrap_index(index) + 1) % self.cells.len()
    }

    /// Index one cell to the left of `index`, wrapping at 0
    pub fn left_of(&self, index: usize) -> usize {
        let index = self.wrap_index(index);
        if index == 0 {
            self.cells.len() - 1
        } else {
            index - 1
        }
    }

    pub fn get(&self, index: usize) -> u8 {
        self.cells[self.wrap_index(index)]
    }

    pub fn set(&mut self, index: usize, value: u8) {
        let index = self.wrap_index(index);
        self.cells[index] = value;
    }

    pub fn increment(&mut self, index: usize) {
        let index = self.wrap_index(index);
        self.cells[index] = self.cells[index].wrapping_add(1);
    }

    pub fn decrement(&mut self, index: usize) {
        let index = self.wrap_index(index);
        self.cells[index] = self.cells[index].wrapping_sub(1);
    }

    /// Change the length, keeping the leading cells and zero-filling new ones
    pub fn resize(&mut self, size: usize) -> Result<(), PnplError> {
        if size == 0 {
            return Err(PnplError::InvalidMemorySize { size });
        }
        self.cells.resize(size, 0);
        Ok(())
    }

    /// Zero every cell
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Space-separated cell values, as printed by the session's `dump`
    pub fn dump(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
