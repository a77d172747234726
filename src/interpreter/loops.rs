//! Loop instruction execution (LoopStart, LoopEnd).
//!
//! Adds `impl Interpreter` methods for the two bracket instructions. Entering a
//! loop pushes the LoopStart position on the loop stack; a LoopEnd with a
//! nonzero cell jumps back to the top of the stack without popping, and one with
//! a zero cell pops it.
//!
//! Skipping a loop scans forward counting nesting depth until the matching
//! LoopEnd. Each resolved match is cached in `loop_matches`, so a loop that is
//! skipped repeatedly is only scanned once per loaded program.

use crate::codec::Instruction;
use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::{LoopFault, PnplError};

impl Interpreter {
    /// Executes a LoopStart at the program counter.
    ///
    /// With a zero cell the program counter is left on the matching LoopEnd, so
    /// the step's regular advance moves past it.
    pub(crate) fn execute_loop_start(&mut self) -> Result<(), PnplError> {
        let start = self.program_counter();
        if self.current_cell() == 0 {
            let end = self.matching_loop_end(start)?;
            self.jump_to(end);
        } else {
            self.loop_stack.push(start);
        }
        Ok(())
    }

    /// Executes a LoopEnd at the program counter.
    ///
    /// With a nonzero cell the program counter is set to the innermost open
    /// LoopStart, so the step's regular advance re-enters the body.
    pub(crate) fn execute_loop_end(&mut self) -> Result<(), PnplError> {
        let position = self.program_counter();
        let unmatched = move || PnplError::UnbalancedLoop {
            position,
            fault: LoopFault::UnmatchedEnd,
        };

        if self.current_cell() != 0 {
            let start = *self.loop_stack.last().ok_or_else(unmatched)?;
            self.jump_to(start);
        } else {
            self.loop_stack.pop().ok_or_else(unmatched)?;
        }
        Ok(())
    }

    /// Position of the LoopEnd matching the LoopStart at `start`
    pub(crate) fn matching_loop_end(&mut self, start: usize) -> Result<usize, PnplError> {
        if let Some(&end) = self.loop_matches.get(&start) {
            return Ok(end);
        }

        let mut depth = 1usize;
        let mut position = start;
        while depth > 0 {
            position += 1;
            match self.program().get(position) {
                Some(Instruction::LoopStart) => depth += 1,
                Some(Instruction::LoopEnd) => depth -= 1,
                Some(_) => {}
                None => {
                    return Err(PnplError::UnbalancedLoop {
                        position: start,
                        fault: LoopFault::UnterminatedStart,
                    })
                }
            }
        }

        self.loop_matches.insert(start, position);
        Ok(position)
    }
}
