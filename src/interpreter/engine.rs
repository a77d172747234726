// Execution engine for the PNPL machine

use crate::codec::{Instruction, Program};
use crate::interpreter::errors::{LoopFault, PnplError};
use crate::memory::Tape;
use num_bigint::BigUint;
use rustc_hash::FxHashMap;
use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, trace, warn};

/// Result of a single [`Interpreter::step`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The instruction was executed; more may follow
    Executed(Instruction),
    /// The program counter is past the last instruction
    Finished,
}

/// The tape machine that runs decoded programs
#[derive(Debug, Clone)]
pub struct Interpreter {
    /// Memory cells
    tape: Tape,

    /// Index of the current cell, always in `[0, tape.len())`
    pointer: usize,

    /// Instructions of the loaded program
    program: Program,

    /// Index of the next instruction to execute
    program_counter: usize,

    /// Positions of the LoopStarts whose bodies are currently running
    pub(crate) loop_stack: Vec<usize>,

    /// LoopStart position -> matching LoopEnd position, filled in as forward
    /// scans resolve them. Cleared whenever a program is loaded.
    pub(crate) loop_matches: FxHashMap<usize, usize>,

    /// Instructions executed since the last load
    steps_executed: u64,
}

impl Interpreter {
    /// Create a machine running the program encoded by `program`
    pub fn new(program: &BigUint, memory_size: usize) -> Result<Self, PnplError> {
        Self::from_program(Program::from_integer(program)?, memory_size)
    }

    /// Create a machine from an already decoded program
    pub fn from_program(program: Program, memory_size: usize) -> Result<Self, PnplError> {
        let mut interpreter = Interpreter {
            tape: Tape::new(memory_size)?,
            pointer: 0,
            program: Program::default(),
            program_counter: 0,
            loop_stack: Vec::new(),
            loop_matches: FxHashMap::default(),
            steps_executed: 0,
        };
        interpreter.load_program(program);
        Ok(interpreter)
    }

    /// Create a machine from a file holding the program's decimal digits
    pub fn from_file(path: impl AsRef<Path>, memory_size: usize) -> Result<Self, PnplError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| PnplError::Io {
            message: format!("{}: {}", path.display(), e),
        })?;
        Self::from_program(Program::from_digits(&text)?, memory_size)
    }

    /// Replace the program. The tape and pointer are kept.
    ///
    /// On a malformed integer the previous program stays loaded.
    pub fn load(&mut self, program: &BigUint) -> Result<(), PnplError> {
        let program = Program::from_integer(program)?;
        self.load_program(program);
        Ok(())
    }

    /// Replace the program with an already decoded one. The tape and pointer are kept.
    pub fn load_program(&mut self, program: Program) {
        debug!(instructions = program.len(), "loading program");
        self.program = program;
        self.restart();
    }

    /// Rewind to the first instruction of the loaded program without touching memory
    pub fn restart(&mut self) {
        self.program_counter = 0;
        self.loop_stack.clear();
        self.loop_matches.clear();
        self.steps_executed = 0;
    }

    /// Drop the program and replace the tape with a zeroed one of `memory_size` cells
    pub fn reset(&mut self, memory_size: usize) -> Result<(), PnplError> {
        let tape = Tape::new(memory_size)?;
        debug!(memory_size, "resetting machine");
        self.tape = tape;
        self.pointer = 0;
        self.program = Program::default();
        self.restart();
        Ok(())
    }

    /// Change the tape length, keeping existing cell values where they fit
    pub fn resize_memory(&mut self, memory_size: usize) -> Result<(), PnplError> {
        self.tape.resize(memory_size)?;
        self.pointer = self.tape.wrap_index(self.pointer);
        debug!(memory_size, pointer = self.pointer, "resized tape");
        Ok(())
    }

    /// Run to the end of the program. Input instructions have no effect.
    pub fn run(&mut self, output: &mut dyn Write) -> Result<(), PnplError> {
        self.run_inner(output, None)
    }

    /// Run to the end of the program, reading one byte per Input instruction.
    ///
    /// At end of input the current cell is left unchanged.
    pub fn run_with_input(
        &mut self,
        output: &mut dyn Write,
        input: &mut dyn Read,
    ) -> Result<(), PnplError> {
        self.run_inner(output, Some(input))
    }

    fn run_inner(
        &mut self,
        output: &mut dyn Write,
        mut input: Option<&mut dyn Read>,
    ) -> Result<(), PnplError> {
        loop {
            match self.step(output, input.as_deref_mut()) {
                Ok(StepOutcome::Executed(_)) => {}
                Ok(StepOutcome::Finished) => break,
                Err(e) => {
                    if matches!(e, PnplError::UnbalancedLoop { .. }) {
                        warn!(error = %e, "run aborted");
                    }
                    return Err(e);
                }
            }
        }
        output.flush()?;
        Ok(())
    }

    /// Execute the instruction at the program counter
    pub fn step(
        &mut self,
        output: &mut dyn Write,
        input: Option<&mut (dyn Read + '_)>,
    ) -> Result<StepOutcome, PnplError> {
        let Some(instruction) = self.program.get(self.program_counter) else {
            if !self.loop_stack.is_empty() {
                return Err(PnplError::UnbalancedLoop {
                    position: self.program_counter,
                    fault: LoopFault::OpenAtExit {
                        depth: self.loop_stack.len(),
                    },
                });
            }
            return Ok(StepOutcome::Finished);
        };

        trace!(
            pc = self.program_counter,
            pointer = self.pointer,
            cell = self.tape.get(self.pointer),
            %instruction,
            "step"
        );

        match instruction {
            Instruction::MoveRight => self.pointer = self.tape.right_of(self.pointer),
            Instruction::MoveLeft => self.pointer = self.tape.left_of(self.pointer),
            Instruction::Increment => self.tape.increment(self.pointer),
            Instruction::Decrement => self.tape.decrement(self.pointer),
            Instruction::LoopStart => self.execute_loop_start()?,
            Instruction::LoopEnd => self.execute_loop_end()?,
            Instruction::Input => {
                if let Some(reader) = input {
                    let mut byte = [0u8; 1];
                    if reader.read(&mut byte)? == 1 {
                        self.tape.set(self.pointer, byte[0]);
                    }
                }
            }
            Instruction::Output => {
                let c = char::from(self.tape.get(self.pointer));
                write!(output, "{}", c)?;
            }
        }

        self.program_counter += 1;
        self.steps_executed += 1;
        Ok(StepOutcome::Executed(instruction))
    }

    pub(crate) fn current_cell(&self) -> u8 {
        self.tape.get(self.pointer)
    }

    pub(crate) fn jump_to(&mut self, position: usize) {
        self.program_counter = position;
    }

    // Accessor methods for UI and tests

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    pub fn pointer(&self) -> usize {
        self.pointer
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn program_counter(&self) -> usize {
        self.program_counter
    }

    /// Number of loops currently open
    pub fn loop_depth(&self) -> usize {
        self.loop_stack.len()
    }

    pub fn steps_executed(&self) -> u64 {
        self.steps_executed
    }

    pub fn memory_size(&self) -> usize {
        self.tape.len()
    }

    pub fn is_finished(&self) -> bool {
        self.program_counter >= self.program.len()
    }
}
