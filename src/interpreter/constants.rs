// Constants for the PNPL interpreter

/// Tape length used when none is configured
pub const DEFAULT_MEMORY_SIZE: usize = 1024;

/// Numeric code of the lowest instruction (MoveRight)
pub const MIN_OPCODE: u32 = 1;

/// Numeric code of the highest instruction (Output)
pub const MAX_OPCODE: u32 = 8;
