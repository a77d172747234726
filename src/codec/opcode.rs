//! The PNPL instruction set

use crate::interpreter::constants::{MAX_OPCODE, MIN_OPCODE};
use std::fmt;

/// One decoded instruction.
///
/// The discriminant is the exponent that selects it in a program integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// `>` move the pointer one cell right
    MoveRight = 1,
    /// `<` move the pointer one cell left
    MoveLeft = 2,
    /// `+` increment the current cell
    Increment = 3,
    /// `-` decrement the current cell
    Decrement = 4,
    /// `[` skip past the matching LoopEnd if the current cell is 0
    LoopStart = 5,
    /// `]` jump back to the matching LoopStart if the current cell is not 0
    LoopEnd = 6,
    /// `,` read a character into the current cell
    Input = 7,
    /// `.` write the current cell as a character
    Output = 8,
}

impl Instruction {
    pub const ALL: [Instruction; 8] = [
        Instruction::MoveRight,
        Instruction::MoveLeft,
        Instruction::Increment,
        Instruction::Decrement,
        Instruction::LoopStart,
        Instruction::LoopEnd,
        Instruction::Input,
        Instruction::Output,
    ];

    /// Instruction selected by a prime's exponent; `None` outside 1..=8
    pub fn from_exponent(exponent: u32) -> Option<Self> {
        if (MIN_OPCODE..=MAX_OPCODE).contains(&exponent) {
            Some(Self::ALL[(exponent - MIN_OPCODE) as usize])
        } else {
            None
        }
    }

    pub fn exponent(self) -> u32 {
        self as u32
    }

    /// Instruction written as `c` in the bracket language, if any
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '>' => Some(Instruction::MoveRight),
            '<' => Some(Instruction::MoveLeft),
            '+' => Some(Instruction::Increment),
            '-' => Some(Instruction::Decrement),
            '[' => Some(Instruction::LoopStart),
            ']' => Some(Instruction::LoopEnd),
            ',' => Some(Instruction::Input),
            '.' => Some(Instruction::Output),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Instruction::MoveRight => '>',
            Instruction::MoveLeft => '<',
            Instruction::Increment => '+',
            Instruction::Decrement => '-',
            Instruction::LoopStart => '[',
            Instruction::LoopEnd => ']',
            Instruction::Input => ',',
            Instruction::Output => '.',
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exponent_table() {
        assert_eq!(Instruction::from_exponent(1), Some(Instruction::MoveRight));
        assert_eq!(Instruction::from_exponent(2), Some(Instruction::MoveLeft));
        assert_eq!(Instruction::from_exponent(3), Some(Instruction::Increment));
        assert_eq!(Instruction::from_exponent(4), Some(Instruction::Decrement));
        assert_eq!(Instruction::from_exponent(5), Some(Instruction::LoopStart));
        assert_eq!(Instruction::from_exponent(6), Some(Instruction::LoopEnd));
        assert_eq!(Instruction::from_exponent(7), Some(Instruction::Input));
        assert_eq!(Instruction::from_exponent(8), Some(Instruction::Output));
    }

    #[test]
    fn test_unmapped_exponents() {
        assert_eq!(Instruction::from_exponent(0), None);
        assert_eq!(Instruction::from_exponent(9), None);
        assert_eq!(Instruction::from_exponent(u32::MAX), None);
    }

    #[test]
    fn test_symbols_agree_with_exponents() {
        for instruction in Instruction::ALL {
            assert_eq!(Instruction::from_symbol(instruction.symbol()), Some(instruction));
            assert_eq!(
                Instruction::from_exponent(instruction.exponent()),
                Some(instruction)
            );
        }
        assert_eq!(Instruction::from_symbol('a'), None);
        assert_eq!(Instruction::from_symbol(' '), None);
    }
}
