use crate::constants::STACK_SIZE;

/// Failures the machine reports to its host.
///
/// None of these are fatal to the process; the host decides whether to end the session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Chip8Error {
    #[error("ROM is too large ({size} bytes), max size is {max_size} bytes")]
    RomTooLarge { size: usize, max_size: usize },

    #[error("stack overflow: call at {pc:#05X} exceeds {} nested subroutines", STACK_SIZE)]
    StackOverflow { pc: u16 },

    #[error("stack underflow: return at {pc:#05X} with an empty call stack")]
    StackUnderflow { pc: u16 },
}
