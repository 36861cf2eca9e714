use crate::constants::{ADDRESS_MASK, MEMORY_SIZE, PROGRAM_START, SPRITE_SHEET, STACK_SIZE};
use crate::frame_buffer::FrameBuffer;

/// A snapshot of the Chip8 internal state
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is the carry/borrow/collision flag
/// - (i) a 16-bit memory address register
///
/// Counter
/// - (pc) a 16-bit program counter, only the low 12 bits are used for fetching
///
/// Pointer
/// - (sp) the number of return addresses on the stack (0..=16)
///
/// Timers
/// - 2 8-bit timers (delay & sound)
/// - While the sound timer is above 0 the machine beeps
///
/// ## Memory
/// - 16 entry stack of return addresses
/// - 4096 bytes of addressable memory
///     - 0x000..0x050 holds the sprite sheet
///     - programs are loaded at 0x200
/// - 64x32 frame buffer
///
/// ## Input
/// - 16 latches tracking the pressed status of keys 0..F
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct State {
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
    pub sp: u8,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub stack: [u16; STACK_SIZE],
    pub memory: [u8; MEMORY_SIZE],
    pub frame_buffer: FrameBuffer,
    pub draw_flag: bool,
    pub keys: [bool; 16],
}

impl State {
    pub fn new() -> Self {
        let mut memory = [0; MEMORY_SIZE];
        memory[0..SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);

        State {
            v: [0; 16],
            i: 0,
            pc: PROGRAM_START as u16,
            sp: 0,
            delay_timer: 0,
            sound_timer: 0,
            stack: [0; STACK_SIZE],
            memory,
            frame_buffer: FrameBuffer::new(),
            draw_flag: false,
            keys: [false; 16],
        }
    }

    /// Reads a byte of memory, wrapping the address to 12 bits
    pub fn read(&self, addr: u16) -> u8 {
        self.memory[address(addr)]
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

/// Index into memory for a (possibly out of range) address
pub fn address(addr: u16) -> usize {
    (addr & ADDRESS_MASK) as usize
}
