use std::collections::VecDeque;

use log::{debug, trace, warn};

use crate::config::Config;
use crate::constants::{MAX_PROGRAM_SIZE, MAX_SAVED_STATES, PROGRAM_START};
use crate::disasm::Disassembly;
use crate::error::Chip8Error;
use crate::instruction;
use crate::operations::Context;
use crate::random::{RandomSource, ThreadRandom};
use crate::state::State;

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - current `state`
///  - `previous_states` for rewinding, one per emulated frame
///  - the boot-time `config` and the `random` source used by CXNN
///
/// Supplies interfaces for:
/// - loading roms
/// - pressing and releasing keys
/// - emulating a frame: `instructions_per_frame` instructions then one timer tick
/// - rewinding a frame
/// - inspecting its frame buffer and sound timer for some host to present
pub struct Chip8 {
    state: State,
    config: Config,
    random: Box<dyn RandomSource>,
    previous_states: VecDeque<State>,
}

impl Chip8 {
    pub fn new(instructions_per_frame: u32, shift_quirk: bool) -> Self {
        Self::with_config(
            Config::new(instructions_per_frame, shift_quirk),
            Box::new(ThreadRandom),
        )
    }

    pub fn with_config(config: Config, random: Box<dyn RandomSource>) -> Self {
        Chip8 {
            state: State::new(),
            config,
            random,
            previous_states: VecDeque::with_capacity(MAX_SAVED_STATES),
        }
    }

    /// Load a rom into memory at 0x200
    ///
    /// # Arguments
    /// * `program` raw CHIP-8 machine code, loaded verbatim
    ///
    /// Memory is left untouched if the program doesn't fit.
    pub fn load_program(&mut self, program: &[u8]) -> Result<(), Chip8Error> {
        if program.len() > MAX_PROGRAM_SIZE {
            return Err(Chip8Error::RomTooLarge {
                size: program.len(),
                max_size: MAX_PROGRAM_SIZE,
            });
        }
        self.state.memory[PROGRAM_START..PROGRAM_START + program.len()].copy_from_slice(program);
        debug!(
            "loaded {} byte program at {:#05X}",
            program.len(),
            PROGRAM_START
        );
        Ok(())
    }

    /// Set the pressed status of key
    ///
    /// # Arguments
    /// * `key` the index of the key on the hex keypad (0x0..=0xF)
    /// * `pressed` whether the key is down
    pub fn set_key(&mut self, key: u8, pressed: bool) {
        match self.state.keys.get_mut(key as usize) {
            Some(latch) => *latch = pressed,
            None => warn!("ignoring key {:#04X}; the keypad has 16 keys", key),
        }
    }

    /// Emulates one frame
    /// - executes `instructions_per_frame` instructions
    /// - then ticks the delay and sound timers once
    ///
    /// If an instruction fails the machine is left as it was before that instruction was
    /// fetched, the rest of the frame (timers included) is skipped and the error is returned.
    pub fn emulate_cycle(&mut self) -> Result<(), Chip8Error> {
        let before = self.state;
        for _ in 0..self.config.instructions_per_frame() {
            self.advance_cpu()?;
        }
        self.advance_timers();
        self.save_state(before);
        Ok(())
    }

    /// The frame buffer as 2048 bytes, row-major, each either 0x00 or 0xFF
    pub fn frame_buffer(&self) -> &[u8] {
        self.state.frame_buffer.as_bytes()
    }

    /// Returns whether the display should be redrawn and unsets the draw flag
    pub fn take_redraw_flag(&mut self) -> bool {
        std::mem::replace(&mut self.state.draw_flag, false)
    }

    pub fn sound_active(&self) -> bool {
        self.state.sound_timer > 0
    }

    /// Reverses the machine by a single frame if possible
    /// - if there are previous_states, pops the last one and restores it
    /// - returns whether anything was restored
    pub fn rewind(&mut self) -> bool {
        match self.previous_states.pop_front() {
            Some(state) => {
                self.state = State {
                    draw_flag: true,
                    ..state
                };
                true
            }
            None => false,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetches, decodes and executes a single instruction
    fn advance_cpu(&mut self) -> Result<(), Chip8Error> {
        let op = self.get_op();
        trace!(
            "{:03X}: {:04X} {:<16} v{:02X?} i{:04X} sp{}",
            self.state.pc,
            op,
            Disassembly(op).to_string(),
            self.state.v,
            self.state.i,
            self.state.sp
        );

        let fetched = State {
            pc: self.state.pc.wrapping_add(0x2),
            ..self.state
        };
        let mut ctx = Context {
            config: &self.config,
            random: &mut *self.random,
        };
        self.state = instruction::from_op(&op)(&op, &fetched, &mut ctx)?;
        Ok(())
    }

    /// Ticks both timers down by one, stopping at 0
    fn advance_timers(&mut self) {
        self.state.delay_timer = self.state.delay_timer.saturating_sub(1);
        self.state.sound_timer = self.state.sound_timer.saturating_sub(1);
    }

    /// Gets the opcode currently pointed at by the pc.
    /// Memory is stored as bytes, but opcodes are 16 bits so we combine two subsequent bytes.
    fn get_op(&self) -> u16 {
        let pc = self.state.pc;
        u16::from_be_bytes([self.state.read(pc), self.state.read(pc.wrapping_add(1))])
    }

    /// Puts a state in previous_states
    /// - if there are already MAX_SAVED_STATES saved then the oldest is dropped
    fn save_state(&mut self, state: State) {
        if self.previous_states.len() == MAX_SAVED_STATES {
            self.previous_states.pop_back();
        }
        self.previous_states.push_front(state);
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::with_config(Config::default(), Box::new(ThreadRandom))
    }
}
