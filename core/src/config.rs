use log::warn;

use crate::constants::DEFAULT_INSTRUCTIONS_PER_FRAME;

/// Boot-time machine configuration; fixed for the lifetime of a `Chip8`.
///
/// * `instructions_per_frame` how many instructions `emulate_cycle` runs before ticking the timers
/// * `shift_quirk` whether 8XY6/8XYE shift Vx in place (true) or shift Vy into Vx (false)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    instructions_per_frame: u32,
    shift_quirk: bool,
}

impl Config {
    pub fn new(instructions_per_frame: u32, shift_quirk: bool) -> Self {
        let instructions_per_frame = if instructions_per_frame == 0 {
            warn!("instructions per frame must be positive; using 1");
            1
        } else {
            instructions_per_frame
        };

        Config {
            instructions_per_frame,
            shift_quirk,
        }
    }

    pub fn instructions_per_frame(&self) -> u32 {
        self.instructions_per_frame
    }

    pub fn shift_quirk(&self) -> bool {
        self.shift_quirk
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(DEFAULT_INSTRUCTIONS_PER_FRAME, false)
    }
}
