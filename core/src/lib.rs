pub use chip8::Chip8;
pub use config::Config;
pub use disasm::{disassemble, Disassembly};
pub use error::Chip8Error;
pub use random::{RandomSource, SeededRandom, ThreadRandom};

mod chip8;
mod config;
pub mod constants;
mod disasm;
mod error;
pub mod frame_buffer;
mod instruction;
mod opcode;
mod operations;
mod random;
pub mod state;
