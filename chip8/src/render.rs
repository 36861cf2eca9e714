use chip8vm_core::constants::{PIXEL_OFF, PROGRAM_START};
use chip8vm_core::frame_buffer::FrameBuffer;
use chip8vm_core::Disassembly;

const LIT: char = '█';
const DARK: char = ' ';

/// Formats a Chip-8 FrameBuffer as text.
///
/// Every row of the display becomes one line with lit pixels drawn as a full block.
///
/// # Arguments
/// * `frame` a Chip-8 FrameBuffer
pub fn frame_to_text(frame: &FrameBuffer) -> String {
    frame
        .rows()
        .flat_map(|row| {
            row.iter()
                .map(|&pixel| if pixel == PIXEL_OFF { DARK } else { LIT })
                .chain(std::iter::once('\n'))
        })
        .collect()
}

/// Lists a rom one instruction per line, addressed as it would be once loaded.
/// A trailing odd byte is shown as data.
pub fn disassembly(rom: &[u8]) -> String {
    rom.chunks(2)
        .enumerate()
        .map(|(n, word)| {
            let address = PROGRAM_START + n * 2;
            match *word {
                [high, low] => {
                    let op = u16::from_be_bytes([high, low]);
                    format!("{:03X}: {:04X}  {}\n", address, op, Disassembly(op))
                }
                _ => format!("{:03X}: {:02X}    DB {:#04X}\n", address, word[0], word[0]),
            }
        })
        .collect()
}
