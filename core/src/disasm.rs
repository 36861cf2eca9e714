use std::fmt;

use crate::opcode::Opcode;

/// Formats an instruction word as its mnemonic, e.g. `DRW V0, V1, 5`.
/// Words that aren't a CHIP-8 instruction are shown as data (`DW 0x5121`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disassembly(pub u16);

impl fmt::Display for Disassembly {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let op = self.0;
        let (x, y, n, kk, addr) = (op.x(), op.y(), op.n(), op.kk(), op.addr());
        match op.nibbles() {
            (0x0, 0x0, 0xE, 0x0) => write!(f, "CLS"),
            (0x0, 0x0, 0xE, 0xE) => write!(f, "RET"),
            (0x0, ..) => write!(f, "SYS {:#05X}", addr),
            (0x1, ..) => write!(f, "JP {:#05X}", addr),
            (0x2, ..) => write!(f, "CALL {:#05X}", addr),
            (0x3, ..) => write!(f, "SE V{:X}, {:#04X}", x, kk),
            (0x4, ..) => write!(f, "SNE V{:X}, {:#04X}", x, kk),
            (0x5, .., 0x0) => write!(f, "SE V{:X}, V{:X}", x, y),
            (0x6, ..) => write!(f, "LD V{:X}, {:#04X}", x, kk),
            (0x7, ..) => write!(f, "ADD V{:X}, {:#04X}", x, kk),
            (0x8, .., 0x0) => write!(f, "LD V{:X}, V{:X}", x, y),
            (0x8, .., 0x1) => write!(f, "OR V{:X}, V{:X}", x, y),
            (0x8, .., 0x2) => write!(f, "AND V{:X}, V{:X}", x, y),
            (0x8, .., 0x3) => write!(f, "XOR V{:X}, V{:X}", x, y),
            (0x8, .., 0x4) => write!(f, "ADD V{:X}, V{:X}", x, y),
            (0x8, .., 0x5) => write!(f, "SUB V{:X}, V{:X}", x, y),
            (0x8, .., 0x6) => write!(f, "SHR V{:X}, V{:X}", x, y),
            (0x8, .., 0x7) => write!(f, "SUBN V{:X}, V{:X}", x, y),
            (0x8, .., 0xE) => write!(f, "SHL V{:X}, V{:X}", x, y),
            (0x9, .., 0x0) => write!(f, "SNE V{:X}, V{:X}", x, y),
            (0xA, ..) => write!(f, "LD I, {:#05X}", addr),
            (0xB, ..) => write!(f, "JP V0, {:#05X}", addr),
            (0xC, ..) => write!(f, "RND V{:X}, {:#04X}", x, kk),
            (0xD, ..) => write!(f, "DRW V{:X}, V{:X}, {}", x, y, n),
            (0xE, _, 0x9, 0xE) => write!(f, "SKP V{:X}", x),
            (0xE, _, 0xA, 0x1) => write!(f, "SKNP V{:X}", x),
            (0xF, _, 0x0, 0x7) => write!(f, "LD V{:X}, DT", x),
            (0xF, _, 0x0, 0xA) => write!(f, "LD V{:X}, K", x),
            (0xF, _, 0x1, 0x5) => write!(f, "LD DT, V{:X}", x),
            (0xF, _, 0x1, 0x8) => write!(f, "LD ST, V{:X}", x),
            (0xF, _, 0x1, 0xE) => write!(f, "ADD I, V{:X}", x),
            (0xF, _, 0x2, 0x9) => write!(f, "LD F, V{:X}", x),
            (0xF, _, 0x3, 0x3) => write!(f, "LD B, V{:X}", x),
            (0xF, _, 0x5, 0x5) => write!(f, "LD [I], V{:X}", x),
            (0xF, _, 0x6, 0x5) => write!(f, "LD V{:X}, [I]", x),
            _ => write!(f, "DW {:#06X}", op),
        }
    }
}

/// The mnemonic for a single instruction word
pub fn disassemble(op: u16) -> String {
    Disassembly(op).to_string()
}
