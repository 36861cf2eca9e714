use crate::opcode::Opcode;
use crate::operations::*;
use crate::state::State;

/// A state transition for one decoded opcode
pub type Instruction = fn(op: &dyn Opcode, state: &State, ctx: &mut Context) -> Outcome;

/// One entry per opcode family, indexed by the opcode's most significant nibble
const FAMILIES: [Instruction; 16] = [
    sys, jump, call, ske, skne, skre_family, load, add, alu, skrne_family, loadi, jumpi, rand,
    draw, keypad, misc,
];

/// Selects the correct Instruction for a given Opcode
pub fn from_op(op: &dyn Opcode) -> Instruction {
    FAMILIES[op.family() as usize]
}

/// 0NNN
fn sys(op: &dyn Opcode, state: &State, ctx: &mut Context) -> Outcome {
    match op.addr() {
        0x0E0 => cls(op, state, ctx),
        0x0EE => rts(op, state, ctx),
        _ => nop(op, state, ctx),
    }
}

/// 5XY0
fn skre_family(op: &dyn Opcode, state: &State, ctx: &mut Context) -> Outcome {
    match op.n() {
        0x0 => skre(op, state, ctx),
        _ => nop(op, state, ctx),
    }
}

/// 8XYN
fn alu(op: &dyn Opcode, state: &State, ctx: &mut Context) -> Outcome {
    match op.n() {
        0x0 => mv(op, state, ctx),
        0x1 => or(op, state, ctx),
        0x2 => and(op, state, ctx),
        0x3 => xor(op, state, ctx),
        0x4 => addr(op, state, ctx),
        0x5 => sub(op, state, ctx),
        0x6 => shr(op, state, ctx),
        0x7 => subn(op, state, ctx),
        0xE => shl(op, state, ctx),
        _ => nop(op, state, ctx),
    }
}

/// 9XY0
fn skrne_family(op: &dyn Opcode, state: &State, ctx: &mut Context) -> Outcome {
    match op.n() {
        0x0 => skrne(op, state, ctx),
        _ => nop(op, state, ctx),
    }
}

/// EXNN
fn keypad(op: &dyn Opcode, state: &State, ctx: &mut Context) -> Outcome {
    match op.kk() {
        0x9E => skpr(op, state, ctx),
        0xA1 => skup(op, state, ctx),
        _ => nop(op, state, ctx),
    }
}

/// FXNN
fn misc(op: &dyn Opcode, state: &State, ctx: &mut Context) -> Outcome {
    match op.kk() {
        0x07 => moved(op, state, ctx),
        0x0A => keyd(op, state, ctx),
        0x15 => loadd(op, state, ctx),
        0x18 => loads(op, state, ctx),
        0x1E => addi(op, state, ctx),
        0x29 => ldspr(op, state, ctx),
        0x33 => bcd(op, state, ctx),
        0x55 => stor(op, state, ctx),
        0x65 => read(op, state, ctx),
        _ => nop(op, state, ctx),
    }
}
