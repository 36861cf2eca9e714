use log::debug;

use crate::config::Config;
use crate::constants::{GLYPH_SIZE, STACK_SIZE};
use crate::error::Chip8Error;
use crate::opcode::Opcode;
use crate::random::RandomSource;
use crate::state::{address, State};

/// Everything an operation may consult besides the state itself.
///
/// The program counter in the state an operation receives has already been advanced past the
/// operation, so jumps overwrite it and skips add a further 2.
pub struct Context<'a> {
    pub config: &'a Config,
    pub random: &'a mut dyn RandomSource,
}

/// The result of executing a single operation
pub type Outcome = Result<State, Chip8Error>;

/// Address of the instruction being executed
fn current(state: &State) -> u16 {
    state.pc.wrapping_sub(0x2)
}

fn skip_if(state: &State, condition: bool) -> State {
    if condition {
        State {
            pc: state.pc.wrapping_add(0x2),
            ..*state
        }
    } else {
        *state
    }
}

/// Unknown or unsupported opcode; nothing happens
pub fn nop(op: &dyn Opcode, state: &State, _ctx: &mut Context) -> Outcome {
    debug!(
        "ignoring opcode {:04X} at {:03X}",
        op.word(),
        current(state)
    );
    Ok(*state)
}

/// clear
pub fn cls(_op: &dyn Opcode, state: &State, _ctx: &mut Context) -> Outcome {
    let mut frame_buffer = state.frame_buffer;
    frame_buffer.clear();
    Ok(State {
        frame_buffer,
        draw_flag: true,
        ..*state
    })
}

/// PC = STACK.pop()
pub fn rts(_op: &dyn Opcode, state: &State, _ctx: &mut Context) -> Outcome {
    if state.sp == 0 {
        return Err(Chip8Error::StackUnderflow { pc: current(state) });
    }
    let sp = state.sp - 0x1;
    Ok(State {
        pc: state.stack[sp as usize],
        sp,
        ..*state
    })
}

/// PC = addr
pub fn jump(op: &dyn Opcode, state: &State, _ctx: &mut Context) -> Outcome {
    Ok(State {
        pc: op.addr(),
        ..*state
    })
}

/// STACK.push(PC); PC = addr
pub fn call(op: &dyn Opcode, state: &State, _ctx: &mut Context) -> Outcome {
    if state.sp as usize >= STACK_SIZE {
        return Err(Chip8Error::StackOverflow { pc: current(state) });
    }
    let mut stack = state.stack;
    stack[state.sp as usize] = state.pc;
    Ok(State {
        pc: op.addr(),
        sp: state.sp + 0x1,
        stack,
        ..*state
    })
}

/// if Vx == kk then pc += 2
pub fn ske(op: &dyn Opcode, state: &State, _ctx: &mut Context) -> Outcome {
    Ok(skip_if(state, state.v[op.x() as usize] == op.kk()))
}

/// if Vx != kk then pc += 2
pub fn skne(op: &dyn Opcode, state: &State, _ctx: &mut Context) -> Outcome {
    Ok(skip_if(state, state.v[op.x() as usize] != op.kk()))
}

/// if Vx == Vy then pc += 2
pub fn skre(op: &dyn Opcode, state: &State, _ctx: &mut Context) -> Outcome {
    Ok(skip_if(
        state,
        state.v[op.x() as usize] == state.v[op.y() as usize],
    ))
}

/// Vx = kk
pub fn load(op: &dyn Opcode, state: &State, _ctx: &mut Context) -> Outcome {
    let mut v = state.v;
    v[op.x() as usize] = op.kk();
    Ok(State { v, ..*state })
}

/// Vx += kk
/// The carry is dropped and VF is left alone
pub fn add(op: &dyn Opcode, state: &State, _ctx: &mut Context) -> Outcome {
    let sum = u16::from(state.v[op.x() as usize]) + u16::from(op.kk());
    let mut v = state.v;
    v[op.x() as usize] = (sum & 0xFF) as u8;
    Ok(State { v, ..*state })
}

/// Vx = Vy
pub fn mv(op: &dyn Opcode, state: &State, _ctx: &mut Context) -> Outcome {
    let mut v = state.v;
    v[op.x() as usize] = v[op.y() as usize];
    Ok(State { v, ..*state })
}

/// Vx |= Vy
pub fn or(op: &dyn Opcode, state: &State, _ctx: &mut Context) -> Outcome {
    let mut v = state.v;
    v[op.x() as usize] |= v[op.y() as usize];
    Ok(State { v, ..*state })
}

/// Vx &= Vy
pub fn and(op: &dyn Opcode, state: &State, _ctx: &mut Context) -> Outcome {
    let mut v = state.v;
    v[op.x() as usize] &= v[op.y() as usize];
    Ok(State { v, ..*state })
}

/// Vx ^= Vy
pub fn xor(op: &dyn Opcode, state: &State, _ctx: &mut Context) -> Outcome {
    let mut v = state.v;
    v[op.x() as usize] ^= v[op.y() as usize];
    Ok(State { v, ..*state })
}

// The flag is always written after the result in the ALU operations below so that it wins when
// X is F.

/// Vx += Vy; VF = carry
pub fn addr(op: &dyn Opcode, state: &State, _ctx: &mut Context) -> Outcome {
    let sum = u16::from(state.v[op.x() as usize]) + u16::from(state.v[op.y() as usize]);
    let mut v = state.v;
    v[op.x() as usize] = (sum & 0xFF) as u8;
    v[0xF] = u8::from(sum > 0xFF);
    Ok(State { v, ..*state })
}

/// Vx -= Vy; VF = !borrow
pub fn sub(op: &dyn Opcode, state: &State, _ctx: &mut Context) -> Outcome {
    let (vx, vy) = (state.v[op.x() as usize], state.v[op.y() as usize]);
    let mut v = state.v;
    v[op.x() as usize] = vx.wrapping_sub(vy);
    v[0xF] = u8::from(vx >= vy);
    Ok(State { v, ..*state })
}

/// Vx = Vy - Vx; VF = !borrow
pub fn subn(op: &dyn Opcode, state: &State, _ctx: &mut Context) -> Outcome {
    let (vx, vy) = (state.v[op.x() as usize], state.v[op.y() as usize]);
    let mut v = state.v;
    v[op.x() as usize] = vy.wrapping_sub(vx);
    v[0xF] = u8::from(vy >= vx);
    Ok(State { v, ..*state })
}

/// The register shifted by 8XY6 and 8XYE: Vx itself under the shift quirk, Vy otherwise
fn shift_source(op: &dyn Opcode, state: &State, config: &Config) -> u8 {
    if config.shift_quirk() {
        state.v[op.x() as usize]
    } else {
        state.v[op.y() as usize]
    }
}

/// Vx = src >> 1; VF = lsb(src)
pub fn shr(op: &dyn Opcode, state: &State, ctx: &mut Context) -> Outcome {
    let src = shift_source(op, state, ctx.config);
    let mut v = state.v;
    v[op.x() as usize] = src >> 1;
    v[0xF] = src & 0x1;
    Ok(State { v, ..*state })
}

/// Vx = src << 1; VF = msb(src)
pub fn shl(op: &dyn Opcode, state: &State, ctx: &mut Context) -> Outcome {
    let src = shift_source(op, state, ctx.config);
    let mut v = state.v;
    v[op.x() as usize] = ((u16::from(src) << 1) & 0xFF) as u8;
    v[0xF] = (src & 0x80) >> 7;
    Ok(State { v, ..*state })
}

/// if Vx != Vy then pc += 2
pub fn skrne(op: &dyn Opcode, state: &State, _ctx: &mut Context) -> Outcome {
    Ok(skip_if(
        state,
        state.v[op.x() as usize] != state.v[op.y() as usize],
    ))
}

/// I = addr
pub fn loadi(op: &dyn Opcode, state: &State, _ctx: &mut Context) -> Outcome {
    Ok(State {
        i: op.addr(),
        ..*state
    })
}

/// PC = V0 + addr
pub fn jumpi(op: &dyn Opcode, state: &State, _ctx: &mut Context) -> Outcome {
    Ok(State {
        pc: u16::from(state.v[0x0]) + op.addr(),
        ..*state
    })
}

/// Vx = rand_byte & kk
pub fn rand(op: &dyn Opcode, state: &State, ctx: &mut Context) -> Outcome {
    let mut v = state.v;
    v[op.x() as usize] = ctx.random.random_byte() & op.kk();
    Ok(State { v, ..*state })
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs a sprite from memory i..i+n at position x, y on the FrameBuffer, wrapping each pixel
/// around the edges. Sets VF if any pixels were erased.
pub fn draw(op: &dyn Opcode, state: &State, _ctx: &mut Context) -> Outcome {
    let mut v = state.v;
    let mut frame_buffer = state.frame_buffer;
    let x = state.v[op.x() as usize] as usize;
    let y = state.v[op.y() as usize] as usize;

    let mut collision = false;
    for row in 0..op.n() {
        let sprite = state.read(state.i.wrapping_add(u16::from(row)));
        for bit in 0..8 {
            if sprite & (0x80 >> bit) != 0 {
                collision |= frame_buffer.toggle(x + bit, y + row as usize);
            }
        }
    }
    v[0xF] = u8::from(collision);

    Ok(State {
        v,
        frame_buffer,
        draw_flag: true,
        ..*state
    })
}

/// if Vx.pressed then pc += 2
pub fn skpr(op: &dyn Opcode, state: &State, _ctx: &mut Context) -> Outcome {
    let key = state.v[op.x() as usize] & 0xF;
    Ok(skip_if(state, state.keys[key as usize]))
}

/// if !Vx.pressed then pc += 2
pub fn skup(op: &dyn Opcode, state: &State, _ctx: &mut Context) -> Outcome {
    let key = state.v[op.x() as usize] & 0xF;
    Ok(skip_if(state, !state.keys[key as usize]))
}

/// Vx = DT
pub fn moved(op: &dyn Opcode, state: &State, _ctx: &mut Context) -> Outcome {
    let mut v = state.v;
    v[op.x() as usize] = state.delay_timer;
    Ok(State { v, ..*state })
}

/// await keypress for Vx
/// With no key down the pc is wound back so this instruction runs again in the next slot.
/// Otherwise the lowest pressed key is stored in Vx and its latch is released.
pub fn keyd(op: &dyn Opcode, state: &State, _ctx: &mut Context) -> Outcome {
    match state.keys.iter().position(|&pressed| pressed) {
        Some(key) => {
            let mut v = state.v;
            let mut keys = state.keys;
            v[op.x() as usize] = key as u8;
            keys[key] = false;
            Ok(State { v, keys, ..*state })
        }
        None => Ok(State {
            pc: current(state),
            ..*state
        }),
    }
}

/// DT = Vx
pub fn loadd(op: &dyn Opcode, state: &State, _ctx: &mut Context) -> Outcome {
    Ok(State {
        delay_timer: state.v[op.x() as usize],
        ..*state
    })
}

/// ST = Vx
pub fn loads(op: &dyn Opcode, state: &State, _ctx: &mut Context) -> Outcome {
    Ok(State {
        sound_timer: state.v[op.x() as usize],
        ..*state
    })
}

/// I += Vx
pub fn addi(op: &dyn Opcode, state: &State, _ctx: &mut Context) -> Outcome {
    Ok(State {
        i: state.i.wrapping_add(u16::from(state.v[op.x() as usize])),
        ..*state
    })
}

/// I = Vx * 5
/// Set I to the memory address of the glyph for Vx
/// See constants::SPRITE_SHEET for more details
pub fn ldspr(op: &dyn Opcode, state: &State, _ctx: &mut Context) -> Outcome {
    Ok(State {
        i: u16::from(state.v[op.x() as usize]) * GLYPH_SIZE,
        ..*state
    })
}

/// mem[I..I+3] = bcd(Vx)
/// Store BCD repr of Vx in memory starting at address i
pub fn bcd(op: &dyn Opcode, state: &State, _ctx: &mut Context) -> Outcome {
    let value = state.v[op.x() as usize];
    let digits = [value / 100, value / 10 % 10, value % 10];
    let mut memory = state.memory;
    for (offset, digit) in (0..).zip(digits) {
        memory[address(state.i.wrapping_add(offset))] = digit;
    }
    Ok(State { memory, ..*state })
}

/// mem[I..=I+x] = V0..=Vx; I += x + 1
pub fn stor(op: &dyn Opcode, state: &State, _ctx: &mut Context) -> Outcome {
    let mut memory = state.memory;
    for reg in 0..=op.x() {
        memory[address(state.i.wrapping_add(u16::from(reg)))] = state.v[reg as usize];
    }
    Ok(State {
        i: state.i.wrapping_add(u16::from(op.x()) + 1),
        memory,
        ..*state
    })
}

/// V0..=Vx = mem[I..=I+x]; I += x + 1
pub fn read(op: &dyn Opcode, state: &State, _ctx: &mut Context) -> Outcome {
    let mut v = state.v;
    for reg in 0..=op.x() {
        v[reg as usize] = state.read(state.i.wrapping_add(u16::from(reg)));
    }
    Ok(State {
        i: state.i.wrapping_add(u16::from(op.x()) + 1),
        v,
        ..*state
    })
}
