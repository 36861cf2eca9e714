//! Drives the machine through its public interface with small hand-assembled ROMs

use chip8vm_core::constants::{DISPLAY_WIDTH, PIXEL_OFF, PIXEL_ON, SPRITE_SHEET};
use chip8vm_core::{Chip8, Chip8Error, Config, RandomSource, SeededRandom};

/// Yields 0x00, 0x01, 0x02, ...
struct CountingRandom(u8);

impl RandomSource for CountingRandom {
    fn random_byte(&mut self) -> u8 {
        let byte = self.0;
        self.0 = self.0.wrapping_add(1);
        byte
    }
}

fn boot(ipf: u32, shift_quirk: bool, program: &[u8]) -> Chip8 {
    let mut chip8 = Chip8::with_config(
        Config::new(ipf, shift_quirk),
        Box::new(CountingRandom(0)),
    );
    chip8.load_program(program).unwrap();
    chip8
}

fn pixel(chip8: &Chip8, x: usize, y: usize) -> u8 {
    chip8.frame_buffer()[y * DISPLAY_WIDTH + x]
}

#[test]
fn test_new_machine() {
    let chip8 = Chip8::new(10, false);
    let state = chip8.state();
    assert_eq!(state.pc, 0x200);
    assert_eq!(state.memory[..SPRITE_SHEET.len()], SPRITE_SHEET);
    assert_eq!(state.v, [0; 16]);
    assert_eq!(chip8.frame_buffer().len(), 2048);
    assert!(chip8.frame_buffer().iter().all(|&pixel| pixel == PIXEL_OFF));
    assert!(!chip8.sound_active());
}

#[test]
fn test_draws_font_glyph_zero() {
    // LD V0, 0x05; LD I, 0x000; DRW V0, V0, 5
    let mut chip8 = boot(3, false, &[0x60, 0x05, 0xA0, 0x00, 0xD0, 0x05]);
    chip8.emulate_cycle().unwrap();
    assert!(chip8.take_redraw_flag());

    // Both coordinates come from V0, so the glyph lands at (5, 5)
    for y in 0..32 {
        for x in 0..64 {
            let lit = (5..10).contains(&y)
                && (5..13).contains(&x)
                && SPRITE_SHEET[y - 5] & (0x80 >> (x - 5)) != 0;
            let expected = if lit { PIXEL_ON } else { PIXEL_OFF };
            assert_eq!(pixel(&chip8, x, y), expected, "pixel ({}, {})", x, y);
        }
    }
    assert_eq!(chip8.state().v[0xF], 0);
}

#[test]
fn test_arithmetic_flags() {
    // LD V1, 0xFF; LD V2, 0x01; ADD V1, V2
    let mut chip8 = boot(3, false, &[0x61, 0xFF, 0x62, 0x01, 0x81, 0x24]);
    chip8.emulate_cycle().unwrap();
    assert_eq!(chip8.state().v[0x1], 0x00);
    assert_eq!(chip8.state().v[0xF], 0x01);

    // LD V1, 0x01; LD V2, 0x02; SUB V1, V2
    let mut chip8 = boot(3, false, &[0x61, 0x01, 0x62, 0x02, 0x81, 0x25]);
    chip8.emulate_cycle().unwrap();
    assert_eq!(chip8.state().v[0x1], 0xFF);
    assert_eq!(chip8.state().v[0xF], 0x00);

    // LD V1, 0x02; LD V2, 0x01; SUBN V1, V2
    let mut chip8 = boot(3, false, &[0x61, 0x02, 0x62, 0x01, 0x81, 0x27]);
    chip8.emulate_cycle().unwrap();
    assert_eq!(chip8.state().v[0x1], 0xFF);
    assert_eq!(chip8.state().v[0xF], 0x00);
}

#[test]
fn test_shift_quirk_is_configurable() {
    // LD V1, 0x03; LD V2, 0x04; SHR V1, V2
    let program = [0x61, 0x03, 0x62, 0x04, 0x81, 0x26];

    let mut chip8 = boot(3, false, &program);
    chip8.emulate_cycle().unwrap();
    assert_eq!(chip8.state().v[0x1], 0x02);
    assert_eq!(chip8.state().v[0xF], 0x00);

    let mut chip8 = boot(3, true, &program);
    chip8.emulate_cycle().unwrap();
    assert_eq!(chip8.state().v[0x1], 0x01);
    assert_eq!(chip8.state().v[0xF], 0x01);
}

#[test]
fn test_draw_twice_erases_and_collides() {
    // LD I, 0x00A (glyph 2); DRW V0, V0, 5; DRW V0, V0, 5
    let mut chip8 = boot(2, false, &[0xA0, 0x0A, 0xD0, 0x05, 0xD0, 0x05]);
    chip8.emulate_cycle().unwrap();
    assert_eq!(chip8.state().v[0xF], 0);
    assert!(chip8.frame_buffer().iter().any(|&pixel| pixel == PIXEL_ON));

    chip8.emulate_cycle().unwrap();
    assert_eq!(chip8.state().v[0xF], 1);
    assert!(chip8.frame_buffer().iter().all(|&pixel| pixel == PIXEL_OFF));
}

#[test]
fn test_delay_timer_decays_once_per_frame() {
    // LD V1, 0x0A; LD DT, V1; JP 0x204
    let program = [0x61, 0x0A, 0xF1, 0x15, 0x12, 0x04];
    for ipf in [2, 5, 50] {
        let mut chip8 = boot(ipf, false, &program);
        chip8.emulate_cycle().unwrap();
        assert_eq!(chip8.state().delay_timer, 9);
        for _ in 0..4 {
            chip8.emulate_cycle().unwrap();
        }
        assert_eq!(chip8.state().delay_timer, 5);
        for _ in 0..20 {
            chip8.emulate_cycle().unwrap();
        }
        assert_eq!(chip8.state().delay_timer, 0);
    }
}

#[test]
fn test_sound_active_while_timer_runs() {
    // LD V1, 0x02; LD ST, V1; JP 0x204
    let mut chip8 = boot(2, false, &[0x61, 0x02, 0xF1, 0x18, 0x12, 0x04]);
    chip8.emulate_cycle().unwrap();
    assert!(chip8.sound_active());
    chip8.emulate_cycle().unwrap();
    assert!(!chip8.sound_active());
}

#[test]
fn test_call_then_return() {
    // 0x200: CALL 0x206; 0x202: LD V1, 0x01; 0x204: JP 0x204; 0x206: RET
    let mut chip8 = boot(1, false, &[0x22, 0x06, 0x61, 0x01, 0x12, 0x04, 0x00, 0xEE]);
    chip8.emulate_cycle().unwrap();
    assert_eq!(chip8.state().pc, 0x206);
    assert_eq!(chip8.state().sp, 1);
    chip8.emulate_cycle().unwrap();
    assert_eq!(chip8.state().pc, 0x202);
    assert_eq!(chip8.state().sp, 0);
    chip8.emulate_cycle().unwrap();
    assert_eq!(chip8.state().v[0x1], 0x01);
}

#[test]
fn test_recursion_overflows_the_stack() {
    // 0x200: CALL 0x200
    let mut chip8 = boot(20, false, &[0x22, 0x00]);
    let result = chip8.emulate_cycle();
    assert_eq!(result, Err(Chip8Error::StackOverflow { pc: 0x200 }));
    assert_eq!(chip8.state().sp, 16);
    assert_eq!(chip8.state().pc, 0x200);
}

#[test]
fn test_return_without_call_underflows() {
    let mut chip8 = boot(1, false, &[0x00, 0xEE]);
    assert_eq!(
        chip8.emulate_cycle(),
        Err(Chip8Error::StackUnderflow { pc: 0x200 })
    );
    assert_eq!(chip8.state().pc, 0x200);
    assert_eq!(chip8.state().sp, 0);
}

#[test]
fn test_wait_for_key() {
    // 0x200: LD V3, K; 0x202: JP 0x202
    let mut chip8 = boot(4, false, &[0xF3, 0x0A, 0x12, 0x02]);
    for _ in 0..3 {
        chip8.emulate_cycle().unwrap();
        assert_eq!(chip8.state().pc, 0x200);
        assert_eq!(chip8.state().v, [0; 16]);
    }

    chip8.set_key(0x7, true);
    chip8.emulate_cycle().unwrap();
    assert_eq!(chip8.state().v[0x3], 0x7);
    assert_eq!(chip8.state().pc, 0x202);
    assert!(!chip8.state().keys[0x7]);
}

#[test]
fn test_skip_on_key() {
    // LD V1, 0x0C; SKP V1; LD V2, 0x01; LD V3, 0x01
    let program = [0x61, 0x0C, 0xE1, 0x9E, 0x62, 0x01, 0x63, 0x01];

    let mut chip8 = boot(4, false, &program);
    chip8.emulate_cycle().unwrap();
    assert_eq!(chip8.state().v[0x2], 0x01);

    let mut chip8 = boot(3, false, &program);
    chip8.set_key(0xC, true);
    chip8.emulate_cycle().unwrap();
    assert_eq!(chip8.state().v[0x2], 0x00);
    assert_eq!(chip8.state().v[0x3], 0x01);
}

#[test]
fn test_random_source_is_injected() {
    // RND V1, 0xFF; RND V2, 0x0F
    let mut chip8 = boot(2, false, &[0xC1, 0xFF, 0xC2, 0x0F]);
    chip8.emulate_cycle().unwrap();
    assert_eq!(chip8.state().v[0x1], 0x00);
    assert_eq!(chip8.state().v[0x2], 0x01);
}

#[test]
fn test_seeded_runs_replay() {
    // RND V1, 0xFF; RND V2, 0xFF; JP 0x204
    let program = [0xC1, 0xFF, 0xC2, 0xFF, 0x12, 0x04];
    let run = || {
        let mut chip8 = Chip8::with_config(Config::new(3, false), Box::new(SeededRandom::new(7)));
        chip8.load_program(&program).unwrap();
        chip8.emulate_cycle().unwrap();
        chip8.state().v
    };
    assert_eq!(run(), run());
}

#[test]
fn test_bcd_and_register_dump() {
    // LD V0, 0xFE; LD I, 0x300; LD B, V0; LD V2, [I]
    let mut chip8 = boot(4, false, &[0x60, 0xFE, 0xA3, 0x00, 0xF0, 0x33, 0xF2, 0x65]);
    chip8.emulate_cycle().unwrap();
    assert_eq!(chip8.state().v[0..3], [2, 5, 4]);
    assert_eq!(chip8.state().i, 0x303);
}

#[test]
fn test_oversized_rom_is_rejected() {
    let mut chip8 = Chip8::new(10, false);
    let err = chip8.load_program(&vec![0xFF; 4096]).unwrap_err();
    assert_eq!(
        err,
        Chip8Error::RomTooLarge {
            size: 4096,
            max_size: 3584
        }
    );
    assert!(chip8.state().memory[0x200..].iter().all(|&byte| byte == 0));
}

#[test]
fn test_rewind_restores_previous_frame() {
    // ADD V1, 0x01; JP 0x200
    let mut chip8 = boot(2, false, &[0x71, 0x01, 0x12, 0x00]);
    chip8.emulate_cycle().unwrap();
    chip8.emulate_cycle().unwrap();
    assert_eq!(chip8.state().v[0x1], 0x02);
    assert!(chip8.rewind());
    assert_eq!(chip8.state().v[0x1], 0x01);
}
