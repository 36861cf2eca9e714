use anyhow::{Context, Result};
use log::{debug, info};

use chip8vm_core::frame_buffer::FrameBuffer;
use chip8vm_core::{Chip8, Config, RandomSource};

/// What a headless run leaves behind for the host to present
#[derive(Debug)]
pub struct Outcome {
    pub frames_run: u32,
    pub redraws: u32,
    pub frame: FrameBuffer,
    pub sound_active: bool,
}

/// Boots a machine with `rom`, holds `keys` down and emulates `frames` frames.
///
/// There is no clock to respect without a window, so frames run back to back.
pub fn run(
    config: Config,
    random: Box<dyn RandomSource>,
    rom: &[u8],
    keys: &[u8],
    frames: u32,
) -> Result<Outcome> {
    let mut chip8 = Chip8::with_config(config, random);
    chip8.load_program(rom).context("unable to load rom")?;
    info!(
        "loaded {} byte rom, running {} frames at {} instructions per frame",
        rom.len(),
        frames,
        config.instructions_per_frame()
    );

    for &key in keys {
        chip8.set_key(key, true);
    }

    let mut redraws = 0;
    for frame in 0..frames {
        chip8
            .emulate_cycle()
            .with_context(|| format!("machine faulted during frame {}", frame))?;
        // If the draw flag is set, unset it and count the frame as rendered
        if chip8.take_redraw_flag() {
            redraws += 1;
            debug!("frame {} redrawn", frame);
        }
    }

    Ok(Outcome {
        frames_run: frames,
        redraws,
        frame: chip8.state().frame_buffer,
        sound_active: chip8.sound_active(),
    })
}
