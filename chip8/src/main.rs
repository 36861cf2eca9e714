use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use chip8vm_core::constants::DEFAULT_INSTRUCTIONS_PER_FRAME;
use chip8vm_core::{Config, RandomSource, SeededRandom, ThreadRandom};

mod keymap;
mod render;
mod run;

/// Runs a CHIP-8 rom headlessly and prints what ends up on the display
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path of the rom to run
    rom: PathBuf,

    /// Instructions executed per 60 Hz frame
    #[arg(short, long, default_value_t = DEFAULT_INSTRUCTIONS_PER_FRAME)]
    ipf: u32,

    /// Shift VX in place for 8XY6/8XYE instead of shifting VY into VX
    #[arg(short = 'q', long)]
    shift_quirk: bool,

    /// Frames to run before printing the display
    #[arg(short, long, default_value_t = 60)]
    frames: u32,

    /// Seed for CXNN so runs can be replayed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Hex keypad keys held down for the whole run, e.g. `5a`
    #[arg(short, long, default_value = "")]
    keys: String,

    /// Print the rom's disassembly instead of running it
    #[arg(short, long)]
    disassemble: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let rom = fs::read(&args.rom)
        .with_context(|| format!("unable to read rom {}", args.rom.display()))?;

    if args.disassemble {
        print!("{}", render::disassembly(&rom));
        return Ok(());
    }

    let keys = keymap::parse_keys(&args.keys)?;
    let random: Box<dyn RandomSource> = match args.seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    };
    let config = Config::new(args.ipf, args.shift_quirk);

    let outcome = run::run(config, random, &rom, &keys, args.frames)?;
    print!("{}", render::frame_to_text(&outcome.frame));
    println!(
        "ran {} frames, {} redrawn, sound {}",
        outcome.frames_run,
        outcome.redraws,
        if outcome.sound_active { "on" } else { "off" }
    );
    Ok(())
}
