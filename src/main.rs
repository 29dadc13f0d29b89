//! Headless driver: loads a ROM, runs the core to completion (or to a
//! frame limit), and round-trips battery-backed save data. Desktop
//! windowing, audio playback and an interactive debugger are all
//! out of scope here; this binary exists to exercise the library end to
//! end, not to be a full-featured emulator front-end.

use std::{path::PathBuf, time::Instant};

use clap::Parser;
use gbemu::{Config, Machine};

#[derive(Parser)]
#[command(name = "gbemu", about = "Game Boy / Game Boy Color emulator core")]
struct Cli {
    /// Game Boy ROM file.
    rom_file: PathBuf,

    /// Load/save battery-backed cartridge RAM from/to this file.
    #[arg(long, value_name = "SAVE_FILE")]
    save_file: Option<PathBuf>,

    /// Stop after this many vertical-blanks (frames); 0 runs until killed.
    #[arg(long, default_value_t = 0)]
    frames: u64,

    #[command(flatten)]
    config: Config,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let rom = std::fs::read(&cli.rom_file).unwrap_or_else(|e| {
        eprintln!("cannot read ROM file {:?}: {e}", cli.rom_file);
        std::process::exit(1);
    });

    let mut machine = Machine::new(&rom, cli.config).unwrap_or_else(|e| {
        eprintln!("failed to load {:?}: {e}", cli.rom_file);
        std::process::exit(1);
    });

    if let Some(path) = &cli.save_file {
        if path.is_file() {
            if let Err(e) = machine.load_save_file(path) {
                eprintln!("failed to load save file {path:?}: {e}");
                std::process::exit(1);
            }
        }
    }

    let start = Instant::now();
    let mut frames = 0u64;

    loop {
        if machine.tick() {
            frames += 1;
            if cli.frames != 0 && frames >= cli.frames {
                break;
            }
        }
    }

    log::info!(
        "ran {frames} frame(s) in {:.3}s",
        start.elapsed().as_secs_f64()
    );

    if let Some(path) = &cli.save_file {
        if let Err(e) = machine.save_to_file(path) {
            eprintln!("failed to write save file {path:?}: {e}");
            std::process::exit(1);
        }
    }
}
