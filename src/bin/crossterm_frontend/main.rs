use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use structopt::StructOpt;

use chip_8_cpu::emulator::input::SharedKeyboard;
use chip_8_cpu::emulator::{Config, Emulator};

mod crossterm_io;
mod key_manager;
use crossterm_io::CrosstermOutput;
use key_manager::KeyManager;

/// The program options.
#[derive(StructOpt)]
struct Opt {
    /// Seed for the random number generator
    #[structopt(long)]
    seed: Option<u64>,

    /// Milliseconds to pause after each draw
    #[structopt(long, default_value = "8")]
    draw_delay: u64,

    /// The program to execute
    #[structopt(parse(from_os_str))]
    input: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Get configuration and read input file
    let opt = Opt::from_args();
    log::info!("Executing {:?}", &opt.input);
    let program = std::fs::read(&opt.input)?;

    let mut config = Config::default().with_draw_delay(Duration::from_millis(opt.draw_delay));
    config.seed = opt.seed;

    let stop = Arc::new(AtomicBool::new(false));
    let keyboard = SharedKeyboard::new();
    let key_manager = KeyManager::new(keyboard.clone(), stop.clone());

    // Load instructions into emulator memory
    let mut emulator = Emulator::with_config(keyboard, CrosstermOutput::new(), config);
    emulator.load(&program)?;

    // Start execution, `q` sets the stop flag
    let result = emulator.run(&stop);

    stop.store(true, Ordering::Relaxed);
    drop(key_manager);

    result?;
    Ok(())
}
