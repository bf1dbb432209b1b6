use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::time::Duration;

use structopt::StructOpt;

use chip_8_cpu::emulator::{Config, Emulator};
use chip_8_cpu::emulator::{input::DummyInput, output::DummyOutput};

/// Run a program without a display, printing the final screen.
#[derive(StructOpt)]
struct Opt {
    /// Seed for the random number generator
    #[structopt(long)]
    seed: Option<u64>,

    /// Milliseconds to pause after each draw, 1000/120 if not given
    #[structopt(long)]
    draw_delay: Option<u64>,

    /// The program to execute
    #[structopt(parse(from_os_str))]
    input: PathBuf,
}

impl Opt {
    fn config(&self) -> Config {
        let mut config = Config::default();
        if let Some(ms) = self.draw_delay {
            config = config.with_draw_delay(Duration::from_millis(ms));
        }
        config.seed = self.seed;
        config
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    // Get configuration and read input file
    let opt = Opt::from_args();
    log::info!("Executing {:?}", &opt.input);
    let program = std::fs::read(&opt.input)?;

    // Load instructions into emulator memory
    let mut emulator = Emulator::with_config(DummyInput, DummyOutput::new(), opt.config());
    emulator.load(&program)?;

    // Nothing sets the flag, so this runs until the program faults
    let stop = AtomicBool::new(false);
    let result = emulator.run(&stop);

    print!("{}", emulator.output());
    log::info!("{} draws, {} collisions", emulator.output().draws(), emulator.output().collisions());
    result?;

    Ok(())
}

#[cfg(test)]
mod tests {

    use super::*;
    use chip_8_cpu::emulator::config::DRAW_DELAY;

    #[test]
    fn draws_are_paced_by_default() {
        let opt = Opt::from_iter(&["no_frontend", "game.ch8"]);
        assert_eq!(opt.config().draw_delay, DRAW_DELAY);
        assert_eq!(opt.config().seed, None);
    }

    #[test]
    fn flags_override_config() {
        let opt = Opt::from_iter(&["no_frontend", "--draw-delay", "0", "--seed", "3", "game.ch8"]);
        assert_eq!(opt.config().draw_delay, Duration::from_millis(0));
        assert_eq!(opt.config().seed, Some(3));
    }
}
