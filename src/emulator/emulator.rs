//! The fetch-decode-execute loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::emulator::alu;
use crate::emulator::config::Config;
use crate::emulator::error::Error;
use crate::emulator::font;
use crate::emulator::input::{DummyInput, EmulatorInput};
use crate::emulator::instruction::*;
use crate::emulator::memory::{Memory, Ram, MAX_ROM_SIZE, PC_START};
use crate::emulator::opcode::Opcode;
use crate::emulator::output::{DummyOutput, EmulatorOutput};
use crate::emulator::state::CpuState;

pub struct Emulator<I: EmulatorInput, O: EmulatorOutput, M: Memory = Ram> {
    state: CpuState,
    memory: M,
    rng: StdRng,
    config: Config,

    input: I,
    output: O,
}

impl Emulator<DummyInput, DummyOutput> {
    /// Create a new emulator with dummy input and output
    pub fn new() -> Emulator<DummyInput, DummyOutput> {
        Emulator::with_io(DummyInput, DummyOutput::new())
    }
}

impl Default for Emulator<DummyInput, DummyOutput> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: EmulatorInput, O: EmulatorOutput> Emulator<I, O> {

    /// Create a new emulator with input and output
    pub fn with_io(input: I, output: O) -> Emulator<I, O> {
        Emulator::with_config(input, output, Config::default())
    }

    pub fn with_config(input: I, output: O, config: Config) -> Emulator<I, O> {
        Emulator::with_memory(Ram::new(), input, output, config)
    }
}

impl<I: EmulatorInput, O: EmulatorOutput, M: Memory> Emulator<I, O, M> {

    /// Create an emulator on top of existing memory. The font is written
    /// into the low end of it.
    pub fn with_memory(mut memory: M, input: I, output: O, config: Config) -> Emulator<I, O, M> {
        font::load_font(&mut memory);

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Emulator {
            state: CpuState::new(),
            memory,
            rng,
            config,
            input,
            output,
        }
    }

    /// Copy a program into memory at 0x200.
    pub fn load(&mut self, program: &[u8]) -> Result<(), Error> {
        if program.len() > MAX_ROM_SIZE {
            return Err(Error::RomTooLarge {
                size: program.len(),
                max_size: MAX_ROM_SIZE,
            });
        }
        log::debug!("Loading {} bytes at {:#05x}", program.len(), PC_START);
        self.memory.write_bytes_at(program, PC_START as usize);
        Ok(())
    }

    pub fn state(&self) -> &CpuState {
        &self.state
    }

    pub fn memory(&self) -> &M {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn fetch(&self) -> Opcode {
        let pc = self.state.program_counter as usize;
        Opcode::new(self.memory.read_byte_at(pc), self.memory.read_byte_at(pc + 1))
    }

    /// Perform a single step: fetch the opcode at the program counter,
    /// update timers, then decode and execute it.
    /// Returns the instruction that was executed.
    pub fn step(&mut self) -> Result<Instruction, Error> {
        let opcode = self.fetch();

        self.state.tick_timers();

        let instruction = Instruction::decode(opcode)?;
        log::trace!("{:#05x}: {} {:?}", self.state.program_counter, opcode, instruction);

        self.execute_single(instruction)?;
        Ok(instruction)
    }

    /// Execute instructions in order, stopping at the first error.
    pub fn execute_many(&mut self, instructions: &[Instruction]) -> Result<(), Error> {
        for instruction in instructions {
            self.execute_single(*instruction)?;
        }
        Ok(())
    }

    /// Execute a single instruction. Every instruction moves the program
    /// counter itself.
    pub fn execute_single(&mut self, instruction: Instruction) -> Result<(), Error> {
        let state = &mut self.state;

        match instruction {

            // Return to the instruction after the call site.
            Instruction::Return => {
                let address = state.pop()?;
                log::debug!("Return to {:#05x}", address);
                state.program_counter = address;
                state.advance();
            }

            Instruction::Goto(Addr(addr)) => {
                state.program_counter = addr;
            }

            // Remember where we are, then jump
            Instruction::Call(Addr(addr)) => {
                state.push(state.program_counter)?;
                log::debug!("Call {:#05x} from {:#05x}", addr, state.program_counter);
                state.program_counter = addr;
            }

            Instruction::IfRegEqConst(x, Const(n)) => {
                let condition = state.register(x) == n;
                state.skip_if(condition);
            }

            Instruction::IfRegNeqConst(x, Const(n)) => {
                let condition = state.register(x) != n;
                state.skip_if(condition);
            }

            Instruction::SetRegToConst(x, Const(n)) => {
                state.set_register(x, n);
                state.advance();
            }

            // No carry flag here
            Instruction::IncRegByConst(x, Const(n)) => {
                state.set_register(x, state.register(x).wrapping_add(n));
                state.advance();
            }

            Instruction::SetRegToReg(x, y) => {
                state.set_register(x, state.register(y));
                state.advance();
            }

            Instruction::BitwiseOr(x, y) => {
                state.set_register(x, state.register(x) | state.register(y));
                state.advance();
            }

            Instruction::BitwiseAnd(x, y) => {
                state.set_register(x, state.register(x) & state.register(y));
                state.advance();
            }

            Instruction::BitwiseXor(x, y) => {
                state.set_register(x, state.register(x) ^ state.register(y));
                state.advance();
            }

            // VF is written before Vx, so the result wins when x is VF.
            Instruction::IncRegByReg(x, y) => {
                let (sum, carry) = alu::add(state.register(x), state.register(y));
                state.set_flag(carry);
                state.set_register(x, sum);
                state.advance();
            }

            // The difference is taken after VF is written, so an operand
            // in VF already holds the flag.
            Instruction::DecRegByReg(x, y) => {
                let (_, no_borrow) = alu::sub(state.register(x), state.register(y));
                state.set_flag(no_borrow);
                let (difference, _) = alu::sub(state.register(x), state.register(y));
                state.set_register(x, difference);
                state.advance();
            }

            Instruction::BitshiftRight(x) => {
                let (_, low_bit) = alu::shift_right(state.register(x));
                state.set_flag(low_bit);
                let (shifted, _) = alu::shift_right(state.register(x));
                state.set_register(x, shifted);
                state.advance();
            }

            Instruction::SetI(Addr(addr)) => {
                state.i = addr;
                state.advance();
            }

            Instruction::SetRegToRand(x, Const(n)) => {
                state.set_register(x, self.rng.gen::<u8>() & n);
                state.advance();
            }

            // Collisions are left to the display
            Instruction::Draw(x, y, Const(height)) => {
                let mut sprite = vec![0; height as usize];
                self.memory.read_bytes_at(&mut sprite, state.i as usize);
                self.output.draw_sprite(state.register(x), state.register(y), &sprite);
                state.advance();
            }

            Instruction::IfKeyPressed(x) => {
                let condition = self.input.is_pressed(state.register(x));
                state.skip_if(condition);
            }

            Instruction::IfKeyNotPressed(x) => {
                let condition = !self.input.is_pressed(state.register(x));
                state.skip_if(condition);
            }

            Instruction::SetRegToDelayTimer(x) => {
                state.set_register(x, state.delay_timer);
                state.advance();
            }

            Instruction::SetDelayTimerToReg(x) => {
                state.delay_timer = state.register(x);
                state.advance();
            }

            Instruction::SetSoundTimerToReg(x) => {
                state.sound_timer = state.register(x);
                state.advance();
            }

            // Each glyph is 5 bytes, packed from address 0
            Instruction::SetIToGlyphOfReg(x) => {
                state.i = font::glyph_addr(state.register(x));
                state.advance();
            }

            Instruction::StoreBcdOfReg(x) => {
                let digits = alu::bcd(state.register(x));
                self.memory.write_bytes_at(&digits, state.i as usize);
                state.advance();
            }

            // Load V0..=Vx from memory at I. I itself is left alone.
            Instruction::RegLoad(Reg(x)) => {
                let i = state.i as usize;
                for reg_no in 0..=x {
                    let value = self.memory.read_byte_at(i + reg_no as usize);
                    state.set_register(Reg(reg_no), value);
                }
                state.advance();
            }
        };

        Ok(())
    }

    /// Run until `stop` is set or the program hits a fatal error.
    /// The display is initialised first and closed on the way out.
    pub fn run(&mut self, stop: &AtomicBool) -> Result<(), Error> {
        log::info!("Starting execution at {:#05x}", self.state.program_counter);
        self.output.init();
        let result = self.run_until(stop);
        self.output.close();
        result
    }

    fn run_until(&mut self, stop: &AtomicBool) -> Result<(), Error> {
        while !stop.load(Ordering::Relaxed) {
            match self.step() {
                Ok(Instruction::Draw(..)) => thread::sleep(self.config.draw_delay),
                Ok(_) => {}
                Err(error) => {
                    log::error!("Halting at {:#05x}: {}", self.state.program_counter, error);
                    thread::sleep(self.config.halt_delay);
                    return Err(error);
                }
            }
        }

        log::info!("Stopped at {:#05x}", self.state.program_counter);
        Ok(())
    }
}
