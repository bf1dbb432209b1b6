//! The CPU of the CHIP-8 virtual machine, as described at
//! https://en.wikipedia.org/wiki/CHIP-8#Virtual_machine_description.
//!
//! Memory, display and keyboard are collaborators behind the `Memory`,
//! `EmulatorOutput` and `EmulatorInput` traits.

pub mod alu;
pub mod config;
pub mod emulator;
pub mod error;
pub mod font;
pub mod input;
pub mod instruction;
pub mod memory;
pub mod opcode;
pub mod output;
pub mod state;

pub use self::config::Config;
pub use self::emulator::Emulator;
pub use self::error::Error;
