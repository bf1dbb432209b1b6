use crate::emulator::error::Error;
use crate::emulator::instruction::Reg;
use crate::emulator::memory::PC_START;

pub const NUM_REGISTERS: usize = 16;
pub const STACK_SIZE: usize = 16;

/// VF, overwritten by instructions that report a carry or borrow.
pub const FLAG_REGISTER: usize = 0xF;

/// The register file, program counter, call stack and timers.
///
/// The stack pointer names the slot holding the most recent return
/// address, so slot 0 is never written and at most 15 calls can nest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CpuState {
    pub(crate) registers: [u8; NUM_REGISTERS],
    pub(crate) i: u16,
    pub(crate) program_counter: u16,
    pub(crate) stack_pointer: u8,
    pub(crate) stack: [u16; STACK_SIZE],
    pub(crate) delay_timer: u8,
    pub(crate) sound_timer: u8,
}

impl CpuState {
    pub fn new() -> CpuState {
        CpuState {
            registers: [0; NUM_REGISTERS],
            i: 0,
            program_counter: PC_START,
            stack_pointer: 0,
            stack: [0; STACK_SIZE],
            delay_timer: 0,
            sound_timer: 0,
        }
    }

    pub fn register(&self, Reg(x): Reg) -> u8 {
        self.registers[x as usize & 0xF]
    }

    pub(crate) fn set_register(&mut self, Reg(x): Reg, value: u8) {
        self.registers[x as usize & 0xF] = value;
    }

    pub fn registers(&self) -> &[u8; NUM_REGISTERS] {
        &self.registers
    }

    /// The value of VF.
    pub fn flag(&self) -> u8 {
        self.registers[FLAG_REGISTER]
    }

    pub(crate) fn set_flag(&mut self, flag: bool) {
        self.registers[FLAG_REGISTER] = flag as u8;
    }

    pub fn program_counter(&self) -> u16 {
        self.program_counter
    }

    pub fn index(&self) -> u16 {
        self.i
    }

    pub fn stack_pointer(&self) -> u8 {
        self.stack_pointer
    }

    pub fn stack(&self) -> &[u16; STACK_SIZE] {
        &self.stack
    }

    pub fn delay_timer(&self) -> u8 {
        self.delay_timer
    }

    pub fn sound_timer(&self) -> u8 {
        self.sound_timer
    }

    /// Move to the next instruction.
    pub(crate) fn advance(&mut self) {
        self.program_counter = self.program_counter.wrapping_add(2);
    }

    /// Move past the next instruction if `condition` holds,
    /// otherwise just to it.
    pub(crate) fn skip_if(&mut self, condition: bool) {
        if condition {
            self.advance();
        }
        self.advance();
    }

    /// Count both timers down by one, stopping at zero.
    pub fn tick_timers(&mut self) {
        self.delay_timer = self.delay_timer.saturating_sub(1);
        self.sound_timer = self.sound_timer.saturating_sub(1);
    }

    pub(crate) fn push(&mut self, address: u16) -> Result<(), Error> {
        if self.stack_pointer as usize >= STACK_SIZE - 1 {
            return Err(Error::StackOverflow { address });
        }
        self.stack_pointer += 1;
        self.stack[self.stack_pointer as usize] = address;
        Ok(())
    }

    pub(crate) fn pop(&mut self) -> Result<u16, Error> {
        if self.stack_pointer == 0 {
            return Err(Error::StackUnderflow);
        }
        let address = self.stack[self.stack_pointer as usize];
        self.stack_pointer -= 1;
        Ok(address)
    }
}

impl Default for CpuState {
    fn default() -> Self {
        Self::new()
    }
}
