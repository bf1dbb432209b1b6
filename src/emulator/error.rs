/// Everything that can stop the emulator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("unsupported instruction {opcode:#06x}")]
    UnsupportedInstruction { opcode: u16 },

    #[error("stack overflow when calling from {address:#05x}")]
    StackOverflow { address: u16 },

    #[error("stack underflow: return with an empty call stack")]
    StackUnderflow,

    #[error("program is too large ({size} bytes), max size is {max_size} bytes")]
    RomTooLarge { size: usize, max_size: usize },
}
