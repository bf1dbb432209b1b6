use std::fmt;

pub const MEM_SIZE: usize = 4096;
pub const PC_START: u16 = 0x200;
pub const MAX_ROM_SIZE: usize = MEM_SIZE - PC_START as usize;

/// A byte-addressable store. The emulator performs no bounds checks of
/// its own, so an implementation decides what an out of range offset means.
pub trait Memory {
    fn read_byte_at(&self, offset: usize) -> u8;
    fn write_byte_at(&mut self, byte: u8, offset: usize);

    /// Fill `buffer` with the bytes starting at `offset`.
    fn read_bytes_at(&self, buffer: &mut [u8], offset: usize) {
        for (i, byte) in buffer.iter_mut().enumerate() {
            *byte = self.read_byte_at(offset + i);
        }
    }

    fn write_bytes_at(&mut self, bytes: &[u8], offset: usize) {
        for (i, byte) in bytes.iter().enumerate() {
            self.write_byte_at(*byte, offset + i);
        }
    }
}

/// 4 KiB of RAM. Offsets wrap around the end of the address space,
/// like a 12-bit address bus would.
#[derive(Clone)]
pub struct Ram {
    bytes: [u8; MEM_SIZE],
}

impl Ram {
    pub fn new() -> Ram {
        Ram {
            bytes: [0; MEM_SIZE],
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}

impl Default for Ram {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Ram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ram").field("size", &MEM_SIZE).finish()
    }
}

impl Memory for Ram {
    fn read_byte_at(&self, offset: usize) -> u8 {
        self.bytes[offset % MEM_SIZE]
    }

    fn write_byte_at(&mut self, byte: u8, offset: usize) {
        self.bytes[offset % MEM_SIZE] = byte;
    }
}
