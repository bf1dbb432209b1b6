use crate::emulator::memory::Memory;

pub const GLYPH_SIZE: usize = 5;

/// Built-in glyphs for the hexadecimal digits, one 4x5 bitmap each.
pub const FONT: [[u8; GLYPH_SIZE]; 16] = [
    [0xF0, 0x90, 0x90, 0x90, 0xF0], // 0
    [0x20, 0x60, 0x20, 0x20, 0x70], // 1
    [0xF0, 0x10, 0xF0, 0x80, 0xF0], // 2
    [0xF0, 0x10, 0xF0, 0x10, 0xF0], // 3
    [0x90, 0x90, 0xF0, 0x10, 0x10], // 4
    [0xF0, 0x80, 0xF0, 0x10, 0xF0], // 5
    [0xF0, 0x80, 0xF0, 0x90, 0xF0], // 6
    [0xF0, 0x10, 0x20, 0x40, 0x40], // 7
    [0xF0, 0x90, 0xF0, 0x90, 0xF0], // 8
    [0xF0, 0x90, 0xF0, 0x10, 0xF0], // 9
    [0xF0, 0x90, 0xF0, 0x90, 0x90], // A
    [0xE0, 0x90, 0xE0, 0x90, 0xE0], // B
    [0xF0, 0x80, 0x80, 0x80, 0xF0], // C
    [0xE0, 0x90, 0x90, 0x90, 0xE0], // D
    [0xF0, 0x80, 0xF0, 0x80, 0xF0], // E
    [0xF0, 0x80, 0xF0, 0x80, 0x80], // F
];

/// Where the glyph for `digit` starts. Glyphs are packed from address 0.
/// The product is taken in 8 bits, so digits above 0x33 wrap.
pub fn glyph_addr(digit: u8) -> u16 {
    digit.wrapping_mul(GLYPH_SIZE as u8) as u16
}

/// Write every glyph into low memory.
pub fn load_font<M: Memory>(memory: &mut M) {
    for (digit, glyph) in FONT.iter().enumerate() {
        memory.write_bytes_at(glyph, glyph_addr(digit as u8) as usize);
    }
}
