use std::fmt;

/// A raw two-byte instruction word, split into the fields
/// the instruction set uses:
/// - lead byte: bits 12-15, the instruction family
/// - X: bits 8-11, a register index
/// - Y: bits 4-7, a register index
/// - N: bits 0-3, a 4-bit constant
/// - KK: bits 0-7, an 8-bit constant or sub-selector
/// - NNN: bits 0-11, an address
///
/// Every `u16` is a valid opcode, whether or not it means anything.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Opcode(u16);

impl Opcode {
    /// Build an opcode from two bytes in program order.
    pub fn new(high: u8, low: u8) -> Opcode {
        Opcode(((high as u16) << 8) | low as u16)
    }

    pub fn from_u16(value: u16) -> Opcode {
        Opcode(value)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// The two bytes in program order.
    pub fn as_two_u8(&self) -> (u8, u8) {
        ((self.0 >> 8) as u8, (self.0 & 0x00FF) as u8)
    }

    /// All four nibbles, most significant first.
    pub fn nibbles(&self) -> (u8, u8, u8, u8) {
        (self.lead_byte(), self.x(), self.y(), self.n())
    }

    /// The instruction family, `[f___]`.
    pub fn lead_byte(&self) -> u8 {
        ((self.0 >> 12) & 0xF) as u8
    }

    /// `[_x__]`
    pub fn x(&self) -> u8 {
        ((self.0 >> 8) & 0xF) as u8
    }

    /// `[__y_]`
    pub fn y(&self) -> u8 {
        ((self.0 >> 4) & 0xF) as u8
    }

    /// `[___n]`
    pub fn n(&self) -> u8 {
        (self.0 & 0xF) as u8
    }

    /// `[__kk]`
    pub fn kk(&self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// `[_nnn]`
    pub fn nnn(&self) -> u16 {
        self.0 & 0x0FFF
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06x}", self.0)
    }
}

impl fmt::Debug for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Opcode({:#06x})", self.0)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn fields_are_extracted() {
        let opcode = Opcode::from_u16(0xABCD);
        assert_eq!(opcode.lead_byte(), 0xA);
        assert_eq!(opcode.x(), 0xB);
        assert_eq!(opcode.y(), 0xC);
        assert_eq!(opcode.n(), 0xD);
        assert_eq!(opcode.kk(), 0xCD);
        assert_eq!(opcode.nnn(), 0xBCD);
        assert_eq!(opcode.nibbles(), (0xA, 0xB, 0xC, 0xD));
    }

    #[test]
    fn bytes_are_combined_in_program_order() {
        assert_eq!(Opcode::new(0x12, 0x34), Opcode::from_u16(0x1234));
        assert_eq!(Opcode::new(0xFF, 0x00).as_u16(), 0xFF00);
        assert_eq!(Opcode::from_u16(0xF0F0).as_two_u8(), (0xF0, 0xF0));
    }

    #[test]
    fn displays_as_padded_hex() {
        assert_eq!(Opcode::from_u16(0x00EE).to_string(), "0x00ee");
        assert_eq!(format!("{:?}", Opcode::from_u16(0xD123)), "Opcode(0xd123)");
    }

    proptest! {
        #[test]
        fn nibbles_reassemble_to_the_word(word in any::<u16>()) {
            let opcode = Opcode::from_u16(word);
            let (a, b, c, d) = opcode.nibbles();
            let joined = (a as u16) << 12 | (b as u16) << 8 | (c as u16) << 4 | d as u16;
            prop_assert_eq!(joined, word);
            prop_assert_eq!(opcode.nnn(), word & 0x0FFF);
            prop_assert_eq!(opcode.kk() as u16, word & 0x00FF);
        }
    }
}
