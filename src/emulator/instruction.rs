use crate::emulator::error::Error;
use crate::emulator::opcode::Opcode;

/// A wrapper for addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Addr(pub u16);

/// A wrapper for registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reg(pub u8);

/// A wrapper for constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Const(pub u8);

/// A single supported instruction.
/// Two bytes written in hexadecimal, with the following special characters:
/// - NNN: address
/// - KK: 8-bit constant
/// - N: 4-bit constant
/// - X and Y: 4-bit register identifier
/// - I: 16 bit register for memory address
/// - VN: One of the 16 available variables (register identifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Return, // 0NNN
    Goto(Addr), // 1NNN
    Call(Addr), // 2NNN
    IfRegEqConst(Reg, Const), // 3XKK
    IfRegNeqConst(Reg, Const), // 4XKK
    SetRegToConst(Reg, Const), // 6XKK
    IncRegByConst(Reg, Const), // 7XKK
    SetRegToReg(Reg, Reg), // 8XY0
    BitwiseOr(Reg, Reg), // 8XY1
    BitwiseAnd(Reg, Reg), // 8XY2
    BitwiseXor(Reg, Reg), // 8XY3
    IncRegByReg(Reg, Reg), // 8XY4
    DecRegByReg(Reg, Reg), // 8XY5
    BitshiftRight(Reg), // 8XY6
    SetI(Addr), // ANNN
    SetRegToRand(Reg, Const), // CXKK
    Draw(Reg, Reg, Const), // DXYN
    IfKeyPressed(Reg), // EX9E
    IfKeyNotPressed(Reg), // EXA1
    SetRegToDelayTimer(Reg), // FX07
    SetDelayTimerToReg(Reg), // FX15
    SetSoundTimerToReg(Reg), // FX18
    SetIToGlyphOfReg(Reg), // FX29
    StoreBcdOfReg(Reg), // FX33
    RegLoad(Reg), // FX65
}

impl Instruction {

    pub fn from_u16(value: u16) -> Result<Instruction, Error> {
        Instruction::decode(Opcode::from_u16(value))
    }

    pub fn from_two_u8(left: u8, right: u8) -> Result<Instruction, Error> {
        Instruction::decode(Opcode::new(left, right))
    }

    /// Decode an opcode, selecting on the family first and then on
    /// N (family 8) or KK (families E and F).
    pub fn decode(opcode: Opcode) -> Result<Instruction, Error> {
        let x = Reg(opcode.x());
        let y = Reg(opcode.y());
        let kk = Const(opcode.kk());
        let nnn = Addr(opcode.nnn());

        let instruction = match (opcode.lead_byte(), opcode.n(), opcode.kk()) {
            (0x0, _, _) => Instruction::Return,
            (0x1, _, _) => Instruction::Goto(nnn),
            (0x2, _, _) => Instruction::Call(nnn),
            (0x3, _, _) => Instruction::IfRegEqConst(x, kk),
            (0x4, _, _) => Instruction::IfRegNeqConst(x, kk),
            (0x6, _, _) => Instruction::SetRegToConst(x, kk),
            (0x7, _, _) => Instruction::IncRegByConst(x, kk),
            (0x8, 0x0, _) => Instruction::SetRegToReg(x, y),
            (0x8, 0x1, _) => Instruction::BitwiseOr(x, y),
            (0x8, 0x2, _) => Instruction::BitwiseAnd(x, y),
            (0x8, 0x3, _) => Instruction::BitwiseXor(x, y),
            (0x8, 0x4, _) => Instruction::IncRegByReg(x, y),
            (0x8, 0x5, _) => Instruction::DecRegByReg(x, y),
            (0x8, 0x6, _) => Instruction::BitshiftRight(x),
            (0xA, _, _) => Instruction::SetI(nnn),
            (0xC, _, _) => Instruction::SetRegToRand(x, kk),
            (0xD, n, _) => Instruction::Draw(x, y, Const(n)),
            (0xE, _, 0x9E) => Instruction::IfKeyPressed(x),
            (0xE, _, 0xA1) => Instruction::IfKeyNotPressed(x),
            (0xF, _, 0x07) => Instruction::SetRegToDelayTimer(x),
            (0xF, _, 0x15) => Instruction::SetDelayTimerToReg(x),
            (0xF, _, 0x18) => Instruction::SetSoundTimerToReg(x),
            (0xF, _, 0x29) => Instruction::SetIToGlyphOfReg(x),
            (0xF, _, 0x33) => Instruction::StoreBcdOfReg(x),
            (0xF, _, 0x65) => Instruction::RegLoad(x),
            _ => {
                return Err(Error::UnsupportedInstruction {
                    opcode: opcode.as_u16(),
                })
            }
        };

        Ok(instruction)
    }
}
