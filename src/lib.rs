/*!

The CPU core of a CHIP-8 virtual machine, see https://en.wikipedia.org/wiki/CHIP-8.

It fetches two-byte instructions from memory, decodes them and executes them against
a register file, a call stack and two timers. Memory, the display and the keyboard
are collaborators the core talks to through traits.

# Crossterm Frontend

If you want to try the emulator on some programs, there is a ready-to-use implementation
you can run by using `cargo run --release --bin crossterm_frontend -- <program>`.
Use the keys 0-9 and a-f to give input, and `q` or `Esc` to quit.

# Library

If you are not interested in handling input (key presses and such),
then you can use `Emulator::new()` to get an emulator to work with.

The main way of running a program is to load instructions as bytes.

```rust
use chip_8_cpu::emulator::Emulator;
use chip_8_cpu::emulator::instruction::Reg;

let mut emulator = Emulator::new();

// Load a program at address 0x200.
let set_v0 = [0x60, 0x2A];
emulator.load(&set_v0).unwrap();
emulator.step().unwrap(); // V0 is now 0x2A
assert_eq!(emulator.state().register(Reg(0)), 0x2A);
```

Alternatively, you can experiment by executing instructions manually.

```rust
use chip_8_cpu::emulator::Emulator;
use chip_8_cpu::emulator::instruction::{Instruction, Reg, Const, Addr};

let mut emulator = Emulator::new();

// Execute instructions manually
emulator.execute_single(Instruction::Goto(Addr(0x250))).unwrap();

// Or many sequentially
emulator.execute_many(&[
    Instruction::SetRegToConst(Reg(0xA), Const(35)),
    Instruction::SetRegToReg(Reg(0xB), Reg(0xA))
]).unwrap();
assert_eq!(emulator.state().program_counter(), 0x254);
```

To run a program until it is told to stop, hand `run` a stop flag. An instruction the
core does not support ends the run with an error.

```rust
use std::sync::atomic::AtomicBool;
use chip_8_cpu::emulator::{Config, Emulator, Error};
use chip_8_cpu::emulator::{input::DummyInput, output::DummyOutput};

let mut emulator = Emulator::with_config(DummyInput, DummyOutput::new(), Config::instant());
emulator.load(&[0x60, 0x01, 0x50, 0x10]).unwrap();

let stop = AtomicBool::new(false);
assert_eq!(emulator.run(&stop), Err(Error::UnsupportedInstruction { opcode: 0x5010 }));
```

## Custom input and output

To get keypresses, you must implement `EmulatorInput` and `EmulatorOutput`,
which represent somewhere to get keyboard input from and a screen respectively.
These tell the emulator which keys are currently down, and how to draw to the screen.
Take a look at `src/emulator/input.rs` and `src/emulator/output.rs` to see how to implement this, then do the following.

```ignore
use chip_8_cpu::emulator::Emulator;

let mut emulator = Emulator::with_io(MyInput::new(), MyOutput::new());
```

`SharedKeyboard` is an input that another thread can refresh while the emulator runs,
as done with crossterm in crossterm_frontend.
*/

pub mod emulator;
