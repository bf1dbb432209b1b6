use chip_8_cpu::emulator::output::{EmulatorOutput, Screen, SCREEN_HEIGHT, SCREEN_WIDTH};

use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};
use std::fmt::Display;
use std::io::{stdout, Stdout, Write};

/// Draws the screen in the terminal, two columns per pixel, inside a border.
pub struct CrosstermOutput {
    stdout: Stdout,
    screen: Screen,
    open: bool,
}

impl CrosstermOutput {
    pub fn new() -> CrosstermOutput {
        CrosstermOutput {
            stdout: stdout(),
            screen: Screen::new(),
            open: false,
        }
    }

    fn draw_border(&mut self) {
        let bottom = SCREEN_HEIGHT as u16 + 1;
        let right = 2 * SCREEN_WIDTH as u16 + 1;
        for y in 0..=bottom {
            for x in 0..=right {
                let c = match (x, y) {
                    (0, 0) => '┏',
                    (x, 0) if x == right => '┓',
                    (0, y) if y == bottom => '┗',
                    (x, y) if x == right && y == bottom => '┛',
                    (_, 0) => '━',
                    (_, y) if y == bottom => '━',
                    (0, _) => '┃',
                    (x, _) if x == right => '┃',
                    _ => continue,
                };
                report(queue!(self.stdout, cursor::MoveTo(x, y), Print(c)));
            }
        }
        report(self.stdout.flush());
    }
}

/// Terminal errors are not worth stopping the program for.
fn report<E: Display>(result: Result<(), E>) {
    if let Err(e) = result {
        log::warn!("Terminal error: {}", e);
    }
}

fn cell(state: u8) -> &'static str {
    if state == 1 { "██" } else { "  " }
}

impl Drop for CrosstermOutput {
    fn drop(&mut self) {
        self.close();
    }
}

impl EmulatorOutput for CrosstermOutput {
    fn init(&mut self) {
        report(terminal::enable_raw_mode());
        report(execute!(self.stdout, EnterAlternateScreen, cursor::Hide));
        self.open = true;
        self.clear();
    }

    fn draw_sprite(&mut self, x: u8, y: u8, sprite: &[u8]) {
        let stdout = &mut self.stdout;
        self.screen.draw_sprite_with(x, y, sprite, |px, py, state| {
            report(queue!(
                stdout,
                cursor::MoveTo(2 * px as u16 + 1, py as u16 + 1),
                Print(cell(state))
            ));
        });
        report(self.stdout.flush());
    }

    fn clear(&mut self) {
        self.screen.clear();
        report(execute!(self.stdout, Clear(ClearType::All)));
        self.draw_border();
    }

    fn close(&mut self) {
        if self.open {
            self.open = false;
            report(execute!(self.stdout, cursor::Show, LeaveAlternateScreen));
            report(terminal::disable_raw_mode());
        }
    }
}
