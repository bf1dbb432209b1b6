use std::fmt;

pub const SCREEN_WIDTH: usize = 64;
pub const SCREEN_HEIGHT: usize = 32;

/// Represents a display that sprites can be drawn to.
pub trait EmulatorOutput {
    /// Called once before the first instruction of a run.
    fn init(&mut self) {}

    /// XOR an 8-pixel wide sprite onto the display with its top left corner
    /// at `(x, y)`. Each byte of `sprite` is one row, most significant bit
    /// leftmost.
    fn draw_sprite(&mut self, x: u8, y: u8, sprite: &[u8]);

    /// Blank the whole display. No instruction reaches this; frontends
    /// call it to reset the display between programs.
    fn clear(&mut self);

    /// Called once when a run ends, however it ends.
    fn close(&mut self) {}
}

/// A monochrome pixel buffer. Coordinates wrap around the edges.
#[derive(Clone, PartialEq, Eq)]
pub struct Screen {
    cells: [[u8; SCREEN_WIDTH]; SCREEN_HEIGHT],
}

impl Screen {
    pub fn new() -> Screen {
        Screen {
            cells: [[0; SCREEN_WIDTH]; SCREEN_HEIGHT],
        }
    }

    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.cells[y % SCREEN_HEIGHT][x % SCREEN_WIDTH]
    }

    pub fn clear(&mut self) {
        self.cells = [[0; SCREEN_WIDTH]; SCREEN_HEIGHT];
    }

    /// Draw a sprite and report whether a lit pixel was turned off.
    pub fn draw_sprite(&mut self, x: u8, y: u8, sprite: &[u8]) -> bool {
        self.draw_sprite_with(x, y, sprite, |_, _, _| {})
    }

    /// Like `draw_sprite`, calling `on_change(x, y, state)` for every pixel
    /// whose state flipped.
    pub fn draw_sprite_with<F>(&mut self, x: u8, y: u8, sprite: &[u8], mut on_change: F) -> bool
    where
        F: FnMut(usize, usize, u8),
    {
        let mut collision = false;
        for (row_idx, row) in sprite.iter().enumerate() {
            let py = (y as usize + row_idx) % SCREEN_HEIGHT;
            for bit in 0..8 {
                let new_pixel = (row >> (7 - bit)) & 1;
                if new_pixel == 0 {
                    continue;
                }
                let px = (x as usize + bit) % SCREEN_WIDTH;
                let cell = &mut self.cells[py][px];
                if *cell == 1 {
                    collision = true;
                }
                *cell ^= 1;
                on_change(px, py, *cell);
            }
        }
        collision
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8; SCREEN_WIDTH]> {
        self.cells.iter()
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for c in row.iter() {
                write!(f, "{}", if *c == 1 { "#" } else { " " })?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Debug for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Screen {{")?;
        write!(f, "{}", self)?;
        write!(f, "}}")
    }
}

/// A headless display that keeps its pixels in memory.
#[derive(Debug, Default)]
pub struct DummyOutput {
    screen: Screen,
    draws: usize,
    collisions: usize,
    open: bool,
}

impl DummyOutput {
    pub fn new() -> DummyOutput {
        DummyOutput::default()
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Number of sprites drawn so far.
    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Number of draws that turned off at least one pixel.
    pub fn collisions(&self) -> usize {
        self.collisions
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

impl EmulatorOutput for DummyOutput {
    fn init(&mut self) {
        self.open = true;
    }

    fn draw_sprite(&mut self, x: u8, y: u8, sprite: &[u8]) {
        self.draws += 1;
        if self.screen.draw_sprite(x, y, sprite) {
            self.collisions += 1;
        }
    }

    fn clear(&mut self) {
        self.screen.clear();
    }

    fn close(&mut self) {
        self.open = false;
    }
}

impl fmt::Display for DummyOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.screen)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sprite_rows_are_drawn_msb_first() {
        let mut screen = Screen::new();
        screen.draw_sprite(2, 1, &[0b1000_0001]);
        assert_eq!(screen.get(2, 1), 1);
        assert_eq!(screen.get(9, 1), 1);
        assert_eq!(screen.get(3, 1), 0);
        assert_eq!(screen.get(2, 0), 0);
    }

    #[test]
    fn drawing_twice_erases_and_collides() {
        let mut screen = Screen::new();
        assert!(!screen.draw_sprite(0, 0, &[0xF0, 0x90]));
        assert!(screen.draw_sprite(0, 0, &[0xF0, 0x90]));
        assert_eq!(screen, Screen::new());
    }

    #[test]
    fn sprites_wrap_around_edges() {
        let mut screen = Screen::new();
        screen.draw_sprite(63, 31, &[0xC0, 0xC0]);
        assert_eq!(screen.get(63, 31), 1);
        assert_eq!(screen.get(0, 31), 1);
        assert_eq!(screen.get(63, 0), 1);
        assert_eq!(screen.get(0, 0), 1);
    }

    #[test]
    fn changed_pixels_are_reported() {
        let mut screen = Screen::new();
        let mut changes = Vec::new();
        screen.draw_sprite_with(4, 4, &[0b0110_0000], |x, y, state| changes.push((x, y, state)));
        assert_eq!(changes, vec![(5, 4, 1), (6, 4, 1)]);
    }

    #[test]
    fn dummy_output_counts_draws_and_collisions() {
        let mut output = DummyOutput::new();
        output.init();
        output.draw_sprite(0, 0, &[0x80]);
        output.draw_sprite(0, 0, &[0x80]);
        assert_eq!(output.draws(), 2);
        assert_eq!(output.collisions(), 1);
        assert!(output.is_open());
        output.close();
        assert!(!output.is_open());
    }

    #[test]
    fn clear_blanks_dummy_output() {
        let mut output = DummyOutput::new();
        output.draw_sprite(10, 10, &[0xFF, 0xFF]);
        output.clear();
        assert_eq!(output.screen(), &Screen::new());
        assert_eq!(output.draws(), 1);
    }

    #[test]
    fn display_renders_lit_pixels() {
        let mut output = DummyOutput::new();
        output.draw_sprite(0, 0, &[0xA0]);
        let first_line = output.to_string().lines().next().unwrap().to_string();
        assert_eq!(&first_line[..4], "# # ");
    }
}
