// field.rs - Toroidal grid of cells for Conway's Game of Life

use std::fmt;

use crate::error::{LifeError, Result};

/// Character marking a live cell, both in pattern files and on screen.
pub const ALIVE_GLYPH: char = 'o';
/// Character printed for a dead cell.
pub const DEAD_GLYPH: char = ' ';

/// The pair of characters used to draw live and dead cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub alive: char,
    pub dead: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self { alive: ALIVE_GLYPH, dead: DEAD_GLYPH }
    }
}

/// A fixed-size grid of cells whose edges wrap around.
///
/// Reads through [`Field::is_alive`] wrap on both axes, so every cell has
/// exactly eight neighbours. Writes through [`Field::set`] never wrap.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    cells: Vec<bool>,   // row-major, height * width
    height: usize,
    width: usize,
}

impl Field {
    /// Creates a `height` x `width` field with every cell dead.
    ///
    /// Zero-sized grids and grids whose cell count cannot be allocated are
    /// rejected with `InvalidDimensions`.
    pub fn new(height: usize, width: usize) -> Result<Self> {
        let invalid = || LifeError::InvalidDimensions {
            expected_rows: height,
            expected_cols: width,
            rows: height,
            cols: width,
        };
        if height == 0 || width == 0 {
            return Err(invalid());
        }
        let len = height.checked_mul(width).ok_or_else(invalid)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| invalid())?;
        cells.resize(len, false);
        Ok(Self { cells, height, width })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Sets a single cell. Coordinates outside the grid are rejected.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<()> {
        if row >= self.height || col >= self.width {
            return Err(LifeError::OutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            });
        }
        self.cells[row * self.width + col] = alive;
        Ok(())
    }

    /// Reads a cell, wrapping both coordinates around the torus.
    pub fn is_alive(&self, row: isize, col: isize) -> bool {
        let r = row.rem_euclid(self.height as isize) as usize;
        let c = col.rem_euclid(self.width as isize) as usize;
        self.cells[r * self.width + c]
    }

    /// Number of live cells among the eight wrapped neighbours.
    pub fn live_neighbours(&self, row: isize, col: isize) -> u8 {
        // Fold onto the grid first so the offsets below cannot overflow.
        let row = row.rem_euclid(self.height as isize);
        let col = col.rem_euclid(self.width as isize);
        let mut count = 0;
        for dr in -1..=1 {
            for dc in -1..=1 {
                if (dr != 0 || dc != 0) && self.is_alive(row + dr, col + dc) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Applies B3/S23 to one cell without touching the field.
    pub fn will_be_alive_next(&self, row: isize, col: isize) -> bool {
        match (self.is_alive(row, col), self.live_neighbours(row, col)) {
            (true, 2) | (true, 3) => true,   // Survival
            (false, 3)            => true,   // Birth
            _                     => false,  // Death or stays dead
        }
    }

    /// Writes the next generation of every cell into `next`.
    ///
    /// `next` must have the same dimensions.
    pub(crate) fn step_into(&self, next: &mut Field) {
        debug_assert_eq!((self.height, self.width), (next.height, next.width));
        for (i, cell) in next.cells.iter_mut().enumerate() {
            let (r, c) = (i / self.width, i % self.width);
            *cell = self.will_be_alive_next(r as isize, c as isize);
        }
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Rows drawn with the default glyphs.
    pub fn render(&self) -> Rows<'_> {
        self.render_with(Glyphs::default())
    }

    /// Rows drawn with a custom glyph pair. The iterator borrows the field and
    /// can be cloned to walk the rows again.
    pub fn render_with(&self, glyphs: Glyphs) -> Rows<'_> {
        Rows { chunks: self.cells.chunks(self.width), glyphs }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.render() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

/// Lazily formatted rows of a [`Field`], top to bottom.
#[derive(Debug, Clone)]
pub struct Rows<'a> {
    chunks: std::slice::Chunks<'a, bool>,
    glyphs: Glyphs,
}

impl Iterator for Rows<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let glyphs = self.glyphs;
        self.chunks.next().map(|row| {
            row.iter()
                .map(|&alive| if alive { glyphs.alive } else { glyphs.dead })
                .collect()
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Rows<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_with(height: usize, width: usize, alive: &[(usize, usize)]) -> Field {
        let mut field = Field::new(height, width).unwrap();
        for &(r, c) in alive {
            field.set(r, c, true).unwrap();
        }
        field
    }

    #[test_log::test]
    fn new_field_is_dead() {
        let field = Field::new(3, 5).unwrap();
        assert_eq!(field.height(), 3);
        assert_eq!(field.width(), 5);
        assert_eq!(field.population(), 0);
    }

    #[test_log::test]
    fn zero_sized_field_is_rejected() {
        assert!(matches!(Field::new(0, 4), Err(LifeError::InvalidDimensions { .. })));
        assert!(matches!(Field::new(4, 0), Err(LifeError::InvalidDimensions { .. })));
    }

    #[test_log::test]
    fn oversized_field_is_rejected() {
        // Cell count overflows usize.
        assert!(matches!(
            Field::new(usize::MAX, 2),
            Err(LifeError::InvalidDimensions { expected_rows: usize::MAX, expected_cols: 2, .. })
        ));
        // Cell count fits in usize but exceeds what a Vec can hold.
        assert!(matches!(
            Field::new(usize::MAX / 2, 2),
            Err(LifeError::InvalidDimensions { .. })
        ));
    }

    #[test_log::test]
    fn set_outside_grid_fails_and_leaves_field_untouched() {
        let mut field = Field::new(2, 3).unwrap();
        let err = field.set(2, 0, true).unwrap_err();
        assert!(matches!(
            err,
            LifeError::OutOfBounds { row: 2, col: 0, height: 2, width: 3 }
        ));
        assert!(field.set(0, 3, true).is_err());
        assert_eq!(field.population(), 0);
    }

    #[test_log::test]
    fn negative_and_overflowing_reads_wrap() {
        let field = field_with(3, 4, &[(0, 0), (2, 3)]);
        assert!(field.is_alive(-1, -1));
        assert!(field.is_alive(3, 4));
        assert!(field.is_alive(-3, 8));
        assert!(!field.is_alive(-1, 0));
    }

    #[test_log::test]
    fn neighbours_wrap_across_corners() {
        // The four corners of a torus touch each other.
        let field = field_with(4, 4, &[(0, 0), (0, 3), (3, 0)]);
        assert_eq!(field.live_neighbours(3, 3), 3);
        assert!(field.will_be_alive_next(3, 3));
    }

    #[test_log::test]
    fn rule_handles_extreme_coordinates() {
        // isize::MAX folds onto row 1 of a 3x3 (isize::MAX is 1 mod 3); MIN folds onto row 1 too.
        let field = field_with(3, 3, &[(0, 0), (0, 1), (0, 2)]);
        assert_eq!(field.live_neighbours(isize::MAX, 0), field.live_neighbours(1, 0));
        assert_eq!(field.live_neighbours(isize::MIN, isize::MAX), field.live_neighbours(1, 1));
        assert!(field.will_be_alive_next(isize::MAX, 0));
        assert_eq!(
            field.will_be_alive_next(isize::MIN, isize::MIN),
            field.will_be_alive_next(1, 1)
        );
    }

    #[test_log::test]
    fn self_cell_is_not_counted() {
        let field = field_with(5, 5, &[(2, 2), (2, 1), (2, 3)]);
        assert_eq!(field.live_neighbours(2, 2), 2);
        assert_eq!(field.live_neighbours(1, 2), 3);
    }

    #[test_log::test]
    fn rule_b3_s23() {
        // Lone cell dies of isolation.
        let lone = field_with(5, 5, &[(2, 2)]);
        assert!(!lone.will_be_alive_next(2, 2));

        // Blinker centre survives while its ends die and its sides are born.
        let blinker = field_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        assert!(blinker.will_be_alive_next(2, 2));
        assert!(!blinker.will_be_alive_next(2, 1));
        assert!(blinker.will_be_alive_next(1, 2));
        assert!(blinker.will_be_alive_next(3, 2));

        // Overcrowded centre dies.
        let crowded = field_with(5, 5, &[(1, 1), (1, 2), (1, 3), (2, 1), (2, 2)]);
        assert!(!crowded.will_be_alive_next(2, 2));
    }

    #[test_log::test]
    fn render_uses_glyphs_and_restarts() {
        let field = field_with(2, 3, &[(0, 1), (1, 2)]);
        let rows = field.render();
        assert_eq!(rows.len(), 2);
        let first: Vec<String> = rows.clone().collect();
        let second: Vec<String> = rows.collect();
        assert_eq!(first, vec![" o ", "  o"]);
        assert_eq!(first, second);

        let custom: Vec<String> = field.render_with(Glyphs { alive: '#', dead: '.' }).collect();
        assert_eq!(custom, vec![".#.", "..#"]);
    }

    #[test_log::test]
    fn display_prints_one_line_per_row() {
        let field = field_with(2, 2, &[(0, 0)]);
        assert_eq!(field.to_string(), "o \n  \n");
    }

    #[test_log::test]
    fn clear_kills_everything() {
        let mut field = field_with(3, 3, &[(0, 0), (1, 1), (2, 2)]);
        assert_eq!(field.population(), 3);
        field.clear();
        assert_eq!(field.population(), 0);
    }
}
