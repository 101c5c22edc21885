// life.rs - Double-buffered Game of Life simulation

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, trace};

use crate::error::{LifeError, Malformed, Result};
use crate::field::{ALIVE_GLYPH, Field, Glyphs};
use crate::patterns::{Pattern, Soup};

/// A rendered copy of one generation, detached from the simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub generation: u64,
    pub lines: Vec<String>,
}

/// Current and next generation fields plus the generation counter.
///
/// `advance` reads only from `current` and writes only into `next`, then
/// swaps the two, so a generation is never computed from half-updated cells.
#[derive(Debug, Clone)]
pub struct Life {
    current: Field,
    next: Field,
    generation: u64,
}

impl Life {
    /// Builds a simulation from a `height` x `width` grid of cell states.
    pub fn new(height: usize, width: usize, pattern: Vec<Vec<bool>>) -> Result<Self> {
        let cols = pattern.first().map_or(0, Vec::len);
        let ragged = pattern.iter().any(|row| row.len() != width);
        if height == 0 || width == 0 || pattern.len() != height || ragged {
            return Err(LifeError::InvalidDimensions {
                expected_rows: height,
                expected_cols: width,
                rows: pattern.len(),
                cols: pattern.iter().map(Vec::len).find(|&len| len != width).unwrap_or(cols),
            });
        }

        let mut current = Field::new(height, width)?;
        for (r, row) in pattern.into_iter().enumerate() {
            for (c, alive) in row.into_iter().enumerate() {
                current.set(r, c, alive)?;
            }
        }
        Ok(Self::with_field(current))
    }

    /// Parses equal-length text lines; `'o'` is alive, anything else is dead.
    pub fn from_lines<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut pattern: Vec<Vec<bool>> = Vec::new();
        let mut width = 0;
        for (i, line) in lines.into_iter().enumerate() {
            let row: Vec<bool> = line.as_ref().chars().map(|ch| ch == ALIVE_GLYPH).collect();
            if i == 0 {
                width = row.len();
            } else if row.len() != width {
                return Err(LifeError::MalformedInput(Malformed::RaggedLine {
                    line: i,
                    expected: width,
                    found: row.len(),
                }));
            }
            pattern.push(row);
        }
        if pattern.is_empty() {
            return Err(LifeError::MalformedInput(Malformed::Empty));
        }
        Self::new(pattern.len(), width, pattern)
    }

    /// Reads a pattern file's contents.
    ///
    /// Line terminators are kept and count as dead cells, so each row is wider
    /// than its visible text. A final line with no terminator comes up short
    /// and is rejected as ragged.
    pub fn from_reader<R: BufRead>(mut reader: R) -> Result<Self> {
        let mut lines = Vec::new();
        let mut buf = Vec::new();
        while reader.read_until(b'\n', &mut buf)? > 0 {
            lines.push(String::from_utf8_lossy(&buf).into_owned());
            buf.clear();
        }
        Self::from_lines(lines)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading initial pattern from {}", path.display());
        let life = Self::from_reader(BufReader::new(File::open(path)?))?;
        debug!("loaded {}x{} field", life.height(), life.width());
        Ok(life)
    }

    /// Places a built-in pattern in the middle of an empty field.
    pub fn from_pattern(height: usize, width: usize, pattern: &Pattern) -> Result<Self> {
        let mut field = Field::new(height, width)?;
        let (rows, cols) = pattern.extent();
        let top = height.saturating_sub(rows) / 2;
        let left = width.saturating_sub(cols) / 2;
        for &(r, c) in pattern.cells {
            field.set(top + r, left + c, true)?;
        }
        debug!("placed {} at ({top}, {left})", pattern.name);
        Ok(Self::with_field(field))
    }

    /// Fills a field from a seeded pseudo-random soup.
    pub fn random(height: usize, width: usize, seed: u64) -> Result<Self> {
        let mut field = Field::new(height, width)?;
        let mut soup = Soup::new(seed);
        for r in 0..height {
            for c in 0..width {
                field.set(r, c, soup.next_cell())?;
            }
        }
        Ok(Self::with_field(field))
    }

    fn with_field(current: Field) -> Self {
        let mut next = current.clone();
        next.clear();
        Self { current, next, generation: 0 }
    }

    /// Computes the next generation and makes it current.
    ///
    /// Always counts as one generation, even when nothing changed.
    pub fn advance(&mut self) {
        self.current.step_into(&mut self.next);
        std::mem::swap(&mut self.current, &mut self.next);
        self.next.clear();
        self.generation += 1;
        trace!(
            "generation {} population {}",
            self.generation,
            self.current.population()
        );
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Read-only view of the current generation.
    pub fn field(&self) -> &Field {
        &self.current
    }

    pub fn height(&self) -> usize {
        self.current.height()
    }

    pub fn width(&self) -> usize {
        self.current.width()
    }

    pub fn current_generation(&self) -> Snapshot {
        self.snapshot_with(Glyphs::default())
    }

    pub fn snapshot_with(&self, glyphs: Glyphs) -> Snapshot {
        Snapshot {
            generation: self.generation,
            lines: self.current.render_with(glyphs).collect(),
        }
    }
}
