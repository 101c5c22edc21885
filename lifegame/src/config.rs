// config.rs - Defaults and command-line configuration

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use conway::{ALIVE_GLYPH, DEAD_GLYPH, Glyphs, Life, LifeError, patterns};

// Compile-time defaults
pub const DEFAULT_PATTERN_FILE: &str = "init.txt";
pub const DEFAULT_INTERVAL_MS: u64 = 100;
pub const DEFAULT_SIZE: GridSize = GridSize { height: 50, width: 50 };

/// Run Conway's Game of Life in the terminal.
#[derive(Parser, Debug)]
#[command(name = "lifegame", version, about)]
pub struct Args {
    /// Initial pattern file: one line per row, 'o' marks a live cell.
    #[arg(default_value = DEFAULT_PATTERN_FILE)]
    pub file: PathBuf,

    /// Start from a built-in pattern instead of a file.
    #[arg(short, long, value_name = "NAME", conflicts_with = "random")]
    pub pattern: Option<String>,

    /// Start from a seeded random soup instead of a file.
    #[arg(short, long, value_name = "SEED")]
    pub random: Option<u64>,

    /// Grid size for --pattern and --random.
    #[arg(short, long, value_name = "HxW", default_value_t = DEFAULT_SIZE)]
    pub size: GridSize,

    /// Milliseconds between generations.
    #[arg(
        short,
        long,
        value_name = "MS",
        default_value_t = DEFAULT_INTERVAL_MS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub interval: u64,

    /// Stop after this many generations.
    #[arg(short, long, value_name = "N")]
    pub generations: Option<u64>,

    /// Character drawn for a live cell.
    #[arg(long, default_value_t = ALIVE_GLYPH)]
    pub alive: char,

    /// Character drawn for a dead cell.
    #[arg(long, default_value_t = DEAD_GLYPH)]
    pub dead: char,

    /// How to clear the terminal before each frame.
    #[arg(long, value_enum, default_value_t = ClearMode::Ansi)]
    pub clear: ClearMode,

    /// Stop once the grid repeats one of its recent states.
    #[arg(long)]
    pub stop_on_cycle: bool,

    /// Print the built-in pattern names and exit.
    #[arg(long)]
    pub list_patterns: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ClearMode {
    /// Write ANSI erase-display and cursor-home sequences.
    Ansi,
    /// Run the platform's clear command.
    Command,
    /// Never clear; frames scroll.
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub height: usize,
    pub width: usize,
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}

impl FromStr for GridSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (h, w) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected HxW, got {s:?}"))?;
        let parse = |part: &str| -> Result<usize, String> {
            match part.trim().parse::<usize>() {
                Ok(0) => Err("grid dimensions must be at least 1".to_owned()),
                Ok(n) => Ok(n),
                Err(e) => Err(format!("{part:?}: {e}")),
            }
        };
        Ok(Self { height: parse(h)?, width: parse(w)? })
    }
}

/// Where the first generation comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Pattern(String),
    Random(u64),
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::File(path) => write!(f, "file {}", path.display()),
            Source::Pattern(name) => write!(f, "pattern {name:?}"),
            Source::Random(seed) => write!(f, "random soup (seed {seed})"),
        }
    }
}

impl Source {
    /// Builds the initial simulation. `size` is ignored for files, whose
    /// dimensions come from their contents.
    pub fn load(&self, size: GridSize) -> Result<Life, LifeError> {
        match self {
            Source::File(path) => Life::from_file(path),
            Source::Pattern(name) => {
                let pattern = patterns::find(name)
                    .ok_or_else(|| LifeError::UnknownPattern(name.clone()))?;
                Life::from_pattern(size.height, size.width, pattern)
            }
            Source::Random(seed) => Life::random(size.height, size.width, *seed),
        }
    }
}

/// Resolved settings for one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub source: Source,
    pub size: GridSize,
    pub interval: Duration,
    pub generation_limit: Option<u64>,
    pub glyphs: Glyphs,
    pub clear: ClearMode,
    pub stop_on_cycle: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: Source::File(PathBuf::from(DEFAULT_PATTERN_FILE)),
            size: DEFAULT_SIZE,
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
            generation_limit: None,
            glyphs: Glyphs::default(),
            clear: ClearMode::Ansi,
            stop_on_cycle: false,
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let source = match (args.pattern, args.random) {
            (Some(name), _) => Source::Pattern(name),
            (None, Some(seed)) => Source::Random(seed),
            (None, None) => Source::File(args.file),
        };
        Self {
            source,
            size: args.size,
            interval: Duration::from_millis(args.interval),
            generation_limit: args.generations,
            glyphs: Glyphs { alive: args.alive, dead: args.dead },
            clear: args.clear,
            stop_on_cycle: args.stop_on_cycle,
        }
    }
}
