// console.rs - Prints generations to a terminal

use std::io::{self, Write};
use std::process::Command;

use conway::{Glyphs, Life};
use log::warn;

use crate::config::ClearMode;

/// Something that can wipe the terminal before a frame is drawn.
pub trait ClearScreen {
    fn clear(&mut self, out: &mut dyn Write) -> io::Result<()>;
}

/// Erase display and move the cursor home.
#[derive(Debug, Default)]
pub struct AnsiClear;

impl ClearScreen for AnsiClear {
    fn clear(&mut self, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(b"\x1b[2J\x1b[H")
    }
}

/// Shells out to `clear` (or `cls` on Windows).
///
/// Falls back to doing nothing after the first failure so a missing command
/// does not spam the log every frame.
#[derive(Debug, Default)]
pub struct CommandClear {
    broken: bool,
}

impl ClearScreen for CommandClear {
    fn clear(&mut self, out: &mut dyn Write) -> io::Result<()> {
        if self.broken {
            return Ok(());
        }
        // The child writes straight to the terminal, so anything buffered must go first.
        out.flush()?;
        let status = if cfg!(windows) {
            Command::new("cmd").args(["/C", "cls"]).status()
        } else {
            Command::new("clear").status()
        };
        match status {
            Ok(s) if s.success() => {}
            Ok(s) => {
                warn!("clear command exited with {s}; frames will scroll");
                self.broken = true;
            }
            Err(e) => {
                warn!("could not run clear command: {e}; frames will scroll");
                self.broken = true;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct NoClear;

impl ClearScreen for NoClear {
    fn clear(&mut self, _out: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }
}

pub fn clear_screen(mode: ClearMode) -> Box<dyn ClearScreen> {
    match mode {
        ClearMode::Ansi => Box::new(AnsiClear),
        ClearMode::Command => Box::new(CommandClear::default()),
        ClearMode::None => Box::new(NoClear),
    }
}

/// Header line printed above every frame.
pub fn header(generation: u64) -> String {
    format!("---------- {generation}th generation")
}

/// Draws whole frames: optional clear, header, then one line per row.
pub struct Console<W: Write> {
    out: W,
    clear: Box<dyn ClearScreen>,
    glyphs: Glyphs,
}

impl<W: Write> Console<W> {
    pub fn new(out: W, clear: Box<dyn ClearScreen>, glyphs: Glyphs) -> Self {
        Self { out, clear, glyphs }
    }

    pub fn draw(&mut self, life: &Life) -> io::Result<()> {
        self.clear.clear(&mut self.out)?;
        writeln!(self.out, "{}", header(life.generation()))?;
        for row in life.field().render_with(self.glyphs) {
            writeln!(self.out, "{row}")?;
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(life: &Life, mode: ClearMode, glyphs: Glyphs) -> String {
        let mut console = Console::new(Vec::new(), clear_screen(mode), glyphs);
        console.draw(life).unwrap();
        String::from_utf8(console.into_inner()).unwrap()
    }

    #[test_log::test]
    fn frame_is_header_then_rows() {
        let life = Life::from_lines(["o ", " o"]).unwrap();
        assert_eq!(
            frame(&life, ClearMode::None, Glyphs::default()),
            "---------- 0th generation\no \n o\n"
        );
    }

    #[test_log::test]
    fn ansi_clear_comes_first() {
        let mut life = Life::from_lines(["    ", " oo ", " oo ", "    "]).unwrap();
        life.advance();
        let out = frame(&life, ClearMode::Ansi, Glyphs { alive: '#', dead: '.' });
        assert_eq!(
            out,
            "\x1b[2J\x1b[H---------- 1th generation\n....\n.##.\n.##.\n....\n"
        );
    }

    #[test_log::test]
    fn frames_accumulate_without_clearing() {
        let mut life = Life::from_lines([" o ", " o ", " o "]).unwrap();
        let mut console = Console::new(Vec::new(), Box::new(NoClear), Glyphs::default());
        console.draw(&life).unwrap();
        life.advance();
        console.draw(&life).unwrap();
        let out = String::from_utf8(console.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[4], "---------- 1th generation");
        assert_eq!(lines[5..], ["ooo", "ooo", "ooo"]);
    }
}
