use std::io::{self, Write};

use crate::MatchRenderer;
use crate::board::Coordinate;
use crate::game::MatchView;
use crate::piece::{Color, Piece};

const RESET: &str = "\x1b[0m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const WHITE: &str = "\x1b[37m";
const RED_BACKGROUND: &str = "\x1b[41m";

/// Clears the screen and moves the cursor to the top-left.
#[inline]
fn clear_screen() {
    print!("\x1b[2J\x1b[H");
}

/// Terminal board display.
///
/// Renders a [`MatchView`] as an 8×8 grid with ANSI-colored pieces, a red
/// background on highlighted destination squares, the captured-piece lists
/// and the turn status.
#[derive(Debug, Default)]
pub struct TerminalRenderer;

impl TerminalRenderer {
    /// Create a new terminal renderer.
    pub fn new() -> Self {
        Self
    }
}

/// Error type for terminal rendering operations.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("failed to write to terminal: {0}")]
    Io(#[from] io::Error),
}

impl MatchRenderer for TerminalRenderer {
    type Error = DisplayError;

    fn show(&mut self, view: &MatchView) -> Result<(), Self::Error> {
        clear_screen();
        render_view(&mut io::stdout(), view)
    }
}

/// Render a match view to any writer. Extracted for testability.
fn render_view(w: &mut impl Write, view: &MatchView) -> Result<(), DisplayError> {
    for (row, cells) in view.pieces.iter().enumerate() {
        write!(w, "{GREEN}{} {RESET}", view.pieces.len() - row)?;
        for (column, cell) in cells.iter().enumerate() {
            let highlighted = view
                .highlights
                .as_ref()
                .is_some_and(|matrix| matrix.get(Coordinate::new(row, column)));
            write_cell(w, *cell, highlighted)?;
        }
        writeln!(w)?;
    }
    writeln!(w, "{GREEN}  a b c d e f g h{RESET}")?;

    writeln!(w)?;
    writeln!(w, "Captured pieces:")?;
    for color in [Color::White, Color::Black] {
        write!(w, "{color}:")?;
        for piece in view.captured.iter().filter(|piece| piece.color == color) {
            write!(w, " {piece}")?;
        }
        writeln!(w)?;
    }

    writeln!(w)?;
    writeln!(w, "Turn: {}", view.turn)?;
    writeln!(w, "Waiting player: {}", view.side_to_move)?;
    if view.check {
        writeln!(w, "CHECK!")?;
    }
    w.flush()?;
    Ok(())
}

/// Write a single board cell: a colored piece symbol or a dash, with a red
/// background when the cell is a highlighted destination.
fn write_cell(w: &mut impl Write, cell: Option<Piece>, highlighted: bool) -> Result<(), DisplayError> {
    if highlighted {
        write!(w, "{RED_BACKGROUND}")?;
    }
    match cell {
        Some(piece) => {
            let foreground = match piece.color {
                Color::White => WHITE,
                Color::Black => YELLOW,
            };
            write!(w, "{foreground}{piece}")?;
        }
        None => write!(w, "-")?,
    }
    write!(w, "{RESET} ")?;
    Ok(())
}
