use std::io::{self, BufRead, Write};

use crate::PositionInput;
use crate::position::{AlgebraicPosition, InvalidPosition};

/// Reads positions from standard input, one per line.
///
/// Malformed lines surface as [`InvalidPosition`] so the session loop can
/// show the message and re-prompt. End of input (or an unreadable stdin)
/// ends the session.
#[derive(Debug, Default)]
pub struct StdinInput;

impl StdinInput {
    /// Create a new stdin reader.
    pub fn new() -> Self {
        Self
    }
}

impl PositionInput for StdinInput {
    type Error = InvalidPosition;

    fn read_position(&mut self, prompt: &str) -> Result<Option<AlgebraicPosition>, Self::Error> {
        print!("{prompt}: ");
        if let Err(e) = io::stdout().flush() {
            eprintln!("Failed to flush stdout: {e}");
            return Ok(None);
        }

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => Ok(None),
            Ok(_) => line.trim().parse().map(Some),
            Err(e) => {
                eprintln!("Failed to read input: {e}");
                Ok(None)
            }
        }
    }
}
