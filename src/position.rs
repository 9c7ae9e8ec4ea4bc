//! Algebraic notation: the human-facing file+rank addressing ("e4") and its
//! conversion to and from internal [`Coordinate`]s.

use std::str::FromStr;

use thiserror::Error;

use crate::board::{BOARD_SIZE, Coordinate};

/// Error for an out-of-range or unparsable position.
///
/// Covers both construction from bad file/rank values and malformed text
/// read at the input boundary. The message names the valid range so it can
/// be shown to the player verbatim.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid position '{0}': valid positions range from a1 to h8")]
pub struct InvalidPosition(String);

/// A board address as players write it: file letter 'a'-'h' plus rank 1-8.
///
/// Always valid by construction. Rank 1 is the bottom of the rendered board,
/// which is internal row 7; the conversion flips accordingly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlgebraicPosition {
    file: char,
    rank: u8,
}

impl AlgebraicPosition {
    /// Create a position, validating file and rank ranges.
    pub fn new(file: char, rank: u8) -> Result<Self, InvalidPosition> {
        if !('a'..='h').contains(&file) || !(1..=8).contains(&rank) {
            return Err(InvalidPosition(format!("{file}{rank}")));
        }
        Ok(Self { file, rank })
    }

    #[inline]
    pub fn file(self) -> char {
        self.file
    }

    #[inline]
    pub fn rank(self) -> u8 {
        self.rank
    }

    /// The internal grid address for this position.
    #[inline]
    pub fn to_coordinate(self) -> Coordinate {
        Coordinate::new(
            BOARD_SIZE - self.rank as usize,
            (self.file as u8 - b'a') as usize,
        )
    }

    /// The position for an internal grid address, re-validating the ranges.
    pub fn from_coordinate(coordinate: Coordinate) -> Result<Self, InvalidPosition> {
        if coordinate.row >= BOARD_SIZE || coordinate.column >= BOARD_SIZE {
            return Err(InvalidPosition(coordinate.to_string()));
        }
        Self::new(
            (b'a' + coordinate.column as u8) as char,
            (BOARD_SIZE - coordinate.row) as u8,
        )
    }
}

impl std::fmt::Display for AlgebraicPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}

impl FromStr for AlgebraicPosition {
    type Err = InvalidPosition;

    /// Parse exactly two characters: a lowercase file letter and a rank
    /// digit. Anything else is malformed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next())
            && let Some(rank) = rank.to_digit(10)
        {
            return Self::new(file, rank as u8);
        }
        Err(InvalidPosition(s.to_string()))
    }
}
