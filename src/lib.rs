use crate::game::MatchView;
use crate::position::AlgebraicPosition;

pub mod board;
pub mod game;
pub mod piece;
pub mod position;
pub mod terminal;

/// Trait for rendering match state to the player.
///
/// Abstracts over output targets (terminal, test buffers), providing a
/// uniform interface for the display side of the game loop. The engine
/// hands implementations an owned [`MatchView`] snapshot, never a live
/// reference into its own state.
pub trait MatchRenderer {
    /// Error type for rendering failures.
    type Error: std::fmt::Debug + std::fmt::Display;

    /// Show the given match snapshot.
    fn show(&mut self, view: &MatchView) -> Result<(), Self::Error>;
}

/// Trait for reading positions from the player.
///
/// Abstracts over input sources (stdin, scripted test input). Mirrors
/// [`MatchRenderer`] on the input side of the game loop.
pub trait PositionInput {
    /// Error type for a malformed position. Implementations report bad
    /// input through this; the surrounding loop shows the message and
    /// re-prompts, so the engine never sees malformed text.
    type Error: std::fmt::Debug + std::fmt::Display;

    /// Read the next position. `Ok(None)` means the input is exhausted
    /// and the session should end.
    fn read_position(&mut self, prompt: &str) -> Result<Option<AlgebraicPosition>, Self::Error>;
}

impl<T: MatchRenderer + ?Sized> MatchRenderer for &mut T {
    type Error = T::Error;

    fn show(&mut self, view: &MatchView) -> Result<(), Self::Error> {
        (**self).show(view)
    }
}

impl<T: PositionInput + ?Sized> PositionInput for &mut T {
    type Error = T::Error;

    fn read_position(&mut self, prompt: &str) -> Result<Option<AlgebraicPosition>, Self::Error> {
        (**self).read_position(prompt)
    }
}
