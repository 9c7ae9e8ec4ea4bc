use crate::game::Match;
use crate::position::AlgebraicPosition;
use crate::{MatchRenderer, PositionInput};

/// Runs the interactive move loop against a match.
///
/// Each round: show the board, read a source and show its legal
/// destinations, read a target, apply the move. Rule violations and
/// malformed input are shown to the player and re-prompted; the engine is
/// never left mid-move. The loop ends when the input source is exhausted
/// or the renderer fails.
pub fn run_interactive<I, R>(mut input: I, mut renderer: R, game: &mut Match)
where
    I: PositionInput,
    R: MatchRenderer,
{
    loop {
        if let Err(e) = renderer.show(&game.view()) {
            eprintln!("Failed to render match: {e}");
            return;
        }

        // Source phase: retry until a piece with legal moves is chosen
        let (source, highlights) = loop {
            let Some(position) = read_or_retry(&mut input, "Source") else {
                return;
            };
            match game.legal_moves_from(position) {
                Ok(matrix) => break (position, matrix),
                Err(e) => println!("{e}"),
            }
        };

        if let Err(e) = renderer.show(&game.view_with_highlights(highlights)) {
            eprintln!("Failed to render match: {e}");
            return;
        }

        // Target phase: any well-formed position is handed to the engine
        let Some(target) = read_or_retry(&mut input, "Target") else {
            return;
        };
        if let Err(e) = game.apply_move(source, target) {
            println!("{e}");
        }
    }
}

/// Read one position, re-prompting on malformed input. `None` means the
/// input source is exhausted.
fn read_or_retry(input: &mut impl PositionInput, prompt: &str) -> Option<AlgebraicPosition> {
    loop {
        match input.read_position(prompt) {
            Ok(position) => return position,
            Err(e) => println!("{e}"),
        }
    }
}
