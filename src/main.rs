use chess_match::game::Match;
use chess_match::terminal::{StdinInput, TerminalRenderer, run_interactive};

fn main() {
    env_logger::init();

    let mut game = Match::new();
    run_interactive(StdinInput::new(), TerminalRenderer::new(), &mut game);
}
