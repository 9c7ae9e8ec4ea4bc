mod display;
mod input;
mod script;
mod session;

pub use display::TerminalRenderer;
pub use input::StdinInput;
pub use script::ScriptedInput;
pub use session::run_interactive;
