use std::collections::VecDeque;
use std::convert::Infallible;

use crate::PositionInput;
use crate::position::{AlgebraicPosition, InvalidPosition};

/// A scripted input source for tests and demos.
///
/// Serves a fixed sequence of positions, then reports end of input. New
/// script can be appended at any time.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    pending: VecDeque<AlgebraicPosition>,
}

impl ScriptedInput {
    /// Create with no pending positions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse whitespace-separated positions, e.g. `"c1 c4 c8 c5"`.
    ///
    /// Fails on the first malformed token without queueing anything.
    pub fn parse(script: &str) -> Result<Self, InvalidPosition> {
        let pending = script
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<_, _>>()?;
        Ok(Self { pending })
    }

    /// Queue one more position.
    pub fn push(&mut self, position: AlgebraicPosition) {
        self.pending.push_back(position);
    }

    /// Number of positions not yet consumed.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl PositionInput for ScriptedInput {
    type Error = Infallible;

    fn read_position(&mut self, _prompt: &str) -> Result<Option<AlgebraicPosition>, Self::Error> {
        Ok(self.pending.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serves_positions_in_order() {
        let mut input = ScriptedInput::parse("c1 c4").expect("valid script");
        assert_eq!(input.remaining(), 2);

        let first = input.read_position("Source").expect("infallible");
        assert_eq!(first.map(|p| p.to_string()), Some("c1".to_string()));
        let second = input.read_position("Target").expect("infallible");
        assert_eq!(second.map(|p| p.to_string()), Some("c4".to_string()));
        assert_eq!(input.read_position("Source").expect("infallible"), None);
    }

    #[test]
    fn test_parse_rejects_malformed_token() {
        let result = ScriptedInput::parse("c1 zz");
        assert!(result.is_err());
    }
}
