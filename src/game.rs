//! The match state machine: turn sequencing, the two-phase move-validation
//! protocol, and captured-piece bookkeeping.

use crate::board::{BOARD_SIZE, Board, BoardError, Coordinate, MoveMatrix};
use crate::piece::{Color, Piece, PieceKind};
use crate::position::AlgebraicPosition;

/// Error type for rejected moves. Each rule violation is its own variant so
/// callers and tests can branch on kind; the messages are shown to the
/// player verbatim.
///
/// `Display`, `Error`, and `From<BoardError>` are implemented by hand
/// because thiserror would treat the `source` field of
/// [`MoveError::IllegalTargetForPiece`] as the error's cause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    NoPieceAtSource(AlgebraicPosition),
    NotCurrentPlayersPiece(AlgebraicPosition),
    PieceHasNoLegalMoves(AlgebraicPosition),
    IllegalTargetForPiece {
        source: AlgebraicPosition,
        target: AlgebraicPosition,
    },
    /// A board-level invariant violation. Unreachable from validated
    /// algebraic input; propagated rather than panicking.
    Board(BoardError),
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::NoPieceAtSource(pos) => {
                write!(f, "there is no piece at {pos}")
            }
            MoveError::NotCurrentPlayersPiece(pos) => {
                write!(f, "the piece at {pos} belongs to the opponent")
            }
            MoveError::PieceHasNoLegalMoves(pos) => {
                write!(f, "the piece at {pos} has no legal moves")
            }
            MoveError::IllegalTargetForPiece { source, target } => {
                write!(f, "the piece at {source} cannot move to {target}")
            }
            MoveError::Board(err) => std::fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::Board(err) => std::error::Error::source(err),
            _ => None,
        }
    }
}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        MoveError::Board(err)
    }
}

/// Read-only snapshot of a match for rendering. Owns all of its data, so
/// no renderer can alias or mutate engine state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchView {
    pub pieces: Vec<Vec<Option<Piece>>>,
    pub turn: u32,
    pub side_to_move: Color,
    pub captured: Vec<Piece>,
    pub check: bool,
    /// Legal destinations to highlight, when a source piece is selected.
    pub highlights: Option<MoveMatrix>,
}

/// A running match: the board, whose turn it is, and the pieces captured
/// so far.
///
/// All mutation goes through [`Match::apply_move`], which validates the
/// source and target before touching any state. A rejected move leaves the
/// match exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    board: Board,
    turn: u32,
    side_to_move: Color,
    captured: Vec<Piece>,
}

impl Match {
    /// Start a match with the fixed initial layout: each side has rooks on
    /// the c, d and e files around a king on the d file.
    pub fn new() -> Self {
        let mut board = Board::new(BOARD_SIZE, BOARD_SIZE);

        for (file, rank, kind, color) in [
            ('c', 1, PieceKind::Rook, Color::White),
            ('d', 2, PieceKind::Rook, Color::White),
            ('e', 2, PieceKind::Rook, Color::White),
            ('e', 1, PieceKind::Rook, Color::White),
            ('d', 1, PieceKind::King, Color::White),
            ('c', 8, PieceKind::Rook, Color::Black),
            ('d', 7, PieceKind::Rook, Color::Black),
            ('e', 7, PieceKind::Rook, Color::Black),
            ('e', 8, PieceKind::Rook, Color::Black),
            ('d', 8, PieceKind::King, Color::Black),
        ] {
            let at = AlgebraicPosition::new(file, rank)
                .expect("initial layout uses valid algebraic positions")
                .to_coordinate();
            board
                .place(Piece::new(kind, color), at)
                .expect("initial layout places each piece on a distinct empty square");
        }

        Self {
            board,
            turn: 1,
            side_to_move: Color::White,
            captured: Vec::new(),
        }
    }

    /// Turn counter, starting at 1.
    #[inline]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// The color whose turn it currently is.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Pieces captured so far, in capture order.
    #[inline]
    pub fn captured(&self) -> &[Piece] {
        &self.captured
    }

    /// An owned matrix of the current piece placement, for display.
    pub fn pieces(&self) -> Vec<Vec<Option<Piece>>> {
        let mut matrix = vec![vec![None; self.board.columns()]; self.board.rows()];
        for (at, piece) in self.board.pieces() {
            matrix[at.row][at.column] = Some(piece);
        }
        matrix
    }

    /// Pieces still on the board as `(position, piece)` pairs.
    pub fn pieces_in_play(&self) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        self.board.pieces()
    }

    /// Whether the side to move has its king on an opponent-reachable
    /// square. Legal moves are not filtered by this; it is informational.
    pub fn in_check(&self) -> bool {
        self.color_in_check(self.side_to_move)
    }

    fn color_in_check(&self, color: Color) -> bool {
        let Some(king_at) = self
            .board
            .pieces()
            .find(|(_, piece)| piece.kind == PieceKind::King && piece.color == color)
            .map(|(at, _)| at)
        else {
            return false;
        };
        self.board
            .pieces()
            .filter(|(_, piece)| piece.color == color.opponent())
            .any(|(from, piece)| piece.can_move_to(&self.board, from, king_at))
    }

    /// The legal-destination matrix for the piece at `source`, for
    /// highlighting. Validates the source exactly like [`Match::apply_move`]
    /// and never mutates state.
    pub fn legal_moves_from(&self, source: AlgebraicPosition) -> Result<MoveMatrix, MoveError> {
        let (piece, from) = self.validate_source(source)?;
        Ok(piece.legal_moves(&self.board, from))
    }

    /// Move the piece at `source` to `target`, returning the captured
    /// opponent piece if the target was occupied.
    ///
    /// Validation is all-or-nothing: if the source or target is rejected,
    /// no state changes and the turn does not advance.
    pub fn apply_move(
        &mut self,
        source: AlgebraicPosition,
        target: AlgebraicPosition,
    ) -> Result<Option<Piece>, MoveError> {
        let (piece, from) = self.validate_source(source)?;
        let to = self.validate_target(piece, from, source, target)?;

        // Validation passed; the mutations below cannot fail on a
        // consistent board.
        self.board.remove(from)?;
        let captured = self.board.remove(to)?;
        if let Some(captured) = captured {
            self.captured.push(captured);
        }
        self.board.place(piece, to)?;

        log::debug!(
            "turn {}: {} {} {source} -> {target}{}",
            self.turn,
            piece.color,
            piece.kind.symbol(),
            match captured {
                Some(taken) => format!(", capturing {} {}", taken.color, taken.kind.symbol()),
                None => String::new(),
            },
        );

        self.next_turn();
        Ok(captured)
    }

    /// A display snapshot of the current state.
    pub fn view(&self) -> MatchView {
        MatchView {
            pieces: self.pieces(),
            turn: self.turn,
            side_to_move: self.side_to_move,
            captured: self.captured.clone(),
            check: self.in_check(),
            highlights: None,
        }
    }

    /// A display snapshot with legal destinations highlighted.
    pub fn view_with_highlights(&self, highlights: MoveMatrix) -> MatchView {
        MatchView {
            highlights: Some(highlights),
            ..self.view()
        }
    }

    /// Phase one: the source cell must hold a piece, the piece must belong
    /// to the side to move, and it must have somewhere to go.
    fn validate_source(&self, source: AlgebraicPosition) -> Result<(Piece, Coordinate), MoveError> {
        let from = source.to_coordinate();
        let Some(piece) = self.board.piece(from)? else {
            return Err(MoveError::NoPieceAtSource(source));
        };
        if piece.color != self.side_to_move {
            return Err(MoveError::NotCurrentPlayersPiece(source));
        }
        if !piece.has_any_legal_move(&self.board, from) {
            return Err(MoveError::PieceHasNoLegalMoves(source));
        }
        Ok((piece, from))
    }

    /// Phase two: the target must be in the source piece's reachability
    /// matrix.
    fn validate_target(
        &self,
        piece: Piece,
        from: Coordinate,
        source: AlgebraicPosition,
        target: AlgebraicPosition,
    ) -> Result<Coordinate, MoveError> {
        let to = target.to_coordinate();
        if !piece.can_move_to(&self.board, from, to) {
            return Err(MoveError::IllegalTargetForPiece { source, target });
        }
        Ok(to)
    }

    fn next_turn(&mut self) {
        self.turn += 1;
        self.side_to_move = self.side_to_move.opponent();
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new()
    }
}
