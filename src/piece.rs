//! Piece types and per-kind move generation.
//!
//! Each piece kind computes a full [`MoveMatrix`] for its current square:
//! pure functions over board occupancy, with no notion of whose turn it is.
//! Turn ownership and the move protocol are `game`'s concern.

use crate::board::{Board, Coordinate, MoveMatrix};

/// The two sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// The other side.
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// The closed set of piece kinds the engine knows how to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Rook,
    King,
}

impl PieceKind {
    /// One-letter board symbol.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            PieceKind::Rook => 'R',
            PieceKind::King => 'K',
        }
    }
}

/// A piece: a kind and a color. Plain value type; its position is wherever
/// the [`Board`] cell holding it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// Compute the full reachability matrix for this piece standing at
    /// `from`, given current board occupancy.
    ///
    /// Legality here is in isolation: turn ownership and king safety are
    /// not considered.
    pub fn legal_moves(&self, board: &Board, from: Coordinate) -> MoveMatrix {
        match self.kind {
            PieceKind::Rook => rook_moves(self.color, board, from),
            PieceKind::King => king_moves(self.color, board, from),
        }
    }

    /// Whether this piece standing at `from` may move to `target`.
    /// Agrees exactly with indexing the matrix from [`Piece::legal_moves`].
    pub fn can_move_to(&self, board: &Board, from: Coordinate, target: Coordinate) -> bool {
        self.legal_moves(board, from).get(target)
    }

    /// Whether this piece standing at `from` has at least one legal move.
    pub fn has_any_legal_move(&self, board: &Board, from: Coordinate) -> bool {
        self.legal_moves(board, from).any()
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind.symbol())
    }
}

/// Scan order: up, left, right, down.
const ORTHOGONALS: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

/// Rook reachability: cast a ray in each orthogonal direction, marking empty
/// cells until the ray hits a piece. An opponent piece is marked as a capture
/// square and ends the ray; a friendly piece ends the ray unmarked.
fn rook_moves(color: Color, board: &Board, from: Coordinate) -> MoveMatrix {
    let mut matrix = MoveMatrix::new(board.rows(), board.columns());

    for (row_delta, column_delta) in ORTHOGONALS {
        let mut cursor = board.step(from, row_delta, column_delta);
        while let Some(at) = cursor {
            // `step` keeps us on the board, so the lookup cannot fail
            let Ok(occupant) = board.piece(at) else { break };
            match occupant {
                None => {
                    matrix.set(at, true);
                    cursor = board.step(at, row_delta, column_delta);
                }
                Some(piece) => {
                    if piece.color != color {
                        matrix.set(at, true);
                    }
                    break;
                }
            }
        }
    }

    matrix
}

/// King reachability: the up to 8 adjacent cells, each legal when empty or
/// holding an opponent piece. No attacked-square filtering.
fn king_moves(color: Color, board: &Board, from: Coordinate) -> MoveMatrix {
    let mut matrix = MoveMatrix::new(board.rows(), board.columns());

    for row_delta in -1..=1 {
        for column_delta in -1..=1 {
            if row_delta == 0 && column_delta == 0 {
                continue;
            }
            if let Some(at) = board.step(from, row_delta, column_delta)
                && let Ok(occupant) = board.piece(at)
                && occupant.is_none_or(|piece| piece.color != color)
            {
                matrix.set(at, true);
            }
        }
    }

    matrix
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BOARD_SIZE;
    use test_case::test_case;

    fn board() -> Board {
        Board::new(BOARD_SIZE, BOARD_SIZE)
    }

    fn at(row: usize, column: usize) -> Coordinate {
        Coordinate::new(row, column)
    }

    fn marked(matrix: &MoveMatrix) -> Vec<Coordinate> {
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |column| at(row, column)))
            .filter(|&coord| matrix.get(coord))
            .collect()
    }

    #[test]
    fn test_rook_on_empty_board_reaches_full_row_and_column() {
        let mut board = board();
        let rook = Piece::new(PieceKind::Rook, Color::White);
        let from = at(4, 4);
        board.place(rook, from).expect("cell is empty");

        let matrix = rook.legal_moves(&board, from);

        for row in 0..BOARD_SIZE {
            for column in 0..BOARD_SIZE {
                let coord = at(row, column);
                let on_cross = (row == 4) != (column == 4);
                assert_eq!(matrix.get(coord), on_cross, "unexpected mark at {coord}");
            }
        }
        // 7 in the row plus 7 in the column
        assert_eq!(marked(&matrix).len(), 14);
    }

    #[test]
    fn test_rook_ray_stops_before_friendly_piece() {
        let mut board = board();
        let rook = Piece::new(PieceKind::Rook, Color::White);
        let from = at(4, 4);
        board.place(rook, from).expect("cell is empty");
        board
            .place(Piece::new(PieceKind::Rook, Color::White), at(4, 2))
            .expect("cell is empty");

        let matrix = rook.legal_moves(&board, from);

        assert!(matrix.get(at(4, 3)), "cell before the blocker is reachable");
        assert!(!matrix.get(at(4, 2)), "friendly blocker is not a target");
        assert!(!matrix.get(at(4, 1)), "ray does not pass the blocker");
        assert!(!matrix.get(at(4, 0)));
    }

    #[test]
    fn test_rook_ray_stops_on_opponent_capture_square() {
        let mut board = board();
        let rook = Piece::new(PieceKind::Rook, Color::White);
        let from = at(4, 4);
        board.place(rook, from).expect("cell is empty");
        board
            .place(Piece::new(PieceKind::Rook, Color::Black), at(4, 6))
            .expect("cell is empty");

        let matrix = rook.legal_moves(&board, from);

        assert!(matrix.get(at(4, 5)));
        assert!(matrix.get(at(4, 6)), "opponent piece is a capture square");
        assert!(!matrix.get(at(4, 7)), "ray does not pass the capture");
    }

    #[test_case(4, 4, 8; "center has eight neighbors")]
    #[test_case(0, 0, 3; "corner has three")]
    #[test_case(0, 4, 5; "edge has five")]
    fn test_king_reaches_adjacent_cells(row: usize, column: usize, expected: usize) {
        let mut board = board();
        let king = Piece::new(PieceKind::King, Color::White);
        let from = at(row, column);
        board.place(king, from).expect("cell is empty");

        let matrix = king.legal_moves(&board, from);

        let cells = marked(&matrix);
        assert_eq!(cells.len(), expected);
        for coord in cells {
            let dr = coord.row.abs_diff(from.row);
            let dc = coord.column.abs_diff(from.column);
            assert!(dr <= 1 && dc <= 1 && dr + dc > 0, "{coord} is not adjacent");
        }
    }

    #[test]
    fn test_king_can_capture_but_not_land_on_friend() {
        let mut board = board();
        let king = Piece::new(PieceKind::King, Color::White);
        let from = at(4, 4);
        board.place(king, from).expect("cell is empty");
        board
            .place(Piece::new(PieceKind::Rook, Color::White), at(3, 4))
            .expect("cell is empty");
        board
            .place(Piece::new(PieceKind::Rook, Color::Black), at(5, 4))
            .expect("cell is empty");

        let matrix = king.legal_moves(&board, from);

        assert!(!matrix.get(at(3, 4)), "friendly piece blocks");
        assert!(matrix.get(at(5, 4)), "opponent piece is capturable");
    }

    #[test]
    fn test_can_move_to_agrees_with_matrix() {
        let mut board = board();
        let rook = Piece::new(PieceKind::Rook, Color::Black);
        let from = at(0, 0);
        board.place(rook, from).expect("cell is empty");

        let matrix = rook.legal_moves(&board, from);
        for row in 0..BOARD_SIZE {
            for column in 0..BOARD_SIZE {
                let coord = at(row, column);
                assert_eq!(rook.can_move_to(&board, from, coord), matrix.get(coord));
            }
        }
    }

    #[test]
    fn test_has_any_legal_move_false_when_boxed_in() {
        let mut board = board();
        let king = Piece::new(PieceKind::King, Color::White);
        let from = at(7, 0);
        board.place(king, from).expect("cell is empty");
        for blocker in [at(6, 0), at(6, 1), at(7, 1)] {
            board
                .place(Piece::new(PieceKind::Rook, Color::White), blocker)
                .expect("cell is empty");
        }

        assert!(!king.has_any_legal_move(&board, from));

        // Swap one blocker for an opponent and a capture becomes available
        board.remove(at(7, 1)).expect("cell is in bounds");
        board
            .place(Piece::new(PieceKind::Rook, Color::Black), at(7, 1))
            .expect("cell is empty");
        assert!(king.has_any_legal_move(&board, from));
    }
}
