use thiserror::Error;

use crate::piece::Piece;

/// Number of ranks and files on a standard board
pub const BOARD_SIZE: usize = 8;

/// Zero-indexed (row, column) address into the board grid.
///
/// Row 0 is the top of the board as rendered (rank 8), row 7 the bottom
/// (rank 1). This is the internal representation; the human-facing one is
/// [`AlgebraicPosition`](crate::position::AlgebraicPosition).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub row: usize,
    pub column: usize,
}

impl Coordinate {
    #[inline]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Error type for board cell operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("position {0} is off the board")]
    OutOfBounds(Coordinate),
    #[error("position {0} is already occupied")]
    CellOccupied(Coordinate),
}

/// The board grid: a fixed-size matrix of cells, each holding at most one piece.
///
/// The board is the single source of truth for piece positions. A piece has
/// no position field of its own; it is wherever the cell that stores it is.
/// All placement and removal goes through [`Board::place`] and
/// [`Board::remove`], so occupancy can never disagree with itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<Option<Piece>>,
}

impl Board {
    /// Create an empty board with the given dimensions.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![None; rows * columns],
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Whether the coordinate addresses a cell on this board. Never fails.
    #[inline]
    pub fn exists(&self, at: Coordinate) -> bool {
        at.row < self.rows && at.column < self.columns
    }

    /// The piece occupying the cell, or `None` for an empty cell.
    pub fn piece(&self, at: Coordinate) -> Result<Option<Piece>, BoardError> {
        if !self.exists(at) {
            return Err(BoardError::OutOfBounds(at));
        }
        Ok(self.cells[self.index(at)])
    }

    /// Whether the cell holds a piece. Out-of-bounds coordinates are an
    /// error, not `false`.
    pub fn occupied(&self, at: Coordinate) -> Result<bool, BoardError> {
        self.piece(at).map(|p| p.is_some())
    }

    /// Put a piece on an empty cell.
    pub fn place(&mut self, piece: Piece, at: Coordinate) -> Result<(), BoardError> {
        if self.occupied(at)? {
            return Err(BoardError::CellOccupied(at));
        }
        let index = self.index(at);
        self.cells[index] = Some(piece);
        Ok(())
    }

    /// Take the piece off a cell, returning it. An empty in-bounds cell
    /// yields `Ok(None)`.
    pub fn remove(&mut self, at: Coordinate) -> Result<Option<Piece>, BoardError> {
        if !self.exists(at) {
            return Err(BoardError::OutOfBounds(at));
        }
        let index = self.index(at);
        Ok(self.cells[index].take())
    }

    /// Offset a coordinate by signed row/column deltas, or `None` if the
    /// result leaves the board. Bounds awareness lives here so move
    /// generation never has to reason about underflow.
    pub fn step(&self, from: Coordinate, row_delta: isize, column_delta: isize) -> Option<Coordinate> {
        let row = from.row.checked_add_signed(row_delta)?;
        let column = from.column.checked_add_signed(column_delta)?;
        let to = Coordinate::new(row, column);
        self.exists(to).then_some(to)
    }

    /// Iterate over every occupied cell as `(coordinate, piece)`.
    pub fn pieces(&self) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, cell)| {
            cell.map(|piece| (Coordinate::new(i / self.columns, i % self.columns), piece))
        })
    }

    #[inline]
    fn index(&self, at: Coordinate) -> usize {
        at.row * self.columns + at.column
    }
}

/// A boolean matrix with one entry per board cell, `true` where a move is
/// legal. Produced by [`Piece::legal_moves`](crate::piece::Piece::legal_moves).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveMatrix {
    rows: usize,
    columns: usize,
    cells: Vec<bool>,
}

impl MoveMatrix {
    /// Create a matrix with every cell unmarked.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![false; rows * columns],
        }
    }

    /// Whether the cell is marked. Out-of-range coordinates are unmarked.
    #[inline]
    pub fn get(&self, at: Coordinate) -> bool {
        at.row < self.rows && at.column < self.columns && self.cells[at.row * self.columns + at.column]
    }

    /// Mark or unmark a cell.
    #[inline]
    pub fn set(&mut self, at: Coordinate, value: bool) {
        debug_assert!(at.row < self.rows && at.column < self.columns);
        self.cells[at.row * self.columns + at.column] = value;
    }

    /// Whether any cell is marked.
    #[inline]
    pub fn any(&self) -> bool {
        self.cells.iter().any(|&cell| cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::{Color, Piece, PieceKind};
    use test_case::test_case;

    fn board() -> Board {
        Board::new(BOARD_SIZE, BOARD_SIZE)
    }

    fn white_rook() -> Piece {
        Piece::new(PieceKind::Rook, Color::White)
    }

    #[test_case(8, 0; "row past the edge")]
    #[test_case(0, 8; "column past the edge")]
    #[test_case(8, 8; "both past the edge")]
    #[test_case(usize::MAX, 0; "huge row")]
    fn test_piece_out_of_bounds(row: usize, column: usize) {
        let board = board();
        let at = Coordinate::new(row, column);
        assert_eq!(board.piece(at), Err(BoardError::OutOfBounds(at)));
        assert_eq!(board.occupied(at), Err(BoardError::OutOfBounds(at)));
        assert!(!board.exists(at));
    }

    #[test]
    fn test_place_then_remove_round_trips() {
        let mut board = board();
        let at = Coordinate::new(3, 4);

        board.place(white_rook(), at).expect("cell is empty");
        assert_eq!(board.occupied(at), Ok(true));

        let removed = board.remove(at).expect("cell is in bounds");
        assert_eq!(removed, Some(white_rook()));
        assert_eq!(board.occupied(at), Ok(false));
    }

    #[test]
    fn test_place_on_occupied_cell_fails() {
        let mut board = board();
        let at = Coordinate::new(0, 0);

        board.place(white_rook(), at).expect("cell is empty");
        let result = board.place(Piece::new(PieceKind::King, Color::Black), at);

        assert_eq!(result, Err(BoardError::CellOccupied(at)));
        // The original occupant is untouched
        assert_eq!(board.piece(at), Ok(Some(white_rook())));
    }

    #[test]
    fn test_remove_empty_cell_is_none_not_error() {
        let mut board = board();
        assert_eq!(board.remove(Coordinate::new(5, 5)), Ok(None));
    }

    #[test]
    fn test_remove_out_of_bounds_is_error() {
        let mut board = board();
        let at = Coordinate::new(9, 9);
        assert_eq!(board.remove(at), Err(BoardError::OutOfBounds(at)));
    }

    #[test_case(0, 0, -1, 0, None; "off the top")]
    #[test_case(0, 0, 0, -1, None; "off the left")]
    #[test_case(7, 7, 1, 0, None; "off the bottom")]
    #[test_case(7, 7, 0, 1, None; "off the right")]
    #[test_case(4, 4, -1, 0, Some((3, 4)); "one up")]
    #[test_case(4, 4, 0, 1, Some((4, 5)); "one right")]
    fn test_step(row: usize, column: usize, dr: isize, dc: isize, expected: Option<(usize, usize)>) {
        let board = board();
        let result = board.step(Coordinate::new(row, column), dr, dc);
        assert_eq!(result, expected.map(|(r, c)| Coordinate::new(r, c)));
    }

    #[test]
    fn test_pieces_iterates_occupied_cells_only() {
        let mut board = board();
        let first = Coordinate::new(1, 2);
        let second = Coordinate::new(6, 0);
        board.place(white_rook(), first).expect("cell is empty");
        board
            .place(Piece::new(PieceKind::King, Color::Black), second)
            .expect("cell is empty");

        let all: Vec<_> = board.pieces().collect();
        assert_eq!(all.len(), 2);
        assert!(all.contains(&(first, white_rook())));
        assert!(all.contains(&(second, Piece::new(PieceKind::King, Color::Black))));
    }

    #[test]
    fn test_move_matrix_get_set_any() {
        let mut matrix = MoveMatrix::new(BOARD_SIZE, BOARD_SIZE);
        assert!(!matrix.any());

        let at = Coordinate::new(2, 7);
        matrix.set(at, true);
        assert!(matrix.get(at));
        assert!(matrix.any());
        assert!(!matrix.get(Coordinate::new(7, 2)));

        // Out-of-range reads are simply unmarked
        assert!(!matrix.get(Coordinate::new(8, 8)));
    }
}
