use crate::game_state::chess_types::{CastlingRights, Color, Square};
use crate::moves::move_descriptions::ChessMove;

/// Single undo record for `make_move` / `unmake_move`.
///
/// Snapshots every non-board field of the position immediately before a move
/// is applied; the board itself is restored structurally by reversing the
/// move, so popping a record reproduces the pre-move state bit-for-bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub mv: ChessMove,

    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,
    pub halfmove_clock: u16,
    pub fullmove_number: u16,

    pub king_squares: [Option<Square>; 2],
    pub side_to_move: Color,
}
