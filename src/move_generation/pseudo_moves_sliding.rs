//! Pseudo-legal sliding-piece move generation (bishop, rook, queen).
//!
//! One direction walker covers all three: step along an offset until the
//! walk leaves the board (single 0x88 mask test) or reaches an occupied
//! square, which is included as a capture only when it holds an enemy piece.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::ChessMove;

pub const BISHOP_DIRECTIONS: [i16; 4] = [-17, -15, 17, 15];
pub const ROOK_DIRECTIONS: [i16; 4] = [-16, 1, 16, -1];
pub const QUEEN_DIRECTIONS: [i16; 8] = [-17, -16, -15, 1, 17, 16, 15, -1];

pub fn generate_sliding_moves_from(
    game_state: &GameState,
    from: Square,
    piece: PieceKind,
    directions: &[i16],
    out: &mut Vec<ChessMove>,
) {
    let us = game_state.side_to_move;

    for &direction in directions {
        let mut to = from as i16 + direction;

        while is_on_board(to) {
            let square = to as Square;
            match game_state.piece_on(square) {
                None => out.push(ChessMove::quiet(from, square, piece)),
                Some(blocker) => {
                    if blocker.color != us {
                        out.push(ChessMove::capture(from, square, piece, blocker.kind));
                    }
                    break;
                }
            }
            to += direction;
        }
    }
}

#[inline]
pub fn generate_bishop_moves_from(game_state: &GameState, from: Square, out: &mut Vec<ChessMove>) {
    generate_sliding_moves_from(game_state, from, PieceKind::Bishop, &BISHOP_DIRECTIONS, out);
}

#[inline]
pub fn generate_rook_moves_from(game_state: &GameState, from: Square, out: &mut Vec<ChessMove>) {
    generate_sliding_moves_from(game_state, from, PieceKind::Rook, &ROOK_DIRECTIONS, out);
}

#[inline]
pub fn generate_queen_moves_from(game_state: &GameState, from: Square, out: &mut Vec<ChessMove>) {
    generate_sliding_moves_from(game_state, from, PieceKind::Queen, &QUEEN_DIRECTIONS, out);
}
