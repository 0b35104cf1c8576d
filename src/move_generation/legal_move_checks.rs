//! Attack and check queries.
//!
//! `is_square_attacked` scans the attacker's pieces and walks their capture
//! patterns toward the target: pawn capture diagonals (pushes are not
//! attacks), fixed offsets for knights and kings, blocked ray walks for
//! sliders. One call is O(board squares x offsets); legality filtering calls
//! it once per candidate move, which keeps full legal generation quadratic
//! in branching factor — acceptable at this engine's scale.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::pseudo_moves_king::KING_OFFSETS;
use crate::move_generation::pseudo_moves_knight::KNIGHT_OFFSETS;
use crate::move_generation::pseudo_moves_sliding::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS};

#[inline]
pub fn king_square(game_state: &GameState, color: Color) -> Option<Square> {
    game_state.king_squares[color.index()]
}

#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = king_square(game_state, color) else {
        return false;
    };
    is_square_attacked(game_state, king_sq, color.opposite())
}

/// True iff any piece of `attacker_color` attacks `square`.
pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    for (from, piece) in game_state.occupied_squares() {
        if piece.color != attacker_color {
            continue;
        }

        let attacks = match piece.kind {
            PieceKind::Pawn => pawn_attacks_square(attacker_color, from, square),
            PieceKind::Knight => offset_reaches(from, square, &KNIGHT_OFFSETS),
            PieceKind::King => offset_reaches(from, square, &KING_OFFSETS),
            PieceKind::Bishop => ray_reaches(game_state, from, square, &BISHOP_DIRECTIONS),
            PieceKind::Rook => ray_reaches(game_state, from, square, &ROOK_DIRECTIONS),
            PieceKind::Queen => {
                ray_reaches(game_state, from, square, &BISHOP_DIRECTIONS)
                    || ray_reaches(game_state, from, square, &ROOK_DIRECTIONS)
            }
        };

        if attacks {
            return true;
        }
    }

    false
}

#[inline]
fn pawn_attacks_square(color: Color, from: Square, target: Square) -> bool {
    let diagonals: [i16; 2] = match color {
        Color::White => [-17, -15],
        Color::Black => [15, 17],
    };
    diagonals
        .iter()
        .any(|offset| from as i16 + offset == target as i16)
}

#[inline]
fn offset_reaches(from: Square, target: Square, offsets: &[i16]) -> bool {
    offsets
        .iter()
        .any(|offset| from as i16 + offset == target as i16)
}

fn ray_reaches(game_state: &GameState, from: Square, target: Square, directions: &[i16]) -> bool {
    for &direction in directions {
        let mut current = from as i16 + direction;
        while is_on_board(current) {
            if current == target as i16 {
                return true;
            }
            if game_state.piece_on(current as Square).is_some() {
                break;
            }
            current += direction;
        }
    }
    false
}
