//! Static position evaluation.
//!
//! Scores are centipawns, always relative to the side to move: positive
//! means the mover stands better. Negamax relies on that sign convention —
//! a white-relative score would break the sign-flipping recursion.

use crate::game_state::{chess_types::*, game_state::GameState};

/// Evaluation seam used by the search and the engines.
pub trait BoardScorer: Send + Sync {
    /// Score of the position from the point of view of the side to move.
    fn score(&self, game_state: &GameState) -> i32;
}

/// Standard relative piece values in centipawns. The king value is an
/// arbitrarily large constant so king material dominates every exchange;
/// kings are never actually capturable in legal play.
#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 20_000,
    }
}

/// Pure material count.
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        let mut white_score = 0i32;

        for (_, piece) in game_state.occupied_squares() {
            let value = piece_value(piece.kind);
            match piece.color {
                Color::White => white_score += value,
                Color::Black => white_score -= value,
            }
        }

        match game_state.side_to_move {
            Color::White => white_score,
            Color::Black => -white_score,
        }
    }
}
