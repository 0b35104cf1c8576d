//! Full legal move generation pipeline and game status queries.
//!
//! Orchestrates piece-wise pseudo-legal generation, then filters candidates
//! by applying each move and rejecting those that leave the mover's own king
//! attacked. Generation order is fixed (ascending square index, fixed offset
//! order), which makes every downstream consumer deterministic.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::MoveGenerator;
use crate::move_generation::pseudo_moves_king::generate_king_moves_from;
use crate::move_generation::pseudo_moves_knight::generate_knight_moves_from;
use crate::move_generation::pseudo_moves_pawn::generate_pawn_moves_from;
use crate::move_generation::pseudo_moves_sliding::{
    generate_bishop_moves_from, generate_queen_moves_from, generate_rook_moves_from,
};
use crate::moves::move_descriptions::ChessMove;

/// All pseudo-legal moves for the side to move, in stable generation order.
pub fn generate_pseudo_legal_moves(game_state: &GameState) -> Vec<ChessMove> {
    let mut out = Vec::with_capacity(64);
    let us = game_state.side_to_move;

    for (from, piece) in game_state.occupied_squares() {
        if piece.color != us {
            continue;
        }

        match piece.kind {
            PieceKind::Pawn => generate_pawn_moves_from(game_state, from, &mut out),
            PieceKind::Knight => generate_knight_moves_from(game_state, from, &mut out),
            PieceKind::Bishop => generate_bishop_moves_from(game_state, from, &mut out),
            PieceKind::Rook => generate_rook_moves_from(game_state, from, &mut out),
            PieceKind::Queen => generate_queen_moves_from(game_state, from, &mut out),
            PieceKind::King => generate_king_moves_from(game_state, from, &mut out),
        }
    }

    out
}

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &mut GameState) -> Vec<ChessMove> {
        let pseudo = generate_pseudo_legal_moves(game_state);
        let mover = game_state.side_to_move;
        let mut legal = Vec::with_capacity(pseudo.len());

        for mv in pseudo {
            make_move(game_state, mv);
            if !is_king_in_check(game_state, mover) {
                legal.push(mv);
            }
            unmake_move(game_state);
        }

        legal
    }
}

/// Convenience wrapper over the default generator.
#[inline]
pub fn legal_moves(game_state: &mut GameState) -> Vec<ChessMove> {
    LegalMoveGenerator.generate_legal_moves(game_state)
}

pub fn in_checkmate(game_state: &mut GameState) -> bool {
    is_king_in_check(game_state, game_state.side_to_move) && legal_moves(game_state).is_empty()
}

pub fn in_stalemate(game_state: &mut GameState) -> bool {
    !is_king_in_check(game_state, game_state.side_to_move) && legal_moves(game_state).is_empty()
}

/// Draw-by-material detection is out of scope; always reports `false`.
#[inline]
pub fn insufficient_material(_game_state: &GameState) -> bool {
    false
}

pub fn game_over(game_state: &mut GameState) -> bool {
    in_checkmate(game_state) || in_stalemate(game_state)
}
