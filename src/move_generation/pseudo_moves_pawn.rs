//! Pseudo-legal pawn move generation.
//!
//! Single and double pushes, diagonal captures, en passant, and four-way
//! promotion expansion. Self-check filtering happens downstream.

use crate::game_state::chess_rules::{
    BLACK_PAWN_START_ROW, BLACK_PROMOTION_ROW, WHITE_PAWN_START_ROW, WHITE_PROMOTION_ROW,
};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::ChessMove;

/// Promotion expansion order; queen first so a bare from/to request resolves
/// to the queen promotion.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

#[inline]
pub const fn pawn_push_offset(color: Color) -> i16 {
    match color {
        Color::White => -16,
        Color::Black => 16,
    }
}

#[inline]
pub const fn pawn_start_row(color: Color) -> u8 {
    match color {
        Color::White => WHITE_PAWN_START_ROW,
        Color::Black => BLACK_PAWN_START_ROW,
    }
}

#[inline]
pub const fn promotion_row(color: Color) -> u8 {
    match color {
        Color::White => WHITE_PROMOTION_ROW,
        Color::Black => BLACK_PROMOTION_ROW,
    }
}

pub fn generate_pawn_moves_from(
    game_state: &GameState,
    from: Square,
    out: &mut Vec<ChessMove>,
) {
    let us = game_state.side_to_move;
    let them = us.opposite();
    let dir = pawn_push_offset(us);

    let one = from as i16 + dir;
    if is_on_board(one) && game_state.piece_on(one as Square).is_none() {
        let one = one as Square;
        if square_rank_row(one) == promotion_row(us) {
            for promo in PROMOTION_KINDS {
                out.push(ChessMove::promotion(from, one, promo));
            }
        } else {
            out.push(ChessMove::quiet(from, one, PieceKind::Pawn));

            if square_rank_row(from) == pawn_start_row(us) {
                let two = from as i16 + dir * 2;
                if game_state.piece_on(two as Square).is_none() {
                    out.push(ChessMove::double_pawn_push(from, two as Square));
                }
            }
        }
    }

    // Diagonal captures and en passant.
    for capture_offset in [dir + 1, dir - 1] {
        let target = from as i16 + capture_offset;
        if !is_on_board(target) {
            continue;
        }
        let target = target as Square;

        if let Some(victim) = game_state.piece_on(target) {
            if victim.color == them {
                if square_rank_row(target) == promotion_row(us) {
                    for promo in PROMOTION_KINDS {
                        out.push(ChessMove::capture_promotion(from, target, victim.kind, promo));
                    }
                } else {
                    out.push(ChessMove::capture(from, target, PieceKind::Pawn, victim.kind));
                }
            }
        } else if game_state.en_passant_square == Some(target) {
            out.push(ChessMove::en_passant_capture(from, target));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves_from;
    use crate::moves::move_descriptions::MoveKind;
    use crate::utils::algebraic::algebraic_to_square;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn start_rank_pawn_has_single_and_double_push() {
        let game = parse_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").expect("FEN should parse");
        let e2 = algebraic_to_square("e2").expect("e2 should parse");

        let mut moves = Vec::new();
        generate_pawn_moves_from(&game, e2, &mut moves);

        assert_eq!(moves.len(), 2);
        assert_eq!(moves[0].kind, MoveKind::Quiet);
        assert_eq!(moves[1].kind, MoveKind::DoublePawnPush);
    }

    #[test]
    fn blocked_pawn_generates_nothing_forward() {
        let game = parse_fen("4k3/8/8/8/8/4p3/4P3/4K3 w - - 0 1").expect("FEN should parse");
        let e2 = algebraic_to_square("e2").expect("e2 should parse");

        let mut moves = Vec::new();
        generate_pawn_moves_from(&game, e2, &mut moves);
        assert!(moves.is_empty());
    }

    #[test]
    fn promotion_expands_to_four_moves_queen_first() {
        let game = parse_fen("8/P7/8/8/8/8/8/k6K w - - 0 1").expect("FEN should parse");
        let a7 = algebraic_to_square("a7").expect("a7 should parse");

        let mut moves = Vec::new();
        generate_pawn_moves_from(&game, a7, &mut moves);

        assert_eq!(moves.len(), 4);
        assert!(moves.iter().all(|mv| mv.kind == MoveKind::Promotion));
        assert_eq!(
            moves[0].promotion,
            Some(crate::game_state::chess_types::PieceKind::Queen)
        );
    }

    #[test]
    fn en_passant_target_produces_capture() {
        let game = parse_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").expect("FEN should parse");
        let e5 = algebraic_to_square("e5").expect("e5 should parse");

        let mut moves = Vec::new();
        generate_pawn_moves_from(&game, e5, &mut moves);

        assert!(moves
            .iter()
            .any(|mv| mv.kind == MoveKind::EnPassantCapture
                && mv.to == algebraic_to_square("d6").expect("d6 should parse")));
    }
}
