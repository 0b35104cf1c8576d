//! Pseudo-legal king move generation, including castling.
//!
//! Castling is gated on the rights bit, empty between-squares, the king not
//! standing in check, and the transit square not being attacked. The landing
//! square is left to the downstream self-check filter like any other move.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::moves::move_descriptions::ChessMove;

pub const KING_OFFSETS: [i16; 8] = [-17, -16, -15, 1, 17, 16, 15, -1];

pub fn generate_king_moves_from(game_state: &GameState, from: Square, out: &mut Vec<ChessMove>) {
    let us = game_state.side_to_move;
    let them = us.opposite();

    for offset in KING_OFFSETS {
        let to = from as i16 + offset;
        if !is_on_board(to) {
            continue;
        }
        let to = to as Square;

        match game_state.piece_on(to) {
            None => out.push(ChessMove::quiet(from, to, PieceKind::King)),
            Some(piece) if piece.color != us => {
                out.push(ChessMove::capture(from, to, PieceKind::King, piece.kind));
            }
            Some(_) => {}
        }
    }

    // Castling. Rights are only ever set while the king and rook sit on
    // their original squares, so `from` is the e-file king square here.
    if (game_state.castling_rights & kingside_right(us)) != 0 {
        let transit = from + 1; // f-file
        let landing = from + 2; // g-file
        if game_state.piece_on(transit).is_none()
            && game_state.piece_on(landing).is_none()
            && !is_square_attacked(game_state, from, them)
            && !is_square_attacked(game_state, transit, them)
        {
            out.push(ChessMove::castle(from, landing, true));
        }
    }

    if (game_state.castling_rights & queenside_right(us)) != 0 {
        let transit = from - 1; // d-file
        let landing = from - 2; // c-file
        let rook_neighbor = from - 3; // b-file
        if game_state.piece_on(transit).is_none()
            && game_state.piece_on(landing).is_none()
            && game_state.piece_on(rook_neighbor).is_none()
            && !is_square_attacked(game_state, from, them)
            && !is_square_attacked(game_state, transit, them)
        {
            out.push(ChessMove::castle(from, landing, false));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_king_moves_from;
    use crate::moves::move_descriptions::MoveKind;
    use crate::utils::algebraic::algebraic_to_square;
    use crate::utils::fen_parser::parse_fen;

    fn castle_moves(fen: &str, from: &str) -> Vec<MoveKind> {
        let game = parse_fen(fen).expect("FEN should parse");
        let from = algebraic_to_square(from).expect("square should parse");
        let mut moves = Vec::new();
        generate_king_moves_from(&game, from, &mut moves);
        moves
            .into_iter()
            .filter(|mv| mv.is_castle())
            .map(|mv| mv.kind)
            .collect()
    }

    #[test]
    fn both_castles_available_on_open_back_rank() {
        let kinds = castle_moves("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", "e1");
        assert_eq!(
            kinds,
            vec![MoveKind::KingsideCastle, MoveKind::QueensideCastle]
        );
    }

    #[test]
    fn castling_requires_the_rights_bit() {
        let kinds = castle_moves("r3k2r/8/8/8/8/8/8/R3K2R w Qkq - 0 1", "e1");
        assert_eq!(kinds, vec![MoveKind::QueensideCastle]);
    }

    #[test]
    fn castling_blocked_by_between_pieces() {
        let kinds = castle_moves("r3k2r/8/8/8/8/8/8/RN2K1NR w KQkq - 0 1", "e1");
        assert!(kinds.is_empty());
    }

    #[test]
    fn castling_forbidden_while_in_check_or_through_attack() {
        // Black rook on e8 checks the king.
        assert!(castle_moves("4r3/8/8/8/8/8/8/R3K2R w KQ - 0 1", "e1").is_empty());
        // Black rook on f8 covers the kingside transit square only.
        assert_eq!(
            castle_moves("5r2/8/8/8/8/8/8/R3K2R w KQ - 0 1", "e1"),
            vec![MoveKind::QueensideCastle]
        );
    }

    #[test]
    fn pawn_pushes_do_not_count_as_attacks_on_transit_squares() {
        // Black pawn on f3 can push to f2 and attacks e2/g2, none of which
        // touch the e1-f1-g1 castling path.
        let kinds = castle_moves("4k3/8/8/8/8/5p2/8/4K2R w K - 0 1", "e1");
        assert_eq!(kinds, vec![MoveKind::KingsideCastle]);
    }
}
