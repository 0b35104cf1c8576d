//! Pseudo-legal knight move generation.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::ChessMove;

pub const KNIGHT_OFFSETS: [i16; 8] = [-18, -33, -31, -14, 18, 33, 31, 14];

pub fn generate_knight_moves_from(
    game_state: &GameState,
    from: Square,
    out: &mut Vec<ChessMove>,
) {
    let us = game_state.side_to_move;

    for offset in KNIGHT_OFFSETS {
        let to = from as i16 + offset;
        if !is_on_board(to) {
            continue;
        }
        let to = to as Square;

        match game_state.piece_on(to) {
            None => out.push(ChessMove::quiet(from, to, PieceKind::Knight)),
            Some(piece) if piece.color != us => {
                out.push(ChessMove::capture(from, to, PieceKind::Knight, piece.kind));
            }
            Some(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves_from;
    use crate::utils::algebraic::algebraic_to_square;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn corner_knight_has_two_moves() {
        let game = parse_fen("4k3/8/8/8/8/8/8/N3K3 w - - 0 1").expect("FEN should parse");
        let a1 = algebraic_to_square("a1").expect("a1 should parse");

        let mut moves = Vec::new();
        generate_knight_moves_from(&game, a1, &mut moves);
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn knight_jumps_over_blockers_and_skips_friendly_squares() {
        // Knight on b1 surrounded by friendly pawns; c3 holds a friendly pawn.
        let game =
            parse_fen("4k3/8/8/8/8/2P5/PPP5/1N2K3 w - - 0 1").expect("FEN should parse");
        let b1 = algebraic_to_square("b1").expect("b1 should parse");

        let mut moves = Vec::new();
        generate_knight_moves_from(&game, b1, &mut moves);

        let targets: Vec<String> = moves.iter().map(|mv| mv.to_text()).collect();
        assert_eq!(targets, vec!["b1a3".to_owned(), "b1d2".to_owned()]);
    }
}
