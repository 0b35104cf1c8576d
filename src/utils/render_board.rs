//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for the interactive front end, tests,
//! and diagnostics in text environments.

use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;

/// Render the board to a Unicode string for terminal output, rank 8 at the
/// top as seen from white's side.
pub fn render_board(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank_row in 0..8u8 {
        let rank_label = char::from(b'8' - rank_row);
        out.push(rank_label);
        out.push(' ');

        for file in 0..8u8 {
            let square: Square = (rank_row << 4) | file;
            match game_state.piece_on(square) {
                Some(piece) => out.push(piece.glyph()),
                None => out.push('·'),
            }

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank_label);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}
