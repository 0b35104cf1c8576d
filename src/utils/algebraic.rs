//! Square conversions for coordinate notation.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and internal
//! 0x88 square indices reused by the FEN codec, the facade, and the CLI.

use crate::game_state::chess_types::{is_on_board, square_file, square_rank_row, Square};

/// Convert a coordinate string (for example: "e4") to a 0x88 square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, String> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid algebraic square: {square}"));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("Invalid algebraic file: {}", file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid algebraic rank: {}", rank as char));
    }

    let file_index = file - b'a';
    let rank_row = b'8' - rank;
    Ok((rank_row << 4) | file_index)
}

/// Convert a 0x88 square index to a coordinate string (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> Result<String, String> {
    if !is_on_board(square as i16) {
        return Err(format!("Square index off the board: {square}"));
    }

    let file_char = char::from(b'a' + square_file(square));
    let rank_char = char::from(b'8' - square_rank_row(square));

    Ok(format!("{file_char}{rank_char}"))
}
