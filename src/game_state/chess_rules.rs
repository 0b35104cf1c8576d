//! Canonical chess-rule constants.
//!
//! Static rule-related literals such as the standard starting position FEN
//! and the named squares the castling logic keys on.

use crate::game_state::chess_types::Square;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str =
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

// Corner squares whose rooks carry castling rights (0x88 indices).
pub const WHITE_QUEENSIDE_ROOK_SQUARE: Square = 0x70; // a1
pub const WHITE_KINGSIDE_ROOK_SQUARE: Square = 0x77; // h1
pub const BLACK_QUEENSIDE_ROOK_SQUARE: Square = 0x00; // a8
pub const BLACK_KINGSIDE_ROOK_SQUARE: Square = 0x07; // h8

/// Rank row a pawn of the given color starts on (double-push eligibility).
pub const WHITE_PAWN_START_ROW: u8 = 6; // rank 2
pub const BLACK_PAWN_START_ROW: u8 = 1; // rank 7

/// Rank row a pawn of the given color promotes on.
pub const WHITE_PROMOTION_ROW: u8 = 0; // rank 8
pub const BLACK_PROMOTION_ROW: u8 = 7; // rank 1
