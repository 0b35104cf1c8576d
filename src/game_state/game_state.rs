//! Core incremental board state representation.
//!
//! `GameState` is the central model for the engine. It stores the 0x88
//! mailbox board, turn/state flags, clocks, redundant king-square tracking,
//! and the history stack used by make/unmake style workflows.

use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::{parse_fen, FenError};

/// Incremental game state optimized for fast in-place move making/unmaking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// 0x88 mailbox; padding slots stay `None` at all times.
    pub board: [Option<Piece>; 128],

    // --- Side and state flags ---
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,

    // --- Clocks / move counters ---
    pub halfmove_clock: u16,
    pub fullmove_number: u16,

    /// King square per color for O(1) check detection, indexed by `Color::index()`.
    pub king_squares: [Option<Square>; 2],

    // --- Make/unmake stack ---
    pub undo_stack: Vec<UndoState>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: [None; 128],

            side_to_move: Color::White,
            castling_rights: 0,
            en_passant_square: None,

            halfmove_clock: 0,
            fullmove_number: 1,

            king_squares: [None; 2],
            undo_stack: Vec::new(),
        }
    }
}

impl GameState {
    /// Empty board, white to move, no rights. Primarily a parser target.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_on(&self, square: Square) -> Option<Piece> {
        self.board[square as usize]
    }

    /// Place a piece, keeping king tracking consistent. Rejects padding
    /// squares and a second king of the same color.
    pub fn put_piece(&mut self, piece: Piece, square: Square) -> bool {
        if !is_on_board(square as i16) {
            return false;
        }
        if piece.kind == PieceKind::King && self.king_squares[piece.color.index()].is_some() {
            return false;
        }

        self.board[square as usize] = Some(piece);
        if piece.kind == PieceKind::King {
            self.king_squares[piece.color.index()] = Some(square);
        }
        true
    }

    /// Iterate all occupied on-board squares in ascending index order.
    pub fn occupied_squares(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        (0u8..128)
            .filter(|sq| is_on_board(*sq as i16))
            .filter_map(move |sq| self.board[sq as usize].map(|piece| (sq, piece)))
    }
}
