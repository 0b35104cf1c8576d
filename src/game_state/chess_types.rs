//! Core value types shared across the engine.
//!
//! The board uses the 0x88 layout: a 128-slot array where a square index is
//! on the board iff `index & 0x88 == 0`. Rank row 0 holds rank 8 (`a8 == 0`)
//! and rank row 7 holds rank 1 (`h1 == 0x77`), so white pawns advance with a
//! negative offset.

pub use crate::game_state::game_state::GameState;
pub use crate::game_state::undo_state::UndoState;

/// Board square index in the 0x88 layout (`0..=127`, valid iff `sq & 0x88 == 0`).
pub type Square = u8;

/// On-board test for signed square arithmetic.
///
/// Sound for the offsets this engine uses (`-33..=33` applied to a valid
/// square): every out-of-range result keeps a bit of `0x88` set.
#[inline]
pub const fn is_on_board(square: i16) -> bool {
    (square & 0x88) == 0
}

/// Rank row of a square (`0` = rank 8, `7` = rank 1).
#[inline]
pub const fn square_rank_row(square: Square) -> u8 {
    square >> 4
}

/// File column of a square (`0` = a-file).
#[inline]
pub const fn square_file(square: Square) -> u8 {
    square & 15
}

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// FEN side-to-move letter.
    #[inline]
    pub const fn fen_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

/// Piece kind (color is stored separately on [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

pub const ALL_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Lowercase FEN letter for this kind.
    #[inline]
    pub const fn fen_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    #[inline]
    pub fn from_fen_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A colored piece occupying a board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// FEN letter: uppercase for white, lowercase for black.
    #[inline]
    pub fn fen_char(self) -> char {
        match self.color {
            Color::White => self.kind.fen_char().to_ascii_uppercase(),
            Color::Black => self.kind.fen_char(),
        }
    }

    /// Unicode display glyph consumed by renderers.
    pub const fn glyph(self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::King) => '♔',
            (Color::Black, PieceKind::Pawn) => '♟',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::King) => '♚',
        }
    }
}

/// Compact castling rights bitmask, one bit per color/side pair.
pub type CastlingRights = u8;

pub const CASTLE_WHITE_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_WHITE_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_BLACK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_BLACK_QUEENSIDE: CastlingRights = 1 << 3;

#[inline]
pub const fn kingside_right(color: Color) -> CastlingRights {
    match color {
        Color::White => CASTLE_WHITE_KINGSIDE,
        Color::Black => CASTLE_BLACK_KINGSIDE,
    }
}

#[inline]
pub const fn queenside_right(color: Color) -> CastlingRights {
    match color {
        Color::White => CASTLE_WHITE_QUEENSIDE,
        Color::Black => CASTLE_BLACK_QUEENSIDE,
    }
}

#[inline]
pub const fn both_rights(color: Color) -> CastlingRights {
    kingside_right(color) | queenside_right(color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn on_board_mask_rejects_padding_and_overflow() {
        assert!(is_on_board(0x00));
        assert!(is_on_board(0x77));
        assert!(!is_on_board(0x08));
        assert!(!is_on_board(0x78));
        assert!(!is_on_board(-1));
        assert!(!is_on_board(-17));
        assert!(!is_on_board(128));
    }

    #[test]
    fn rank_and_file_decompose_square() {
        // e1 == 0x74
        assert_eq!(square_rank_row(0x74), 7);
        assert_eq!(square_file(0x74), 4);
        // a8 == 0x00
        assert_eq!(square_rank_row(0x00), 0);
        assert_eq!(square_file(0x00), 0);
    }

    #[test]
    fn piece_chars_and_glyphs() {
        let wq = Piece::new(PieceKind::Queen, Color::White);
        let bp = Piece::new(PieceKind::Pawn, Color::Black);
        assert_eq!(wq.fen_char(), 'Q');
        assert_eq!(bp.fen_char(), 'p');
        assert_eq!(wq.glyph(), '♕');
        assert_eq!(bp.glyph(), '♟');
    }
}
