//! Move value type and its coordinate-notation text form.
//!
//! A [`ChessMove`] is constructed by the move generator, handed transiently
//! to callers (facade or search), and copied into the undo stack when
//! applied. Exactly one [`MoveKind`] variant applies per generated move;
//! capture/promotion payloads ride alongside as optional piece kinds.

use crate::game_state::chess_types::{PieceKind, Square};
use crate::utils::algebraic::square_to_algebraic;

/// Move classification; the variants are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Quiet,
    DoublePawnPush,
    Capture,
    EnPassantCapture,
    KingsideCastle,
    QueensideCastle,
    Promotion,
    CapturePromotion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    pub piece: PieceKind,
    pub kind: MoveKind,
    pub captured: Option<PieceKind>,
    pub promotion: Option<PieceKind>,
}

impl ChessMove {
    #[inline]
    pub const fn quiet(from: Square, to: Square, piece: PieceKind) -> Self {
        Self {
            from,
            to,
            piece,
            kind: MoveKind::Quiet,
            captured: None,
            promotion: None,
        }
    }

    #[inline]
    pub const fn double_pawn_push(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            piece: PieceKind::Pawn,
            kind: MoveKind::DoublePawnPush,
            captured: None,
            promotion: None,
        }
    }

    #[inline]
    pub const fn capture(from: Square, to: Square, piece: PieceKind, captured: PieceKind) -> Self {
        Self {
            from,
            to,
            piece,
            kind: MoveKind::Capture,
            captured: Some(captured),
            promotion: None,
        }
    }

    #[inline]
    pub const fn en_passant_capture(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            piece: PieceKind::Pawn,
            kind: MoveKind::EnPassantCapture,
            captured: Some(PieceKind::Pawn),
            promotion: None,
        }
    }

    #[inline]
    pub const fn promotion(from: Square, to: Square, promotion: PieceKind) -> Self {
        Self {
            from,
            to,
            piece: PieceKind::Pawn,
            kind: MoveKind::Promotion,
            captured: None,
            promotion: Some(promotion),
        }
    }

    #[inline]
    pub const fn capture_promotion(
        from: Square,
        to: Square,
        captured: PieceKind,
        promotion: PieceKind,
    ) -> Self {
        Self {
            from,
            to,
            piece: PieceKind::Pawn,
            kind: MoveKind::CapturePromotion,
            captured: Some(captured),
            promotion: Some(promotion),
        }
    }

    #[inline]
    pub const fn castle(from: Square, to: Square, kingside: bool) -> Self {
        Self {
            from,
            to,
            piece: PieceKind::King,
            kind: if kingside {
                MoveKind::KingsideCastle
            } else {
                MoveKind::QueensideCastle
            },
            captured: None,
            promotion: None,
        }
    }

    /// True for plain captures, en passant, and capture-promotions.
    #[inline]
    pub const fn is_capture(&self) -> bool {
        matches!(
            self.kind,
            MoveKind::Capture | MoveKind::EnPassantCapture | MoveKind::CapturePromotion
        )
    }

    #[inline]
    pub const fn is_promotion(&self) -> bool {
        matches!(self.kind, MoveKind::Promotion | MoveKind::CapturePromotion)
    }

    #[inline]
    pub const fn is_castle(&self) -> bool {
        matches!(self.kind, MoveKind::KingsideCastle | MoveKind::QueensideCastle)
    }

    /// Coordinate notation: origin + destination, plus a promotion letter
    /// (`"e2e4"`, `"e7e8q"`). Not disambiguated SAN.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(5);
        out.push_str(&square_to_algebraic(self.from).unwrap_or_default());
        out.push_str(&square_to_algebraic(self.to).unwrap_or_default());
        if let Some(promotion) = self.promotion {
            out.push(promotion.fen_char());
        }
        out
    }
}
