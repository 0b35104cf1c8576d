//! In-place move making and unmaking.
//!
//! `make_move` pushes a full snapshot of the non-board state, then mutates
//! the board; `unmake_move` pops the snapshot and reverses the board edit
//! structurally. No serialization is involved on either path, and make/unmake
//! pairs must be strictly nested so the history depth always equals the
//! number of applied moves.

use crate::game_state::chess_rules::{
    BLACK_KINGSIDE_ROOK_SQUARE, BLACK_QUEENSIDE_ROOK_SQUARE, WHITE_KINGSIDE_ROOK_SQUARE,
    WHITE_QUEENSIDE_ROOK_SQUARE,
};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::{ChessMove, MoveKind};

/// Apply a generated move to the board.
///
/// The move must come from the move generator for the current position;
/// applying an arbitrary move is not checked here (the facade validates
/// requests by matching them against the legal move list first).
pub fn make_move(game_state: &mut GameState, mv: ChessMove) {
    let us = game_state.side_to_move;
    let them = us.opposite();

    game_state.undo_stack.push(UndoState {
        mv,
        castling_rights: game_state.castling_rights,
        en_passant_square: game_state.en_passant_square,
        halfmove_clock: game_state.halfmove_clock,
        fullmove_number: game_state.fullmove_number,
        king_squares: game_state.king_squares,
        side_to_move: us,
    });

    // Relocate the piece, replacing a pawn with its promotion piece.
    game_state.board[mv.from as usize] = None;
    game_state.board[mv.to as usize] =
        Some(Piece::new(mv.promotion.unwrap_or(mv.piece), us));

    if mv.kind == MoveKind::EnPassantCapture {
        game_state.board[en_passant_victim_square(us, mv.to) as usize] = None;
    }

    if mv.piece == PieceKind::King {
        game_state.king_squares[us.index()] = Some(mv.to);
        game_state.castling_rights &= !both_rights(us);

        match mv.kind {
            MoveKind::KingsideCastle => {
                relocate_rook(game_state, mv.to + 1, mv.to - 1);
            }
            MoveKind::QueensideCastle => {
                relocate_rook(game_state, mv.to - 2, mv.to + 1);
            }
            _ => {}
        }
    }

    clear_rook_rights(game_state, mv.from);
    clear_rook_rights(game_state, mv.to);

    game_state.en_passant_square = if mv.kind == MoveKind::DoublePawnPush {
        Some(((mv.from as i16 + mv.to as i16) / 2) as Square)
    } else {
        None
    };

    if mv.piece == PieceKind::Pawn || mv.is_capture() {
        game_state.halfmove_clock = 0;
    } else {
        game_state.halfmove_clock = game_state.halfmove_clock.saturating_add(1);
    }
    if us == Color::Black {
        game_state.fullmove_number = game_state.fullmove_number.saturating_add(1);
    }

    game_state.side_to_move = them;
}

/// Reverse the most recent move. Returns the undone move, or `None` when the
/// history stack is empty.
pub fn unmake_move(game_state: &mut GameState) -> Option<ChessMove> {
    let undo = game_state.undo_stack.pop()?;
    let mv = undo.mv;
    let us = undo.side_to_move;
    let them = us.opposite();

    game_state.side_to_move = undo.side_to_move;
    game_state.castling_rights = undo.castling_rights;
    game_state.en_passant_square = undo.en_passant_square;
    game_state.halfmove_clock = undo.halfmove_clock;
    game_state.fullmove_number = undo.fullmove_number;
    game_state.king_squares = undo.king_squares;

    // Putting back `mv.piece` un-promotes automatically.
    game_state.board[mv.from as usize] = Some(Piece::new(mv.piece, us));
    game_state.board[mv.to as usize] = None;

    match mv.kind {
        MoveKind::Capture | MoveKind::CapturePromotion => {
            game_state.board[mv.to as usize] =
                mv.captured.map(|kind| Piece::new(kind, them));
        }
        MoveKind::EnPassantCapture => {
            game_state.board[en_passant_victim_square(us, mv.to) as usize] =
                Some(Piece::new(PieceKind::Pawn, them));
        }
        MoveKind::KingsideCastle => {
            relocate_rook(game_state, mv.to - 1, mv.to + 1);
        }
        MoveKind::QueensideCastle => {
            relocate_rook(game_state, mv.to + 1, mv.to - 2);
        }
        _ => {}
    }

    Some(mv)
}

/// Square of the pawn removed by an en-passant capture: directly behind the
/// target square from the mover's point of view.
#[inline]
fn en_passant_victim_square(mover: Color, target: Square) -> Square {
    match mover {
        Color::White => (target as i16 + 16) as Square,
        Color::Black => (target as i16 - 16) as Square,
    }
}

#[inline]
fn relocate_rook(game_state: &mut GameState, from: Square, to: Square) {
    game_state.board[to as usize] = game_state.board[from as usize].take();
}

/// A move touching a rook's original corner square (either by leaving it or
/// by capturing onto it) drops the matching castling right.
fn clear_rook_rights(game_state: &mut GameState, square: Square) {
    match square {
        WHITE_QUEENSIDE_ROOK_SQUARE => {
            game_state.castling_rights &= !CASTLE_WHITE_QUEENSIDE;
        }
        WHITE_KINGSIDE_ROOK_SQUARE => {
            game_state.castling_rights &= !CASTLE_WHITE_KINGSIDE;
        }
        BLACK_QUEENSIDE_ROOK_SQUARE => {
            game_state.castling_rights &= !CASTLE_BLACK_QUEENSIDE;
        }
        BLACK_KINGSIDE_ROOK_SQUARE => {
            game_state.castling_rights &= !CASTLE_BLACK_KINGSIDE;
        }
        _ => {}
    }
}
