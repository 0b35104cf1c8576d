//! FEN-to-GameState parser.
//!
//! Builds a fully-populated board state from a Forsyth-Edwards Notation
//! string, including piece placement, rights, clocks, and king tracking.
//! Malformed records are rejected with a typed error instead of leaving the
//! board in an unspecified state.

use std::error::Error;
use std::fmt;

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_square;

/// Typed rejection for malformed position records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    MissingField(&'static str),
    ExtraFields,
    BadPlacement(String),
    DuplicateKing(Color),
    BadSideToMove(String),
    BadCastlingRights(char),
    BadEnPassant(String),
    BadClock(String),
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::MissingField(field) => write!(f, "missing {field} field in FEN"),
            FenError::ExtraFields => write!(f, "FEN has extra trailing fields"),
            FenError::BadPlacement(msg) => write!(f, "invalid piece placement: {msg}"),
            FenError::DuplicateKing(color) => {
                write!(f, "more than one {color:?} king in placement")
            }
            FenError::BadSideToMove(field) => write!(f, "invalid side-to-move field: {field}"),
            FenError::BadCastlingRights(ch) => {
                write!(f, "invalid castling rights character: {ch}")
            }
            FenError::BadEnPassant(field) => write!(f, "invalid en-passant field: {field}"),
            FenError::BadClock(field) => write!(f, "invalid clock field: {field}"),
        }
    }
}

impl Error for FenError {}

pub fn parse_fen(fen: &str) -> Result<GameState, FenError> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or(FenError::MissingField("board layout"))?;
    let side_part = parts.next().ok_or(FenError::MissingField("side-to-move"))?;
    let castling_part = parts.next().ok_or(FenError::MissingField("castling rights"))?;
    let en_passant_part = parts.next().ok_or(FenError::MissingField("en-passant square"))?;
    let halfmove_part = parts.next().ok_or(FenError::MissingField("halfmove clock"))?;
    let fullmove_part = parts.next().ok_or(FenError::MissingField("fullmove number"))?;

    if parts.next().is_some() {
        return Err(FenError::ExtraFields);
    }

    let mut game_state = GameState::new_empty();

    parse_board(board_part, &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    game_state.castling_rights = parse_castling_rights(castling_part)?;
    game_state.en_passant_square = parse_en_passant_square(en_passant_part)?;
    game_state.halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| FenError::BadClock(halfmove_part.to_owned()))?;
    game_state.fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| FenError::BadClock(fullmove_part.to_owned()))?;

    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> Result<(), FenError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::BadPlacement(
            "board layout must contain 8 ranks".to_owned(),
        ));
    }

    for (rank_row, rank_str) in ranks.iter().enumerate() {
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(FenError::BadPlacement(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                file += empty_count as u8;
                continue;
            }

            let kind = PieceKind::from_fen_char(ch).ok_or_else(|| {
                FenError::BadPlacement(format!("invalid piece character '{ch}'"))
            })?;
            let color = if ch.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };

            if file >= 8 {
                return Err(FenError::BadPlacement(
                    "rank has too many files".to_owned(),
                ));
            }

            let square = ((rank_row as u8) << 4) | file;
            if !game_state.put_piece(Piece::new(kind, color), square) {
                return Err(FenError::DuplicateKing(color));
            }
            file += 1;
        }

        if file != 8 {
            return Err(FenError::BadPlacement(
                "rank does not sum to 8 files".to_owned(),
            ));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, FenError> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(FenError::BadSideToMove(side_part.to_owned())),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, FenError> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;

    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_WHITE_KINGSIDE,
            'Q' => rights |= CASTLE_WHITE_QUEENSIDE,
            'k' => rights |= CASTLE_BLACK_KINGSIDE,
            'q' => rights |= CASTLE_BLACK_QUEENSIDE,
            _ => return Err(FenError::BadCastlingRights(ch)),
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Square>, FenError> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    algebraic_to_square(en_passant_part)
        .map(Some)
        .map_err(|_| FenError::BadEnPassant(en_passant_part.to_owned()))
}
