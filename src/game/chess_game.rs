//! High-level game facade.
//!
//! Wraps a [`GameState`] behind a small API for front ends: submit moves by
//! coordinate text or by from/to descriptor, undo structurally, and query
//! game status. Status queries clone a scratch state internally so the
//! public surface stays `&self` even though legality filtering works by
//! applying and undoing candidate moves.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{square_file, square_rank_row, Color, Piece, PieceKind};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{
    self, in_checkmate, in_stalemate, legal_moves,
};
use crate::moves::move_descriptions::ChessMove;
use crate::utils::algebraic::algebraic_to_square;
use crate::utils::fen_parser::FenError;

/// A move submission from a front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveRequest {
    /// Coordinate text such as `"e2e4"` or `"e7e8q"`.
    Text(String),
    /// Explicit origin/destination in algebraic square names. A bare
    /// descriptor for a promotion move resolves to a queen promotion.
    Descriptor {
        from: String,
        to: String,
        promotion: Option<PieceKind>,
    },
}

impl MoveRequest {
    pub fn text(text: impl Into<String>) -> Self {
        MoveRequest::Text(text.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The request could not be parsed into squares at all.
    MalformedRequest(String),
    /// Well-formed, but no legal move in the position matches it.
    NoSuchLegalMove,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::MalformedRequest(detail) => write!(f, "malformed move request: {detail}"),
            MoveError::NoSuchLegalMove => write!(f, "no legal move matches the request"),
        }
    }
}

impl Error for MoveError {}

/// A playable game: owned state, move submission, undo, and status queries.
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self {
            state: GameState::new_game(),
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Ok(Self {
            state: GameState::from_fen(fen)?,
        })
    }

    /// Replace the position. Clears the move history.
    pub fn load(&mut self, fen: &str) -> Result<(), FenError> {
        self.state = GameState::from_fen(fen)?;
        Ok(())
    }

    /// Back to the standard starting position with empty history.
    pub fn reset(&mut self) {
        self.state = GameState::new_game();
    }

    pub fn fen(&self) -> String {
        self.state.get_fen()
    }

    pub fn turn(&self) -> Color {
        self.state.side_to_move
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Moves played so far, oldest first.
    pub fn history(&self) -> Vec<ChessMove> {
        self.state.undo_stack.iter().map(|undo| undo.mv).collect()
    }

    /// Legal moves for the side to move, in coordinate text.
    pub fn moves(&self) -> Vec<String> {
        let mut scratch = self.state.clone();
        legal_moves(&mut scratch)
            .iter()
            .map(ChessMove::to_text)
            .collect()
    }

    /// Apply a requested move if it matches a legal move.
    pub fn play(&mut self, request: &MoveRequest) -> Result<ChessMove, MoveError> {
        let (from, to, promotion) = resolve_request(request)?;

        let candidates = legal_moves(&mut self.state);
        let chosen = candidates.into_iter().find(|mv| {
            mv.from == from
                && mv.to == to
                && match promotion {
                    // Generation order lists queen promotions first, so a
                    // bare request promotes to a queen.
                    None => true,
                    Some(kind) => mv.promotion == Some(kind),
                }
        });

        match chosen {
            Some(mv) => {
                make_move(&mut self.state, mv);
                Ok(mv)
            }
            None => Err(MoveError::NoSuchLegalMove),
        }
    }

    /// Take back the last played move, if any.
    pub fn undo(&mut self) -> Option<ChessMove> {
        unmake_move(&mut self.state)
    }

    pub fn in_check(&self) -> bool {
        is_king_in_check(&self.state, self.state.side_to_move)
    }

    pub fn in_checkmate(&self) -> bool {
        let mut scratch = self.state.clone();
        in_checkmate(&mut scratch)
    }

    pub fn in_stalemate(&self) -> bool {
        let mut scratch = self.state.clone();
        in_stalemate(&mut scratch)
    }

    pub fn insufficient_material(&self) -> bool {
        legal_move_generator::insufficient_material(&self.state)
    }

    pub fn game_over(&self) -> bool {
        let mut scratch = self.state.clone();
        legal_move_generator::game_over(&mut scratch)
    }

    /// Rank-major 8x8 snapshot: row 0 is rank 8, column 0 is the a-file.
    pub fn board(&self) -> [[Option<Piece>; 8]; 8] {
        let mut grid = [[None; 8]; 8];
        for (square, piece) in self.state.occupied_squares() {
            let row = square_rank_row(square) as usize;
            let col = square_file(square) as usize;
            grid[row][col] = Some(piece);
        }
        grid
    }
}

fn resolve_request(request: &MoveRequest) -> Result<(u8, u8, Option<PieceKind>), MoveError> {
    match request {
        MoveRequest::Text(text) => {
            if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
                return Err(MoveError::MalformedRequest(format!(
                    "expected 4 or 5 characters, got '{text}'"
                )));
            }
            let from = algebraic_to_square(&text[0..2]).map_err(MoveError::MalformedRequest)?;
            let to = algebraic_to_square(&text[2..4]).map_err(MoveError::MalformedRequest)?;
            let promotion = match text[4..].chars().next() {
                None => None,
                Some(ch) => Some(parse_promotion_char(ch)?),
            };
            Ok((from, to, promotion))
        }
        MoveRequest::Descriptor {
            from,
            to,
            promotion,
        } => {
            let from = algebraic_to_square(from).map_err(MoveError::MalformedRequest)?;
            let to = algebraic_to_square(to).map_err(MoveError::MalformedRequest)?;
            Ok((from, to, *promotion))
        }
    }
}

fn parse_promotion_char(ch: char) -> Result<PieceKind, MoveError> {
    match PieceKind::from_fen_char(ch) {
        Some(kind) if kind != PieceKind::Pawn && kind != PieceKind::King => Ok(kind),
        _ => Err(MoveError::MalformedRequest(format!(
            "'{ch}' is not a promotion piece"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::{Game, MoveError, MoveRequest};
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{Color, PieceKind};

    #[test]
    fn plays_coordinate_text_moves() {
        let mut game = Game::new();
        let played = game.play(&MoveRequest::text("e2e4")).expect("e2e4 is legal");
        assert_eq!(played.to_text(), "e2e4");
        assert_eq!(game.turn(), Color::Black);
        assert_eq!(
            game.fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPPPPPP/RNBQKBNR b KQkq e3 0 1"
        );
    }

    #[test]
    fn plays_descriptor_moves() {
        let mut game = Game::new();
        let request = MoveRequest::Descriptor {
            from: "g1".to_owned(),
            to: "f3".to_owned(),
            promotion: None,
        };
        assert_eq!(game.play(&request).expect("Nf3 is legal").to_text(), "g1f3");
    }

    #[test]
    fn rejects_illegal_and_malformed_requests() {
        let mut game = Game::new();
        assert_eq!(
            game.play(&MoveRequest::text("e2e5")),
            Err(MoveError::NoSuchLegalMove)
        );
        assert!(matches!(
            game.play(&MoveRequest::text("zz9!")),
            Err(MoveError::MalformedRequest(_))
        ));
        // State untouched by the failures.
        assert_eq!(game.fen(), STARTING_POSITION_FEN);
    }

    #[test]
    fn bare_promotion_request_resolves_to_a_queen() {
        let mut game = Game::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN parses");
        let played = game.play(&MoveRequest::text("a7a8")).expect("promotion is legal");
        assert_eq!(played.promotion, Some(PieceKind::Queen));

        let mut underpromote =
            Game::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN parses");
        let knight = underpromote
            .play(&MoveRequest::text("a7a8n"))
            .expect("underpromotion is legal");
        assert_eq!(knight.promotion, Some(PieceKind::Knight));
    }

    #[test]
    fn undo_restores_the_previous_position() {
        let mut game = Game::new();
        game.play(&MoveRequest::text("e2e4")).expect("legal");
        game.play(&MoveRequest::text("c7c5")).expect("legal");

        assert_eq!(game.undo().map(|mv| mv.to_text()), Some("c7c5".to_owned()));
        assert_eq!(game.undo().map(|mv| mv.to_text()), Some("e2e4".to_owned()));
        assert_eq!(game.fen(), STARTING_POSITION_FEN);
        assert!(game.undo().is_none());
    }

    #[test]
    fn history_tracks_played_moves_in_order() {
        let mut game = Game::new();
        game.play(&MoveRequest::text("d2d4")).expect("legal");
        game.play(&MoveRequest::text("g8f6")).expect("legal");

        let history: Vec<String> = game.history().iter().map(|mv| mv.to_text()).collect();
        assert_eq!(history, vec!["d2d4".to_owned(), "g8f6".to_owned()]);
    }

    #[test]
    fn status_queries_reflect_the_position() {
        let mut game = Game::new();
        assert_eq!(game.moves().len(), 20);
        assert!(!game.in_check());
        assert!(!game.game_over());

        // Fool's mate.
        game.play(&MoveRequest::text("f2f3")).expect("legal");
        game.play(&MoveRequest::text("e7e5")).expect("legal");
        game.play(&MoveRequest::text("g2g4")).expect("legal");
        game.play(&MoveRequest::text("d8h4")).expect("legal");

        assert!(game.in_check());
        assert!(game.in_checkmate());
        assert!(!game.in_stalemate());
        assert!(game.game_over());
        assert!(game.moves().is_empty());
    }

    #[test]
    fn board_snapshot_is_rank_major_from_blacks_back_rank() {
        let game = Game::new();
        let grid = game.board();

        let a8 = grid[0][0].expect("a8 occupied");
        assert_eq!((a8.kind, a8.color), (PieceKind::Rook, Color::Black));
        let e1 = grid[7][4].expect("e1 occupied");
        assert_eq!((e1.kind, e1.color), (PieceKind::King, Color::White));
        assert!(grid[4][4].is_none());
    }

    #[test]
    fn load_replaces_position_and_clears_history() {
        let mut game = Game::new();
        game.play(&MoveRequest::text("e2e4")).expect("legal");

        game.load("8/8/8/4k3/8/8/4K3/7R w - - 0 1").expect("FEN parses");
        assert!(game.history().is_empty());
        assert!(game.undo().is_none());
        assert_eq!(game.fen(), "8/8/8/4k3/8/8/4K3/7R w - - 0 1");
    }
}
