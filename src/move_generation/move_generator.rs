//! Move generator trait seam.
//!
//! Engines and the search are generic over this trait so alternative
//! generators (for example an ordering-aware one) can be swapped in without
//! touching the search code.

use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::ChessMove;

/// Produces the legal moves for the side to move.
///
/// Takes `&mut GameState` because legality filtering works by applying each
/// candidate and undoing it again; implementations must leave the state
/// exactly as they found it.
pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &mut GameState) -> Vec<ChessMove>;
}
