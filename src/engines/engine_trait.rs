//! Engine abstraction layer.
//!
//! Defines common input parameters and output payloads so different playing
//! strategies can be selected at runtime behind a single trait interface.

use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::ChessMove;

/// Per-request search controls. Absent fields fall back to the engine's own
/// configuration.
#[derive(Debug, Clone, Default)]
pub struct GoParams {
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<ChessMove>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Pick a move for the side to move in `game_state`. A `None` best move
    /// means the position has no legal moves.
    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, String>;
}
