//! Random-move engine.
//!
//! Selects uniformly from legal moves and is primarily used for diagnostics,
//! integration testing, and as a baseline opponent.

use rand::prelude::IndexedRandom;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;

pub struct RandomEngine {
    move_generator: LegalMoveGenerator,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            move_generator: LegalMoveGenerator,
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "MapleChess Random"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        _params: &GoParams,
    ) -> Result<EngineOutput, String> {
        let mut scratch = game_state.clone();
        let legal_moves = self.move_generator.generate_legal_moves(&mut scratch);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));

        if legal_moves.is_empty() {
            out.best_move = None;
            return Ok(out);
        }

        let mut rng = rand::rng();
        let picked = legal_moves
            .as_slice()
            .choose(&mut rng)
            .ok_or("failed to choose a random move")?;

        out.best_move = Some(*picked);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::RandomEngine;
    use crate::engines::engine_trait::{Engine, GoParams};
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_generator::legal_moves;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn picks_one_of_the_legal_moves() {
        let game = GameState::new_game();
        let mut engine = RandomEngine::new();
        let out = engine
            .choose_move(&game, &GoParams::default())
            .expect("engine should produce output");

        let picked = out.best_move.expect("starting position has moves");
        let mut scratch = game.clone();
        assert!(legal_moves(&mut scratch).contains(&picked));
    }

    #[test]
    fn reports_no_move_when_the_game_is_over() {
        let game = parse_fen("4R1k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").expect("FEN parses");
        let mut engine = RandomEngine::new();
        let out = engine
            .choose_move(&game, &GoParams::default())
            .expect("engine should produce output");
        assert!(out.best_move.is_none());
    }
}
