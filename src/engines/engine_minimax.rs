//! Fixed-depth minimax engine with named difficulty presets.
//!
//! Each difficulty maps to a search depth in plies. The search itself is the
//! deterministic brute-force negamax, so two calls on the same position with
//! the same difficulty always return the same move.

use std::fmt;
use std::str::FromStr;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::search::board_scoring::MaterialScorer;
use crate::search::fixed_depth::{fixed_depth_search, SearchConfig};

/// Playing-strength presets. Expert shares Master's depth but exists as a
/// distinct rung so callers can present a five-step ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,
    Advanced,
    Master,
    Expert,
    Grandmaster,
}

impl Difficulty {
    #[inline]
    pub const fn search_depth(self) -> u8 {
        match self {
            Difficulty::Beginner => 1,
            Difficulty::Advanced => 2,
            Difficulty::Master | Difficulty::Expert => 3,
            Difficulty::Grandmaster => 4,
        }
    }

    pub const ALL: [Difficulty; 5] = [
        Difficulty::Beginner,
        Difficulty::Advanced,
        Difficulty::Master,
        Difficulty::Expert,
        Difficulty::Grandmaster,
    ];
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Advanced => "advanced",
            Difficulty::Master => "master",
            Difficulty::Expert => "expert",
            Difficulty::Grandmaster => "grandmaster",
        };
        write!(f, "{label}")
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "advanced" => Ok(Difficulty::Advanced),
            "master" => Ok(Difficulty::Master),
            "expert" => Ok(Difficulty::Expert),
            "grandmaster" => Ok(Difficulty::Grandmaster),
            other => Err(format!("unknown difficulty '{other}'")),
        }
    }
}

pub struct MinimaxEngine {
    difficulty: Difficulty,
    move_generator: LegalMoveGenerator,
    scorer: MaterialScorer,
}

impl MinimaxEngine {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            move_generator: LegalMoveGenerator,
            scorer: MaterialScorer,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(Difficulty::Advanced)
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "MapleChess Minimax"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, String> {
        let depth = params.depth.unwrap_or_else(|| self.difficulty.search_depth());

        let mut scratch = game_state.clone();
        let result = fixed_depth_search(
            &mut scratch,
            &self.move_generator,
            &self.scorer,
            SearchConfig { depth },
        );

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info depth {} score cp {} nodes {}",
            depth, result.best_score, result.nodes
        ));
        out.best_move = result.best_move;
        Ok(out)
    }
}
