//! Fixed-depth brute-force negamax search.
//!
//! No pruning, no transposition table: every legal move is searched to the
//! configured ply count and leaves are scored statically. Ties break on the
//! first-encountered move, so with the fixed generation order the chosen
//! move is fully deterministic. Nodes with no legal moves score at a fixed
//! very-negative sentinel; mate and stalemate are not distinguished there.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::ChessMove;
use crate::search::board_scoring::BoardScorer;

/// Score reported for a side with no legal moves.
pub const NO_MOVES_SCORE: i32 = -99_999;

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    /// Look-ahead in plies; depth 0 degenerates to a static evaluation.
    pub depth: u8,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchResult {
    pub best_move: Option<ChessMove>,
    pub best_score: i32,
    /// Positions visited, counting interior and leaf nodes.
    pub nodes: u64,
}

/// Pick the best move for the side to move by searching every legal move to
/// `config.depth` plies.
pub fn fixed_depth_search<G: MoveGenerator, S: BoardScorer>(
    game_state: &mut GameState,
    generator: &G,
    scorer: &S,
    config: SearchConfig,
) -> SearchResult {
    let mut result = SearchResult::default();

    if config.depth == 0 {
        result.best_score = scorer.score(game_state);
        result.nodes = 1;
        return result;
    }

    let mut nodes = 1u64;
    let mut best: Option<(ChessMove, i32)> = None;

    for mv in generator.generate_legal_moves(game_state) {
        make_move(game_state, mv);
        let score = -negamax(game_state, generator, scorer, config.depth - 1, &mut nodes);
        unmake_move(game_state);

        // Strict comparison keeps the first-encountered move on ties.
        let replace = match best {
            None => true,
            Some((_, best_score)) => score > best_score,
        };
        if replace {
            best = Some((mv, score));
        }
    }

    match best {
        Some((mv, score)) => {
            result.best_move = Some(mv);
            result.best_score = score;
        }
        None => {
            result.best_score = NO_MOVES_SCORE;
        }
    }
    result.nodes = nodes;
    result
}

fn negamax<G: MoveGenerator, S: BoardScorer>(
    game_state: &mut GameState,
    generator: &G,
    scorer: &S,
    depth: u8,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    if depth == 0 {
        return scorer.score(game_state);
    }

    let moves = generator.generate_legal_moves(game_state);
    if moves.is_empty() {
        return NO_MOVES_SCORE;
    }

    let mut best = i32::MIN;
    for mv in moves {
        make_move(game_state, mv);
        let score = -negamax(game_state, generator, scorer, depth - 1, nodes);
        unmake_move(game_state);

        if score > best {
            best = score;
        }
    }

    best
}
