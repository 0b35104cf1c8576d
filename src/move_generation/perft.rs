//! Perft: exhaustive legal move tree counting.
//!
//! Validates the generator and the make/unmake pair against published node
//! counts, with per-category tallies for the special-move paths.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::move_descriptions::MoveKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
}

impl PerftCounts {
    fn record_leaf(&mut self, kind: MoveKind) {
        self.nodes += 1;
        match kind {
            MoveKind::Capture => self.captures += 1,
            MoveKind::EnPassantCapture => {
                self.captures += 1;
                self.en_passant += 1;
            }
            MoveKind::KingsideCastle | MoveKind::QueensideCastle => self.castles += 1,
            MoveKind::Promotion => self.promotions += 1,
            MoveKind::CapturePromotion => {
                self.captures += 1;
                self.promotions += 1;
            }
            MoveKind::Quiet | MoveKind::DoublePawnPush => {}
        }
    }
}

pub fn perft(game_state: &mut GameState, depth: u8) -> PerftCounts {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return counts;
    }

    perft_recurse(game_state, depth, &mut counts);
    counts
}

fn perft_recurse(game_state: &mut GameState, depth: u8, counts: &mut PerftCounts) {
    for mv in legal_moves(game_state) {
        if depth == 1 {
            counts.record_leaf(mv.kind);
            continue;
        }

        make_move(game_state, mv);
        perft_recurse(game_state, depth - 1, counts);
        unmake_move(game_state);
    }
}

/// Root move breakdown in coordinate notation, for divide-style debugging.
pub fn perft_divide(game_state: &mut GameState, depth: u8) -> Vec<(String, u64)> {
    let mut out = Vec::new();

    for mv in legal_moves(game_state) {
        make_move(game_state, mv);
        let nodes = if depth <= 1 {
            1
        } else {
            perft(game_state, depth - 1).nodes
        };
        unmake_move(game_state);
        out.push((mv.to_text(), nodes));
    }

    out
}
