//! Standalone engine-vs-engine match runner.
//!
//! Run with:
//! `cargo run --release --bin bot_match -- master beginner`
//! `cargo run --release --bin bot_match -- random grandmaster --plies 120`

use std::env;

use maple_chess::engines::engine_minimax::{Difficulty, MinimaxEngine};
use maple_chess::engines::engine_random::RandomEngine;
use maple_chess::engines::engine_trait::{Engine, GoParams};
use maple_chess::game::chess_game::{Game, MoveRequest};
use maple_chess::game_state::chess_types::Color;
use maple_chess::utils::pgn::write_pgn;

fn build_engine(label: &str) -> Result<Box<dyn Engine>, String> {
    if label == "random" {
        return Ok(Box::new(RandomEngine::new()));
    }
    let difficulty: Difficulty = label.parse()?;
    Ok(Box::new(MinimaxEngine::new(difficulty)))
}

fn main() -> Result<(), String> {
    let args: Vec<String> = env::args().skip(1).collect();
    let labels: Vec<&String> = args.iter().filter(|a| !a.starts_with("--")).collect();

    let white_label = labels.first().map(|s| s.as_str()).unwrap_or("advanced");
    let black_label = labels.get(1).map(|s| s.as_str()).unwrap_or("advanced");
    let max_plies: usize = args
        .iter()
        .position(|a| a == "--plies")
        .and_then(|i| args.get(i + 1))
        .and_then(|v| v.parse().ok())
        .unwrap_or(200);

    let mut white = build_engine(white_label)?;
    let mut black = build_engine(black_label)?;
    println!("{} (white) vs {} (black)", white.name(), black.name());

    let mut game = Game::new();

    for ply in 0..max_plies {
        if game.game_over() {
            break;
        }

        let engine = match game.turn() {
            Color::White => white.as_mut(),
            Color::Black => black.as_mut(),
        };
        let output = engine.choose_move(game.state(), &GoParams::default())?;
        let Some(mv) = output.best_move else { break };

        game.play(&MoveRequest::text(mv.to_text()))
            .map_err(|e| format!("engine produced an unplayable move: {e}"))?;
        println!("ply {:3}: {}", ply + 1, mv.to_text());
    }

    let result = if game.in_checkmate() {
        match game.turn() {
            Color::White => "0-1",
            Color::Black => "1-0",
        }
    } else if game.in_stalemate() {
        "1/2-1/2"
    } else {
        "*"
    };
    println!("result: {result}");

    print!("{}", write_pgn(Game::new().state(), &game.history(), result));
    Ok(())
}
