//! Interactive terminal front end: human versus the minimax engine.
//!
//! Moves are entered in coordinate notation (`e2e4`, `e7e8q`). The engine
//! answers on black; commands control difficulty, position setup, and the
//! PGN transcript.

use std::io::{self, BufRead, Write};

use maple_chess::engines::engine_minimax::{Difficulty, MinimaxEngine};
use maple_chess::engines::engine_trait::{Engine, GoParams};
use maple_chess::game::chess_game::{Game, MoveRequest};
use maple_chess::game_state::chess_types::Color;
use maple_chess::utils::pgn::write_pgn;
use maple_chess::utils::render_board::render_board;

fn main() {
    let stdin = io::stdin();
    let mut stdin_lock = stdin.lock();
    let mut input = String::new();

    let mut game = Game::new();
    let mut engine = MinimaxEngine::default();

    println!("maple_chess — type 'help' for commands");
    println!("{}", render_board(game.state()));

    loop {
        print!("> ");
        io::stdout().flush().ok();

        input.clear();
        match stdin_lock.read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                eprintln!("stdin error: {err}");
                break;
            }
        }

        let line = input.trim();
        if line.is_empty() {
            continue;
        }
        let mut words = line.split_whitespace();
        let command = words.next().unwrap_or_default();
        let rest = line[command.len()..].trim();

        match command {
            "quit" | "exit" => break,
            "help" => print_help(),
            "new" => {
                game.reset();
                engine.new_game();
                println!("{}", render_board(game.state()));
            }
            "board" => println!("{}", render_board(game.state())),
            "fen" => println!("{}", game.fen()),
            "load" => match game.load(rest) {
                Ok(()) => println!("{}", render_board(game.state())),
                Err(err) => println!("bad FEN: {err}"),
            },
            "moves" => println!("{}", game.moves().join(" ")),
            "level" => match rest.parse::<Difficulty>() {
                Ok(difficulty) => {
                    engine.set_difficulty(difficulty);
                    println!("difficulty set to {difficulty}");
                }
                Err(err) => println!("{err} (one of: beginner advanced master expert grandmaster)"),
            },
            "undo" => {
                // Take back a full move pair so it is the human's turn again.
                let taken: Vec<String> = [game.undo(), game.undo()]
                    .into_iter()
                    .flatten()
                    .map(|mv| mv.to_text())
                    .collect();
                if taken.is_empty() {
                    println!("nothing to undo");
                } else {
                    println!("took back {}", taken.join(" "));
                    println!("{}", render_board(game.state()));
                }
            }
            "export" => {
                let result = game_result(&game);
                // Rewind a clone to recover the position the history started from.
                let mut initial = game.clone();
                while initial.undo().is_some() {}
                print!("{}", write_pgn(initial.state(), &game.history(), result));
            }
            _ => play_human_move(&mut game, &mut engine, line),
        }
    }
}

fn play_human_move(game: &mut Game, engine: &mut MinimaxEngine, text: &str) {
    if game.game_over() {
        println!("game over ({}) — 'new' to start again", game_result(game));
        return;
    }

    match game.play(&MoveRequest::text(text)) {
        Ok(_) => {}
        Err(err) => {
            println!("{err}");
            return;
        }
    }

    if !game.game_over() && game.turn() == Color::Black {
        match engine.choose_move(game.state(), &GoParams::default()) {
            Ok(output) => {
                if let Some(reply) = output.best_move {
                    match game.play(&MoveRequest::text(reply.to_text())) {
                        Ok(_) => println!("engine plays {}", reply.to_text()),
                        Err(err) => println!("engine produced an unplayable move: {err}"),
                    }
                }
            }
            Err(err) => println!("engine error: {err}"),
        }
    }

    println!("{}", render_board(game.state()));
    report_status(game);
}

fn report_status(game: &Game) {
    if game.in_checkmate() {
        println!("checkmate — {}", game_result(game));
    } else if game.in_stalemate() {
        println!("stalemate — 1/2-1/2");
    } else if game.in_check() {
        println!("check");
    }
}

fn game_result(game: &Game) -> &'static str {
    if game.in_checkmate() {
        match game.turn() {
            Color::White => "0-1",
            Color::Black => "1-0",
        }
    } else if game.in_stalemate() {
        "1/2-1/2"
    } else {
        "*"
    }
}

fn print_help() {
    println!("  e2e4, e7e8q   play a move in coordinate notation");
    println!("  moves         list legal moves");
    println!("  undo          take back the last move pair");
    println!("  level NAME    set engine difficulty");
    println!("  board         redraw the board");
    println!("  fen           print the current FEN");
    println!("  load FEN      set up a position");
    println!("  export        print a PGN transcript");
    println!("  new           restart from the starting position");
    println!("  quit          leave");
}
