use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use maple_chess::game_state::game_state::GameState;
use maple_chess::move_generation::legal_move_generator::LegalMoveGenerator;
use maple_chess::search::board_scoring::MaterialScorer;
use maple_chess::search::fixed_depth::{fixed_depth_search, SearchConfig};

struct BenchCase {
    name: &'static str,
    fen: &'static str,
    depths: &'static [u8],
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        depths: &[1, 2, 3],
    },
    BenchCase {
        name: "italian_middlegame",
        fen: "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4",
        depths: &[1, 2, 3],
    },
    BenchCase {
        name: "rook_endgame",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        depths: &[2, 3, 4],
    },
];

fn bench_fixed_depth_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed_depth_search");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(5));
    group.sample_size(10);

    for case in CASES {
        let game = GameState::from_fen(case.fen).expect("benchmark FEN should parse");

        for &depth in case.depths {
            let bench_name = format!("{}_d{}", case.name, depth);
            let bench_game = game.clone();

            group.bench_function(BenchmarkId::from_parameter(bench_name), |b| {
                b.iter(|| {
                    let mut scratch = bench_game.clone();
                    let result = fixed_depth_search(
                        black_box(&mut scratch),
                        &LegalMoveGenerator,
                        &MaterialScorer,
                        SearchConfig { depth },
                    );
                    black_box(result.nodes)
                });
            });
        }
    }

    group.finish();
}

criterion_group!(search_benches, bench_fixed_depth_search);
criterion_main!(search_benches);
