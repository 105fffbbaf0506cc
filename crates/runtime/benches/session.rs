use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use core_game::PayoffGame;
use runtime::{logging::InMemorySessionLogWriter, GameSession};
use strategy::{Brand, Strategy};

const BENCH_ROUNDS: u64 = 9_000;

fn bench_round_cycle(c: &mut Criterion) {
    let game = PayoffGame::shipped().expect("shipped payoff data should validate");

    let mut group = c.benchmark_group("session_round_cycle");
    group.throughput(Throughput::Elements(BENCH_ROUNDS));

    group.bench_function(BenchmarkId::new("select_play_advance", BENCH_ROUNDS), |b| {
        b.iter(|| {
            let mut session =
                GameSession::with_log_writer(game.clone(), InMemorySessionLogWriter::new());
            for round in 0..BENCH_ROUNDS as usize {
                let brand1 = Strategy::ALL[round % 3];
                let brand2 = Strategy::ALL[(round / 3) % 3];
                let _ = session.select_strategy(Brand::Brand1, brand1);
                let _ = session.select_strategy(Brand::Brand2, brand2);
                let outcome = session.play();
                black_box(outcome);
                let _ = session.advance_round();
            }
            black_box(session.history().len());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_round_cycle);
criterion_main!(benches);
