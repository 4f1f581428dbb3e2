use criterion::{black_box, criterion_group, criterion_main, Criterion};
use color_recall::core::{
    add_distraction, generate_layout, score, shuffle_blocks, GameMachine, PlacedBlock, SimpleRng,
};
use color_recall::types::{Difficulty, GameMode};

fn bench_generate_layout(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);

    c.bench_function("generate_layout_4x4", |b| {
        b.iter(|| generate_layout(black_box(4), black_box(6), &mut rng))
    });
}

fn bench_shuffle(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);
    let layout = generate_layout(4, 6, &mut rng).unwrap();

    c.bench_function("shuffle_blocks_16", |b| {
        b.iter(|| shuffle_blocks(black_box(&layout), &mut rng))
    });
}

fn bench_distraction(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);
    let layout = generate_layout(4, 6, &mut rng).unwrap();
    let blocks = shuffle_blocks(&layout, &mut rng);

    c.bench_function("add_distraction", |b| {
        b.iter(|| add_distraction(black_box(blocks.clone()), 6, &mut rng))
    });
}

fn bench_score(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);
    let layout = generate_layout(4, 6, &mut rng).unwrap();
    let placed: Vec<PlacedBlock> = layout
        .iter()
        .rev()
        .enumerate()
        .map(|(position, e)| PlacedBlock {
            position,
            block_id: e.position,
            color: e.color,
        })
        .collect();

    c.bench_function("score_4x4", |b| {
        b.iter(|| score(black_box(&layout), black_box(&placed)))
    });
}

fn bench_full_round(c: &mut Criterion) {
    c.bench_function("full_round_hard", |b| {
        let mut game = GameMachine::new(12345);
        b.iter(|| {
            game.start(GameMode::Normal, Some(Difficulty::Hard), 1);
            for _ in 0..4 {
                game.memory_tick();
            }
            let moves: Vec<_> = game
                .state()
                .shuffled_blocks()
                .iter()
                .filter_map(|b| b.origin_position.map(|p| (b.id, p)))
                .collect();
            for (id, pos) in moves {
                game.place_block(id, pos);
            }
            game.finish().result().map(|r| r.accuracy)
        })
    });
}

criterion_group!(
    benches,
    bench_generate_layout,
    bench_shuffle,
    bench_distraction,
    bench_score,
    bench_full_round
);
criterion_main!(benches);
