//! Draw and reduce throughput.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use party_engine::core::{Category, GameRng, Item, ItemId};
use party_engine::engine::{Command, Effect, QuizEngine, Reducer};
use party_engine::pool::Pool;
use party_engine::selector::Selector;

fn items(n: u32) -> Vec<Item> {
    let cat = Category::new("phrases");
    (0..n)
        .map(|i| Item::new(i, format!("Question {i}"), cat.clone()).with_answer(format!("answer {i}")))
        .collect()
}

fn bench_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("selector_draw");
    for n in [2u32, 50, 5_000] {
        let pool = Pool::from_items(Category::new("phrases"), items(n)).unwrap();
        let previous = ItemId::from(0u32);
        let mut rng = GameRng::new(42);

        group.bench_with_input(BenchmarkId::from_parameter(n), &pool, |b, pool| {
            b.iter(|| Selector::draw_index(black_box(pool), Some(&previous), &mut rng).unwrap());
        });
    }
    group.finish();
}

fn bench_skip(c: &mut Criterion) {
    let engine = QuizEngine::default();
    let mut state = engine.initial_state();
    let mut rng = GameRng::new(7);

    let report = engine.apply(
        &mut state,
        Command::SelectCategory(Category::new("phrases")),
        &mut rng,
    );
    let Some(Effect::FetchPool { ticket }) = report.effects.first().cloned() else {
        panic!("expected a fetch");
    };
    engine.apply(
        &mut state,
        Command::PoolLoaded {
            ticket,
            result: Ok(items(5_000)),
        },
        &mut rng,
    );

    // The state clone in `reduce` shares the pool.
    c.bench_function("quiz_skip_5000", |b| {
        b.iter(|| engine.reduce(black_box(&state), Command::Skip, &mut rng));
    });
}

criterion_group!(benches, bench_draw, bench_skip);
criterion_main!(benches);
