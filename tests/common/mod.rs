//! Shared fixtures for integration tests.

#![allow(dead_code)]

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use party_engine::core::{Category, Item, RandomSource};
use party_engine::engine::{Command, Effect, Reducer};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize test logging once.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `"warn"`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// `n` movies in `category`, ids `0..n`.
pub fn movies(category: &str, n: u32) -> Vec<Item> {
    let cat = Category::new(category);
    (0..n)
        .map(|i| Item::new(i, format!("{category} movie {i}"), cat.clone()).with_hint(format!("hint {i}")))
        .collect()
}

/// `n` quiz questions in `phrases`; question `i` has answer `answer {i}`.
pub fn questions(n: u32) -> Vec<Item> {
    let cat = Category::new("phrases");
    (0..n)
        .map(|i| {
            Item::new(i, format!("<b>Question {i}</b>"), cat.clone())
                .with_answer(format!("answer {i}"))
        })
        .collect()
}

/// Select `category` and immediately deliver `items` for it.
pub fn load<E: Reducer>(
    engine: &E,
    state: &mut E::State,
    category: &str,
    items: Vec<Item>,
    rng: &mut dyn RandomSource,
) {
    let report = engine.apply(state, Command::SelectCategory(Category::new(category)), rng);
    let ticket = report
        .effects
        .iter()
        .find_map(|effect| match effect {
            Effect::FetchPool { ticket } => Some(ticket.clone()),
            _ => None,
        })
        .expect("selecting a new category must request a fetch");
    engine.apply(
        state,
        Command::PoolLoaded {
            ticket,
            result: Ok(items),
        },
        rng,
    );
}
