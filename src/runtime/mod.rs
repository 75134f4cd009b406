//! Async runtime around the reducers.
//!
//! Reducers only describe effects. [`GameDriver`] executes them on tokio:
//! provider fetches run as spawned tasks, settle delays as cancellable
//! timers, and both report back as commands.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use party_engine::core::{Category, EngineConfig, Item, RoundState};
//! use party_engine::engine::{Command, RevealEngine};
//! use party_engine::provider::MemoryProvider;
//! use party_engine::runtime::GameDriver;
//!
//! # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
//! let hindi = Category::new("hindi");
//! let provider = MemoryProvider::new().with_items(vec![
//!     Item::new(1u32, "Kal Ho Naa Ho", hindi.clone()),
//!     Item::new(2u32, "Chaiyya Chaiyya", hindi.clone()),
//! ]);
//!
//! let engine = RevealEngine::new(EngineConfig::default().with_seed(7));
//! let mut driver = GameDriver::new(engine, Arc::new(provider));
//!
//! driver.dispatch(Command::SelectCategory(hindi));
//! driver.process_next().await; // pool arrives
//! driver.dispatch(Command::Start);
//!
//! assert_eq!(driver.state().round.state, RoundState::Active);
//! # });
//! ```

mod driver;

pub use driver::GameDriver;
