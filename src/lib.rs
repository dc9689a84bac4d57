//! # Functional Programming Workshop
//!
//! Runnable lessons on functional-programming idioms in Rust.
//!
//! ## Lessons Covered
//!
//! 1. **Functions**
//!    - Arity and currying
//!    - Composition (`compose`, `and_then`)
//!    - Memoization, single-threaded and concurrent
//!    - Partial vs total functions (`lift`)
//!    - Suppliers vs laziness
//!
//! 2. **Persistent data structures** - a structurally shared `List`
//!
//! 3. **Option, Try and Either** - absence and failure as values
//!
//! 4. **Lazy streams** - infinite sequences evaluated on demand
//!
//! 5. **Pattern matching** - values, kinds, options, tuples, CLI flags
//!
//! 6. **Validation** - accumulate every error instead of stopping at the first
//!
//! 7. **Properties** - random checks with shrinking, via `proptest`
//!
//! ## Running Lessons
//!
//! ```bash
//! cargo run --bin workshop                  # every lesson
//! cargo run --bin workshop -- validators    # a single lesson
//! cargo run --bin workshop -- --config workshop.toml properties
//! ```
//!
//! ## Key Dependencies
//!
//! - `proptest` - runtime property checks and shrinking
//! - `dashmap` / `rustc-hash` - memoization caches
//! - `itertools` - `Either` and formatting helpers
//! - `regex` / `lazy_static` - name validation
//! - `thiserror`, `serde` + `toml`, `tracing` - errors, configuration, logging

pub mod collections;
pub mod config;
pub mod control;
pub mod error;
pub mod functions;
pub mod lesson;
pub mod matching;
pub mod person;
pub mod properties;
pub mod stream;
pub mod validation;

pub use collections::List;
pub use config::WorkshopConfig;
pub use error::{Result, WorkshopError};
pub use lesson::{Lesson, Transcript};
pub use person::{Person, PersonValidator};
pub use validation::Validation;
