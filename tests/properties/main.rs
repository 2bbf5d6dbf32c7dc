//! Integration tests for type-locked properties
//!
//! Run with: `cargo test --test properties`


mod concurrency;
mod diagnostics;
mod invariants;
