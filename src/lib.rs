//! Wordsearch (workspace facade crate).
//!
//! This package exposes the `wordsearch::{core,types}` public API while the
//! implementation lives in dedicated crates under `crates/`.

pub use wordsearch_core as core;
pub use wordsearch_types as types;
