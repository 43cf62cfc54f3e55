//! Blockdrop (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so the binary, tests and
//! benchmarks can write `blockdrop::{core, input, term, types}`. The
//! implementation lives in dedicated crates under `crates/`.

pub mod logging;

pub use blockdrop_core as core;
pub use blockdrop_input as input;
pub use blockdrop_term as term;
pub use blockdrop_types as types;
