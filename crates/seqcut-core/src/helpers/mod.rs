// crates/seqcut-core/src/helpers/mod.rs
//
// Shared utilities for crates that present composition timing to humans.

pub mod frames;
