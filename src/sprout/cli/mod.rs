//! Argument parsing and terminal rendering for the `sprout` binary.

pub mod args;
pub mod render;
