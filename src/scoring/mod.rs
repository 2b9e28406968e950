//! The round-tiered scoring table.

pub mod table;

pub use table::{ball_values, value_for, BallValues, FINAL_ROUND};
