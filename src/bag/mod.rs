//! The shared ball bag: per-color counts, drawn without replacement.

pub mod manager;

pub use manager::Bag;
