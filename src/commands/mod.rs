//! Command implementations for the Cartola CLI

pub mod common;
pub mod market;
pub mod matches;
pub mod scores;


pub use common::{emit, write_table};
