//! Cartola API access
//!
//! - `client`: HTTP calls against the fixed endpoints
//! - `normalize`: flattening JSON payloads into tables
//! - `types`: request identifiers and the `Outcome` result type

pub mod client;
pub mod normalize;
pub mod types;

pub use client::{ApiClient, BASE_URL_ENV_VAR, CARTOLA_BASE_URL};
pub use types::{MarketInfo, Outcome, Round};
