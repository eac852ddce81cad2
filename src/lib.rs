//! Cartola FC API client
//!
//! A small client for the public Cartola fantasy football API. Each call
//! performs one GET against a fixed endpoint and flattens the JSON payload
//! into a row-oriented [`Table`].
//!
//! ## Fail-soft results
//!
//! Client operations never return `Err`. Transport failures and payloads of
//! the wrong shape are logged once through `tracing` and handed back as
//! [`Outcome::NoData`], which the caller must match on.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cartola::{ApiClient, MarketInfo, Outcome, Round};
//!
//! # async fn example() -> cartola::Result<()> {
//! let client = ApiClient::new()?;
//!
//! match client.get_scores(&Round::from(5u16)).await {
//!     Outcome::Data(table) => println!("{} athletes scored", table.len()),
//!     Outcome::NoData(_) => println!("nothing to show"),
//! }
//!
//! if let Some(clubs) = client.get_market(MarketInfo::Clubes).await.into_option() {
//!     println!("{}", clubs.render());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the client at a different host (a mirror, a local fixture server):
//! ```bash
//! export CARTOLA_API_BASE_URL=http://localhost:8080/
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod error;
pub mod table;

// Re-export commonly used types
pub use api::{ApiClient, MarketInfo, Outcome, Round, BASE_URL_ENV_VAR, CARTOLA_BASE_URL};
pub use error::{CartolaError, Result};
pub use table::{Row, Table};
