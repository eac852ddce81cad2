//! Market command implementation

use tracing::debug;

use crate::{
    api::{ApiClient, MarketInfo},
    cli::types::OutputOptions,
    Result,
};

use super::emit;

/// Handle the market command
pub async fn handle_market(
    client: &ApiClient,
    info: MarketInfo,
    output: &OutputOptions,
) -> Result<()> {
    debug!(%info, "fetching market collection");
    let outcome = client.get_market(info).await;
    emit(outcome, output)?;
    Ok(())
}
