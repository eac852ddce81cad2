//! Round scores command implementation

use tracing::debug;

use crate::{
    api::{ApiClient, Round},
    cli::types::OutputOptions,
    Result,
};

use super::emit;

/// Handle the scores command
pub async fn handle_scores(client: &ApiClient, round: &Round, output: &OutputOptions) -> Result<()> {
    debug!(%round, "fetching round scores");
    let outcome = client.get_scores(round).await;
    emit(outcome, output)?;
    Ok(())
}
