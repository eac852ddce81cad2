//! Matches command implementation

use crate::{api::ApiClient, cli::types::OutputOptions, Result};

use super::emit;

/// Handle the matches command
pub async fn handle_matches(client: &ApiClient, output: &OutputOptions) -> Result<()> {
    let outcome = client.get_matches().await;
    emit(outcome, output)?;
    Ok(())
}
