use async_trait::async_trait;
use tracing::warn;

use crate::command::command::{Command, Flow};
use crate::console::{ConsoleError, Terminal};
use crate::store::{SaveOutcome, Vocabulary};

/// q: save pending changes and end the session
pub struct QuitCmd;

#[async_trait]
impl Command for QuitCmd {
    fn key(&self) -> &'static str {
        "q"
    }

    fn summary(&self) -> &'static str {
        "Quit"
    }

    async fn execute(
        &self,
        term: &mut dyn Terminal,
        vocab: &mut Vocabulary,
    ) -> Result<Flow, ConsoleError> {
        match vocab.save().await {
            Ok(SaveOutcome::Written(_)) => {
                term.write_line("Vocabulary Record saved successfully.").await?;
            }
            Ok(SaveOutcome::Unchanged) => {}
            Err(e) => {
                warn!("Failed to save vocabulary: {}", e);
                term.write_line(&format!("Error saving vocabulary: {}", e))
                    .await?;
            }
        }
        Ok(Flow::Quit)
    }
}
