use async_trait::async_trait;
use tracing::debug;

use crate::command::command::{Command, Flow, NOT_FOUND};
use crate::console::{ConsoleError, Terminal};
use crate::store::Vocabulary;

/// r: delete a word
pub struct RemoveCmd;

#[async_trait]
impl Command for RemoveCmd {
    fn key(&self) -> &'static str {
        "r"
    }

    fn summary(&self) -> &'static str {
        "Remove Words"
    }

    async fn execute(
        &self,
        term: &mut dyn Terminal,
        vocab: &mut Vocabulary,
    ) -> Result<Flow, ConsoleError> {
        let word = term.ask("Enter the word to remove:").await?;

        match vocab.remove(&word) {
            Some(_) => {
                debug!("Removed '{}'", word);
                term.write_line("Word removed successfully.").await?;
            }
            None => term.write_line(NOT_FOUND).await?,
        }
        Ok(Flow::Continue)
    }
}
