use async_trait::async_trait;

use crate::command::command::{Command, Flow, NOT_FOUND};
use crate::console::{ConsoleError, Terminal};
use crate::encoding::format_entry;
use crate::store::Vocabulary;

/// s: look up a single word
pub struct SearchCmd;

#[async_trait]
impl Command for SearchCmd {
    fn key(&self) -> &'static str {
        "s"
    }

    fn summary(&self) -> &'static str {
        "Search Words"
    }

    async fn execute(
        &self,
        term: &mut dyn Terminal,
        vocab: &mut Vocabulary,
    ) -> Result<Flow, ConsoleError> {
        let word = term.ask("Enter the word to search:").await?;

        match vocab.get(&word) {
            Some(meaning) => term.write_line(&format_entry(&word, meaning)).await?,
            None => term.write_line(NOT_FOUND).await?,
        }
        Ok(Flow::Continue)
    }
}
