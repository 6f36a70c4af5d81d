use async_trait::async_trait;
use tracing::debug;

use crate::command::command::{Command, Flow};
use crate::console::{ConsoleError, Terminal};
use crate::store::Vocabulary;

/// a: add a word, or replace its meaning after confirmation
pub struct AddCmd;

#[async_trait]
impl Command for AddCmd {
    fn key(&self) -> &'static str {
        "a"
    }

    fn summary(&self) -> &'static str {
        "Add Words"
    }

    async fn execute(
        &self,
        term: &mut dyn Terminal,
        vocab: &mut Vocabulary,
    ) -> Result<Flow, ConsoleError> {
        let word = term
            .ask_non_empty("Enter the word:", "Word cannot be empty. Please try again.")
            .await?;

        if let Some(current) = vocab.get(&word) {
            let notice = format!("The word already exists. Current meaning: {}", current);
            term.write_line(&notice).await?;
            term.write_line("Do you want to replace the meaning? (y/n)").await?;
            if !term.confirm().await? {
                term.write_line("Word is unchanged.").await?;
                return Ok(Flow::Continue);
            }
        }

        let meaning = term
            .ask_non_empty(
                "Enter the meaning:",
                "Meaning cannot be empty. Please try again.",
            )
            .await?;

        if vocab.insert(word.clone(), meaning).is_some() {
            debug!("Replaced meaning of '{}'", word);
        } else {
            debug!("Added '{}'", word);
        }
        term.write_line("Word added/updated successfully.").await?;
        Ok(Flow::Continue)
    }
}
