use async_trait::async_trait;

use crate::command::command::{Command, Flow};
use crate::console::{ConsoleError, Terminal};
use crate::encoding::format_entry;
use crate::store::Vocabulary;

/// l: print every entry in word order
pub struct ListCmd;

#[async_trait]
impl Command for ListCmd {
    fn key(&self) -> &'static str {
        "l"
    }

    fn summary(&self) -> &'static str {
        "List vocabulary"
    }

    async fn execute(
        &self,
        term: &mut dyn Terminal,
        vocab: &mut Vocabulary,
    ) -> Result<Flow, ConsoleError> {
        if vocab.is_empty() {
            term.write_line("No words in the vocabulary").await?;
            return Ok(Flow::Continue);
        }

        term.write_line("\nVocabulary List:").await?;
        for (word, meaning) in vocab.iter() {
            term.write_line(&format_entry(word, meaning)).await?;
        }
        Ok(Flow::Continue)
    }
}
