use async_trait::async_trait;
use tracing::debug;

use crate::command::add::AddCmd;
use crate::command::list::ListCmd;
use crate::command::quit::QuitCmd;
use crate::command::remove::RemoveCmd;
use crate::command::search::SearchCmd;
use crate::console::{ConsoleError, Terminal};
use crate::store::Vocabulary;

/// Reply for lookups of absent words
pub const NOT_FOUND: &str = "Word not found in the vocabulary.";

/// What the session does after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A menu command
#[async_trait]
pub trait Command: Send + Sync {
    /// Letter that selects the command, lower case
    fn key(&self) -> &'static str;

    /// Menu description
    fn summary(&self) -> &'static str;

    async fn execute(
        &self,
        term: &mut dyn Terminal,
        vocab: &mut Vocabulary,
    ) -> Result<Flow, ConsoleError>;
}

/// Registry of menu commands, in menu order
pub struct CommandFactory {
    commands: Vec<Box<dyn Command>>,
}

impl CommandFactory {
    /// Register all commands
    pub fn init() -> Self {
        Self {
            commands: vec![
                Box::new(ListCmd),
                Box::new(AddCmd),
                Box::new(SearchCmd),
                Box::new(RemoveCmd),
                Box::new(QuitCmd),
            ],
        }
    }

    /// Menu text listing every command
    pub fn menu(&self) -> String {
        let mut menu = String::from("\nEnter a command: ");
        for cmd in &self.commands {
            menu.push_str(&format!("\n {}: {} ", cmd.key(), cmd.summary()));
        }
        // the last entry has no trailing space
        menu.pop();
        menu
    }

    /// Find the command selected by raw user input
    fn lookup(&self, input: &str) -> Option<&dyn Command> {
        let key = input.trim().to_lowercase();
        self.commands
            .iter()
            .find(|cmd| cmd.key() == key)
            .map(|cmd| &**cmd)
    }

    fn invalid_message(&self) -> String {
        let keys: Vec<String> = self
            .commands
            .iter()
            .map(|cmd| format!("'{}'", cmd.key()))
            .collect();
        match keys.split_last() {
            Some((last, rest)) if !rest.is_empty() => {
                format!("Invalid command! Please enter {}, or {}.", rest.join(", "), last)
            }
            Some((last, _)) => format!("Invalid command! Please enter {}.", last),
            None => "Invalid command!".to_string(),
        }
    }

    /// Dispatch raw user input to its command
    pub async fn execute(
        &self,
        input: &str,
        term: &mut dyn Terminal,
        vocab: &mut Vocabulary,
    ) -> Result<Flow, ConsoleError> {
        match self.lookup(input) {
            Some(cmd) => {
                debug!("Executing command '{}'", cmd.key());
                cmd.execute(term, vocab).await
            }
            None => {
                debug!("Rejected command input {:?}", input);
                term.write_line(&self.invalid_message()).await?;
                Ok(Flow::Continue)
            }
        }
    }
}
