use tracing::{info, warn};

use crate::command::{CommandFactory, Flow};
use crate::config::Config;
use crate::console::{ConsoleError, Terminal};
use crate::store::Vocabulary;

/// Interactive vocabulary session
pub struct Session {
    vocab: Vocabulary,
    commands: CommandFactory,
}

impl Session {
    /// Load the vocabulary file and prepare the command loop.
    ///
    /// Load failures are reported on the terminal and the session starts
    /// with whatever was read.
    pub async fn start(config: &Config, term: &mut dyn Terminal) -> Result<Self, ConsoleError> {
        let mut vocab = Vocabulary::new(&config.data_file);

        match vocab.load().await {
            Ok(count) => info!("Session started with {} words", count),
            Err(e) => {
                warn!("Failed to load vocabulary: {}", e);
                term.write_line(&format!("Error reading vocabulary file: {}", e))
                    .await?;
            }
        }

        Ok(Self {
            vocab,
            commands: CommandFactory::init(),
        })
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Prompt for commands until quit
    pub async fn run(&mut self, term: &mut dyn Terminal) -> Result<(), ConsoleError> {
        loop {
            term.write_line(&self.commands.menu()).await?;
            term.write_line("\nYour Command: ").await?;
            let input = term.read_line().await?;

            let flow = self
                .commands
                .execute(&input, term, &mut self.vocab)
                .await?;
            if flow == Flow::Quit {
                break;
            }
        }

        info!(
            "Session ended for {} ({} words)",
            self.vocab.path().display(),
            self.vocab.len()
        );
        Ok(())
    }
}
