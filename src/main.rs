mod command;
mod config;
mod console;
mod encoding;
mod session;
mod store;

use anyhow::Context;
use config::{Config, LogConfig};
use console::{Console, ConsoleError};
use session::Session;
use tracing::{info, warn};

fn init_tracing(log: &LogConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level)),
        )
        .with_target(true)
        // stdout belongs to the prompt
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::default();
    init_tracing(&config.log);

    info!("Starting vocab {}", env!("CARGO_PKG_VERSION"));
    info!("Vocabulary file: {}", config.data_file.display());

    let mut console = Console::stdio();
    let mut session = Session::start(&config, &mut console)
        .await
        .context("failed to start session")?;

    match session.run(&mut console).await {
        Ok(()) => {}
        Err(ConsoleError::Closed) if session.vocabulary().is_modified() => {
            warn!("Input closed before quit, unsaved changes discarded");
        }
        Err(ConsoleError::Closed) => info!("Input closed before quit"),
        Err(e) => return Err(e).context("interactive session failed"),
    }

    Ok(())
}
