//! Line-oriented terminal used by the interactive session

use async_trait::async_trait;
use thiserror::Error;
use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout,
};

/// Errors raised by the terminal
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Input reached end of stream
    #[error("input closed")]
    Closed,
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Prompt/response exchange over a single input stream
#[async_trait]
pub trait Terminal: Send {
    /// Read the next line without its line terminator
    async fn read_line(&mut self) -> Result<String, ConsoleError>;

    /// Write a line followed by a newline
    async fn write_line(&mut self, line: &str) -> Result<(), ConsoleError>;

    /// Print `prompt` and read one trimmed answer
    async fn ask(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        self.write_line(prompt).await?;
        Ok(self.read_line().await?.trim().to_string())
    }

    /// Ask until the answer is not empty, printing `retry` after each empty one
    async fn ask_non_empty(&mut self, prompt: &str, retry: &str) -> Result<String, ConsoleError> {
        loop {
            let answer = self.ask(prompt).await?;
            if !answer.is_empty() {
                return Ok(answer);
            }
            self.write_line(retry).await?;
        }
    }

    /// Read `y`/`n` answers until one is valid
    async fn confirm(&mut self) -> Result<bool, ConsoleError> {
        loop {
            let answer = self.read_line().await?.trim().to_lowercase();
            match answer.as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => self.write_line("Invalid input. Please enter 'y' or 'n'.").await?,
            }
        }
    }
}

/// Terminal over any buffered reader and writer
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consume the console and return the writer
    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl Console<BufReader<Stdin>, Stdout> {
    /// Console on the process's standard input and output
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

#[async_trait]
impl<R, W> Terminal for Console<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn read_line(&mut self) -> Result<String, ConsoleError> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf).await? == 0 {
            return Err(ConsoleError::Closed);
        }
        // bytes that are not UTF-8 become replacement characters
        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    async fn write_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        self.writer.write_all(line.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;
        Ok(())
    }
}
