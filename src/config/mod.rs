use std::path::PathBuf;

/// Name of the vocabulary file, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "vocabulary.txt";

/// Log configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
  /// Log level used when `RUST_LOG` is not set, default is "warn"
  pub level: String,
}

fn default_log_level() -> String {
  "warn".to_string()
}

impl Default for LogConfig {
  fn default() -> Self {
    Self {
      level: default_log_level(),
    }
  }
}

/// Vocab configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// File the vocabulary is loaded from and saved to
  pub data_file: PathBuf,

  /// Log configuration
  pub log: LogConfig,
}

impl Config {
  /// Configuration backed by the given data file
  pub fn with_data_file(path: impl Into<PathBuf>) -> Self {
    Self {
      data_file: path.into(),
      log: LogConfig::default(),
    }
  }
}

impl Default for Config {
  fn default() -> Self {
    Self::with_data_file(DEFAULT_DATA_FILE)
  }
}
