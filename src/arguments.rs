use super::*;

/// Browse a small collection of stories and filter them by title.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub(crate) struct Arguments {
  /// Milliseconds to wait before the stories arrive
  #[arg(long, env = "STORIES_FETCH_DELAY_MS", default_value_t = 2000)]
  pub(crate) delay_ms: u64,

  /// Keep the search term in memory only
  #[arg(long)]
  pub(crate) ephemeral: bool,

  /// Make the story load fail with this message
  #[arg(long, value_name = "MESSAGE", conflicts_with = "stories")]
  pub(crate) fail_load: Option<String>,

  /// Write logs to this file (filtered by RUST_LOG)
  #[arg(long, env = "STORIES_LOG_FILE")]
  pub(crate) log_file: Option<PathBuf>,

  /// Load stories from a JSON array instead of the built-in sample
  #[arg(long)]
  pub(crate) stories: Option<PathBuf>,

  /// Where the search term is remembered
  #[arg(long, env = "STORIES_STORAGE_FILE")]
  pub(crate) storage: Option<PathBuf>,
}

impl Arguments {
  pub(crate) fn delay(&self) -> Duration {
    Duration::from_millis(self.delay_ms)
  }

  pub(crate) fn source(&self) -> Source {
    match (&self.fail_load, &self.stories) {
      (Some(reason), _) => Source::Failing(reason.clone()),
      (None, Some(path)) => Source::File(path.clone()),
      (None, None) => Source::Sample,
    }
  }

  pub(crate) fn storage_path(&self) -> Result<PathBuf> {
    match &self.storage {
      Some(path) => Ok(path.clone()),
      None => FileStorage::default_path(),
    }
  }
}
