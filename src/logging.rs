use {
  super::*,
  std::{fs::OpenOptions, sync::Mutex},
  tracing_subscriber::{EnvFilter, prelude::*},
};

/// Sends tracing output to `path`. The terminal belongs to the UI, so there is
/// no stderr fallback.
pub(crate) fn init(path: &Path) -> Result {
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent)?;
  }

  let file = OpenOptions::new().create(true).append(true).open(path)?;

  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new("stories=info"));

  let file_layer = tracing_subscriber::fmt::layer()
    .with_writer(Mutex::new(file))
    .with_ansi(false)
    .with_target(true);

  tracing_subscriber::registry()
    .with(filter)
    .with(file_layer)
    .try_init()?;

  info!(path = %path.display(), "logging initialized");

  Ok(())
}
