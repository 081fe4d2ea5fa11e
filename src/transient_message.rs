use super::*;

/// A status line that reverts to `original` once it has been shown for a
/// while.
#[derive(Clone)]
pub(crate) struct TransientMessage {
  current: String,
  expires_at: Instant,
  original: String,
}

impl TransientMessage {
  const TTL: Duration = Duration::from_secs(3);

  pub(crate) fn current(&self) -> &str {
    &self.current
  }

  pub(crate) fn is_expired(&self) -> bool {
    self.is_expired_at(Instant::now())
  }

  fn is_expired_at(&self, now: Instant) -> bool {
    now >= self.expires_at
  }

  pub(crate) fn new(current: String, original: String) -> Self {
    Self {
      expires_at: Instant::now() + Self::TTL,
      current,
      original,
    }
  }

  pub(crate) fn original(&self) -> &str {
    &self.original
  }
}
