use super::*;

/// The search term, mirrored into a storage slot on every change.
pub(crate) struct SearchTerm {
  key: &'static str,
  storage: Box<dyn Storage>,
  value: String,
}

impl SearchTerm {
  /// Reads `key` from `storage`. A missing or empty stored value falls back
  /// to `default`. Nothing is written.
  pub(crate) fn initialize(
    storage: Box<dyn Storage>,
    key: &'static str,
    default: &str,
  ) -> Self {
    let value = storage
      .get(key)
      .filter(|value| !value.is_empty())
      .unwrap_or_else(|| default.to_string());

    Self {
      key,
      storage,
      value,
    }
  }

  pub(crate) fn sync(&mut self) -> Result {
    self
      .storage
      .set(self.key, &self.value)
      .with_context(|| format!("could not save `{}`", self.key))
  }

  /// Replaces the term, then writes it through. The in-memory value changes
  /// even when the write fails.
  pub(crate) fn update(&mut self, value: String) -> Result {
    if value == self.value {
      return Ok(());
    }

    self.value = value;

    debug!(term = %self.value, "search term changed");

    self.sync()
  }

  pub(crate) fn value(&self) -> &str {
    &self.value
  }
}
