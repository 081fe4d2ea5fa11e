/// Search focus. Holds the status line to restore once editing ends.
pub(crate) struct SearchInput {
  pub(crate) message_backup: String,
}

impl SearchInput {
  pub(crate) fn echo(term: &str) -> String {
    format!("Searching for {term}.")
  }

  pub(crate) fn new(message_backup: String) -> Self {
    Self { message_backup }
  }

  pub(crate) fn prompt(term: &str) -> String {
    format!("Search: {term}")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn prompt_reflects_term() {
    assert_eq!(SearchInput::prompt(""), "Search: ");
    assert_eq!(SearchInput::prompt("rust"), "Search: rust");
  }

  #[test]
  fn echo_wraps_term() {
    assert_eq!(SearchInput::echo("Re"), "Searching for Re.");
  }
}
