use super::*;

pub(crate) enum Mode {
  Browse,
  Search(SearchInput),
}

impl Mode {
  pub(crate) fn handle_key(&self, key: KeyEvent, term: &str) -> Command {
    let modifiers = key.modifiers;

    match self {
      Mode::Browse => match key.code {
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Command::Quit,
        KeyCode::Char('?') => Command::ShowHelp,
        KeyCode::Char('/') => Command::StartSearch,
        KeyCode::Down | KeyCode::Char('j') => Command::SelectNext,
        KeyCode::Up | KeyCode::Char('k') => Command::SelectPrevious,
        KeyCode::PageDown => Command::PageDown,
        KeyCode::PageUp => Command::PageUp,
        KeyCode::Char('d') if modifiers.contains(KeyModifiers::CONTROL) => {
          Command::PageDown
        }
        KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
          Command::PageUp
        }
        KeyCode::Home => Command::SelectFirst,
        KeyCode::End => Command::SelectLast,
        KeyCode::Char('d') | KeyCode::Delete => Command::DismissSelected,
        KeyCode::Char('o' | 'O') => Command::OpenCurrentInBrowser,
        _ => Command::None,
      },
      Mode::Search(_) => match key.code {
        KeyCode::Esc | KeyCode::Enter => Command::FinishSearch,
        KeyCode::Down => Command::SelectNext,
        KeyCode::Up => Command::SelectPrevious,
        KeyCode::Backspace => {
          let mut chars = term.chars();

          if chars.next_back().is_some() {
            Command::UpdateSearch(chars.as_str().to_string())
          } else {
            Command::None
          }
        }
        KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
          Command::UpdateSearch(String::new())
        }
        KeyCode::Char(ch) => {
          if modifiers.contains(KeyModifiers::CONTROL)
            || modifiers.contains(KeyModifiers::ALT)
            || modifiers.contains(KeyModifiers::SUPER)
          {
            return Command::None;
          }

          Command::UpdateSearch(format!("{term}{ch}"))
        }
        _ => Command::None,
      },
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
  }

  fn searching() -> Mode {
    Mode::Search(SearchInput::new(LIST_STATUS.into()))
  }

  #[test]
  fn browse_keys_map_to_commands() {
    let mode = Mode::Browse;

    assert_eq!(mode.handle_key(press(KeyCode::Char('/')), ""), Command::StartSearch);
    assert_eq!(mode.handle_key(press(KeyCode::Char('d')), ""), Command::DismissSelected);
    assert_eq!(mode.handle_key(press(KeyCode::Delete), ""), Command::DismissSelected);
    assert_eq!(mode.handle_key(press(KeyCode::Char('x')), ""), Command::None);
    assert_eq!(mode.handle_key(press(KeyCode::Esc), ""), Command::Quit);
    assert_eq!(
      mode.handle_key(
        KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL),
        ""
      ),
      Command::PageDown
    );
  }

  #[test]
  fn search_typing_appends_to_term() {
    assert_eq!(
      searching().handle_key(press(KeyCode::Char('x')), "Re"),
      Command::UpdateSearch("Rex".into())
    );

    assert_eq!(
      searching().handle_key(press(KeyCode::Char('q')), ""),
      Command::UpdateSearch("q".into())
    );
  }

  #[test]
  fn search_backspace_removes_last_char() {
    assert_eq!(
      searching().handle_key(press(KeyCode::Backspace), "Reé"),
      Command::UpdateSearch("Re".into())
    );

    assert_eq!(
      searching().handle_key(press(KeyCode::Backspace), ""),
      Command::None
    );
  }

  #[test]
  fn search_ignores_modified_chars_and_finishes_on_enter() {
    assert_eq!(
      searching().handle_key(
        KeyEvent::new(KeyCode::Char('a'), KeyModifiers::ALT),
        "Re"
      ),
      Command::None
    );

    assert_eq!(
      searching().handle_key(
        KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
        "Re"
      ),
      Command::UpdateSearch(String::new())
    );

    assert_eq!(
      searching().handle_key(press(KeyCode::Enter), "Re"),
      Command::FinishSearch
    );
  }
}
