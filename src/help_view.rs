use super::*;

pub(crate) struct HelpView {
  message_backup: Option<String>,
  visible: bool,
}

impl HelpView {
  fn area(area: Rect) -> Rect {
    let to_u16 = |value: usize| u16::try_from(value).unwrap_or(u16::MAX);

    let line_count = HELP_TEXT.lines().count();

    let max_line_width = HELP_TEXT
      .lines()
      .map(|line| line.chars().count())
      .max()
      .unwrap_or(0);

    let width = to_u16(max_line_width.saturating_add(2))
      .min(area.width.saturating_sub(2).max(1))
      .min(area.width);

    let height = to_u16(line_count.saturating_add(2))
      .min(area.height.saturating_sub(2).max(1))
      .min(area.height);

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(x, y, width, height)
  }

  pub(crate) fn draw(&self, frame: &mut Frame) {
    if !self.visible {
      return;
    }

    let area = Self::area(frame.area());

    frame.render_widget(Clear, area);

    let help = Paragraph::new(HELP_TEXT)
      .block(Block::default().title(HELP_TITLE).borders(Borders::ALL))
      .wrap(Wrap { trim: false });

    frame.render_widget(help, area);
  }

  pub(crate) fn handle_key(key: KeyEvent) -> Command {
    match key.code {
      KeyCode::Char('?') | KeyCode::Esc => Command::HideHelp,
      KeyCode::Char('q' | 'Q') => Command::Quit,
      _ => Command::None,
    }
  }

  pub(crate) fn hide(&mut self, message: &mut String) {
    if !self.visible {
      return;
    }

    *message = self
      .message_backup
      .take()
      .unwrap_or_else(|| LIST_STATUS.into());

    self.visible = false;
  }

  pub(crate) fn is_visible(&self) -> bool {
    self.visible
  }

  pub(crate) fn new() -> Self {
    Self {
      message_backup: None,
      visible: false,
    }
  }

  pub(crate) fn show(&mut self, message: &mut String) {
    if self.visible {
      return;
    }

    self.message_backup = Some(std::mem::replace(message, HELP_STATUS.into()));

    self.visible = true;
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn show_and_hide_restore_status() {
    let mut help = HelpView::new();
    let mut message = String::from("Dismissed \"React\"");

    help.show(&mut message);
    assert!(help.is_visible());
    assert_eq!(message, HELP_STATUS);

    help.show(&mut message);
    help.hide(&mut message);

    assert!(!help.is_visible());
    assert_eq!(message, "Dismissed \"React\"");
  }

  #[test]
  fn area_fits_inside_small_terminals() {
    let area = HelpView::area(Rect::new(0, 0, 20, 5));

    assert!(area.width <= 20);
    assert!(area.height <= 5);
    assert!(area.width >= 1 && area.height >= 1);
  }

  #[test]
  fn area_is_centered_in_large_terminals() {
    let outer = Rect::new(0, 0, 200, 100);
    let area = HelpView::area(outer);

    assert_eq!(area.x, (200 - area.width) / 2);
    assert_eq!(area.y, (100 - area.height) / 2);
  }
}
