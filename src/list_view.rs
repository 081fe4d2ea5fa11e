/// Selection and scroll position over the filtered stories.
///
/// The view does not own its items: the filtered list is derived on every
/// render, so every accessor takes the current length and clamps to it.
#[derive(Debug, Default)]
pub(crate) struct ListView {
  offset: usize,
  selected: usize,
}

impl ListView {
  pub(crate) fn offset(&self, len: usize) -> usize {
    let selected = self.selected_index(len).unwrap_or(0);

    if len == 0 { 0 } else { self.offset.min(selected) }
  }

  pub(crate) fn selected_index(&self, len: usize) -> Option<usize> {
    if len == 0 {
      None
    } else {
      Some(self.selected.min(len.saturating_sub(1)))
    }
  }

  pub(crate) fn selected_raw(&self) -> usize {
    self.selected
  }

  pub(crate) fn set_offset(&mut self, offset: usize, len: usize) {
    if len == 0 {
      self.offset = 0;
    } else {
      self.offset = offset.min(len.saturating_sub(1));
    }
  }

  pub(crate) fn set_selected(&mut self, index: usize, len: usize) {
    if len == 0 {
      self.selected = 0;
    } else {
      self.selected = index.min(len.saturating_sub(1));
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn selected_index_is_none_when_empty() {
    let view = ListView::default();
    assert_eq!(view.selected_index(0), None);
    assert_eq!(view.offset(0), 0);
  }

  #[test]
  fn selection_and_offset_are_clamped_to_bounds() {
    let mut view = ListView::default();

    view.set_selected(10, 3);
    assert_eq!(view.selected_index(3), Some(2));

    view.set_offset(10, 3);
    assert_eq!(view.offset(3), 2);
  }

  #[test]
  fn selection_follows_a_shrinking_list() {
    let mut view = ListView::default();

    view.set_selected(4, 5);

    assert_eq!(view.selected_index(5), Some(4));
    assert_eq!(view.selected_index(2), Some(1));
    assert_eq!(view.selected_index(0), None);
    assert_eq!(view.selected_raw(), 4);
  }
}
