use super::*;

const STORY_LINES: usize = 3;

pub(crate) struct State {
  activated: bool,
  help: HelpView,
  list_height: usize,
  list_view: ListView,
  message: String,
  mode: Mode,
  next_request_id: u64,
  pending_effects: Vec<Effect>,
  pending_load: Option<u64>,
  search: SearchTerm,
  stories: Stories,
  transient_message: Option<TransientMessage>,
}

impl State {
  /// Starts the one load this session gets. Later calls do nothing.
  pub(crate) fn activate(&mut self) -> Vec<Effect> {
    if self.activated {
      return Vec::new();
    }

    self.activated = true;

    if let Err(error) = self.search.sync() {
      warn!(error = %error, "could not write back search term");
      self.set_transient_message(format!("error: {error}"));
    }

    let request_id = self.next_request_id;

    self.next_request_id = self.next_request_id.wrapping_add(1);

    self.pending_load = Some(request_id);

    self.stories.apply(StoriesAction::FetchInit);

    vec![Effect::FetchStories { request_id }]
  }

  pub(crate) fn clear_pending_effects(&mut self) {
    self.pending_effects.clear();
  }

  fn dismiss_selected(&mut self) {
    let Some(story) = self.selected_story().cloned() else {
      return;
    };

    info!(object_id = story.object_id, title = %story.title, "dismissing story");

    let title = truncate(&story.title, 40);

    self.stories.apply(StoriesAction::RemoveStory(story));

    let len = self.visible_len();

    self.list_view.set_selected(self.list_view.selected_raw(), len);

    if !self.help.is_visible() {
      self.set_transient_message(format!("Dismissed \"{title}\""));
    }
  }

  pub(crate) fn dispatch_command(
    &mut self,
    command: Command,
  ) -> Result<CommandDispatch> {
    debug_assert!(
      self.pending_effects.is_empty(),
      "command dispatch should start without pending effects"
    );

    let mut should_exit = false;

    match command {
      Command::Quit => {
        should_exit = true;
      }
      Command::ShowHelp => self.help.show(&mut self.message),
      Command::HideHelp => self.help.hide(&mut self.message),
      Command::StartSearch => self.start_search(),
      Command::FinishSearch => self.finish_search(),
      Command::UpdateSearch(value) => self.update_search(value)?,
      Command::SelectNext => {
        self.select_index(self.list_view.selected_raw().saturating_add(1));
      }
      Command::SelectPrevious => {
        self.select_index(self.list_view.selected_raw().saturating_sub(1));
      }
      Command::PageDown => self.select_index(
        self
          .list_view
          .selected_raw()
          .saturating_add(self.page_jump()),
      ),
      Command::PageUp => self.select_index(
        self
          .list_view
          .selected_raw()
          .saturating_sub(self.page_jump()),
      ),
      Command::SelectFirst => self.select_index(0),
      Command::SelectLast => self.select_index(usize::MAX),
      Command::DismissSelected => self.dismiss_selected(),
      Command::OpenCurrentInBrowser => self.open_current_in_browser(),
      Command::None => {}
    }

    Ok(CommandDispatch {
      effects: std::mem::take(&mut self.pending_effects),
      should_exit,
    })
  }

  fn finish_search(&mut self) {
    if let Mode::Search(input) = std::mem::replace(&mut self.mode, Mode::Browse)
    {
      self.message = input.message_backup;
    }
  }

  pub(crate) fn handle_event(&mut self, event: Event) {
    match event {
      Event::Stories { request_id, result } => {
        if self.pending_load != Some(request_id) {
          debug!(request_id, "ignoring stale story load");
          return;
        }

        self.pending_load = None;

        match result {
          Ok(stories) => {
            info!(count = stories.len(), "stories loaded");
            self.stories.apply(StoriesAction::FetchSuccess(stories));
          }
          Err(fault) => {
            warn!(error = %fault, "story load failed");
            self.stories.apply(StoriesAction::FetchFailure);
          }
        }

        debug!(status = ?self.stories.status(), "story load settled");

        let len = self.visible_len();

        self.list_view.set_selected(self.list_view.selected_raw(), len);
      }
    }
  }

  pub(crate) fn help(&self) -> &HelpView {
    &self.help
  }

  pub(crate) fn help_is_visible(&self) -> bool {
    self.help.is_visible()
  }

  pub(crate) fn is_searching(&self) -> bool {
    matches!(self.mode, Mode::Search(_))
  }

  pub(crate) fn key_command(&self, key: KeyEvent) -> Command {
    self.mode.handle_key(key, self.search.value())
  }

  pub(crate) fn list_view_mut(&mut self) -> &mut ListView {
    &mut self.list_view
  }

  pub(crate) fn message(&self) -> &str {
    &self.message
  }

  pub(crate) fn new(search: SearchTerm) -> Self {
    Self {
      activated: false,
      help: HelpView::new(),
      list_height: 0,
      list_view: ListView::default(),
      message: LIST_STATUS.into(),
      mode: Mode::Browse,
      next_request_id: 0,
      pending_effects: Vec::new(),
      pending_load: None,
      search,
      stories: Stories::default(),
      transient_message: None,
    }
  }

  fn open_current_in_browser(&mut self) {
    let Some(story) = self.selected_story() else {
      return;
    };

    if story.url.is_empty() {
      let message = format!("No link for \"{}\"", truncate(&story.title, 40));
      self.set_transient_message(message);
      return;
    }

    let url = story.url.clone();

    self.pending_effects.push(Effect::OpenUrl { url });
  }

  fn page_jump(&self) -> usize {
    (self.list_height / STORY_LINES).saturating_sub(1).max(1)
  }

  pub(crate) fn search_term(&self) -> &str {
    self.search.value()
  }

  fn select_index(&mut self, target: usize) {
    let len = self.visible_len();
    self.list_view.set_selected(target, len);
  }

  fn selected_story(&self) -> Option<&Story> {
    let index = self.list_view.selected_index(self.visible_len())?;
    self.visible_stories().nth(index)
  }

  pub(crate) fn set_list_height(&mut self, height: usize) {
    self.list_height = height;
  }

  pub(crate) fn set_transient_message(&mut self, message: String) {
    let original = self.transient_message.as_ref().map_or_else(
      || self.message.clone(),
      |transient| transient.original().to_string(),
    );

    self.transient_message =
      Some(TransientMessage::new(message.clone(), original));

    self.message = message;
  }

  fn start_search(&mut self) {
    if self.is_searching() {
      return;
    }

    let backup = std::mem::replace(&mut self.message, SEARCH_STATUS.into());

    self.mode = Mode::Search(SearchInput::new(backup));
  }

  pub(crate) fn stories(&self) -> &Stories {
    &self.stories
  }

  fn update_search(&mut self, value: String) -> Result {
    self.list_view = ListView::default();
    self.search.update(value)
  }

  pub(crate) fn update_transient_message(&mut self) {
    if let Some(transient) = self.transient_message.clone() {
      if self.message != transient.current() {
        self.transient_message = None;
      } else if transient.is_expired() {
        self.message = transient.original().to_string();
        self.transient_message = None;
      }
    }
  }

  pub(crate) fn visible_len(&self) -> usize {
    self.visible_stories().count()
  }

  /// The filtered view: stories whose title contains the search term.
  pub(crate) fn visible_stories(&self) -> impl Iterator<Item = &Story> {
    self.stories.filtered(self.search.value())
  }
}
