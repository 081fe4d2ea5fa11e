use super::*;

pub(crate) struct App {
  client: Client,
  event_rx: UnboundedReceiver<Event>,
  event_tx: UnboundedSender<Event>,
  handle: Handle,
  state: State,
}

impl App {
  fn draw(&mut self, frame: &mut Frame) {
    let layout = Layout::default()
      .direction(Direction::Vertical)
      .margin(1)
      .constraints([
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
      ])
      .split(frame.area());

    self.state.set_list_height(layout[2].height as usize);

    let header = Paragraph::new(Line::from(Span::styled(
      HEADER_TITLE.to_uppercase(),
      Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD),
    )));

    frame.render_widget(header, layout[0]);

    frame.render_widget(self.search_widget(), layout[1]);

    let len = self.state.visible_len();

    let list_items = self.list_items();

    let list_view = self.state.list_view_mut();

    let mut list_state = ListState::default()
      .with_selected(list_view.selected_index(len))
      .with_offset(list_view.offset(len));

    let list = List::new(list_items)
      .highlight_style(
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      )
      .highlight_symbol("");

    frame.render_stateful_widget(list, layout[2], &mut list_state);

    self
      .state
      .list_view_mut()
      .set_offset(list_state.offset(), len);

    let status = Paragraph::new(self.state.message().to_string())
      .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, layout[3]);

    self.state.help().draw(frame);
  }

  fn execute_effect(&mut self, effect: Effect) {
    match effect {
      Effect::FetchStories { request_id } => {
        let (client, sender) = (self.client.clone(), self.event_tx.clone());

        debug!(request_id, "fetching stories");

        self.handle.spawn(async move {
          let _ = sender.send(Event::Stories {
            request_id,
            result: client.fetch_stories().await,
          });
        });
      }
      Effect::OpenUrl { url } => match webbrowser::open(&url) {
        Ok(()) => {
          self.state.set_transient_message(format!(
            "Opened in browser: {}",
            truncate(&url, 80)
          ));
        }
        Err(error) => {
          warn!(%url, error = %error, "could not open link");
          self
            .state
            .set_transient_message(format!("Could not open link: {error}"));
        }
      },
    }
  }

  fn list_items(&self) -> Vec<ListItem<'static>> {
    let stories = self.state.stories();

    let placeholder = |text: String, color: Color| {
      vec![ListItem::new(Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::styled(text, Style::default().fg(color)),
      ]))]
    };

    if stories.is_error() {
      return placeholder(LOAD_FAILED_STATUS.into(), Color::Red);
    }

    if stories.is_loading() {
      return placeholder(LOADING_STORIES_STATUS.into(), Color::DarkGray);
    }

    let items = self
      .state
      .visible_stories()
      .map(|story| {
        ListItem::new(vec![
          Line::from(vec![
            Span::raw(BASE_INDENT),
            Span::styled(story.title.clone(), Style::default().fg(Color::White)),
          ]),
          Line::from(vec![
            Span::raw(BASE_INDENT),
            Span::styled(story.detail(), Style::default().fg(Color::DarkGray)),
          ]),
          Line::from(Span::raw(BASE_INDENT)),
        ])
      })
      .collect::<Vec<_>>();

    if !items.is_empty() {
      return items;
    }

    let text = if stories.items().is_empty() {
      "Nothing to show.".to_string()
    } else {
      format!(
        "No stories match \"{}\".",
        truncate(self.state.search_term(), 40)
      )
    };

    placeholder(text, Color::DarkGray)
  }

  pub(crate) fn new(client: Client, state: State) -> Self {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    Self {
      client,
      event_rx,
      event_tx,
      handle: Handle::current(),
      state,
    }
  }

  fn process_pending_events(&mut self) {
    self.state.update_transient_message();

    while let Ok(event) = self.event_rx.try_recv() {
      self.state.handle_event(event);
    }
  }

  pub(crate) fn run(
    &mut self,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
  ) -> Result {
    for effect in self.state.activate() {
      self.execute_effect(effect);
    }

    let result = self.run_loop(terminal);

    // A load still in flight finds the channel closed and is dropped.
    self.event_rx.close();

    result
  }

  fn run_loop(
    &mut self,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
  ) -> Result {
    loop {
      self.process_pending_events();

      terminal.draw(|frame| self.draw(frame))?;

      if !crossterm_event::poll(Duration::from_millis(200))? {
        continue;
      }

      let CrosstermEvent::Key(key) = crossterm_event::read()? else {
        continue;
      };

      if key.kind != KeyEventKind::Press {
        continue;
      }

      let command = if self.state.help_is_visible() {
        HelpView::handle_key(key)
      } else {
        self.state.key_command(key)
      };

      match self.state.dispatch_command(command) {
        Ok(dispatch) => {
          for effect in dispatch.effects {
            self.execute_effect(effect);
          }

          if dispatch.should_exit {
            break;
          }
        }
        Err(error) => {
          warn!(error = %error, "command failed");
          self.state.clear_pending_effects();
          self.state.set_transient_message(format!("error: {error}"));
        }
      }
    }

    Ok(())
  }

  fn search_widget(&self) -> Paragraph<'static> {
    let term = self.state.search_term();

    let prompt_style = if self.state.is_searching() {
      Style::default().fg(Color::Cyan)
    } else {
      Style::default().fg(Color::White)
    };

    let mut prompt = vec![Span::styled(SearchInput::prompt(term), prompt_style)];

    if self.state.is_searching() {
      prompt.push(Span::styled(
        "_",
        Style::default().add_modifier(Modifier::SLOW_BLINK),
      ));
    }

    Paragraph::new(vec![
      Line::from(prompt),
      Line::from(Span::styled(
        SearchInput::echo(term),
        Style::default().fg(Color::DarkGray),
      )),
    ])
    .block(Block::default().borders(Borders::BOTTOM))
  }
}

#[cfg(test)]
mod tests {
  use {super::*, crate::stories::LoadStatus};

  const DELAY: Duration = Duration::from_secs(2);

  fn sample_app() -> App {
    let search = SearchTerm::initialize(
      Box::new(MemoryStorage::default()),
      SEARCH_STORAGE_KEY,
      "",
    );

    App::new(Client::new(Source::Sample, DELAY), State::new(search))
  }

  fn start_load(app: &mut App) {
    for effect in app.state.activate() {
      app.execute_effect(effect);
    }
  }

  fn object_ids(app: &App) -> Vec<u64> {
    app
      .state
      .stories()
      .items()
      .iter()
      .map(|story| story.object_id)
      .collect()
  }

  #[tokio::test(start_paused = true)]
  async fn load_arrives_through_the_event_channel() {
    let mut app = sample_app();

    start_load(&mut app);

    app.process_pending_events();

    assert!(app.state.stories().is_loading());
    assert!(object_ids(&app).is_empty());

    tokio::time::sleep(DELAY + Duration::from_secs(1)).await;

    app.process_pending_events();

    assert_eq!(object_ids(&app), [0, 1]);
    assert_eq!(app.state.stories().status(), LoadStatus::Loaded);
  }

  #[tokio::test(start_paused = true)]
  async fn closed_channel_drops_a_late_load() {
    let mut app = sample_app();

    start_load(&mut app);

    app.event_rx.close();

    tokio::time::sleep(DELAY + Duration::from_secs(1)).await;

    app.process_pending_events();

    assert!(app.state.stories().is_loading());
    assert!(object_ids(&app).is_empty());
  }
}
