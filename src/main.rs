use {
  anyhow::Context,
  app::App,
  arguments::Arguments,
  clap::Parser,
  client::{Client, LoadFault, Source},
  command::Command,
  command_dispatch::CommandDispatch,
  crossterm::{
    event as crossterm_event,
    event::{
      Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    },
    execute,
    style::Stylize,
    terminal::{
      EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
    },
  },
  effect::Effect,
  event::Event,
  help_view::HelpView,
  list_view::ListView,
  mode::Mode,
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
  },
  search_input::SearchInput,
  search_term::SearchTerm,
  serde::{Deserialize, Serialize},
  state::State,
  std::{
    backtrace::BacktraceStatus,
    collections::BTreeMap,
    env, fs,
    io::{self, IsTerminal, Stdout},
    path::{Path, PathBuf},
    process,
    time::{Duration, Instant},
  },
  storage::{FileStorage, MemoryStorage, Storage},
  stories::{Stories, StoriesAction},
  story::Story,
  tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
  },
  tracing::{debug, info, warn},
  transient_message::TransientMessage,
  utils::{format_comments, format_points, truncate},
};

mod app;
mod arguments;
mod client;
mod command;
mod command_dispatch;
mod effect;
mod event;
mod help_view;
mod list_view;
mod logging;
mod mode;
mod search_input;
mod search_term;
mod state;
mod storage;
mod stories;
mod story;
mod transient_message;
mod utils;

const SEARCH_STORAGE_KEY: &str = "search";

const HEADER_TITLE: &str = "My Hacker Stories";

const LIST_STATUS: &str = "↑/k up • ↓/j down • / search • d dismiss • o open link • q/esc quit • ? help";

const SEARCH_STATUS: &str = "type to filter • enter/esc done";

const HELP_TITLE: &str = "Help";
const HELP_STATUS: &str = "Press ? or esc to close help";

const LOADING_STORIES_STATUS: &str = "Loading...";
const LOAD_FAILED_STATUS: &str = "Something went wrong while loading stories.";

const BASE_INDENT: &str = " ";

const HELP_TEXT: &str = "\
Navigation:
  ↑ / k   move selection up
  ↓ / j   move selection down
  pg↓     page down
  pg↑     page up
  ctrl+d  page down
  ctrl+u  page up
  home    jump to first story
  end     jump to last story

Actions:
  /       edit the search term (type to filter, enter or esc to finish)
  d / del dismiss the selected story
  o       open the selected story in your browser
  q       quit
  esc     close help or quit
  ?       toggle this help

The search term is remembered between sessions.
";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
  enable_raw_mode()?;

  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;

  Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(
  terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result {
  disable_raw_mode()?;

  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

  terminal.show_cursor()?;

  Ok(())
}

async fn run() -> Result {
  let arguments = Arguments::parse();

  if let Some(path) = &arguments.log_file {
    logging::init(path).context("could not initialize logging")?;
  }

  let storage: Box<dyn Storage> = if arguments.ephemeral {
    Box::new(MemoryStorage::default())
  } else {
    let path = arguments.storage_path()?;

    Box::new(
      FileStorage::open(&path)
        .with_context(|| format!("could not open storage at {}", path.display()))?,
    )
  };

  let search = SearchTerm::initialize(storage, SEARCH_STORAGE_KEY, "");

  let client = Client::new(arguments.source(), arguments.delay());

  info!(source = ?arguments.source(), "starting");

  let mut terminal = initialize_terminal()?;

  let mut app = App::new(client, State::new(search));

  let result = app.run(&mut terminal);

  restore_terminal(&mut terminal)?;

  result
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
