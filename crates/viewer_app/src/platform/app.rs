use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;

use viewer_core::{update, AppState, Msg};
use viewer_engine::FetchSettings;
use viewer_logging::{viewer_debug, viewer_info, viewer_warn};

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::history::SessionHistory;
use super::logging;
use super::ui::render::{self, DisplayRegion};

const COMMANDS: &str = "commands: open <id> | back | forward | help | quit";

/// Events multiplexed onto the single application loop.
pub enum AppEvent {
    /// A line entered on stdin.
    Input(String),
    /// A message produced by a fetch completion.
    Message(Msg),
}

pub fn run_app() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    logging::initialize(config.log_destination);
    viewer_info!("starting viewer against {}", config.api_base);

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let effects = EffectRunner::new(FetchSettings::new(config.api_base.clone()), event_tx.clone());
    spawn_input_reader(event_tx);

    println!("{}", render::banner(&config.api_base));
    println!("{COMMANDS}");

    let mut app = App {
        state: AppState::new(),
        history: SessionHistory::new(config.start_path.clone()),
        effects,
        region: DisplayRegion::new(io::stdout()),
        api_base: config.api_base,
    };

    app.dispatch(Msg::AppStarted {
        path: config.start_path,
    });

    while let Ok(event) = event_rx.recv() {
        match event {
            AppEvent::Input(line) => {
                if !app.handle_input(&line) {
                    break;
                }
            }
            AppEvent::Message(msg) => app.dispatch(msg),
        }
    }

    viewer_info!("viewer shutting down");
    Ok(())
}

struct App {
    state: AppState,
    history: SessionHistory,
    effects: EffectRunner,
    region: DisplayRegion<io::Stdout>,
    api_base: url::Url,
}

impl App {
    /// Returns `false` when the loop should stop.
    fn handle_input(&mut self, line: &str) -> bool {
        match parse_command(line) {
            Some(Command::Open(id)) => self.dispatch(Msg::PageLinkClicked { id }),
            Some(Command::Back) => match self.history.back() {
                Some(entry) => {
                    viewer_debug!("history back to {}", self.history.current_path());
                    self.dispatch(Msg::HistoryPopped { entry });
                }
                None => println!("already at the oldest entry"),
            },
            Some(Command::Forward) => match self.history.forward() {
                Some(entry) => {
                    viewer_debug!("history forward to {}", self.history.current_path());
                    self.dispatch(Msg::HistoryPopped { entry });
                }
                None => println!("already at the newest entry"),
            },
            Some(Command::Help) => println!("{COMMANDS}"),
            Some(Command::Quit) => return false,
            None => {
                if !line.trim().is_empty() {
                    println!("unknown command; try `help`");
                }
            }
        }
        true
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        self.effects.run(effects, &mut self.history);
        let view = state.view();
        let was_dirty = state.consume_dirty();
        self.state = state;

        if was_dirty {
            if let Err(err) = render::render(&mut self.region, &view, &self.api_base) {
                viewer_warn!("render failed: {}", err);
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Open(String),
    Back,
    Forward,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    match words.next()? {
        "open" | "o" => words.next().map(|id| Command::Open(id.to_string())),
        "back" | "b" => Some(Command::Back),
        "forward" | "f" => Some(Command::Forward),
        "help" | "h" => Some(Command::Help),
        "quit" | "q" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

fn spawn_input_reader(event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if event_tx.send(AppEvent::Input(line)).is_err() {
                return;
            }
        }
        // End of input behaves like quit.
        let _ = event_tx.send(AppEvent::Input("quit".to_string()));
    });
}
