use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::sync::{mpsc, Arc};
use std::thread;

use anyhow::Context;
use blog_core::{update, AppState, Msg};
use blog_engine::{EngineConfig, EngineHandle};
use blog_logging::{blog_info, blog_warn};

use super::config::Args;
use super::effects::{EffectRunner, EngineEventForwarder};
use super::ui::commands::{Command, InputEditor};
use super::ui::{constants, render};

/// Everything the dispatcher reacts to, in arrival order.
pub(crate) enum AppEvent {
    Input(String),
    InputClosed,
    Engine(Msg),
}

pub fn run_app(args: Args) -> anyhow::Result<()> {
    blog_logging::initialize(args.log_destination(), args.log_level(), &args.log_file);

    let settings = args.completion_settings();
    blog_info!(
        "Starting blog generator endpoint={} model={} max_tokens={}",
        settings.endpoint,
        settings.model,
        settings.max_tokens
    );

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let forwarder = Arc::new(EngineEventForwarder::new(event_tx.clone()));
    let engine = EngineHandle::new(EngineConfig::new(settings), forwarder)
        .context("failed to start the generation engine")?;

    spawn_stdin_reader(event_tx);

    let stdout = io::stdout();
    let mut app = App::new(EffectRunner::new(engine), stdout.lock());
    app.run(event_rx)
}

fn spawn_stdin_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(AppEvent::Input(line)).is_err() {
                        return;
                    }
                }
                Err(err) => {
                    blog_warn!("Failed to read terminal input: {}", err);
                    break;
                }
            }
        }
        let _ = tx.send(AppEvent::InputClosed);
    });
}

struct App<W: Write> {
    state: AppState,
    editor: InputEditor,
    effects: EffectRunner,
    out: W,
    input_closed: bool,
}

impl<W: Write> App<W> {
    fn new(effects: EffectRunner, out: W) -> Self {
        Self {
            state: AppState::new(),
            editor: InputEditor::default(),
            effects,
            out,
            input_closed: false,
        }
    }

    /// Runs until the user quits, or input ends and no batch is in flight.
    fn run(&mut self, inbox: mpsc::Receiver<AppEvent>) -> anyhow::Result<()> {
        self.dispatch(Msg::Mounted)?;
        self.write_prompt()?;

        while let Ok(event) = inbox.recv() {
            match event {
                AppEvent::Input(line) => {
                    if !self.handle_input(&line)? {
                        blog_info!("Quit requested");
                        break;
                    }
                }
                AppEvent::Engine(msg) => {
                    self.dispatch(msg)?;
                    if !self.input_closed {
                        self.write_prompt()?;
                    }
                }
                AppEvent::InputClosed => {
                    self.input_closed = true;
                }
            }
            if self.input_closed && !self.state.is_generating() {
                break;
            }
        }
        Ok(())
    }

    /// Returns false when the user asked to quit.
    fn handle_input(&mut self, line: &str) -> io::Result<bool> {
        let view = self.state.view();
        match self.editor.handle_line(line, &view) {
            Command::Msgs(msgs) => {
                for msg in msgs {
                    self.dispatch(msg)?;
                }
            }
            Command::Notice(text) => writeln!(self.out, "{text}")?,
            Command::Help => writeln!(self.out, "{}", constants::HELP)?,
            Command::Quit => return Ok(false),
            Command::Nothing => {}
        }
        self.write_prompt()?;
        Ok(true)
    }

    fn dispatch(&mut self, msg: Msg) -> io::Result<()> {
        let mut queue = VecDeque::from([msg]);
        while let Some(msg) = queue.pop_front() {
            let state = std::mem::take(&mut self.state);
            let (mut state, effects) = update(state, msg);
            if state.consume_dirty() {
                write!(self.out, "{}", render::render(&state.view()))?;
            }
            self.state = state;
            queue.extend(self.effects.run(effects, &mut self.out)?);
        }
        Ok(())
    }

    fn write_prompt(&mut self) -> io::Result<()> {
        if self.editor.is_capturing() {
            write!(self.out, "titles> ")?;
        } else {
            write!(self.out, "> ")?;
        }
        self.out.flush()
    }
}
