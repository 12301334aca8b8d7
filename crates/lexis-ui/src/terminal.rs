//! The blocking side of the UI: terminal lifecycle, the input reader
//! thread and the draw/dispatch loop.

use std::io;
use std::thread;
use std::time::Duration;

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
};
use kanal::Sender;
use lexis_core::view::LookupView;
use lexis_types::AppEvent;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::bridge::{UiBridgeHandle, UiInput};
use crate::keys::map_key;
use crate::render::render;
use crate::update::{Step, UiState, apply_backend, update};

fn setup_terminal(title: &str) -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout()
        .execute(EnterAlternateScreen)?
        .execute(SetTitle(title))?;
    Terminal::new(CrosstermBackend::new(io::stdout()))
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

/// Poll crossterm and forward keys and resizes, with a tick whenever the
/// terminal stays quiet for `tick_rate`
fn spawn_input_reader(tx: Sender<UiInput>, tick_rate: Duration) {
    thread::spawn(move || {
        loop {
            let input = match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => UiInput::Key(key),
                    Ok(Event::Resize(..)) => UiInput::Resize,
                    Ok(_) => continue,
                    Err(e) => {
                        tracing::error!("[UI] Terminal read failed: {}", e);
                        break;
                    }
                },
                Ok(false) => UiInput::Tick,
                Err(e) => {
                    tracing::error!("[UI] Terminal poll failed: {}", e);
                    break;
                }
            };

            if tx.send(input).is_err() {
                break;
            }
        }
    });
}

pub struct TerminalOptions {
    pub tick_rate: Duration,
    pub scroll_step: u16,
}

/// Run the terminal until the user quits or the backend goes away
pub fn run_terminal(
    mut view: LookupView,
    handle: UiBridgeHandle,
    options: TerminalOptions,
) -> anyhow::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal(view.title())?;

    let UiBridgeHandle {
        to_ui_rx,
        input_tx,
        from_ui_tx,
    } = handle;
    spawn_input_reader(input_tx, options.tick_rate);

    let mut ui = UiState::new(options.scroll_step);
    let result = event_loop(&mut terminal, &mut view, &mut ui, &to_ui_rx, &from_ui_tx);

    restore_terminal()?;
    let _ = from_ui_tx.send(AppEvent::Shutdown);
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    view: &mut LookupView,
    ui: &mut UiState,
    inputs: &kanal::Receiver<UiInput>,
    to_app: &Sender<AppEvent>,
) -> anyhow::Result<()> {
    if let Some(request) = view.initialize() {
        to_app.send(AppEvent::Lookup {
            seq: request.seq,
            term: request.term,
        })?;
    }

    loop {
        terminal.draw(|frame| render(frame, view, ui))?;

        let Ok(input) = inputs.recv() else {
            tracing::info!("[UI] Input queue closed");
            return Ok(());
        };

        match input {
            UiInput::Key(key) => {
                let Some(action) = map_key(key) else {
                    continue;
                };
                match update(view, ui, action) {
                    Step::Continue => {}
                    Step::Send(event) => to_app.send(event)?,
                    Step::Quit => return Ok(()),
                }
            }
            UiInput::Tick => {
                if view.is_loading() {
                    ui.throbber.calc_next();
                }
            }
            UiInput::Resize => {}
            UiInput::Backend(AppEvent::Shutdown) => return Ok(()),
            UiInput::Backend(event) => apply_backend(view, ui, event),
        }
    }
}
