//! Main TUI runner - entry point and event loop

use tokio::sync::mpsc;

use folio_app::config::Settings;
use folio_app::message::Message;
use folio_app::process;
use folio_app::state::AppState;
use folio_app::DocumentSource;
use folio_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI until the user quits.
///
/// Must be called from within a tokio runtime: the content fetch is spawned
/// onto it.
pub fn run(source: DocumentSource, settings: Settings) -> Result<()> {
    terminal::install_panic_hook();

    info!(
        "Starting TUI: source={}, stagger_ms={}",
        source, settings.ui.stagger_ms
    );

    let mut term = ratatui::init();
    let mut state = AppState::new(source, settings);
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(16);

    // Kick off the one-time fetch before the first frame
    process::process_message(&mut state, Message::LoadContent, &msg_tx);

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx);

    ratatui::restore();
    info!("TUI exited");
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
) -> Result<()> {
    while !state.should_quit() {
        // Results from background tasks
        while let Ok(msg) = msg_rx.try_recv() {
            process::process_message(state, msg, &msg_tx);
        }

        terminal
            .draw(|frame| render::view(frame, state))
            .map_err(|e| Error::terminal(e.to_string()))?;

        if let Some(message) = event::poll()? {
            process::process_message(state, message, &msg_tx);
        }
    }

    Ok(())
}
