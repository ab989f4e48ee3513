use crate::api::CharacterApi;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use tracing::info;

/// Blocking UI loop. Must run on a thread that can see the tokio runtime
/// (e.g. inside `spawn_blocking`), since workflows spawn their requests.
pub fn run(config: &Config, api: Arc<dyn CharacterApi>) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = config.ui.tick_rate();
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(api, events.sender());
    info!(endpoint = %config.api.endpoint, "ui started");
    app.mount(config.ui.fetch_on_start);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(event) => handle_event(&mut app, event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    info!("ui stopped");
    Ok(())
}

pub fn handle_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::StateChanged => app.on_state_changed(),
        AppEvent::CharacterLoaded { id, result } => app.on_character_loaded(id, result),
        // The next draw picks up the new size.
        AppEvent::Tick | AppEvent::Resize(..) => {}
    }
}
