use crate::ui::app::App;
use crate::ui::events::{forward_state_changes, AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;
use tokio::runtime::Handle;

/// Runs the interactive screen until the user quits.
///
/// Blocks the calling thread; fetches run on `runtime`.
pub fn run(mut app: App, runtime: &Handle, tick_rate: Duration) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);
    forward_state_changes(runtime, app.subscribe(), events.sender());
    app.start();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::StateChanged) => app.on_state_changed(),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::debug!(cols, rows, "Terminal resized");
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
