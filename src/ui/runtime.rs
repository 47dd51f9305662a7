use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::welcome::WelcomeRepository;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;
use tracing::info;

/// Run the onboarding screen until the user quits.
pub fn run<R: WelcomeRepository>(config: &Config, repository: R) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let mut app = App::new(config.keys.clone(), repository);
    let events = EventHandler::new(tick_rate);

    app.start();
    info!("onboarding screen started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    info!("onboarding screen closed");
    Ok(())
}
