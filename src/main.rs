use anyhow::Result;

mod app;
mod client;
mod config;
mod handler;
mod persona;
mod tui;
mod ui;

use app::App;
use config::Config;
use tui::{EventHandler, Tui};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load().unwrap_or_else(|_| Config::new());
    let mut app = App::new(&config);

    tui::install_panic_hook();
    let mut terminal = tui::init()?;
    let mut events = EventHandler::new();

    let result = run(&mut terminal, &mut events, &mut app).await;

    tui::restore()?;
    result
}

async fn run(terminal: &mut Tui, events: &mut EventHandler, app: &mut App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::render(app, frame))?;

        if let Some(event) = events.next().await {
            handler::handle_event(app, event)?;
        }

        poll_reply(app).await;
    }
    Ok(())
}

/// Settle the in-flight reply request, if any. Checked after every event;
/// the 300ms tick guarantees this runs soon after the task finishes even
/// when no keys are pressed.
async fn poll_reply(app: &mut App) {
    let finished = app
        .pending_reply
        .as_ref()
        .map(|task| task.is_finished())
        .unwrap_or(false);

    if finished {
        if let Some(task) = app.pending_reply.take() {
            // A panicked or cancelled task is just another failed request
            let result = match task.await {
                Ok(result) => result,
                Err(err) => Err(err.into()),
            };
            app.finish_reply(result);
        }
    }
}
