use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::app::App;
use crate::tui::AppEvent;

pub fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Mouse(mouse) => handle_mouse(app, mouse),
        AppEvent::Resize => {}
        AppEvent::Tick => {
            app.tick_animation();
        }
    }
    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match key.code {
        KeyCode::Esc => app.should_quit = true,

        // Commit the draft. submit() itself enforces the blank-draft and
        // busy-flag preconditions; dispatch only happens when it yields
        // a payload.
        KeyCode::Enter => {
            if let Some(outbound) = app.submit() {
                let client = app.client.clone();
                app.pending_reply = Some(tokio::spawn(async move {
                    client.reply(&outbound.message, outbound.mode).await
                }));
            }
        }

        // Switch persona; works even while a reply is in flight
        KeyCode::Tab => app.toggle_mode(),

        // Chat pane scrolling
        KeyCode::Up => app.scroll_up(),
        KeyCode::Down => app.scroll_down(),

        // Draft editing
        KeyCode::Backspace => app.delete_char_before_cursor(),
        KeyCode::Delete => app.delete_char_at_cursor(),
        KeyCode::Left => app.cursor_left(),
        KeyCode::Right => app.cursor_right(),
        KeyCode::Home => app.cursor_home(),
        KeyCode::End => app.cursor_end(),
        KeyCode::Char(c) => app.insert_char(c),

        _ => {}
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollDown => {
            app.scroll_down();
            app.scroll_down();
            app.scroll_down();
        }
        MouseEventKind::ScrollUp => {
            app.scroll_up();
            app.scroll_up();
            app.scroll_up();
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::persona::Mode;

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[tokio::test]
    async fn enter_on_blank_draft_dispatches_nothing() {
        let mut app = App::new(&Config::new());
        handle_event(&mut app, key(KeyCode::Char(' '))).unwrap();
        handle_event(&mut app, key(KeyCode::Enter)).unwrap();

        assert!(app.turns.is_empty());
        assert!(app.pending_reply.is_none());
        assert!(!app.sending);
    }

    #[tokio::test]
    async fn enter_while_busy_dispatches_no_second_request() {
        let mut app = App::new(&Config::new());
        for c in "hello".chars() {
            handle_event(&mut app, key(KeyCode::Char(c))).unwrap();
        }
        handle_event(&mut app, key(KeyCode::Enter)).unwrap();
        let first = app.pending_reply.take();
        assert!(first.is_some());

        handle_event(&mut app, key(KeyCode::Char('x'))).unwrap();
        handle_event(&mut app, key(KeyCode::Enter)).unwrap();

        assert_eq!(app.turns.len(), 1);
        assert!(app.pending_reply.is_none());
        first.unwrap().abort();
    }

    #[tokio::test]
    async fn tab_toggles_mode_without_touching_the_draft() {
        let mut app = App::new(&Config::new());
        for c in "hi".chars() {
            handle_event(&mut app, key(KeyCode::Char(c))).unwrap();
        }
        handle_event(&mut app, key(KeyCode::Tab)).unwrap();

        assert_eq!(app.mode, Mode::Serious);
        assert_eq!(app.draft, "hi");
        assert!(app.turns.is_empty());
    }

    #[tokio::test]
    async fn escape_requests_quit() {
        let mut app = App::new(&Config::new());
        handle_event(&mut app, key(KeyCode::Esc)).unwrap();
        assert!(app.should_quit);
    }
}
