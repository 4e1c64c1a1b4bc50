use crate::ui::app::App;
use crate::ui::users::UsersState;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

const PAGE: isize = 5;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R')) {
        app.reload();
        return;
    }

    if matches!(app.state(), UsersState::Error(_)) {
        if key.code == KeyCode::Enter {
            app.retry();
        }
        return;
    }

    if matches!(app.state(), UsersState::Success(_)) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
            KeyCode::PageUp => app.move_selection(-PAGE),
            KeyCode::PageDown => app.move_selection(PAGE),
            KeyCode::Home => app.select_first(),
            KeyCode::End => app.select_last(),
            _ => {}
        }
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}
