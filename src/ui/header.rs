use crate::ui::theme::{
    GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK, STATUS_PENDING,
};
use crate::ui::users::UsersState;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    state: &'a UsersState,
    spinner: char,
    source: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(state: &'a UsersState, spinner: char, source: &'a str) -> Self {
        Self {
            state,
            spinner,
            source,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (status, status_color) = match self.state {
            UsersState::Loading => (format!("{} Loading", self.spinner), STATUS_PENDING),
            UsersState::Success(users) => (user_count(users.len()), STATUS_OK),
            UsersState::Error(_) => ("✖ Error".to_string(), STATUS_ERROR),
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("User list", text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            Span::styled(status, Style::default().fg(status_color)),
            Span::styled("  │  ", separator_style),
            Span::styled(self.source.to_string(), separator_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn user_count(count: usize) -> String {
    match count {
        1 => "1 user".to_string(),
        n => format!("{} users", n),
    }
}
