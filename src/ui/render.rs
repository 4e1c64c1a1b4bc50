use crate::api::User;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, CARD_BORDER, HEADER_TEXT, SECONDARY_TEXT, STATUS_ERROR,
    STATUS_PENDING,
};
use crate::ui::users::UsersState;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

const ERROR_PANEL_WIDTH: u16 = 60;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new(app.state(), app.spinner(), app.source_label());
    frame.render_widget(header_widget.widget(), header);
    frame.render_widget(Clear, body);

    match app.state() {
        UsersState::Loading => draw_loading(frame, body, app.spinner()),
        UsersState::Success(users) => draw_users(frame, body, users, app.selected()),
        UsersState::Error(message) => draw_error(frame, body, message),
    }

    let footer_widget = Footer::new();
    frame.render_widget(footer_widget.widget(footer, app.state()), footer);
}

fn draw_loading(frame: &mut Frame<'_>, body: Rect, spinner: char) {
    let line = Line::from(vec![
        Span::styled(spinner.to_string(), Style::default().fg(STATUS_PENDING)),
        Span::styled(" Loading users…", Style::default().fg(HEADER_TEXT)),
    ]);
    let area = centered_rect_by_size(body.width, 1, body);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_users(frame: &mut Frame<'_>, body: Rect, users: &[User], selected: usize) {
    if users.is_empty() {
        let area = centered_rect_by_size(body.width, 1, body);
        let empty = Paragraph::new("No users found.")
            .style(Style::default().fg(SECONDARY_TEXT))
            .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let separator = "─".repeat(body.width.saturating_sub(2) as usize);
    let items: Vec<ListItem> = users
        .iter()
        .map(|user| user_card(user, &separator))
        .collect();

    let list = List::new(items).highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT));
    let mut state = ListState::default().with_selected(Some(selected.min(users.len() - 1)));
    frame.render_stateful_widget(list, body, &mut state);
}

fn user_card(user: &User, separator: &str) -> ListItem<'static> {
    let secondary = Style::default().fg(SECONDARY_TEXT);
    ListItem::new(vec![
        Line::from(Span::styled(
            format!(" {}", user.name),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(format!("   ✉ {}", user.email), secondary)),
        Line::from(Span::styled(format!("   ☎ {}", user.phone), secondary)),
        Line::from(Span::styled(
            format!(" {}", separator),
            Style::default().fg(CARD_BORDER),
        )),
    ])
}

fn draw_error(frame: &mut Frame<'_>, body: Rect, message: &str) {
    let width = ERROR_PANEL_WIDTH.min(body.width);
    let message_rows = wrapped_rows(message, width.saturating_sub(2));
    // borders + heading + blank + message + blank + button
    let height = message_rows.saturating_add(6).min(body.height);
    let area = centered_rect_by_size(width, height, body);

    let block = Block::default()
        .title(" Error ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(STATUS_ERROR));
    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    // The button keeps its row; a long message gives up lines instead.
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let heading = Paragraph::new(Span::styled(
        "Could not load users",
        Style::default()
            .fg(STATUS_ERROR)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(heading, rows[0]);

    let text = Paragraph::new(Span::styled(
        message.to_string(),
        Style::default().fg(STATUS_ERROR),
    ))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(text, rows[2]);

    let button = Paragraph::new(Span::styled(
        "[ Retry ]",
        Style::default()
            .fg(HEADER_TEXT)
            .add_modifier(Modifier::REVERSED),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(button, rows[4]);
}

/// Rows `text` takes when word-wrapped to `width` columns. Words wider than
/// a row are split across rows.
fn wrapped_rows(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let mut rows = 1usize;
    let mut used = 0usize;
    for word in text.split_whitespace() {
        let len = word.chars().count();
        if used > 0 && used + 1 + len <= width {
            used += 1 + len;
            continue;
        }
        if used > 0 {
            rows += 1;
        }
        rows += (len - 1) / width;
        used = (len - 1) % width + 1;
    }
    u16::try_from(rows).unwrap_or(u16::MAX)
}
