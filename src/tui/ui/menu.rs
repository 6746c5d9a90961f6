use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

const BANNER: &str = r#"
 ___  ___  _  _____ ___   _____ _   ___ _    ___
| _ \/ _ \| |/ / __| _ \ |_   _/_\ | _ ) |  | __|
|  _/ (_) | ' <| _||   /   | |/ _ \| _ \ |__| _|
|_|  \___/|_|\_\___|_|_\   |_/_/ \_\___/____|___|
"#;

pub(super) fn draw_menu(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let area = centered_rect(70, 70, size);
    let block = Block::default().title("poker-table").borders(Borders::ALL);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    let inner_all = inner(area);

    let banner_lines: Vec<Line> = BANNER
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(Color::Red))))
        .collect();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(banner_lines.len() as u16 + 1), Constraint::Min(3)])
        .split(inner_all);

    let banner = Paragraph::new(banner_lines).alignment(Alignment::Center);
    f.render_widget(banner, rows[0]);

    let mut cfg_lines: Vec<Line> = Vec::new();
    cfg_lines.push(Line::from(Span::styled(
        "Table settings:",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for (i, it) in app.menu_items_display().into_iter().enumerate() {
        let style = if i == app.menu_index {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        cfg_lines.push(Line::from(Span::styled(it, style)));
    }
    cfg_lines.push(Line::from(""));
    cfg_lines.push(Line::from(Span::styled(
        "Applying reseats the table with fresh stacks.",
        Style::default().add_modifier(Modifier::ITALIC),
    )));
    cfg_lines.push(Line::from(Span::styled(
        "[Enter] Apply  [Q] Quit  [Esc] Cancel  [↑/↓] Move  [+/-] Adjust",
        Style::default().add_modifier(Modifier::DIM),
    )));
    let cfg_para = Paragraph::new(cfg_lines).wrap(Wrap { trim: true }).alignment(Alignment::Center);
    f.render_widget(cfg_para, rows[1]);
}
