use crate::canvas::{self, CanvasRect, Viewport};
use crate::cards::Card;
use crate::player::Player;
use crate::round::{Button, Stage};
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner, split_table};

const BUTTON_RED: Color = Color::Rgb(255, 0, 0);
const BUTTON_HOVER: Color = Color::Rgb(200, 0, 0);
const SEAT_LABEL_WIDTH: f32 = 170.0;

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let (canvas_area, status_area) = split_table(f.area());
    let vp = Viewport::new(canvas_area);

    let [r, g, b] = app.atlas.felt_rgb();
    let felt = Style::default().bg(Color::Rgb(r, g, b));
    f.render_widget(Block::default().style(felt), canvas_area);

    let header = Line::from(format!(
        " {}   Bet size: {}   Deck: {}",
        app.round.stage().label(),
        app.round.bet_amount(),
        app.round.deck_len()
    ));
    let header_area = Rect { height: canvas_area.height.min(1), ..canvas_area };
    f.render_widget(Paragraph::new(header).style(felt.fg(Color::White)), header_area);

    for (card, rect) in canvas::community_layout(app.round.community_cards(), &app.atlas) {
        render_card_widget(f, vp.to_cells(rect), card);
    }

    let rows = canvas::hand_layout(app.round.players(), &app.atlas);
    for (player, row) in app.round.players().iter().zip(rows) {
        if let Some((_, first)) = row.first() {
            let x = first.x - SEAT_LABEL_WIDTH;
            let label = CanvasRect::new(x, first.y, SEAT_LABEL_WIDTH, 40.0);
            render_seat_label(f, vp.to_cells(label), player, felt);
        }
        for (card, rect) in row {
            render_card_widget(f, vp.to_cells(rect), card);
        }
    }

    for button in Button::ALL {
        render_button(f, vp.to_cells(canvas::button_rect(button)), app, button);
    }

    draw_status(f, status_area, app);

    if app.help_open() {
        draw_help(f);
    }
}

fn draw_status(f: &mut Frame, area: Rect, app: &AppState) {
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), area);
    let status_inner = inner(area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(status_inner);

    let mut left_info = Vec::with_capacity(2);
    let prompt = match app.round.stage() {
        Stage::WaitingToDeal => "No hand dealt. Click Deal or press D.".to_string(),
        Stage::Showdown => "All five community cards are out. Fold to start over.".to_string(),
        stage => format!("{}: Check or Bet to turn the next card.", stage.label()),
    };
    left_info.push(Line::from(prompt));
    if let Some(err) = app.action_error() {
        left_info.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    } else if let Some(p) = app.round.human() {
        let last = p.last_action().unwrap_or("--");
        left_info.push(Line::from(format!("{}  Chips: ${}  Last: {last}", p.name(), p.chips())));
    }

    let right_keys = vec![Line::from("F C B D • M menu"), Line::from("? help • Q quit")];
    let left_para = Paragraph::new(left_info).wrap(Wrap { trim: true });
    let right_para =
        Paragraph::new(right_keys).wrap(Wrap { trim: true }).alignment(Alignment::Right);
    f.render_widget(left_para, cols[0]);
    f.render_widget(right_para, cols[1]);
}

fn render_seat_label(f: &mut Frame, area: Rect, p: &Player, felt: Style) {
    let name_style = if p.is_human() {
        felt.fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        felt.fg(Color::Gray)
    };
    let lines = vec![
        Line::from(Span::styled(p.name().to_string(), name_style)),
        Line::from(Span::styled(format!("${}", p.chips()), felt.fg(Color::White))),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Right), area);
}

fn render_button(f: &mut Frame, area: Rect, app: &AppState, button: Button) {
    let bg = if app.hover() == Some(button) { BUTTON_HOVER } else { BUTTON_RED };
    let mut style = Style::default().bg(bg).fg(Color::White).add_modifier(Modifier::BOLD);
    if !app.round.button_enabled(button) {
        style = style.add_modifier(Modifier::DIM);
    }
    f.render_widget(Block::default().style(style), area);
    if area.height == 0 {
        return;
    }
    let label_row = Rect { y: area.y + area.height / 2, height: 1, ..area };
    let para = Paragraph::new(button.label()).style(style).alignment(Alignment::Center);
    f.render_widget(para, label_row);
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(60, 70, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let lines = vec![
        Line::from(Span::styled("Table:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- Click a button, or use the keys below"),
        Line::from("- D / Space: deal (only with no hand out)"),
        Line::from("- F: fold (restarts the hand)"),
        Line::from("- C: check (turns one community card)"),
        Line::from("- B: bet the configured amount (turns one card)"),
        Line::from(""),
        Line::from(Span::styled("Menu:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- M: open / close menu"),
        Line::from("- Up / Down: move selection"),
        Line::from("- + / -: adjust value"),
        Line::from("- Enter: apply"),
        Line::from("- Esc: cancel"),
        Line::from(""),
        Line::from("Q or Esc quits • close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn suit_style(card: Card) -> Style {
    let fg = if card.suit().is_red() { Color::Red } else { Color::Black };
    Style::default().fg(fg).bg(Color::White)
}

fn render_card_widget(f: &mut Frame, area: Rect, card: Card) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let style = suit_style(card);
    let text = format!("{}{}", card.rank().label(), card.suit().glyph());
    if area.height < 3 || area.width < 4 {
        f.render_widget(Paragraph::new(text).style(style).alignment(Alignment::Center), area);
        return;
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray).bg(Color::White))
        .style(style);
    let inner = inner(area);
    f.render_widget(block, area);
    let content = Line::from(Span::styled(text, style.add_modifier(Modifier::BOLD)));
    let para = Paragraph::new(content).alignment(Alignment::Center);
    f.render_widget(para, inner);
}
