//! Stateless UI rendering for the marker board.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::App;
use crate::games::markers::{Cell, Position};

const CELL_WIDTH: u16 = 4;

/// Renders the whole screen from app state.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Turn banner
            Constraint::Min(3),    // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let banner = Paragraph::new(banner_text(app))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().title("Strictly Markers").borders(Borders::ALL));
    frame.render_widget(banner, chunks[0]);

    draw_board(frame, chunks[1], app);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("arrows move  r/c select row/column  enter remove  e end turn  n new match  q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn banner_text(app: &App) -> String {
    let engine = app.engine();
    match engine.outcome() {
        Some(outcome) => format!("{} wins!", app.names().name(outcome.winner())),
        None => {
            let name = app.names().name(engine.active_player());
            match app.selection() {
                Some(selection) => format!("{}'s turn ({})", name, selection),
                None => format!("{}'s turn", name),
            }
        }
    }
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let size = app.engine().board().size();
    let width = u16::try_from(size).unwrap_or(u16::MAX).saturating_mul(CELL_WIDTH);
    let height = u16::try_from(size).unwrap_or(u16::MAX);
    let board_area = center_rect(area, width, height);

    let lines: Vec<Line> = (0..size)
        .map(|row| {
            Line::from(
                (0..size)
                    .map(|col| cell_span(app, Position::new(row, col)))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), board_area);
}

fn cell_span(app: &App, pos: Position) -> Span<'static> {
    let (symbol, base_style) = match app.engine().board().get(pos) {
        Some(Cell::Present) => (
            " ●  ",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        _ => (" ·  ", Style::default().fg(Color::DarkGray)),
    };

    let style = if pos == app.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else if !app.is_enabled(pos) {
        base_style.add_modifier(Modifier::DIM)
    } else {
        base_style
    };

    Span::styled(symbol, style)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::markers::{GameEngine, MoveProtocol};
    use crate::roster::PlayerNames;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_draw_shows_banner_and_markers() {
        let app = App::new(
            GameEngine::new(3, MoveProtocol::Point).unwrap(),
            PlayerNames::default(),
        );
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Player 1's turn"));
        assert_eq!(text.matches('●').count(), 9);
    }
}
