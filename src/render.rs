use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
    Frame,
};

use crate::config::GAME_OVER_MESSAGE;
use crate::game::{HeadOrientation, Phase, Snapshot};
use crate::grid::Position;

/// Terminal columns per grid cell, so the board looks square.
const CELL_WIDTH: u16 = 2;

const REGULAR_FOOD_SYMBOL: &str = "●";
const SPECIAL_FOOD_SYMBOL: &str = "★";

/// The upward head glyph turned by the orientation's rotation.
pub fn head_symbol(orientation: HeadOrientation) -> &'static str {
    if orientation == HeadOrientation::Unset {
        return "◆";
    }
    match orientation.degrees() {
        90 => "▶",
        180 => "▼",
        -90 => "◀",
        _ => "▲",
    }
}

pub fn render(frame: &mut Frame, snapshot: &Snapshot) {
    let layout = Layout::vertical([
        Constraint::Length(3), // Scores
        Constraint::Min(0),    // Board
    ])
    .split(frame.area());

    frame.render_widget(
        Paragraph::new(format!(
            "gridsnek    {}    {}",
            snapshot.score_text(),
            snapshot.best_score_text()
        ))
        .alignment(Alignment::Left)
        .block(Block::default().borders(Borders::ALL)),
        layout[0],
    );

    let side = snapshot.grid_size.max(0) as u16;
    let board_area = centered(layout[1], side * CELL_WIDTH + 2, side + 2);
    let title = match snapshot.phase {
        Phase::Running => "Playing",
        Phase::Over => "Game over",
        Phase::Halted => "Halted. Press q to quit",
    };
    let block = Block::default().title(title).borders(Borders::ALL);
    let inner_area = block.inner(board_area);
    frame.render_widget(block, board_area);
    frame.render_widget(snapshot, inner_area);

    if snapshot.phase == Phase::Over {
        let prompt_area = centered(layout[1], 36, 5);
        frame.render_widget(Clear, prompt_area);
        frame.render_widget(
            Paragraph::new(format!("{}\n\n[Enter] OK   [n] Cancel", GAME_OVER_MESSAGE))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            prompt_area,
        );
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn paint(buf: &mut Buffer, area: Rect, pos: Position, symbol: &str, style: Style) {
    // Positions are 1-indexed
    let col = (pos.x - 1) as u16 * CELL_WIDTH;
    let row = (pos.y - 1) as u16;
    if col + CELL_WIDTH > area.width || row >= area.height {
        return;
    }

    for offset in 0..CELL_WIDTH {
        if let Some(cell) = buf.cell_mut((area.x + col + offset, area.y + row)) {
            cell.set_symbol(if offset == 0 { symbol } else { " " })
                .set_style(style);
        }
    }
}

impl Widget for &Snapshot<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let body = Style::default().bg(Color::Green);
        for pos in self.snake.segments().skip(1) {
            paint(buf, area, *pos, " ", body);
        }

        paint(
            buf,
            area,
            self.regular_food,
            REGULAR_FOOD_SYMBOL,
            Style::default().fg(Color::LightRed),
        );

        if let Some(pos) = self.special_food {
            paint(
                buf,
                area,
                pos,
                SPECIAL_FOOD_SYMBOL,
                Style::default().fg(Color::Yellow).bold(),
            );
        }

        // Head goes last so it is never hidden
        paint(
            buf,
            area,
            self.snake.head(),
            head_symbol(self.orientation),
            Style::default().fg(Color::Yellow).bg(Color::Green),
        );
    }
}
