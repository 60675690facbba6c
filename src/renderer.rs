use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{
    Theme, GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD_DOWN, GLYPH_SNAKE_HEAD_LEFT,
    GLYPH_SNAKE_HEAD_RIGHT, GLYPH_SNAKE_HEAD_UP, GLYPH_SNAKE_TAIL,
};
use crate::game::{GameSession, SessionStatus};
use crate::grid::{Cell, Grid};
use crate::input::Direction;
use crate::ui::hud::render_hud;
use crate::ui::menu::{
    render_game_over_menu, render_pause_menu, render_start_menu, render_won_menu,
};

/// Renders one full frame from a read-only view of the session.
pub fn render(frame: &mut Frame<'_>, session: &GameSession, theme: &Theme) {
    let area = frame.area();
    let play_area = render_hud(frame, area, session, theme);

    let block = Block::bordered().border_style(Style::new().fg(theme.border_fg));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_food(frame, inner, session, theme);
    render_snake(frame, inner, session, theme);

    match session.status() {
        SessionStatus::Idle => {
            render_start_menu(frame, play_area, session.high_score(), theme);
        }
        SessionStatus::Paused => render_pause_menu(frame, play_area),
        SessionStatus::GameOver => render_game_over_menu(
            frame,
            play_area,
            session.score(),
            session.high_score(),
            session.last_collision(),
        ),
        SessionStatus::Won => render_won_menu(frame, play_area, session.score()),
        SessionStatus::Running => {}
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, session: &GameSession, theme: &Theme) {
    let Some(food) = session.food() else {
        return;
    };
    let Some((x, y)) = logical_to_terminal(inner, session.grid(), food) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, session: &GameSession, theme: &Theme) {
    let snake = session.snake();
    let head = snake.head();
    let tail = snake.segments().last().copied();

    let buffer = frame.buffer_mut();
    for segment in snake.segments() {
        let Some((x, y)) = logical_to_terminal(inner, session.grid(), *segment) else {
            continue;
        };

        if *segment == head {
            buffer.set_string(
                x,
                y,
                head_glyph(snake.heading()),
                Style::new()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            );
            continue;
        }

        if Some(*segment) == tail {
            buffer.set_string(x, y, GLYPH_SNAKE_TAIL, Style::new().fg(theme.snake_tail));
            continue;
        }

        buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(theme.snake_body));
    }
}

/// The head glyph points the way the snake travels.
fn head_glyph(heading: Direction) -> &'static str {
    match heading {
        Direction::Up => GLYPH_SNAKE_HEAD_UP,
        Direction::Down => GLYPH_SNAKE_HEAD_DOWN,
        Direction::Left => GLYPH_SNAKE_HEAD_LEFT,
        Direction::Right => GLYPH_SNAKE_HEAD_RIGHT,
    }
}

fn logical_to_terminal(inner: Rect, grid: Grid, cell: Cell) -> Option<(u16, u16)> {
    if !grid.contains(cell) {
        return None;
    }

    let x_offset = u16::try_from(cell.x).ok()?;
    let y_offset = u16::try_from(cell.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
