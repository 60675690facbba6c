use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;
use crate::game::GameSession;

const SEPARATOR: &str = " │ ";

/// Renders the one-line HUD under the playfield and returns the remaining
/// play area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, session: &GameSession, theme: &Theme) -> Rect {
    let [play_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let compact = hud_width(session, false) > usize::from(hud_area.width);
    frame.render_widget(
        Paragraph::new(hud_line(session, theme, compact))
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.hud_fg)),
        hud_area,
    );

    play_area
}

fn hud_line(session: &GameSession, theme: &Theme, compact: bool) -> Line<'static> {
    let value_style = Style::default().fg(theme.hud_value);
    let (score_label, high_label, length_label) = labels(compact);

    Line::from(vec![
        Span::raw(format!("{score_label}: ")),
        Span::styled(session.score().to_string(), value_style),
        Span::raw(SEPARATOR),
        Span::raw(format!("{high_label}: ")),
        Span::styled(session.high_score().to_string(), value_style),
        Span::raw(SEPARATOR),
        Span::raw(format!("{length_label}: ")),
        Span::styled(session.snake().len().to_string(), value_style),
    ])
}

fn hud_width(session: &GameSession, compact: bool) -> usize {
    let (score_label, high_label, length_label) = labels(compact);
    let text = format!(
        "{score_label}: {}{SEPARATOR}{high_label}: {}{SEPARATOR}{length_label}: {}",
        session.score(),
        session.high_score(),
        session.snake().len(),
    );
    text.width()
}

fn labels(compact: bool) -> (&'static str, &'static str, &'static str) {
    if compact {
        ("S", "H", "L")
    } else {
        ("Score", "Hi", "Length")
    }
}

#[cfg(test)]
mod tests {
    use crate::config::THEME;
    use crate::game::GameSession;
    use crate::grid::Grid;

    use super::{hud_line, hud_width};

    #[test]
    fn hud_line_shows_score_high_score_and_length() {
        let session = GameSession::with_seed(
            Grid {
                width: 20,
                height: 20,
            },
            70,
            1,
        );

        let line = hud_line(&session, &THEME, false);
        let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();

        assert!(text.contains("Score: 0"));
        assert!(text.contains("Hi: 70"));
        assert!(text.contains("Length: 3"));
        assert!(hud_width(&session, true) < hud_width(&session, false));
    }
}
