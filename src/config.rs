use ratatui::style::Color;

/// Default playfield width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 20;

/// Default playfield height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 20;

/// Fixed simulation period in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 150;

/// Points granted per food item.
pub const FOOD_POINTS: u32 = 10;

/// Segments a fresh snake starts with.
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Head glyphs double as the directional "eye" of the snake.
pub const GLYPH_SNAKE_HEAD_UP: &str = "▲";
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "▼";
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "◀";
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = "▶";

/// Body segment glyph.
pub const GLYPH_SNAKE_BODY: &str = "█";

/// Tail segment glyph, lighter than the body.
pub const GLYPH_SNAKE_TAIL: &str = "▓";

/// Food marker glyph.
pub const GLYPH_FOOD: &str = "●";

/// Colors applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub snake_tail: Color,
    pub food: Color,
    pub border_fg: Color,
    pub hud_fg: Color,
    pub hud_value: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Green snake on a dark field.
pub const THEME: Theme = Theme {
    snake_head: Color::White,
    snake_body: Color::Green,
    snake_tail: Color::DarkGray,
    food: Color::Red,
    border_fg: Color::White,
    hud_fg: Color::DarkGray,
    hud_value: Color::White,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};
