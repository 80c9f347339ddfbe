//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Time between movements of the snake (20 ticks per second)
pub(crate) const TICK_PERIOD: Duration = Duration::from_millis(50);

/// Width of the playfield in pixel-equivalent units
pub(crate) const SCREEN_WIDTH: u16 = 640;

/// Height of the playfield in pixel-equivalent units
pub(crate) const SCREEN_HEIGHT: u16 = 480;

/// Width & height of a single grid cell in pixel-equivalent units.  Must be
/// nonzero and divide both [`SCREEN_WIDTH`] and [`SCREEN_HEIGHT`] evenly.
pub(crate) const CELL_SIZE: u16 = 20;

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window: a one-row score bar above the 32×24-cell playfield plus
/// its border.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 34,
    height: 27,
};

/// Glyph for the snake's head when it is moving north/up
pub(crate) const SNAKE_HEAD_NORTH_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving south/down
pub(crate) const SNAKE_HEAD_SOUTH_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving east/right
pub(crate) const SNAKE_HEAD_EAST_SYMBOL: char = '>';

/// Glyph for the snake's head when it is moving west/left
pub(crate) const SNAKE_HEAD_WEST_SYMBOL: char = '<';

/// Glyph for the cells of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '█';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '●';

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::Red);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
