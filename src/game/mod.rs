mod board;
mod direction;
mod food;
mod snake;
pub(crate) use self::board::Board;
use self::direction::Direction;
use self::food::Food;
use self::snake::Snake;
use crate::command::Command;
use crate::consts;
use crate::util::{center_rect, get_display_area};
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position, Rect, Size},
    style::Style,
    text::Line,
    widgets::Widget,
    Frame,
};
use std::io;
use std::ops::ControlFlow;
use std::time::Instant;

/// The game loop's state: the snake, the food, the board geometry, the RNG
/// used for food placement, and the deadline of the tick in progress.
///
/// There is exactly one logical state, "running": self-collision resets the
/// snake in place rather than ending the game, and the loop only stops on an
/// explicit quit command.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    score: u32,
    snake: Snake,
    food: Food,
    board: Board,
    next_tick: Option<Instant>,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(board: Board) -> Self {
        Game::new_with_rng(board, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(board: Board, mut rng: R) -> Game<R> {
        let snake = Snake::new(board.center());
        let food = Food::new(&mut rng, board);
        Game {
            rng,
            score: 0,
            snake,
            food,
            board,
            next_tick: None,
        }
    }

    /// Wait out the remainder of the current tick, handling any input events
    /// that arrive in the meantime, and advance the game when the tick
    /// elapses.  Returns `Break` when a quit command is received.
    pub(crate) fn process_input(&mut self) -> io::Result<ControlFlow<()>> {
        if self.next_tick.is_none() {
            self.next_tick = Some(Instant::now() + consts::TICK_PERIOD);
        }
        let when = self.next_tick.expect("next_tick should be Some");
        let wait = when.saturating_duration_since(Instant::now());
        if wait.is_zero() || !poll(wait)? {
            self.tick();
            self.next_tick = None;
            Ok(ControlFlow::Continue(()))
        } else {
            Ok(self.handle_event(read()?))
        }
    }

    /// Advance the game by one step, in strict order: latch the queued
    /// direction, move the snake, then handle food.
    fn tick(&mut self) {
        self.snake.update_direction();
        if !self.snake.advance(self.board) {
            self.score = 0;
        }
        if self.snake.head() == self.food.position() {
            self.score += 1;
            self.snake.grow();
            self.food.randomize(&mut self.rng, self.board);
        }
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    fn handle_event(&mut self, event: Event) -> ControlFlow<()> {
        if let Some(ev) = event.as_key_press_event() {
            match Command::from_key_event(ev) {
                Some(Command::Quit | Command::Q | Command::Esc) => {
                    return ControlFlow::Break(());
                }
                Some(Command::Up) => self.snake.turn(Direction::North),
                Some(Command::Down) => self.snake.turn(Direction::South),
                Some(Command::Left) => self.snake.turn(Direction::West),
                Some(Command::Right) => self.snake.turn(Direction::East),
                None => (),
            }
        }
        ControlFlow::Continue(())
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [score_area, board_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(display);
        Line::styled(format!(" Score: {}", self.score), consts::SCORE_BAR_STYLE)
            .render(score_area, buf);

        let block_size = Size::new(
            self.board.width_cells().saturating_add(2),
            self.board.height_cells().saturating_add(2),
        );
        let block_area = center_rect(board_area, block_size);
        // Every edge wraps, so the whole border is drawn dotted.
        DottedBorder.render(block_area, buf);

        let mut canvas = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            cell_size: self.board.cell,
            buf,
        };
        self.snake.draw(&mut canvas);
        self.food.draw(&mut canvas);
    }
}

/// Anything that can paint itself onto the playfield canvas.  Dispatched
/// explicitly by the renderer, snake first, food second.
pub(super) trait Drawable {
    fn draw(&self, canvas: &mut Canvas<'_>);
}

/// Adapter from board positions (pixel-equivalent units) to terminal cells
/// within the playfield's inner area.
#[derive(Debug, Eq, PartialEq)]
pub(super) struct Canvas<'a> {
    area: Rect,
    cell_size: u16,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    /// Draw a glyph at the terminal cell corresponding to `pos`.  Positions
    /// that fall outside the buffer are silently discarded.
    pub(super) fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        let Some(x) = self.area.x.checked_add(pos.x / self.cell_size) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y / self.cell_size) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }

    /// Blank the terminal cell corresponding to `pos`
    pub(super) fn erase_cell(&mut self, pos: Position) {
        self.draw_cell(pos, ' ', Style::new());
    }
}

/// A border of dotted lines, marking playfield edges that wrap around.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct DottedBorder;

impl Widget for DottedBorder {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let right = area.right().saturating_sub(1);
        let bottom = area.bottom().saturating_sub(1);
        set_char(buf, area.x, area.y, '·');
        set_char(buf, right, area.y, '·');
        set_char(buf, right, bottom, '·');
        set_char(buf, area.x, bottom, '·');
        for x in area.x.saturating_add(1)..right {
            set_char(buf, x, area.y, '⋯');
            set_char(buf, x, bottom, '⋯');
        }
        for y in area.y.saturating_add(1)..bottom {
            set_char(buf, area.x, y, '⋮');
            set_char(buf, right, y, '⋮');
        }
    }
}

fn set_char(buf: &mut Buffer, x: u16, y: u16, symbol: char) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_char(symbol);
    }
}
