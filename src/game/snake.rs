use super::board::Board;
use super::direction::Direction;
use super::{Canvas, Drawable};
use crate::consts;
use ratatui::layout::Position;
use std::collections::VecDeque;

/// The snake's state machine.
///
/// All positions are in pixel-equivalent units aligned to the board's cell
/// size.  The body is ordered head-first; its cells are unique except
/// transiently in the middle of [`Snake::advance`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The cells of the snake, head at the front
    pub(super) body: VecDeque<Position>,

    /// The direction applied on the next move
    pub(super) direction: Direction,

    /// A direction change requested since the last move, latched by
    /// [`Snake::update_direction`]
    pub(super) pending: Option<Direction>,

    /// The length the body grows toward.  Always at least 1; the body catches
    /// up to it one cell per move after the snake eats.
    pub(super) target_len: usize,

    /// The tail cell dropped by the most recent move, if any
    pub(super) last_vacated: Option<Position>,

    /// The cell the snake starts at and resets to (the board center)
    start: Position,
}

impl Snake {
    /// Create a length-1 snake at `start`, facing east.  Callers pass the
    /// board's center cell.
    pub(super) fn new(start: Position) -> Snake {
        Snake {
            body: VecDeque::from([start]),
            direction: Direction::East,
            pending: None,
            target_len: 1,
            last_vacated: None,
            start,
        }
    }

    /// Return the position of the snake's head
    pub(super) fn head(&self) -> Position {
        self.body[0]
    }

    /// Return the glyph to use for drawing the snake's head
    pub(super) fn head_symbol(&self) -> char {
        match self.direction {
            Direction::North => consts::SNAKE_HEAD_NORTH_SYMBOL,
            Direction::South => consts::SNAKE_HEAD_SOUTH_SYMBOL,
            Direction::East => consts::SNAKE_HEAD_EAST_SYMBOL,
            Direction::West => consts::SNAKE_HEAD_WEST_SYMBOL,
        }
    }

    /// Queue a direction change to take effect on the next move.  A request
    /// for the exact opposite of the current direction is ignored, so the
    /// snake can never reverse into its own neck within a single tick.
    pub(super) fn turn(&mut self, direction: Direction) {
        if direction != self.direction.reverse() {
            self.pending = Some(direction);
        }
    }

    /// Latch the queued direction change, if any.  Called exactly once per
    /// tick, before [`Snake::advance`], so a direction queued during the
    /// previous tick's input phase takes effect exactly once.
    pub(super) fn update_direction(&mut self) {
        if let Some(direction) = self.pending.take() {
            self.direction = direction;
        }
    }

    /// Move the snake forwards one cell in the current direction, wrapping at
    /// the board edges.  If the new head cell collides with the body, the
    /// snake resets in place and this returns `false`.
    ///
    /// The first two body cells are exempt from the collision check: the head
    /// itself cannot be reached in one step, and the cell immediately behind
    /// the head is always adjacent under single-cell axis-aligned movement,
    /// so matching either would be a false positive rather than a real
    /// collision.
    pub(super) fn advance(&mut self, board: Board) -> bool {
        let new_head = self.direction.advance(self.head(), board);
        if self.body.iter().skip(2).any(|&p| p == new_head) {
            self.reset();
            return false;
        }
        self.body.push_front(new_head);
        if self.body.len() > self.target_len {
            self.last_vacated = self.body.pop_back();
        } else {
            self.last_vacated = None;
        }
        true
    }

    /// Extend the snake's target length in response to eating.  The body is
    /// not resized here; it lengthens because [`Snake::advance`] stops
    /// dropping the tail until the target is reached.
    pub(super) fn grow(&mut self) {
        self.target_len += 1;
    }

    /// Return the snake to its initial state: length 1 at the start cell,
    /// facing east.  A normal, expected transition, not a fault.
    pub(super) fn reset(&mut self) {
        self.body = VecDeque::from([self.start]);
        self.direction = Direction::East;
        self.pending = None;
        self.target_len = 1;
        self.last_vacated = None;
    }
}

impl Drawable for Snake {
    fn draw(&self, canvas: &mut Canvas<'_>) {
        for &pos in self.body.iter().skip(1) {
            canvas.draw_cell(pos, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        canvas.draw_cell(self.head(), self.head_symbol(), consts::SNAKE_STYLE);
        if let Some(pos) = self.last_vacated {
            canvas.erase_cell(pos);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn center_snake() -> Snake {
        Snake::new(Board::default().center())
    }

    #[rstest]
    #[case(Direction::East, Direction::West, None)]
    #[case(Direction::East, Direction::North, Some(Direction::North))]
    #[case(Direction::East, Direction::South, Some(Direction::South))]
    #[case(Direction::East, Direction::East, Some(Direction::East))]
    #[case(Direction::West, Direction::East, None)]
    #[case(Direction::North, Direction::South, None)]
    #[case(Direction::South, Direction::North, None)]
    #[case(Direction::South, Direction::West, Some(Direction::West))]
    fn turn_guard(
        #[case] current: Direction,
        #[case] requested: Direction,
        #[case] pending: Option<Direction>,
    ) {
        let mut snake = center_snake();
        snake.direction = current;
        snake.turn(requested);
        assert_eq!(snake.pending, pending);
    }

    #[test]
    fn update_direction_latches_once() {
        let mut snake = center_snake();
        snake.turn(Direction::North);
        snake.update_direction();
        assert_eq!(snake.direction, Direction::North);
        assert_eq!(snake.pending, None);
        snake.update_direction();
        assert_eq!(snake.direction, Direction::North);
    }

    #[test]
    fn first_move_from_center() {
        let board = Board::default();
        let mut snake = Snake::new(board.center());
        assert!(snake.advance(board));
        assert_eq!(snake.body, VecDeque::from([Position::new(340, 240)]));
        assert_eq!(snake.last_vacated, Some(Position::new(320, 240)));
        assert_eq!(snake.target_len, 1);
    }

    #[test]
    fn wraparound_east() {
        let board = Board::default();
        let mut snake = center_snake();
        snake.body = VecDeque::from([Position::new(620, 240)]);
        assert!(snake.advance(board));
        assert_eq!(snake.head(), Position::new(0, 240));
    }

    #[test]
    fn growth_is_lazy_and_bounded() {
        let board = Board::default();
        let mut snake = Snake::new(board.center());
        snake.grow();
        assert_eq!(snake.target_len, 2);
        assert_eq!(snake.body.len(), 1);

        assert!(snake.advance(board));
        assert_eq!(snake.body.len(), 2);
        assert_eq!(snake.last_vacated, None);

        assert!(snake.advance(board));
        assert_eq!(snake.body.len(), 2);
        assert_eq!(snake.last_vacated, Some(Position::new(320, 240)));
    }

    #[test]
    fn self_collision_resets_in_place() {
        let board = Board::default();
        let mut snake = Snake::new(board.center());
        snake.body = VecDeque::from([
            Position::new(320, 240),
            Position::new(340, 240),
            Position::new(340, 220),
            Position::new(320, 220),
        ]);
        snake.target_len = 4;
        snake.direction = Direction::North;
        snake.pending = Some(Direction::West);

        // Stepping north lands on body[3], which is fair game for collision.
        assert!(!snake.advance(board));
        assert_eq!(snake.body, VecDeque::from([Position::new(320, 240)]));
        assert_eq!(snake.direction, Direction::East);
        assert_eq!(snake.pending, None);
        assert_eq!(snake.target_len, 1);
        assert_eq!(snake.last_vacated, None);
    }

    #[test]
    fn neck_is_exempt_from_collision() {
        let board = Board::default();
        let mut snake = Snake::new(board.center());
        snake.body = VecDeque::from([Position::new(320, 240), Position::new(300, 240)]);
        snake.target_len = 2;
        snake.direction = Direction::West;

        // The computed head lands on body[1]; indices 0 and 1 are exempt, so
        // this must not reset even though the configuration is unreachable
        // under normal play.
        assert!(snake.advance(board));
        assert_eq!(
            snake.body,
            VecDeque::from([Position::new(300, 240), Position::new(320, 240)])
        );
        assert_eq!(snake.last_vacated, Some(Position::new(300, 240)));
    }

    #[rstest]
    #[case(Direction::North, '^')]
    #[case(Direction::South, 'v')]
    #[case(Direction::East, '>')]
    #[case(Direction::West, '<')]
    fn head_symbols(#[case] d: Direction, #[case] symbol: char) {
        let mut snake = center_snake();
        snake.direction = d;
        assert_eq!(snake.head_symbol(), symbol);
    }
}
