use super::board::Board;
use ratatui::layout::Position;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Step `pos` one cell in this direction.  Every edge of the board wraps
    /// around to the opposite edge, so this always produces a position within
    /// `[0, width) × [0, height)`.
    pub(super) fn advance(self, pos: Position, board: Board) -> Position {
        let Position { mut x, mut y } = pos;
        match self {
            Direction::North => {
                y = wrap_decrement(y, board.height, board.cell);
            }
            Direction::East => {
                x = wrap_increment(x, board.width, board.cell);
            }
            Direction::South => {
                y = wrap_increment(y, board.height, board.cell);
            }
            Direction::West => {
                x = wrap_decrement(x, board.width, board.cell);
            }
        }
        Position { x, y }
    }

    pub(super) fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}

fn wrap_decrement(v: u16, limit: u16, step: u16) -> u16 {
    v.checked_sub(step)
        .unwrap_or_else(|| limit.saturating_sub(step))
}

fn wrap_increment(v: u16, limit: u16, step: u16) -> u16 {
    v.checked_add(step).filter(|&next| next < limit).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Direction::North, Position::new(320, 240), Position::new(320, 220))]
    #[case(Direction::South, Position::new(320, 240), Position::new(320, 260))]
    #[case(Direction::East, Position::new(320, 240), Position::new(340, 240))]
    #[case(Direction::West, Position::new(320, 240), Position::new(300, 240))]
    #[case(Direction::North, Position::new(320, 0), Position::new(320, 460))]
    #[case(Direction::South, Position::new(320, 460), Position::new(320, 0))]
    #[case(Direction::East, Position::new(620, 240), Position::new(0, 240))]
    #[case(Direction::West, Position::new(0, 240), Position::new(620, 240))]
    #[case(Direction::North, Position::new(0, 0), Position::new(0, 460))]
    #[case(Direction::West, Position::new(0, 0), Position::new(620, 0))]
    #[case(Direction::South, Position::new(620, 460), Position::new(620, 0))]
    #[case(Direction::East, Position::new(620, 460), Position::new(0, 460))]
    fn test_advance(#[case] d: Direction, #[case] pos: Position, #[case] stepped: Position) {
        assert_eq!(d.advance(pos, Board::default()), stepped);
    }

    #[rstest]
    #[case(Direction::North, Direction::South)]
    #[case(Direction::East, Direction::West)]
    fn test_reverse(#[case] d: Direction, #[case] r: Direction) {
        assert_eq!(d.reverse(), r);
        assert_eq!(r.reverse(), d);
    }
}
