use super::board::Board;
use super::{Canvas, Drawable};
use crate::consts;
use rand::Rng;
use ratatui::layout::Position;

/// A single food cell.  Created once per game and repositioned, never
/// recreated, whenever the snake's head lands on it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Food {
    pub(super) pos: Position,
}

impl Food {
    /// Create a food cell at a random position on `board`
    pub(super) fn new<R: Rng>(rng: &mut R, board: Board) -> Food {
        let mut food = Food {
            pos: Position::ORIGIN,
        };
        food.randomize(rng, board);
        food
    }

    pub(super) fn position(&self) -> Position {
        self.pos
    }

    /// Move the food to a cell drawn uniformly at random over the whole
    /// board.  Cells currently occupied by the snake are deliberately not
    /// excluded.
    pub(super) fn randomize<R: Rng>(&mut self, rng: &mut R, board: Board) {
        let x = rng.random_range(0..board.width_cells()) * board.cell;
        let y = rng.random_range(0..board.height_cells()) * board.cell;
        self.pos = Position::new(x, y);
    }
}

impl Drawable for Food {
    fn draw(&self, canvas: &mut Canvas<'_>) {
        canvas.draw_cell(self.pos, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
    }
}
