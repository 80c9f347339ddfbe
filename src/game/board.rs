use crate::consts;
use ratatui::layout::Position;

/// Static grid geometry: the playfield dimensions and cell size, all in
/// pixel-equivalent units.  Shared by copy; nothing ever mutates a `Board`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Board {
    pub(crate) width: u16,
    pub(crate) height: u16,
    pub(crate) cell: u16,
}

impl Board {
    /// Create a board.  `cell` must be nonzero and divide both `width` and
    /// `height` evenly.
    pub(crate) const fn new(width: u16, height: u16, cell: u16) -> Board {
        Board {
            width,
            height,
            cell,
        }
    }

    /// Number of cells along the horizontal axis
    pub(crate) const fn width_cells(&self) -> u16 {
        self.width / self.cell
    }

    /// Number of cells along the vertical axis
    pub(crate) const fn height_cells(&self) -> u16 {
        self.height / self.cell
    }

    /// The center cell, where the snake starts and resets to
    pub(crate) const fn center(&self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new(consts::SCREEN_WIDTH, consts::SCREEN_HEIGHT, consts::CELL_SIZE)
    }
}
