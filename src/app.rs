use crate::game::{Board, Game};
use rand::Rng;
use ratatui::{backend::Backend, Terminal};
use std::io;

/// The application's top-level loop: draw a frame, then process input,
/// repeating until a quit command arrives.  The terminal handle is created in
/// `main` and passed in here; everything else the loop needs lives in the
/// [`Game`].
#[derive(Clone, Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng> {
    game: Game<R>,
}

impl App {
    pub(crate) fn new() -> App {
        App {
            game: Game::new(Board::default()),
        }
    }
}

impl Default for App {
    fn default() -> App {
        App::new()
    }
}

impl<R: Rng> App<R> {
    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|frame| self.game.draw(frame))?;
            if self.game.process_input()?.is_break() {
                return Ok(());
            }
        }
    }
}
