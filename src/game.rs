use std::{process::exit, thread::sleep, time::Duration};

use crate::{Cell, Coords, TermInt};
use crate::config::GameConfig;
use crate::input::{control_for, Control};
use crate::session::{Ending, GameSession, SessionState};
use crate::snake::Direction::{self, *};
use crate::term::TermManager;

use anyhow::{bail, Result};
use log::info;

/// Terminal columns per grid cell
const CELL_WIDTH: TermInt = 2;
/// Board origin: one header line, then the top border
const BOARD_TOP_LEFT: Coords = (0, 1);
/// Poll interval while paused
const PAUSE_POLL_MS: u64 = 20;

const SNAKE_BODY_CHAR: char = '█';
const FOOD_CHAR: char = 'O';
const DEAD_SNAKE_CHAR: char = 'X';

pub struct SnakeGame {
    config: GameConfig,
    paused: bool,
    term: TermManager,
    drawn: Vec<Cell>,
}

impl SnakeGame {
    pub fn new(config: GameConfig) -> Result<Self> {
        Ok(SnakeGame { config, paused: false, term: TermManager::new()?, drawn: vec![] })
    }

    pub fn initialize(&mut self) -> Result<()> {
        let (w, h) = self.term.get_terminal_size();
        let (need_w, need_h) = self.board_size();
        if w < need_w || h < need_h + BOARD_TOP_LEFT.1 {
            bail!(
                "terminal is {}x{} but a {}x{} grid needs at least {}x{}",
                w, h, self.config.grid_width, self.config.grid_height, need_w, need_h + BOARD_TOP_LEFT.1
            );
        }

        self.term.setup()
    }

    /// Puts the terminal back into its normal state.
    pub fn shutdown(&mut self) -> Result<()> {
        self.term.restore()
    }

    pub fn show_intro(&mut self) -> Result<()> {
        let lines = &[
            "Arrow keys or WASD to move",
            "Esc to pause",
            "Q or CTRL+C to quit",
            "",
            "Press any key to begin"
        ];

        self.term.show_message(lines)?;

        if control_for(&self.term.read_key_blocking()?) == Some(Control::Quit) {
            self.clean_exit()
        }

        self.term.hide_message()
    }

    /// Runs one session until game over, then waits for a key to continue.
    pub fn play(&mut self) -> Result<()> {
        self.term.clear()?;
        self.term.draw_borders(BOARD_TOP_LEFT, self.board_size())?;
        self.term.hide_message()?;
        self.drawn.clear();
        self.paused = false;

        let mut session = GameSession::new(&self.config);
        self.draw_frame(&session)?;

        loop {
            let mut turns = vec![];

            for key_ev in self.term.read_key_events_queue()? {
                match control_for(&key_ev) {
                    Some(Control::Quit) => self.clean_exit(),
                    Some(Control::Pause) => self.toggle_pause()?,
                    Some(Control::Turn(dir)) => turns.push(dir),
                    None => {}
                }
            }

            if self.paused {
                sleep(Duration::from_millis(PAUSE_POLL_MS));
                continue;
            }

            let result = session.tick(turns);
            if result.ate_food {
                info!("Score: {}", result.score);
            }
            if result.is_over {
                self.game_over(&session)?;
                break;
            }

            self.draw_frame(&session)?;
            sleep(self.config.tick_interval);
        }

        // Quit if the user asks to after the game
        if control_for(&self.term.read_key_blocking()?) == Some(Control::Quit) {
            self.clean_exit()
        }

        Ok(())
    }

    ///////////////////////////////////////////////////////////////////////////

    fn clean_exit(&mut self) -> ! {
        info!("Quit requested");
        if let Err(e) = self.term.restore() {
            eprintln!("{:#}", e);
        }
        exit(0);
    }

    /// Outer size of the bordered board, in terminal cells.
    fn board_size(&self) -> Coords {
        let width = self.config.grid_width as TermInt * CELL_WIDTH + 2;
        let height = self.config.grid_height as TermInt + 2;
        (width, height)
    }

    /// Screen position of the left half of `cell`, or `None` if it is off the grid.
    fn screen_pos(&self, cell: Cell) -> Option<Coords> {
        if !self.config.contains(cell) {
            return None;
        }

        let x = BOARD_TOP_LEFT.0 + 1 + cell.0 as TermInt * CELL_WIDTH;
        let y = BOARD_TOP_LEFT.1 + 1 + cell.1 as TermInt;
        Some((x, y))
    }

    fn print_cell(&mut self, cell: Cell, ch: char) -> Result<()> {
        if let Some((x, y)) = self.screen_pos(cell) {
            for dx in 0..CELL_WIDTH {
                self.term.print_at((x + dx, y), ch)?;
            }
        }
        Ok(())
    }

    fn draw_frame(&mut self, session: &GameSession) -> Result<()> {
        for cell in std::mem::take(&mut self.drawn) {
            self.print_cell(cell, ' ')?;
        }

        let food = session.food();
        self.print_cell(food, FOOD_CHAR)?;
        self.drawn.push(food);

        // Tail first so the head is never hidden by a stacked segment
        let segments = session.snake().segments();
        for (i, &cell) in segments.iter().enumerate().rev() {
            let ch = if i == 0 {head_char(session.direction())} else {SNAKE_BODY_CHAR};
            self.print_cell(cell, ch)?;
            self.drawn.push(cell);
        }

        self.draw_score(session.score())?;
        self.term.flush()
    }

    fn draw_score(&mut self, score: u32) -> Result<()> {
        self.term.print_str_at((0, 0), &format!("Score: {}", score))
    }

    fn game_over(&mut self, session: &GameSession) -> Result<()> {
        let ending = match session.state() {
            SessionState::Over(ending) => ending,
            SessionState::Running => return Ok(()),
        };
        info!("Session ended ({:?}), length {}", ending, session.snake().len());

        if ending != Ending::BoardFull {
            for &pos in session.snake().segments() {
                self.print_cell(pos, DEAD_SNAKE_CHAR)?;
            }
        }
        self.draw_score(session.score())?;

        let s = if ending == Ending::BoardFull {"Board full!"} else {"Game over!"};
        self.term.show_message(&[
            s,
            &*format!("Score: {}", session.score()),
            "",
            "Press any key to play again,",
            "or Q to quit."
        ])
    }

    fn toggle_pause(&mut self) -> Result<()> {
        if !self.paused {
            self.term.show_message(&["Paused", "Press Esc to resume", "or Q to quit"])?;
        } else {
            self.term.hide_message()?;
        }

        self.paused = !self.paused;
        Ok(())
    }
}

fn head_char(direction: Direction) -> char {
    match direction {
        Up => '^',
        Down => 'v',
        Left => '<',
        Right => '>',
    }
}
