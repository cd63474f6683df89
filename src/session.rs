use crate::Cell;
use crate::config::GameConfig;
use crate::food::FoodSpawner;
use crate::snake::{SnakeBody, Direction};

use log::{debug, info, trace, warn};
use rand::{rngs::ThreadRng, Rng};

/// Snake segments from this index on can be hit by the head.
const FIRST_COLLIDABLE_SEGMENT: usize = 3;

/// Axis the snake is currently moving along. Only turns onto the other axis
/// are accepted, so the snake can never reverse into its neck.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TurnAxis {
    Horizontal,
    Vertical,
}

impl TurnAxis {
    pub fn of(direction: Direction) -> Self {
        if direction.is_horizontal() { TurnAxis::Horizontal } else { TurnAxis::Vertical }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Ending {
    HitWall,
    HitSelf,
    /// No free interior cell was left for the food
    BoardFull,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Over(Ending),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TickResult {
    pub score: u32,
    pub is_over: bool,
    pub ate_food: bool,
}

pub fn collision(a: Cell, b: Cell) -> bool {
    a == b
}

/// One game from start to game over.
pub struct GameSession<R = ThreadRng> {
    width: i16,
    height: i16,
    snake: SnakeBody,
    food: FoodSpawner<R>,
    direction: Direction,
    turn_axis: TurnAxis,
    score: u32,
    state: SessionState,
}

impl GameSession<ThreadRng> {
    pub fn new(config: &GameConfig) -> Self {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> GameSession<R> {
    pub fn with_rng(config: &GameConfig, rng: R) -> Self {
        let snake = SnakeBody::new(config.start, config.initial_snake_length);
        Self::with_snake(config, snake, Direction::Right, rng)
    }

    fn with_snake(config: &GameConfig, snake: SnakeBody, direction: Direction, rng: R) -> Self {
        let (width, height) = (config.grid_width, config.grid_height);
        info!("New session on a {}x{} grid", width, height);

        GameSession {
            width,
            height,
            snake,
            food: FoodSpawner::new(config.initial_food, width, height, rng),
            direction,
            turn_axis: TurnAxis::of(direction),
            score: 0,
            state: SessionState::Running,
        }
    }

    pub fn snake(&self) -> &SnakeBody {
        &self.snake
    }

    pub fn food(&self) -> Cell {
        self.food.position()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state != SessionState::Running
    }

    /// Applies one directional input. Returns whether it was accepted.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if TurnAxis::of(direction) == self.turn_axis {
            trace!("Ignoring {:?} while moving {:?}", direction, self.direction);
            return false;
        }

        self.direction = direction;
        self.turn_axis = TurnAxis::of(direction);
        true
    }

    /// Advances the game by one step, applying `turns` in order first.
    /// Does nothing once the session is over.
    pub fn tick<I>(&mut self, turns: I) -> TickResult
    where
        I: IntoIterator<Item = Direction>,
    {
        if self.is_over() {
            return self.result(false);
        }

        for dir in turns {
            self.steer(dir);
        }

        self.snake.advance(self.direction);
        let head = self.snake.head();

        let (x, y) = head;
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            self.end(Ending::HitWall);
            return self.result(false);
        }

        let body = self.snake.segments();
        if body.iter().skip(FIRST_COLLIDABLE_SEGMENT).any(|&seg| collision(head, seg)) {
            self.end(Ending::HitSelf);
            return self.result(false);
        }

        let ate_food = collision(head, self.food.position());
        if ate_food {
            self.snake.grow();
            self.score += 1;
            debug!("Food eaten at {:?}, score {}", head, self.score);

            if self.food.relocate(self.snake.segments()).is_none() {
                warn!("No free cell left for food");
                self.end(Ending::BoardFull);
            }
        }

        self.result(ate_food)
    }

    fn end(&mut self, ending: Ending) {
        info!("Game over ({:?}) with score {}", ending, self.score);
        self.state = SessionState::Over(ending);
    }

    fn result(&self, ate_food: bool) -> TickResult {
        TickResult { score: self.score, is_over: self.is_over(), ate_food }
    }
}
