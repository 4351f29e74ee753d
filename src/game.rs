use rand::rngs::StdRng;
use tracing::info;

use crate::audio::{AudioSink, Sound};
use crate::clock::Clock;
use crate::error::Result;
use crate::food::FoodSpawner;
use crate::geometry::{on_grid, Cell, GridGeometry};
use crate::input::{InputEvent, InputSource};
use crate::render::{draw_frame, Renderer};
use crate::snake::{Direction, Snake};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Running,
    Over,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Everything one episode of the game owns.
pub struct GameState {
    snake: Snake,
    food: Cell,
    score: u32,
    status: Status,
    pending_turn: Option<Direction>,
    spawner: FoodSpawner,
    grid_size: i32,
}

impl GameState {
    pub fn new(grid_size: i32, rng: StdRng) -> Self {
        let mut spawner = FoodSpawner::new(rng, grid_size);
        let food = spawner.randomize();

        GameState {
            snake: Snake::new(),
            food,
            score: 0,
            status: Status::Running,
            pending_turn: None,
            spawner,
            grid_size,
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_over(&self) -> bool {
        self.status == Status::Over
    }

    pub fn handle_event<A: AudioSink>(&mut self, ev: InputEvent, audio: &mut A) -> Flow {
        match ev {
            InputEvent::Quit => return Flow::Quit,
            InputEvent::Turn(dir) => {
                self.queue_turn(dir, audio);
            }
            InputEvent::Restart => {
                if self.is_over() {
                    self.restart();
                }
            }
        }
        Flow::Continue
    }

    /// Accepts `dir` for the next tick unless it reverses the current heading.
    /// A later accepted turn in the same tick replaces an earlier one.
    pub fn queue_turn<A: AudioSink>(&mut self, dir: Direction, audio: &mut A) -> bool {
        if self.is_over() || dir.is_opposite(self.snake.get_direction()) {
            return false;
        }

        self.pending_turn = Some(dir);
        audio.play(Sound::Move);
        true
    }

    pub fn restart(&mut self) {
        self.snake = Snake::new();
        self.food = self.spawner.randomize();
        self.score = 0;
        self.status = Status::Running;
        self.pending_turn = None;

        info!(food = ?self.food, "game restarted");
    }

    pub fn tick<A: AudioSink>(&mut self, audio: &mut A) {
        if self.is_over() {
            return;
        }

        if let Some(dir) = self.pending_turn.take() {
            self.snake.set_direction(dir);
        }

        let new_head = self.snake.propose_next_head();

        if !self.in_bounds(new_head) {
            info!(head = ?new_head, score = self.score, "hit the wall");
            self.game_over(audio);
            return;
        }

        // Eating keeps the tail on this very move
        let ate = new_head == self.food;
        if ate {
            self.snake.grow();
        }
        self.snake.advance(new_head, false);

        if ate {
            self.food = self.spawner.randomize();
            self.score += 1;
            audio.play(Sound::Eat);
            info!(score = self.score, length = self.snake.len(), food = ?self.food, "ate food");
        }

        if self.snake.check_self_collision() {
            info!(head = ?new_head, score = self.score, "ran into itself");
            self.game_over(audio);
        }
    }

    pub(crate) fn end(&mut self) {
        self.status = Status::Over;
        self.pending_turn = None;
    }

    ///////////////////////////////////////////////////////////////////////////

    fn game_over<A: AudioSink>(&mut self, audio: &mut A) {
        self.end();
        audio.play(Sound::GameOver);
    }

    fn in_bounds(&self, cell: Cell) -> bool {
        on_grid(cell, self.grid_size)
    }
}

pub struct SnakeGame<'t, T, A, C> {
    term: &'t mut T,
    audio: A,
    clock: C,
    geometry: GridGeometry,
    state: GameState,
}

impl<'t, T, A, C> SnakeGame<'t, T, A, C>
where
    T: Renderer + InputSource,
    A: AudioSink,
    C: Clock,
{
    /// The arena size comes from `geometry`, for both drawing and wall checks.
    pub fn new(term: &'t mut T, audio: A, clock: C, geometry: GridGeometry, rng: StdRng) -> Self {
        let state = GameState::new(geometry.grid_size(), rng);
        SnakeGame { term, audio, clock, geometry, state }
    }

    /// Runs until a quit event arrives.
    pub fn play(&mut self) -> Result<()> {
        info!(grid = self.geometry.grid_size(), "game started");

        loop {
            if self.step()? == Flow::Quit {
                info!(score = self.state.score(), "quit");
                return Ok(());
            }
            self.clock.wait_for_tick();
        }
    }

    // One tick: drain input, update, draw
    fn step(&mut self) -> Result<Flow> {
        for ev in self.term.poll_events()? {
            if self.state.handle_event(ev, &mut self.audio) == Flow::Quit {
                return Ok(Flow::Quit);
            }
        }

        self.state.tick(&mut self.audio);
        draw_frame(&self.state, &self.geometry, &mut *self.term)?;

        Ok(Flow::Continue)
    }
}
