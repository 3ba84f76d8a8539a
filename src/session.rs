use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::clock::TickClock;
use crate::collision::{self, Outcome};
use crate::config::Difficulty;
use crate::food::Food;
use crate::grid::Dir;
use crate::score::ScoreBoard;
use crate::snake::Snake;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Running,
    GameOver,
}

/// One run of the game, from first tick to game over. Owns every piece of
/// simulation state; a restart replaces the whole session.
pub struct Session {
    snake: Snake,
    food: Food,
    score: ScoreBoard,
    clock: TickClock,
    rng: SmallRng,
    food_eaten: bool,
    state: SessionState,
    started_at: Instant,
}

impl Session {
    pub fn new(difficulty: Difficulty, now: Instant) -> Self {
        Self::with_rng(difficulty, now, SmallRng::from_entropy())
    }

    fn with_rng(difficulty: Difficulty, now: Instant, mut rng: SmallRng) -> Self {
        let snake = Snake::new();
        let food = Food::spawn(&snake, &mut rng);
        Self {
            snake,
            food,
            score: ScoreBoard::new(),
            clock: TickClock::new(difficulty.tick_interval(), now),
            rng,
            food_eaten: false,
            state: SessionState::Running,
            started_at: now,
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn score(&self) -> &ScoreBoard {
        &self.score
    }

    pub fn is_over(&self) -> bool {
        self.state == SessionState::GameOver
    }

    /// Wall-clock seconds since session start; drives the overlay pulse.
    pub fn elapsed_secs(&self, now: Instant) -> f32 {
        now.duration_since(self.started_at).as_secs_f32()
    }

    /// Forward a held steering key. Ignored once the session is over.
    pub fn steer(&mut self, dir: Dir) {
        if self.state == SessionState::Running {
            self.snake.steer(dir);
        }
    }

    /// Called once per frame. Advances the simulation only when the tick
    /// clock allows it; after game over the session is frozen and draws no
    /// further randomness.
    pub fn update(&mut self, now: Instant) {
        if self.state == SessionState::GameOver {
            return;
        }
        if !self.clock.should_advance(now) {
            return;
        }
        self.clock.commit(now);
        self.tick();
    }

    fn tick(&mut self) {
        // The tail is kept on the advance that eats, so the eaten cell is
        // still part of the body the respawn excludes.
        if self.snake.next_head() == self.food.position() {
            self.snake.schedule_growth();
        }
        self.snake.advance();

        let outcome = collision::evaluate(&self.snake, &mut self.food, &mut self.rng);
        if outcome == Outcome::AteFood {
            self.food_eaten = true;
        }
        self.score.update(&mut self.food_eaten);

        if outcome == Outcome::AteFood {
            let head = self.snake.head();
            log::debug!(
                "ate apple at ({}, {}), length {}, score {}",
                head.x,
                head.y,
                self.snake.len(),
                self.score.score()
            );
        }

        if outcome.is_fatal() {
            self.state = SessionState::GameOver;
            log::info!(
                "game over ({outcome:?}), score {}, length {}",
                self.score.score(),
                self.score.length()
            );
        }
    }
}
