use std::time::{Duration, Instant};

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{Settings, BEST_SCORE_LABEL, SCORE_LABEL};
use crate::food::FoodManager;
use crate::grid::{random_position, Direction, Position};
use crate::input::InputLatch;
use crate::snake::Snake;

#[derive(Debug, PartialEq)]
pub enum TickOutcome {
    Ongoing,     // Moved, nothing eaten
    Nommed(u32), // Ate food, with score increment
    Collision,   // Hit self, round over
}

/// Which way the head faces, derived from the last applied direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HeadOrientation {
    Unset,
    Up,
    Right,
    Down,
    Left,
}

impl From<Option<Direction>> for HeadOrientation {
    fn from(direction: Option<Direction>) -> Self {
        match direction {
            None => HeadOrientation::Unset,
            Some(Direction::Up) => HeadOrientation::Up,
            Some(Direction::Right) => HeadOrientation::Right,
            Some(Direction::Down) => HeadOrientation::Down,
            Some(Direction::Left) => HeadOrientation::Left,
        }
    }
}

impl HeadOrientation {
    /// Clockwise rotation of an upward-facing head sprite.
    pub fn degrees(&self) -> i32 {
        match self {
            HeadOrientation::Unset | HeadOrientation::Up => 0,
            HeadOrientation::Right => 90,
            HeadOrientation::Down => 180,
            HeadOrientation::Left => -90,
        }
    }
}

/// Everything one round owns. Mutated only by `tick` and `request_direction`.
#[derive(Clone, Debug)]
pub struct GameState {
    settings: Settings,
    snake: Snake,
    food: FoodManager,
    latch: InputLatch,
    score: u32,
}

impl GameState {
    pub fn new(settings: Settings, rng: &mut impl Rng) -> Self {
        let snake = Snake::new(random_position(settings.grid_size, rng));
        let food = FoodManager::new(&snake, settings.grid_size, rng);
        GameState {
            settings,
            snake,
            food,
            latch: InputLatch::default(),
            score: 0,
        }
    }

    pub fn request_direction(&mut self, direction: Direction) -> bool {
        self.latch.request(direction)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &FoodManager {
        &self.food
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.latch.pending()
    }

    pub fn orientation(&self) -> HeadOrientation {
        self.latch.last_applied().into()
    }

    pub fn tick(&mut self, now: Instant, rng: &mut impl Rng) -> TickOutcome {
        // The snake sits still until the first direction arrives
        if let Some(direction) = self.latch.latch() {
            self.snake.advance(direction, self.settings.grid_size);
        }

        let points = self.food.tick(&mut self.snake, now, &self.settings, rng);
        self.score += points;

        if self.snake.is_self_intersecting() {
            TickOutcome::Collision
        } else if points > 0 {
            TickOutcome::Nommed(points)
        } else {
            TickOutcome::Ongoing
        }
    }
}

/// Decides when the next simulation tick is due, independently of how often
/// frames are drawn.
#[derive(Clone, Copy, Debug)]
pub struct TickClock {
    interval: Duration,
    last_tick: Option<Instant>,
}

impl TickClock {
    pub fn new(interval: Duration) -> Self {
        TickClock {
            interval,
            last_tick: None,
        }
    }

    /// True when a tick should run at `now`; records it as the last tick.
    /// The first call after a reset always ticks.
    pub fn due(&mut self, now: Instant) -> bool {
        let due = match self.last_tick {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.interval,
        };
        if due {
            self.last_tick = Some(now);
        }
        due
    }

    pub fn reset(&mut self) {
        self.last_tick = None;
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    Running,
    /// Round lost, waiting for the player to answer the restart prompt.
    Over,
    /// Player declined the restart; nothing is scheduled any more.
    Halted,
}

/// Answer to the restart prompt raised when a round is lost.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Confirmation {
    Restart,
    Halt,
}

/// Read-only view handed to the renderer.
pub struct Snapshot<'a> {
    pub snake: &'a Snake,
    pub regular_food: Position,
    pub special_food: Option<Position>,
    pub orientation: HeadOrientation,
    pub score: u32,
    pub best_score: u32,
    pub phase: Phase,
    pub grid_size: i32,
}

impl Snapshot<'_> {
    pub fn score_text(&self) -> String {
        format!("{}{}", SCORE_LABEL, self.score)
    }

    pub fn best_score_text(&self) -> String {
        format!("{}{}", BEST_SCORE_LABEL, self.best_score)
    }
}

/// A play session: consecutive rounds sharing a best score.
pub struct Game<R: Rng = StdRng> {
    settings: Settings,
    round: GameState,
    phase: Phase,
    best_score: u32,
    clock: TickClock,
    rng: R,
}

impl Game<StdRng> {
    pub fn new(settings: Settings) -> Self {
        Self::with_rng(settings, StdRng::from_entropy())
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(settings: Settings, mut rng: R) -> Self {
        let round = GameState::new(settings, &mut rng);
        info!("Round started, snake at {:?}", round.snake().head());
        Game {
            settings,
            round,
            phase: Phase::Running,
            best_score: 0,
            clock: TickClock::new(settings.tick_interval()),
            rng,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn round(&self) -> &GameState {
        &self.round
    }

    /// Input entry point. Ignored outside a running round.
    pub fn request_direction(&mut self, direction: Direction) {
        if self.phase == Phase::Running {
            self.round.request_direction(direction);
        }
    }

    /// Called once per drawn frame. Runs a tick when one is due.
    pub fn on_frame(&mut self, now: Instant) -> Option<TickOutcome> {
        if self.phase != Phase::Running || !self.clock.due(now) {
            return None;
        }

        let outcome = self.round.tick(now, &mut self.rng);
        if outcome == TickOutcome::Collision {
            self.enter_over();
        }
        Some(outcome)
    }

    fn enter_over(&mut self) {
        let score = self.round.score();
        info!("Game over with score {}", score);
        if score > self.best_score {
            info!("New best score: {} (was {})", score, self.best_score);
            self.best_score = score;
        }
        self.phase = Phase::Over;
    }

    #[cfg(test)]
    pub(crate) fn end_round(&mut self) {
        self.enter_over();
    }

    /// Resolves the pending restart prompt. Has no effect unless a round has
    /// just been lost.
    pub fn confirm(&mut self, answer: Confirmation) {
        if self.phase != Phase::Over {
            return;
        }

        match answer {
            Confirmation::Restart => {
                self.round = GameState::new(self.settings, &mut self.rng);
                self.clock.reset();
                self.phase = Phase::Running;
                info!("Restarted, snake at {:?}", self.round.snake().head());
            }
            Confirmation::Halt => {
                info!("Restart declined, halting");
                self.phase = Phase::Halted;
            }
        }
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            snake: self.round.snake(),
            regular_food: self.round.food().regular(),
            special_food: self.round.food().special().map(|special| special.pos),
            orientation: self.round.orientation(),
            score: self.round.score(),
            best_score: self.best_score,
            phase: self.phase,
            grid_size: self.settings.grid_size,
        }
    }
}
