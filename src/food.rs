use std::time::Instant;

use log::debug;
use rand::Rng;

use crate::config::{Settings, MAX_PERCENT_POSSIBILITY};
use crate::grid::{random_position, Position};
use crate::snake::Snake;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpecialFood {
    pub pos: Position,
    pub spawned_at: Instant,
}

/// Regular food is always on the board; special food comes and goes.
#[derive(Clone, Debug)]
pub struct FoodManager {
    regular: Position,
    special: Option<SpecialFood>,
}

impl FoodManager {
    pub fn new(snake: &Snake, grid_size: i32, rng: &mut impl Rng) -> Self {
        let mut food = FoodManager {
            regular: Position::new(0, 0),
            special: None,
        };
        food.relocate_regular_food(snake, grid_size, rng);
        food
    }

    pub fn regular(&self) -> Position {
        self.regular
    }

    pub fn special(&self) -> Option<&SpecialFood> {
        self.special.as_ref()
    }

    pub fn is_special_spawned(&self) -> bool {
        self.special.is_some()
    }

    /// Resamples until the cell is free of the snake and of any special food.
    pub fn relocate_regular_food(&mut self, snake: &Snake, grid_size: i32, rng: &mut impl Rng) {
        loop {
            let pos = random_position(grid_size, rng);
            let on_special = self.special.is_some_and(|special| special.pos == pos);
            if !snake.contains_position(pos, false) && !on_special {
                self.regular = pos;
                return;
            }
        }
    }

    /// Resolves food for one tick, after the snake has moved. Returns the
    /// points earned.
    pub fn tick(
        &mut self,
        snake: &mut Snake,
        now: Instant,
        settings: &Settings,
        rng: &mut impl Rng,
    ) -> u32 {
        let mut points = 0;

        if snake.head() == self.regular {
            snake.grow(settings.expansion_rate);
            points += settings.regular_food_points;
            self.relocate_regular_food(snake, settings.grid_size, rng);
            debug!("Regular food eaten, moved to {:?}", self.regular);
        }

        points + self.tick_special_food(snake, now, settings, rng)
    }

    /// Exactly one of pickup, spawn or expiry happens per call.
    pub fn tick_special_food(
        &mut self,
        snake: &mut Snake,
        now: Instant,
        settings: &Settings,
        rng: &mut impl Rng,
    ) -> u32 {
        if let Some(special) = self.special {
            if snake.head() == special.pos {
                self.special = None;
                snake.grow(settings.expansion_rate);
                debug!("Special food eaten at {:?}", special.pos);
                return settings.special_food_points;
            }
        }

        let roll = rng.gen_range(1..=MAX_PERCENT_POSSIBILITY);
        match self.special {
            None if roll <= settings.special_food_percent_possibility => {
                let pos = self.free_special_cell(snake, settings.grid_size, rng);
                self.special = Some(SpecialFood {
                    pos,
                    spawned_at: now,
                });
                debug!("Special food spawned at {:?}", pos);
            }
            Some(special)
                if now.saturating_duration_since(special.spawned_at)
                    >= settings.special_food_expiration =>
            {
                self.special = None;
                debug!("Special food at {:?} expired", special.pos);
            }
            _ => {}
        }

        0
    }

    #[cfg(test)]
    pub(crate) fn place_special(&mut self, pos: Position, spawned_at: Instant) {
        self.special = Some(SpecialFood { pos, spawned_at });
    }

    fn free_special_cell(&self, snake: &Snake, grid_size: i32, rng: &mut impl Rng) -> Position {
        loop {
            let pos = random_position(grid_size, rng);
            if pos != self.regular && !snake.contains_position(pos, false) {
                return pos;
            }
        }
    }
}
