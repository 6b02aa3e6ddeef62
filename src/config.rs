use std::time::Duration;

pub const GRID_SIZE: i32 = 15;
/// Simulation ticks per second.
pub const SNAKE_SPEED: u32 = 2;
pub const EXPANSION_RATE: u32 = 1;

pub const REGULAR_FOOD_POINTS: u32 = 1;
pub const SPECIAL_FOOD_POINTS: u32 = 28;

pub const MAX_PERCENT_POSSIBILITY: u32 = 100;
pub const SPECIAL_FOOD_PERCENT_POSSIBILITY: u32 = 3;
pub const SPECIAL_FOOD_EXPIRATION: Duration = Duration::from_millis(10_000);

pub const SCORE_LABEL: &str = "Score: ";
pub const BEST_SCORE_LABEL: &str = "Best score: ";
pub const GAME_OVER_MESSAGE: &str = "You lost. Press OK to restart.";

pub const LOG_FILE: &str = "gridsnek.log";

/// Tunables for one simulation. `Default` gives the real game.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settings {
    pub grid_size: i32,
    pub snake_speed: u32,
    pub expansion_rate: u32,
    pub regular_food_points: u32,
    pub special_food_points: u32,
    pub special_food_percent_possibility: u32,
    pub special_food_expiration: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            grid_size: GRID_SIZE,
            snake_speed: SNAKE_SPEED,
            expansion_rate: EXPANSION_RATE,
            regular_food_points: REGULAR_FOOD_POINTS,
            special_food_points: SPECIAL_FOOD_POINTS,
            special_food_percent_possibility: SPECIAL_FOOD_PERCENT_POSSIBILITY,
            special_food_expiration: SPECIAL_FOOD_EXPIRATION,
        }
    }
}

impl Settings {
    /// Minimum time between two simulation ticks.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.snake_speed.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.grid_size, 15);
        assert_eq!(settings.regular_food_points, 1);
        assert_eq!(settings.special_food_points, 28);
        assert_eq!(settings.special_food_percent_possibility, 3);
        assert_eq!(settings.special_food_expiration, Duration::from_secs(10));
    }

    #[test]
    fn test_tick_interval() {
        // 2 Hz
        assert_eq!(
            Settings::default().tick_interval(),
            Duration::from_millis(500)
        );

        let fast = Settings {
            snake_speed: 10,
            ..Settings::default()
        };
        assert_eq!(fast.tick_interval(), Duration::from_millis(100));
    }
}
