use std::time::Duration;

use crate::Cell;

use anyhow::{bail, Result};

/// Game configuration. Grid dimensions and positions are in cells.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub grid_width: i16,
    pub grid_height: i16,
    pub initial_snake_length: usize,
    /// Cell every segment starts on
    pub start: Cell,
    /// Cell the first food sits on
    pub initial_food: Cell,
    /// Fixed delay between ticks
    pub tick_interval: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::from_area(1000, 720, 40)
    }
}

impl GameConfig {
    /// Default configuration with a custom grid size
    pub fn new(width: i16, height: i16) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Grid that fits a `width` x `height` area of `block_size` blocks
    pub fn from_area(width: u32, height: u32, block_size: u32) -> Self {
        Self {
            grid_width: (width / block_size) as i16,
            grid_height: (height / block_size) as i16,
            initial_snake_length: 3,
            start: (1, 1),
            initial_food: (3, 3),
            tick_interval: Duration::from_millis(100),
        }
    }

    pub fn contains(&self, (x, y): Cell) -> bool {
        x >= 0 && x < self.grid_width && y >= 0 && y < self.grid_height
    }

    pub fn in_interior(&self, (x, y): Cell) -> bool {
        x >= 1 && x <= self.grid_width - 2 && y >= 1 && y <= self.grid_height - 2
    }

    pub fn validate(&self) -> Result<()> {
        if self.grid_width < 3 || self.grid_height < 3 {
            bail!(
                "grid must be at least 3x3 to have an interior, got {}x{}",
                self.grid_width,
                self.grid_height
            );
        }
        if self.initial_snake_length == 0 {
            bail!("initial snake length must be at least 1");
        }
        if !self.contains(self.start) {
            bail!("start cell {:?} is outside the grid", self.start);
        }
        if !self.in_interior(self.initial_food) {
            bail!("initial food cell {:?} is outside the grid interior", self.initial_food);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 25);
        assert_eq!(config.grid_height, 18);
        assert_eq!(config.initial_snake_length, 3);
        assert_eq!(config.start, (1, 1));
        assert_eq!(config.initial_food, (3, 3));
        assert_eq!(config.tick_interval, Duration::from_millis(100));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(10, 12);
        assert_eq!(config.grid_width, 10);
        assert_eq!(config.grid_height, 12);
        assert_eq!(config.initial_snake_length, 3);
    }

    #[test]
    fn test_from_area_rounds_down() {
        let config = GameConfig::from_area(410, 330, 40);
        assert_eq!((config.grid_width, config.grid_height), (10, 8));
    }

    #[test]
    fn test_bounds() {
        let config = GameConfig::default();
        assert!(config.contains((0, 0)));
        assert!(config.contains((24, 17)));
        assert!(!config.contains((-1, 0)));
        assert!(!config.contains((25, 0)));
        assert!(!config.contains((0, 18)));

        assert!(config.in_interior((1, 1)));
        assert!(config.in_interior((23, 16)));
        assert!(!config.in_interior((0, 5)));
        assert!(!config.in_interior((24, 5)));
        assert!(!config.in_interior((5, 17)));
    }

    #[test]
    fn test_validate_rejects_bad_config() {
        assert!(GameConfig::new(2, 10).validate().is_err());
        assert!(GameConfig::new(10, 2).validate().is_err());
        assert!(GameConfig::new(3, 3).validate().is_err()); // food (3,3) off the grid

        let mut config = GameConfig::default();
        config.initial_snake_length = 0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.start = (25, 1);
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.initial_food = (0, 3);
        assert!(config.validate().is_err());
    }
}
