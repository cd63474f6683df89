use std::ops::RangeInclusive;

use crate::Cell;

use rand::{seq::SliceRandom, Rng};

/// Random draws tried before falling back to scanning for free cells.
const MAX_RANDOM_ATTEMPTS: usize = 1000;

pub struct FoodSpawner<R> {
    position: Cell,
    cols: RangeInclusive<i16>,
    rows: RangeInclusive<i16>,
    rng: R,
}

impl<R: Rng> FoodSpawner<R> {
    /// Food starts on `position`; relocations stay off the outer ring of a
    /// `width` x `height` grid.
    pub fn new(position: Cell, width: i16, height: i16, rng: R) -> Self {
        FoodSpawner {
            position,
            cols: 1..=width - 2,
            rows: 1..=height - 2,
            rng,
        }
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    #[cfg(test)]
    pub fn place(&mut self, position: Cell) {
        self.position = position;
    }

    /// Moves the food to a random interior cell not in `occupied`.
    /// Returns `None`, leaving the food where it was, if every interior cell is taken.
    pub fn relocate(&mut self, occupied: &[Cell]) -> Option<Cell> {
        for _ in 0..MAX_RANDOM_ATTEMPTS {
            let candidate = (
                self.rng.gen_range(self.cols.clone()),
                self.rng.gen_range(self.rows.clone()),
            );

            if !occupied.contains(&candidate) {
                self.position = candidate;
                return Some(candidate);
            }
        }

        let free: Vec<Cell> = self.rows.clone()
            .flat_map(|y| self.cols.clone().map(move |x| (x, y)))
            .filter(|pos| !occupied.contains(pos))
            .collect();

        let res = free.choose(&mut self.rng).copied();
        if let Some(pos) = res {
            self.position = pos;
        }
        res
    }
}
