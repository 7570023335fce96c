//! Food placement.
//!
//! Food is dropped on a uniformly random tile that the snake does not cover.
//! Random draws are retried a bounded number of times; after that the spawner
//! scans the grid for free tiles and picks one of those. A full board is
//! reported as [`NoFreeCellError`] instead of looping forever.

use log::debug;
use thiserror::Error;

use crate::rng::SimpleRng;
use crate::types::Position;

/// Every tile of the grid is covered by the snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no free cell left on the {tile_count}x{tile_count} grid")]
pub struct NoFreeCellError {
    pub tile_count: i32,
}

#[derive(Debug, Clone)]
pub struct FoodSpawner {
    rng: SimpleRng,
    max_attempts: u32,
}

impl FoodSpawner {
    pub fn new(seed: u32, max_attempts: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            max_attempts,
        }
    }

    /// Pick a free tile on a `tile_count` x `tile_count` grid.
    ///
    /// `occupied` reports whether a tile is covered by the snake.
    pub fn place<F>(&mut self, tile_count: i32, occupied: F) -> Result<Position, NoFreeCellError>
    where
        F: Fn(Position) -> bool,
    {
        if tile_count <= 0 {
            return Err(NoFreeCellError { tile_count });
        }
        let side = tile_count as u32;

        for _ in 0..self.max_attempts {
            let pos = Position::new(
                self.rng.next_range(side) as i32,
                self.rng.next_range(side) as i32,
            );
            if !occupied(pos) {
                return Ok(pos);
            }
        }

        let free: Vec<Position> = (0..tile_count)
            .flat_map(|y| (0..tile_count).map(move |x| Position::new(x, y)))
            .filter(|&pos| !occupied(pos))
            .collect();

        debug!(
            "food: {} random draws missed, {} free tiles left",
            self.max_attempts,
            free.len()
        );

        if free.is_empty() {
            return Err(NoFreeCellError { tile_count });
        }
        let idx = self.rng.next_range(free.len() as u32) as usize;
        Ok(free[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_on_free_tile() {
        let mut spawner = FoodSpawner::new(42, 100);
        let blocked = Position::new(3, 3);
        for _ in 0..200 {
            let pos = spawner.place(4, |p| p == blocked).unwrap();
            assert_ne!(pos, blocked);
            assert!(pos.in_bounds(4));
        }
    }

    #[test]
    fn falls_back_to_scan_without_attempts() {
        // Zero random attempts: the scan must find the only free tile.
        let mut spawner = FoodSpawner::new(1, 0);
        let free = Position::new(2, 1);
        let pos = spawner.place(3, |p| p != free).unwrap();
        assert_eq!(pos, free);
    }

    #[test]
    fn finds_last_free_tile_on_crowded_grid() {
        let mut spawner = FoodSpawner::new(9, 4);
        let free = Position::new(19, 0);
        let pos = spawner.place(20, |p| p != free).unwrap();
        assert_eq!(pos, free);
    }

    #[test]
    fn full_grid_is_an_error() {
        let mut spawner = FoodSpawner::new(5, 10);
        assert_eq!(
            spawner.place(3, |_| true),
            Err(NoFreeCellError { tile_count: 3 })
        );
    }
}
