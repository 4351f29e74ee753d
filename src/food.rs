use rand::rngs::StdRng;
use rand::Rng;

use crate::geometry::Cell;

/// Draws food positions uniformly over the whole grid. Cells under the snake
/// are not excluded, so food may land on the body.
pub struct FoodSpawner<R: Rng = StdRng> {
    rng: R,
    grid_size: i32,
}

impl<R: Rng> FoodSpawner<R> {
    pub fn new(rng: R, grid_size: i32) -> Self {
        FoodSpawner { rng, grid_size }
    }

    pub fn randomize(&mut self) -> Cell {
        let x = self.rng.gen_range(0..self.grid_size);
        let y = self.rng.gen_range(0..self.grid_size);
        Cell::new(x, y)
    }
}
