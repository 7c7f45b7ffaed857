use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::grid::{to_index, CellIndex, HEIGHT, PLAYFIELD_TOP, WIDTH};

/// Picks the cell for the next piece of food.
pub trait Spawner {
    fn pick(&mut self) -> CellIndex;
}

/// Uniform over the playfield, with no check against the snake or the old food.
pub struct RandomSpawner {
    rng: StdRng,
    seed: u64,
}

impl RandomSpawner {
    pub fn new(seed: u64) -> Self {
        RandomSpawner { rng: StdRng::seed_from_u64(seed), seed }
    }

    pub fn from_random() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Spawner for RandomSpawner {
    fn pick(&mut self) -> CellIndex {
        let x = self.rng.gen_range(0..WIDTH);
        let y = self.rng.gen_range(PLAYFIELD_TOP..HEIGHT);
        to_index(x, y)
    }
}
