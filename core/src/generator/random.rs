use super::*;

/// Uniform random placement, optionally keeping the first-clicked cell clear.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomFieldGenerator {
    seed: u64,
    start: Coord2,
    policy: FirstMovePolicy,
}

impl RandomFieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            start: (0, 0),
            policy: FirstMovePolicy::Anywhere,
        }
    }

    pub fn with_safe_start(seed: u64, start: Coord2) -> Self {
        Self {
            seed,
            start,
            policy: FirstMovePolicy::SafeStart,
        }
    }
}

impl FieldGenerator for RandomFieldGenerator {
    fn generate(self, config: GameConfig) -> Vec<Coord2> {
        use rand::prelude::*;

        let (cols, rows) = config.size;
        let total = config.total_cells();

        let policy = match self.policy {
            FirstMovePolicy::SafeStart if config.mines >= total => {
                // only reachable through an unchecked config
                log::warn!("Cannot keep the start cell clear, placing anywhere");
                FirstMovePolicy::Anywhere
            }
            policy => policy,
        };
        let excluded = match policy {
            FirstMovePolicy::Anywhere => None,
            FirstMovePolicy::SafeStart => Some(self.start),
        };

        let mut pool: Vec<Coord2> = (0..cols)
            .flat_map(|col| (0..rows).map(move |row| (col, row)))
            .filter(|&pos| Some(pos) != excluded)
            .collect();
        let mines = usize::min(config.mines.into(), pool.len());

        // partial Fisher-Yates: after `mines` swaps the prefix holds exactly
        // `mines` distinct positions
        let mut rng = SmallRng::seed_from_u64(self.seed);
        for lead in 0..mines {
            let pick = rng.random_range(lead..pool.len());
            pool.swap(lead, pick);
        }
        pool.truncate(mines);

        if pool.len() != usize::from(config.mines) {
            log::warn!(
                "Generated mine count mismatch, actual: {}, requested: {}",
                pool.len(),
                config.mines
            );
        }
        pool
    }
}
