//! Procedural obstacle scattering.

use gridwalk_core::Point;
use rand::{Rng, RngExt};

use crate::world::{GridWorld, ObstacleKind};

/// How many obstacles of each kind to attempt to place.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObstacleCounts {
    pub trees: usize,
    pub rocks: usize,
    pub bushes: usize,
}

impl Default for ObstacleCounts {
    fn default() -> Self {
        Self {
            trees: 10,
            rocks: 20,
            bushes: 10,
        }
    }
}

impl GridWorld {
    /// Clear the world and scatter obstacles uniformly at random.
    ///
    /// Each kind gets `count` placement attempts; an attempt landing on an
    /// already-occupied cell is skipped, not retried, so the realized
    /// obstacle count may be lower than asked for. Returns the number of
    /// obstacles actually placed.
    pub fn scatter(&mut self, counts: &ObstacleCounts, rng: &mut impl Rng) -> usize {
        self.clear();
        let kinds = [
            (ObstacleKind::Tree, counts.trees),
            (ObstacleKind::Rock, counts.rocks),
            (ObstacleKind::Bush, counts.bushes),
        ];
        let mut placed = 0;
        for (kind, count) in kinds {
            for _ in 0..count {
                let p = Point::new(
                    rng.random_range(0..self.width()),
                    rng.random_range(0..self.height()),
                );
                if self.obstacle_at(p).is_some() {
                    continue;
                }
                self.insert_unchecked(p, kind);
                placed += 1;
            }
        }
        placed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn scatter_respects_bounds_and_counts() {
        let mut world = GridWorld::new(10, 10).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let counts = ObstacleCounts::default();
        let placed = world.scatter(&counts, &mut rng);

        assert_eq!(placed, world.obstacle_count());
        assert!(placed <= counts.trees + counts.rocks + counts.bushes);
        assert!(placed > 0);
        for (p, _) in world.obstacles() {
            assert!(world.contains(p));
        }
    }

    #[test]
    fn scatter_skips_collisions_on_a_tiny_grid() {
        // 2x2 grid, 40 attempts: at most 4 cells can be filled.
        let mut world = GridWorld::new(2, 2).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let placed = world.scatter(&ObstacleCounts::default(), &mut rng);
        assert!(placed <= 4);
        assert_eq!(placed, world.obstacle_count());
    }

    #[test]
    fn scatter_replaces_previous_obstacles() {
        let mut world = GridWorld::new(10, 10).unwrap();
        world.place(Point::new(0, 0), ObstacleKind::Tree).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let placed = world.scatter(
            &ObstacleCounts {
                trees: 1,
                rocks: 0,
                bushes: 0,
            },
            &mut rng,
        );
        assert_eq!(placed, 1);
        assert_eq!(world.obstacle_count(), 1);
    }

    #[test]
    fn scatter_is_reproducible_for_a_seed() {
        let counts = ObstacleCounts::default();
        let mut a = GridWorld::new(10, 10).unwrap();
        let mut b = GridWorld::new(10, 10).unwrap();
        a.scatter(&counts, &mut StdRng::seed_from_u64(42));
        b.scatter(&counts, &mut StdRng::seed_from_u64(42));

        let mut oa: Vec<_> = a.obstacles().collect();
        let mut ob: Vec<_> = b.obstacles().collect();
        oa.sort_by_key(|&(p, _)| p);
        ob.sort_by_key(|&(p, _)| p);
        assert_eq!(oa, ob);
    }
}
