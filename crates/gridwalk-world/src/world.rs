//! The grid world model.

use std::collections::HashMap;

use gridwalk_core::Point;
use gridwalk_paths::WorldView;

/// Kinds of static obstacle that can occupy a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObstacleKind {
    Tree,
    Rock,
    Bush,
}

/// Errors from world construction and mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    /// Width or height is zero or negative.
    #[error("invalid world dimensions {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    /// A mutation targeted a cell outside the world bounds.
    #[error("coordinate {pos} outside world bounds {width}x{height}")]
    OutOfBounds { pos: Point, width: i32, height: i32 },
}

/// A discrete 2D world of walkable cells and static obstacles.
///
/// Cells are addressed by [`Point`]; a cell is walkable unless an obstacle
/// occupies it. At most one obstacle per cell.
#[derive(Debug, Clone)]
pub struct GridWorld {
    width: i32,
    height: i32,
    objects: HashMap<Point, ObstacleKind>,
}

impl GridWorld {
    /// Create an empty world of the given dimensions.
    pub fn new(width: i32, height: i32) -> Result<Self, WorldError> {
        if width <= 0 || height <= 0 {
            return Err(WorldError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            objects: HashMap::new(),
        })
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether the point lies inside the world bounds.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    /// The obstacle occupying a cell, if any.
    pub fn obstacle_at(&self, p: Point) -> Option<ObstacleKind> {
        self.objects.get(&p).copied()
    }

    /// Number of obstacles currently placed.
    pub fn obstacle_count(&self) -> usize {
        self.objects.len()
    }

    /// Iterate over all placed obstacles.
    pub fn obstacles(&self) -> impl Iterator<Item = (Point, ObstacleKind)> + '_ {
        self.objects.iter().map(|(&p, &k)| (p, k))
    }

    /// Place an obstacle, replacing any existing one on that cell.
    pub fn place(&mut self, p: Point, kind: ObstacleKind) -> Result<(), WorldError> {
        if !self.contains(p) {
            return Err(WorldError::OutOfBounds {
                pos: p,
                width: self.width,
                height: self.height,
            });
        }
        self.objects.insert(p, kind);
        Ok(())
    }

    /// Remove the obstacle on a cell, returning it if one was there.
    pub fn remove(&mut self, p: Point) -> Option<ObstacleKind> {
        self.objects.remove(&p)
    }

    /// Remove all obstacles.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    pub(crate) fn insert_unchecked(&mut self, p: Point, kind: ObstacleKind) {
        self.objects.insert(p, kind);
    }
}

impl WorldView for GridWorld {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn is_occupied(&self, p: Point) -> bool {
        self.objects.contains_key(&p)
    }
}

// HashMap<Point, _> has no JSON-friendly map representation, so the wire
// shape flattens the occupancy map into an entry list.
#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;

    #[derive(serde::Serialize, serde::Deserialize)]
    struct WorldRepr {
        width: i32,
        height: i32,
        objects: Vec<(Point, ObstacleKind)>,
    }

    impl serde::Serialize for GridWorld {
        fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut objects: Vec<(Point, ObstacleKind)> = self.obstacles().collect();
            // Stable order for reproducible output.
            objects.sort_by_key(|&(p, _)| p);
            WorldRepr {
                width: self.width,
                height: self.height,
                objects,
            }
            .serialize(serializer)
        }
    }

    impl<'de> serde::Deserialize<'de> for GridWorld {
        fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let repr = WorldRepr::deserialize(deserializer)?;
            let mut world = GridWorld::new(repr.width, repr.height)
                .map_err(serde::de::Error::custom)?;
            for (p, kind) in repr.objects {
                world.place(p, kind).map_err(serde::de::Error::custom)?;
            }
            Ok(world)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_dimensions() {
        assert_eq!(
            GridWorld::new(0, 5).unwrap_err(),
            WorldError::InvalidDimensions {
                width: 0,
                height: 5
            }
        );
        assert!(GridWorld::new(5, -1).is_err());
        assert!(GridWorld::new(1, 1).is_ok());
    }

    #[test]
    fn place_and_query() {
        let mut world = GridWorld::new(4, 4).unwrap();
        let p = Point::new(2, 1);
        assert!(!world.is_occupied(p));

        world.place(p, ObstacleKind::Rock).unwrap();
        assert!(world.is_occupied(p));
        assert_eq!(world.obstacle_at(p), Some(ObstacleKind::Rock));
        assert_eq!(world.obstacle_count(), 1);

        assert_eq!(world.remove(p), Some(ObstacleKind::Rock));
        assert!(!world.is_occupied(p));
        assert_eq!(world.remove(p), None);
    }

    #[test]
    fn place_out_of_bounds_is_rejected() {
        let mut world = GridWorld::new(4, 4).unwrap();
        let err = world.place(Point::new(4, 0), ObstacleKind::Tree).unwrap_err();
        assert!(matches!(err, WorldError::OutOfBounds { .. }));
    }

    #[test]
    fn clear_removes_everything() {
        let mut world = GridWorld::new(4, 4).unwrap();
        world.place(Point::new(0, 0), ObstacleKind::Tree).unwrap();
        world.place(Point::new(1, 1), ObstacleKind::Bush).unwrap();
        world.clear();
        assert_eq!(world.obstacle_count(), 0);
    }
}
