//! ASCII projection of world state.

use gridwalk_core::Point;
use gridwalk_world::{GridWorld, ObstacleKind};

/// Render the world as one character per cell, row by row.
///
/// `@` agent, `x` goal, `T` tree, `o` rock, `*` bush, `.` open ground.
pub fn render(world: &GridWorld, agent: Point, goal: Point) -> String {
    let mut out = String::with_capacity(((world.width() + 1) * world.height()) as usize);
    for y in 0..world.height() {
        for x in 0..world.width() {
            let p = Point::new(x, y);
            let ch = if p == agent {
                '@'
            } else if p == goal {
                'x'
            } else {
                match world.obstacle_at(p) {
                    Some(ObstacleKind::Tree) => 'T',
                    Some(ObstacleKind::Rock) => 'o',
                    Some(ObstacleKind::Bush) => '*',
                    None => '.',
                }
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_agents_and_obstacles() {
        let mut world = GridWorld::new(3, 2).unwrap();
        world.place(Point::new(1, 0), ObstacleKind::Tree).unwrap();
        world.place(Point::new(2, 1), ObstacleKind::Rock).unwrap();

        let out = render(&world, Point::new(0, 0), Point::new(0, 1));
        assert_eq!(out, "@T.\nx.o\n");
    }

    #[test]
    fn agent_covers_goal_marker() {
        let world = GridWorld::new(2, 1).unwrap();
        let out = render(&world, Point::new(1, 0), Point::new(1, 0));
        assert_eq!(out, ".@\n");
    }
}
