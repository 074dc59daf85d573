//! Terminal demo: scatter a world, route the agent to a random goal, and
//! walk the route on a fixed-interval timer.
//!
//! Run: cargo run --bin rover [seed]

mod agent;
mod render;

use std::thread;
use std::time::Duration;

use gridwalk_core::Point;
use gridwalk_paths::Pathfinder;
use gridwalk_world::{GridWorld, ObstacleCounts};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use agent::Agent;
use render::render;

const WORLD_WIDTH: i32 = 10;
const WORLD_HEIGHT: i32 = 10;
const TICK: Duration = Duration::from_millis(150);

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let seed = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => rand::rng().random(),
    };
    let mut rng = StdRng::seed_from_u64(seed);
    log::info!("seed {seed}");

    let mut world = GridWorld::new(WORLD_WIDTH, WORLD_HEIGHT)?;
    world.scatter(&ObstacleCounts::default(), &mut rng);

    // Agent starts mid-world; free its cell in case the scatter claimed it.
    let start = Point::new(WORLD_WIDTH / 2, WORLD_HEIGHT / 2);
    world.remove(start);
    let mut agent = Agent::new(start);

    let goal = random_walkable_goal(&world, start, &mut rng);
    log::info!("routing {start} -> {goal}");

    let engine = Pathfinder::new();
    let Some(path) = engine.find_path(start, goal, &world)? else {
        println!("{}", render(&world, agent.pos(), goal));
        println!("no route to {goal}");
        return Ok(());
    };
    log::info!("route found: {} steps", path.len());
    agent.follow(path);

    println!("{}", render(&world, agent.pos(), goal));
    while !agent.is_idle() {
        thread::sleep(TICK);
        agent.tick();
        println!("{}", render(&world, agent.pos(), goal));
    }
    println!("arrived at {goal}");
    Ok(())
}

/// Pick a random unoccupied cell other than `start`.
fn random_walkable_goal(world: &GridWorld, start: Point, rng: &mut StdRng) -> Point {
    loop {
        let p = Point::new(
            rng.random_range(0..world.width()),
            rng.random_range(0..world.height()),
        );
        if p != start && world.obstacle_at(p).is_none() {
            return p;
        }
    }
}
