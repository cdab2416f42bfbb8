//! Simulation of the ships in the arena.
//!
//! The scene is advanced at a fixed tick rate, independent of the frame rate of the render pass.
//! Every tick updates each object once, in the order the objects were added.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{
    config::SimulationConfig,
    domain::{Angle, ObjectId, Obstacle, Position, Rgb, Scene, Spaceship},
    resource::{BarrierRes, ConfigRes, SceneRes},
};

pub struct Simulator {
    pub config: SimulationConfig,
}

impl Plugin for Simulator {
    fn build(&self, app: &mut App) {
        let (scene, barrier) = create_scene(&self.config);
        info!(
            objects = scene.len(),
            tick_rate = self.config.tick_rate,
            "scene created"
        );

        app.insert_resource(Time::<Fixed>::from_hz(self.config.tick_rate))
            .insert_resource(SceneRes::from(scene))
            .insert_resource(BarrierRes {
                id: barrier,
                parked: None,
            })
            .insert_resource(ConfigRes::from(self.config.clone()))
            .add_systems(FixedUpdate, simulate);
    }
}

fn simulate(mut scene: ResMut<SceneRes>) {
    scene.update();
}

/// Builds the demo scene: one ship in the middle of the arena heading north, the barrier straight
/// ahead of it and optionally a few randomly scattered obstacles.
pub fn create_scene(config: &SimulationConfig) -> (Scene, ObjectId) {
    let mut scene = Scene::new(config.background);

    let mut ship = Spaceship::new(Angle::from_deg(0.0), config.arena, config.steering.clone());
    ship.set_position(config.ship_start());
    scene.add(ship);

    let mut barrier = Obstacle::new(config.barrier.radius, config.barrier.color);
    barrier.set_position(config.barrier.position);
    let barrier = scene.add(barrier);

    for position in scatter_obstacles(config) {
        let mut obstacle = Obstacle::new(config.extra_obstacle_radius, Rgb(96, 96, 96));
        obstacle.set_position(position);
        scene.add(obstacle);
    }

    (scene, barrier)
}

fn scatter_obstacles(config: &SimulationConfig) -> Vec<Position> {
    const MAX_ATTEMPTS: usize = 100;

    let mut rng = ChaCha8Rng::seed_from_u64(config.rng_seed);
    let margin = config.extra_obstacle_radius;
    // Keep the start area clear so the ship does not begin inside an obstacle.
    let clearance = config.steering.height + margin;
    let start = config.ship_start();

    let mut positions = vec![];
    for _ in 0..config.extra_obstacles * MAX_ATTEMPTS {
        if positions.len() == config.extra_obstacles {
            break;
        }
        let position = Position::new(
            rng.random_range(margin..=config.arena.width - margin),
            rng.random_range(margin..=config.arena.height - margin),
        );
        if position.distance(start) > clearance {
            positions.push(position);
        }
    }
    positions
}
