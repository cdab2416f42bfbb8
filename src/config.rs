//! Static configuration of the simulation.

use crate::domain::{ArenaConfig, Position, Rgb, SteeringConfig};

pub const WIDTH: f64 = 800.0;
pub const HEIGHT: f64 = 600.0;
pub const BACKGROUND: Rgb = Rgb(255, 255, 255);

#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub title: &'static str,
    pub arena: ArenaConfig,
    pub steering: SteeringConfig,
    pub background: Rgb,
    /// Simulation ticks per second.
    pub tick_rate: f64,
    pub barrier: BarrierConfig,
    /// Number of obstacles scattered randomly in addition to the barrier.
    pub extra_obstacles: usize,
    pub extra_obstacle_radius: f64,
    pub rng_seed: u64,
}

impl SimulationConfig {
    /// The ship starts in the middle of the arena, heading north.
    pub fn ship_start(&self) -> Position {
        self.arena.center()
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            title: "Spaceship AI Test",
            arena: ArenaConfig::new(WIDTH, HEIGHT),
            steering: SteeringConfig::default(),
            background: BACKGROUND,
            tick_rate: 60.0,
            barrier: BarrierConfig::new(Position::new(WIDTH / 2.0, HEIGHT / 8.0), 20.0, Rgb(0, 0, 0)),
            extra_obstacles: 4,
            extra_obstacle_radius: 12.0,
            rng_seed: 19878367467712,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarrierConfig {
    pub position: Position,
    pub radius: f64,
    pub color: Rgb,
}

impl BarrierConfig {
    pub const fn new(position: Position, radius: f64, color: Rgb) -> Self {
        Self {
            position,
            radius,
            color,
        }
    }
}
